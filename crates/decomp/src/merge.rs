//! Hertel–Mehlhorn merging over a half-edge mesh.
//!
//! Diagonals are never unlinked from the mesh. Removal is recorded in a
//! deletion set keyed by `EdgeId`, and every walk that would cross a deleted
//! edge steps over it through `partner.next` instead. Candidates live in a
//! `PriorityQueue` keyed by their representative half-edge; deleting one edge
//! re-checks and re-scores the neighbours on both of its sides.

use std::collections::HashSet;

use crate::error::DecompError;
use crate::geom::is_internally_convex;
use crate::mesh::{EdgeId, HalfEdgeId, Mesh};
use crate::queue::PriorityQueue;
use crate::{IndexList, Point};

/// Diagonals removed by the merge, as undirected edges.
pub type DeletionSet = HashSet<EdgeId>;

/// Merge the triangles of `mesh` into convex polygons.
///
/// Equivalent to `extract_faces(mesh, &deletion_set(points, mesh)?)`.
pub fn merge_convex(points: &[Point], mesh: &Mesh) -> Result<Vec<IndexList>, DecompError> {
    let deleted = deletion_set(points, mesh)?;
    extract_faces(mesh, &deleted)
}

/// Greedily pick the diagonals to delete, lowest score first.
///
/// Fixed edges and edges that would leave a reflex corner are never picked.
pub fn deletion_set(points: &[Point], mesh: &Mesh) -> Result<DeletionSet, DecompError> {
    let mut merger = Merger {
        points,
        mesh,
        deleted: DeletionSet::new(),
        queue: PriorityQueue::new(),
    };
    merger.seed_queue()?;
    let candidates = merger.queue.len();

    while let Some((e, score)) = merger.queue.extract() {
        let edge = mesh.edge_id(e);
        merger.deleted.insert(edge);
        tracing::trace!(?edge, score, "deleted diagonal");

        let partner = mesh.interior_partner(e)?;
        merger.update_neighbours(e)?;
        merger.update_neighbours(partner)?;
    }

    tracing::debug!(candidates, deleted = merger.deleted.len(), "merge finished");
    Ok(merger.deleted)
}

/// Walk the faces of `mesh` with the edges in `deleted` stepped over.
///
/// Every non-deleted half-edge is visited exactly once; each closed walk is
/// one output polygon, starting at the lowest-numbered half-edge of its face.
pub fn extract_faces(mesh: &Mesh, deleted: &DeletionSet) -> Result<Vec<IndexList>, DecompError> {
    let mut visited = vec![false; mesh.len()];
    let mut faces = Vec::new();

    for start in mesh.ids() {
        if visited[start.0] || deleted.contains(&mesh.edge_id(start)) {
            continue;
        }

        let mut face = IndexList::new();
        let mut current = start;
        let mut steps = 0usize;
        loop {
            visited[current.0] = true;
            face.push(mesh.vertex(current));

            current = mesh.next(current);
            while deleted.contains(&mesh.edge_id(current)) {
                current = mesh.next(mesh.interior_partner(current)?);
                steps += 1;
                if steps > mesh.len() {
                    return Err(face_walk_error());
                }
            }
            steps += 1;
            if steps > mesh.len() {
                return Err(face_walk_error());
            }
            if current == start {
                break;
            }
        }
        faces.push(face);
    }
    Ok(faces)
}

fn face_walk_error() -> DecompError {
    DecompError::BrokenMesh {
        reason: "face walk does not close",
    }
}

struct Merger<'a> {
    points: &'a [Point],
    mesh: &'a Mesh,
    deleted: DeletionSet,
    queue: PriorityQueue<HalfEdgeId>,
}

impl Merger<'_> {
    #[inline]
    fn at(&self, e: HalfEdgeId) -> Point {
        self.points[usize::from(self.mesh.vertex(e))]
    }

    /// Queue every removable, non-fixed interior edge once, scored against
    /// the untouched triangulation.
    fn seed_queue(&mut self) -> Result<(), DecompError> {
        let mesh = self.mesh;
        for e in mesh.ids() {
            if mesh.vertex(e) > mesh.vertex(mesh.next(e)) {
                continue;
            }
            if mesh[e].fixed || !mesh.is_edge_removable(self.points, e) {
                continue;
            }
            let score = self.edge_score(e)?;
            self.queue.insert(e, score);
        }
        Ok(())
    }

    /// Last undeleted edge ending at `e`'s origin, walking clockwise around it.
    fn undeleted_left(&self, e: HalfEdgeId) -> Result<HalfEdgeId, DecompError> {
        let mesh = self.mesh;
        let mut right = e;
        let mut left = mesh.next(mesh.next(e));
        while self
            .deleted
            .contains(&EdgeId::new(mesh.vertex(left), mesh.vertex(right)))
        {
            right = mesh.interior_partner(left)?;
            left = mesh.next(mesh.next(right));
        }
        Ok(left)
    }

    /// First undeleted edge leaving `e`'s origin on the partner side.
    fn undeleted_right(&self, e: HalfEdgeId) -> Result<HalfEdgeId, DecompError> {
        let mesh = self.mesh;
        let mut current = e;
        loop {
            current = mesh.next(mesh.interior_partner(current)?);
            if !self.deleted.contains(&mesh.edge_id(current)) {
                return Ok(current);
            }
        }
    }

    /// Sharpness of the corner that removing `e` would leave at its origin:
    /// the larger cosine against the nearest surviving edge on either side.
    fn half_edge_score(&self, e: HalfEdgeId) -> Result<f64, DecompError> {
        let left = self.undeleted_left(e)?;
        let right = self.undeleted_right(e)?;

        let center = self.at(e);
        let forward = (self.at(self.mesh.next(e)) - center).normalize();
        let left_dir = (self.at(left) - center).normalize();
        let right_dir = (self.at(self.mesh.next(right)) - center).normalize();
        Ok(left_dir.dot(&forward).max(right_dir.dot(&forward)))
    }

    fn edge_score(&self, e: HalfEdgeId) -> Result<f64, DecompError> {
        let partner = self.mesh.interior_partner(e)?;
        Ok(self.half_edge_score(e)?.max(self.half_edge_score(partner)?))
    }

    /// Re-check the queued neighbours of the freshly deleted half-edge `e`:
    /// drop them if deleting them too would break convexity at `e`'s origin
    /// or close the face onto itself, re-score them otherwise.
    fn update_neighbours(&mut self, e: HalfEdgeId) -> Result<(), DecompError> {
        let mesh = self.mesh;
        let left = self.undeleted_left(e)?;
        let right = self.undeleted_right(e)?;

        let left_key = mesh.representative(left);
        if self.queue.contains(left_key) {
            let left_of_left = self.undeleted_left(mesh.interior_partner(left)?)?;
            let wraps = matches!(mesh.partner(left_of_left), Some(p) if p == right || p == e);
            if wraps
                || !is_internally_convex(
                    self.at(e),
                    self.at(mesh.next(right)),
                    self.at(left_of_left),
                )
            {
                self.queue.erase(left_key);
            } else {
                let score = self.edge_score(left)?;
                self.queue.update(left_key, score);
            }
        }

        let right_key = mesh.representative(right);
        if self.queue.contains(right_key) {
            let right_of_right = self.undeleted_right(right)?;
            let wraps = right_of_right == e || mesh.partner(right_of_right) == Some(left);
            if wraps
                || !is_internally_convex(
                    self.at(e),
                    self.at(mesh.next(right_of_right)),
                    self.at(left),
                )
            {
                self.queue.erase(right_key);
            } else {
                let score = self.edge_score(right)?;
                self.queue.update(right_key, score);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_half_edge_graph;
    use crate::pipeline::tests::assert_convex;
    use crate::polygon::signed_area;
    use nalgebra::vector;

    fn square() -> Vec<Point> {
        vec![
            vector![-1.0, -1.0],
            vector![1.0, -1.0],
            vector![1.0, 1.0],
            vector![-1.0, 1.0],
        ]
    }

    #[test]
    fn square_merges_into_one_quad() {
        let points = square();
        let mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[]).unwrap();
        let deleted = deletion_set(&points, &mesh).unwrap();
        assert_eq!(deleted, DeletionSet::from([EdgeId(0, 2)]));
        assert_eq!(extract_faces(&mesh, &deleted).unwrap(), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn fixed_diagonal_survives() {
        let points = square();
        let mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[EdgeId(0, 2)]).unwrap();
        let faces = merge_convex(&points, &mesh).unwrap();
        assert_eq!(faces, vec![vec![0, 1, 2], vec![0, 2, 3]]);
    }

    #[test]
    fn empty_deletion_set_yields_the_triangles() {
        let mesh = build_half_edge_graph(&[0, 1, 2, 0, 2, 3], &[]).unwrap();
        let faces = extract_faces(&mesh, &DeletionSet::new()).unwrap();
        assert_eq!(faces, vec![vec![0, 1, 2], vec![0, 2, 3]]);
    }

    #[test]
    fn convex_fan_collapses_to_its_hull() {
        let points: Vec<Point> = (0..8)
            .map(|k| {
                let t = std::f64::consts::TAU * f64::from(k) / 8.0;
                vector![t.cos(), t.sin()]
            })
            .collect();
        let triangles: Vec<u16> = (1..7u16).flat_map(|k| [0, k, k + 1]).collect();
        let mesh = build_half_edge_graph(&triangles, &[]).unwrap();
        let faces = merge_convex(&points, &mesh).unwrap();
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].len(), 8);
        assert_convex(&points, &faces[0]);
    }

    #[test]
    fn reflex_corner_keeps_a_diagonal() {
        // L-shape, reflex at vertex 3
        let points = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 2.0],
            vector![0.0, 2.0],
        ];
        let polygon: Vec<u16> = (0..6).collect();
        let triangles = crate::ear_clipping(&points, &polygon).unwrap();
        let mesh = build_half_edge_graph(&triangles, &[]).unwrap();
        let faces = merge_convex(&points, &mesh).unwrap();

        assert!(faces.len() >= 2 && faces.len() <= 4);
        let mut area = 0.0;
        for face in &faces {
            assert_convex(&points, face);
            area += signed_area(&points, face);
        }
        assert!((area - 3.0).abs() < 1e-9);
    }

    #[test]
    fn every_half_edge_lands_in_one_face() {
        let points = vec![
            vector![-1.0, 0.0],
            vector![0.0, 0.0],
            vector![0.0, -1.0],
            vector![1.0, -1.0],
            vector![1.0, 1.0],
            vector![-1.0, 1.0],
        ];
        let triangles = [1, 4, 5, 1, 3, 4, 0, 1, 5, 1, 2, 3];
        let mesh = build_half_edge_graph(&triangles, &[]).unwrap();
        let deleted = deletion_set(&points, &mesh).unwrap();
        let faces = extract_faces(&mesh, &deleted).unwrap();

        let surviving = mesh
            .ids()
            .filter(|&e| !deleted.contains(&mesh.edge_id(e)))
            .count();
        let emitted: usize = faces.iter().map(Vec::len).sum();
        assert_eq!(emitted, surviving);
        for face in &faces {
            assert_convex(&points, face);
        }
    }
}
