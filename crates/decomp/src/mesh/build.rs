//! Mesh construction from a flat triangle list.

use std::collections::{HashMap, HashSet};

use crate::error::DecompError;

use super::types::{EdgeId, HalfEdge, HalfEdgeId, Mesh};

/// Build the half-edge graph of `triangles` (three indices per triangle,
/// counter-clockwise).
///
/// Half-edge `i` starts at `triangles[i]`; corners of one triangle are linked
/// into a `next` cycle. Shared undirected edges are paired through an
/// open-edge map: the first corner seen for an `EdgeId` waits there, the
/// second one closes the pair. Whatever stays open is boundary.
///
/// Rejects lists whose length is not a multiple of 3, and non-manifold input
/// (an edge on three or more corners, or twice in the same direction).
pub fn build_half_edge_graph(triangles: &[u16], fixed_edges: &[EdgeId]) -> Result<Mesh, DecompError> {
    let n = triangles.len();
    if n % 3 != 0 {
        return Err(DecompError::TriangleCount { len: n });
    }
    let fixed: HashSet<EdgeId> = fixed_edges.iter().copied().collect();
    let next_in_triangle = |i: usize| i - i % 3 + (i + 1) % 3;

    let mut edges: Vec<HalfEdge> = triangles
        .iter()
        .enumerate()
        .map(|(i, &vertex)| HalfEdge {
            vertex,
            next: HalfEdgeId(next_in_triangle(i)),
            partner: None,
            fixed: false,
        })
        .collect();

    let mut open: HashMap<EdgeId, usize> = HashMap::new();
    let mut closed: HashSet<EdgeId> = HashSet::new();
    for i in 0..n {
        let edge = EdgeId::new(triangles[i], triangles[next_in_triangle(i)]);
        edges[i].fixed = fixed.contains(&edge);
        if closed.contains(&edge) {
            return Err(DecompError::NonManifold { edge });
        }
        match open.remove(&edge) {
            Some(other) => {
                if edges[other].vertex == edges[i].vertex {
                    return Err(DecompError::NonManifold { edge });
                }
                edges[other].partner = Some(HalfEdgeId(i));
                edges[i].partner = Some(HalfEdgeId(other));
                closed.insert(edge);
            }
            None => {
                open.insert(edge, i);
            }
        }
    }

    tracing::debug!(
        half_edges = n,
        interior = closed.len(),
        boundary = open.len(),
        "built half-edge graph"
    );
    Ok(Mesh::from_half_edges(edges))
}
