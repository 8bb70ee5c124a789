//! Hole merging: splice clockwise holes into a counter-clockwise outer polygon.
//!
//! Holes are processed rightmost-first. For the current rightmost hole vertex
//! we look for an outer-boundary vertex strictly to its right that sees it,
//! preferring the one closest in angle to the outward bisector at the hole
//! vertex, and connect both with a pair of coincident bridge edges. The
//! result is a single (weakly) simple polygon with the same net area.

use crate::error::{check_indices, DecompError};
use crate::geom::{in_cone, segments_intersect};
use crate::{IndexList, Point};

/// Merge `holes` into `polygon` by inserting bridge edges.
///
/// `polygon` must be counter-clockwise and every hole clockwise. Empty holes
/// are ignored. Fails with `UnreachableHole` when a hole has no visible
/// bridge vertex (hole outside the polygon, overlapping, or touching it).
pub fn remove_holes(
    points: &[Point],
    polygon: &[u16],
    holes: &[IndexList],
) -> Result<IndexList, DecompError> {
    check_indices(polygon, points.len())?;
    for hole in holes {
        check_indices(hole, points.len())?;
    }

    let mut remaining: Vec<(usize, &[u16])> = holes
        .iter()
        .enumerate()
        .filter(|(_, hole)| !hole.is_empty())
        .map(|(id, hole)| (id, hole.as_slice()))
        .collect();

    let mut merged = polygon.to_vec();
    while !remaining.is_empty() {
        let (slot, rightmost) = rightmost_hole(points, &remaining);
        let (hole_id, hole) = remaining.remove(slot);
        splice_hole(points, &mut merged, hole_id, hole, rightmost)?;
    }
    Ok(merged)
}

/// Position of the first vertex with maximal x.
fn rightmost_point(points: &[Point], polygon: &[u16]) -> usize {
    let mut best = 0;
    for (i, &v) in polygon.iter().enumerate().skip(1) {
        if points[usize::from(polygon[best])].x < points[usize::from(v)].x {
            best = i;
        }
    }
    best
}

/// (slot in `holes`, position of its rightmost vertex) for the hole reaching
/// furthest right. Earlier holes win ties.
fn rightmost_hole(points: &[Point], holes: &[(usize, &[u16])]) -> (usize, usize) {
    let x_at = |(slot, pos): (usize, usize)| points[usize::from(holes[slot].1[pos])].x;
    let mut best: Option<(usize, usize)> = None;
    for (slot, (_, hole)) in holes.iter().enumerate() {
        let candidate = (slot, rightmost_point(points, hole));
        if best.is_none_or(|b| x_at(b) < x_at(candidate)) {
            best = Some(candidate);
        }
    }
    // callers never pass an empty list
    best.unwrap_or((0, 0))
}

/// Outward normal of the bisector at `hole[point]`.
///
/// Holes run clockwise, so the hole's "previous" vertex sits at `point + 1`.
fn bridge_direction(points: &[Point], hole: &[u16], point: usize) -> Point {
    let n = hole.len();
    let previous = points[usize::from(hole[(point + 1) % n])];
    let current = points[usize::from(hole[point])];
    let next = points[usize::from(hole[(point + n - 1) % n])];
    let previous_direction = (current - previous).normalize();
    let next_direction = (next - current).normalize();
    let tangent = (previous_direction + next_direction).normalize();
    Point::new(tangent.y, -tangent.x)
}

/// Best bridge vertex on `boundary` for a hole vertex at `from`.
fn find_visible_point(
    points: &[Point],
    boundary: &[u16],
    from: Point,
    ideal_direction: Point,
) -> Option<usize> {
    let at = |i: usize| points[usize::from(boundary[i])];
    let n = boundary.len();
    let mut best: Option<usize> = None;

    for i in 0..n {
        let rim = at(i);
        if rim.x <= from.x {
            continue;
        }

        // Cheap cone test first; it admits false positives that the
        // occlusion test below removes.
        let next = (i + 1) % n;
        let previous = (i + n - 1) % n;
        if !in_cone(at(previous), rim, at(next), from) {
            continue;
        }

        if let Some(b) = best {
            let candidate = (rim - from).normalize().dot(&ideal_direction);
            let current = (at(b) - from).normalize().dot(&ideal_direction);
            if candidate < current {
                continue;
            }
        }

        if !point_visible_from(points, boundary, i, from) {
            continue;
        }
        best = Some(i);
    }
    best
}

/// No boundary edge away from `boundary[target]` blocks the segment to `from`.
fn point_visible_from(points: &[Point], boundary: &[u16], target: usize, from: Point) -> bool {
    let n = boundary.len();
    let target_point = points[usize::from(boundary[target])];
    (0..n).all(|i| {
        let next = (i + 1) % n;
        if i == target || next == target {
            return true;
        }
        !segments_intersect(
            from,
            target_point,
            points[usize::from(boundary[i])],
            points[usize::from(boundary[next])],
        )
    })
}

fn splice_hole(
    points: &[Point],
    boundary: &mut IndexList,
    hole_id: usize,
    hole: &[u16],
    rightmost: usize,
) -> Result<(), DecompError> {
    let hole_point = points[usize::from(hole[rightmost])];
    let direction = bridge_direction(points, hole, rightmost);
    let bridge = find_visible_point(points, boundary, hole_point, direction)
        .ok_or(DecompError::UnreachableHole { hole: hole_id })?;

    tracing::trace!(
        hole = hole_id,
        bridge = boundary[bridge],
        hole_vertex = hole[rightmost],
        "bridging hole"
    );

    // Rotate the bridge vertex to the front, close back to it, then walk the
    // hole once around from its rightmost vertex. Keeping the hole's own
    // order turns its clockwise ring into part of the counter-clockwise
    // boundary of the slit polygon.
    boundary.rotate_left(bridge);
    boundary.push(boundary[0]);
    boundary.extend_from_slice(&hole[rightmost..]);
    boundary.extend_from_slice(&hole[..=rightmost]);
    Ok(())
}
