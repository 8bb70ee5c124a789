//! Ear-clipping triangulation with best-shaped ears first.
//!
//! The polygon is held as a circular doubly-linked list over an index arena.
//! Every vertex is classified convex or reflex; a convex vertex is an ear if
//! its triangle contains no reflex vertex of the shrinking polygon (checking
//! reflex vertices suffices for simple polygons). Ears sit in a priority queue
//! keyed by `minimum_interior_angle`, lowest first, so the least sliver-prone
//! ear is clipped next. Clipping re-evaluates only the two former neighbours.

use crate::error::{check_indices, DecompError};
use crate::geom::{is_clockwise, is_counter_clockwise, minimum_interior_angle, triangle_contains};
use crate::queue::PriorityQueue;
use crate::{IndexList, Point};

#[derive(Clone, Debug)]
struct VertexNode {
    index: u16,
    next: usize,
    prev: usize,
    is_convex: bool,
    is_reflex: bool,
    is_ear: bool,
}

struct EarClipper<'a> {
    points: &'a [Point],
    nodes: Vec<VertexNode>,
    ears: PriorityQueue<usize>,
}

impl EarClipper<'_> {
    #[inline]
    fn point(&self, node: usize) -> Point {
        self.points[usize::from(self.nodes[node].index)]
    }

    /// (prev, self, next) positions of `node`'s triangle.
    #[inline]
    fn corner(&self, node: usize) -> (Point, Point, Point) {
        let n = &self.nodes[node];
        (self.point(n.prev), self.point(node), self.point(n.next))
    }

    fn update_node_type(&mut self, node: usize) {
        let (a, b, c) = self.corner(node);
        let n = &mut self.nodes[node];
        n.is_convex = is_counter_clockwise(a, b, c);
        n.is_reflex = is_clockwise(a, b, c);
    }

    fn contains_other_vertex(&self, node: usize) -> bool {
        let n = &self.nodes[node];
        let own = [self.nodes[n.prev].index, n.index, self.nodes[n.next].index];
        let (a, b, c) = self.corner(node);

        let mut current = self.nodes[n.next].next;
        while current != n.prev {
            let other = &self.nodes[current];
            // Duplicated bridge vertices may touch the ear but are not inside it.
            if other.is_reflex
                && !own.contains(&other.index)
                && triangle_contains(a, b, c, self.point(current))
            {
                return true;
            }
            current = other.next;
        }
        false
    }

    fn update_ear_state(&mut self, node: usize) {
        if self.nodes[node].is_ear {
            self.ears.erase(node);
        }
        let is_ear = self.nodes[node].is_convex && !self.contains_other_vertex(node);
        self.nodes[node].is_ear = is_ear;
        if is_ear {
            let (a, b, c) = self.corner(node);
            self.ears.insert(node, minimum_interior_angle(a, b, c));
        }
    }

    fn clip_ear(&mut self, ear: usize, out: &mut IndexList) {
        let VertexNode { prev, next, index, .. } = self.nodes[ear];
        out.extend([self.nodes[prev].index, index, self.nodes[next].index]);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[ear].is_ear = false;
        self.update_node_type(prev);
        self.update_node_type(next);
        self.update_ear_state(prev);
        self.update_ear_state(next);
    }
}

/// Triangulate a simple counter-clockwise polygon.
///
/// Returns a flat list of `3 * (N - 2)` indices, every triangle
/// counter-clockwise. Fails with `TooFewVertices` for `N < 3` and with
/// `NotSimple` when no ear is left before the polygon is used up.
pub fn ear_clipping(points: &[Point], polygon: &[u16]) -> Result<IndexList, DecompError> {
    let n = polygon.len();
    if n < 3 {
        return Err(DecompError::TooFewVertices { len: n });
    }
    check_indices(polygon, points.len())?;

    let nodes = polygon
        .iter()
        .enumerate()
        .map(|(i, &index)| VertexNode {
            index,
            next: (i + 1) % n,
            prev: (i + n - 1) % n,
            is_convex: false,
            is_reflex: false,
            is_ear: false,
        })
        .collect();
    let mut clipper = EarClipper {
        points,
        nodes,
        ears: PriorityQueue::new(),
    };

    // Ear tests read the reflex flags of other vertices: classify all first.
    for i in 0..n {
        clipper.update_node_type(i);
    }
    for i in 0..n {
        clipper.update_ear_state(i);
    }

    let mut triangles = Vec::with_capacity(3 * (n - 2));
    let mut remaining = n;
    while remaining >= 3 {
        let (ear, _) = clipper
            .ears
            .extract()
            .ok_or(DecompError::NotSimple { remaining })?;
        clipper.clip_ear(ear, &mut triangles);
        remaining -= 1;
    }
    Ok(triangles)
}
