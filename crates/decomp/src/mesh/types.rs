//! Half-edge records and the arena that owns them.
//!
//! Cross-references are arena indices (`HalfEdgeId`), never pointers, so the
//! cyclic `next`/`partner` graph has a single owner: the `Mesh`.

use std::ops::Index;

use crate::error::DecompError;
use crate::geom::is_internally_convex;
use crate::Point;

/// Index of a half-edge in its `Mesh`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

/// Undirected edge identity: vertex pair in canonical `(min, max)` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u16, pub u16);

impl EdgeId {
    #[inline]
    pub fn new(a: u16, b: u16) -> Self {
        if b < a {
            Self(b, a)
        } else {
            Self(a, b)
        }
    }
}

impl From<(u16, u16)> for EdgeId {
    #[inline]
    fn from((a, b): (u16, u16)) -> Self {
        Self::new(a, b)
    }
}

/// Directed mesh edge.
///
/// Invariants (for meshes built by `build_half_edge_graph`):
/// - `partner` is symmetric and joins opposite directions of one edge.
/// - following `next` from any half-edge closes a face cycle of length 3,
///   before and after edge flips.
/// - `fixed` is the same on both halves of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    /// Origin vertex.
    pub vertex: u16,
    pub next: HalfEdgeId,
    /// `None` on the outer boundary.
    pub partner: Option<HalfEdgeId>,
    pub fixed: bool,
}

/// Arena of half-edges: one per triangle corner, three per triangle.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    edges: Vec<HalfEdge>,
}

impl Mesh {
    pub(crate) fn from_half_edges(edges: Vec<HalfEdge>) -> Self {
        Self { edges }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.edges
    }

    /// All half-edge ids in arena order.
    pub fn ids(&self) -> impl Iterator<Item = HalfEdgeId> {
        (0..self.edges.len()).map(HalfEdgeId)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        &mut self.edges[id.0]
    }

    #[inline]
    pub fn vertex(&self, id: HalfEdgeId) -> u16 {
        self[id].vertex
    }

    #[inline]
    pub fn next(&self, id: HalfEdgeId) -> HalfEdgeId {
        self[id].next
    }

    #[inline]
    pub fn partner(&self, id: HalfEdgeId) -> Option<HalfEdgeId> {
        self[id].partner
    }

    /// Partner of an edge that must be interior.
    #[inline]
    pub(crate) fn interior_partner(&self, id: HalfEdgeId) -> Result<HalfEdgeId, DecompError> {
        self.partner(id).ok_or(DecompError::BrokenMesh {
            reason: "interior edge without partner",
        })
    }

    /// Undirected identity of `id`: its origin and the origin of its `next`.
    #[inline]
    pub fn edge_id(&self, id: HalfEdgeId) -> EdgeId {
        EdgeId::new(self.vertex(id), self.vertex(self.next(id)))
    }

    /// The half-edge of `id`'s undirected edge that starts at the smaller vertex.
    #[inline]
    pub fn representative(&self, id: HalfEdgeId) -> HalfEdgeId {
        match self.partner(id) {
            Some(p) if self.vertex(id) > self.vertex(p) => p,
            _ => id,
        }
    }

    /// Vertices of the face containing `id`, starting at its origin.
    pub fn face_vertices(&self, id: HalfEdgeId) -> Vec<u16> {
        let mut out = vec![self.vertex(id)];
        let mut current = self.next(id);
        while current != id && out.len() <= self.len() {
            out.push(self.vertex(current));
            current = self.next(current);
        }
        out
    }

    /// Removing (or flipping) interior edge `id` keeps both corners at its
    /// endpoints convex. Only meaningful while both incident faces are triangles.
    pub fn is_edge_removable(&self, points: &[Point], id: HalfEdgeId) -> bool {
        let Some(partner) = self.partner(id) else {
            return false;
        };
        let at = |e: HalfEdgeId| points[usize::from(self.vertex(e))];
        let opposite_here = self.next(self.next(id));
        let opposite_there = self.next(self.next(partner));
        is_internally_convex(at(id), at(opposite_there), at(opposite_here))
            && is_internally_convex(at(partner), at(opposite_here), at(opposite_there))
    }
}

impl Index<HalfEdgeId> for Mesh {
    type Output = HalfEdge;

    #[inline]
    fn index(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.edges[id.0]
    }
}
