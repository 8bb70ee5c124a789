//! Half-edge mesh over a triangulation.
//!
//! Purpose
//! - Turn a flat triangle index list into an arena of half-edges with `next`
//!   (counter-clockwise around the face) and `partner` (opposite half-edge of
//!   the same undirected edge) links.
//! - Refine the triangulation in place by angle-driven edge flips.
//!
//! Layout: `types.rs` (ids, records, traversal helpers), `build.rs` (pairing
//! shared edges, tagging fixed edges), `flip.rs` (refinement).

mod build;
mod flip;
mod types;

pub use build::build_half_edge_graph;
pub use flip::{edge_flip, edge_flip_passes};
pub use types::{EdgeId, HalfEdge, HalfEdgeId, Mesh};

#[cfg(test)]
mod tests;
