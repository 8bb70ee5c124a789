//! Curated surface for callers that want one import path per concern.
//!
//! The CLI and benches go through here. Lower-level modules stay public for
//! tests and for callers that need a single stage.

// Pipeline
pub use crate::pipeline::{decompose, decompose_with_cfg, hertel_mehlhorn, hertel_mehlhorn_with_cfg};
// Stages
pub use crate::ear_clip::ear_clipping;
pub use crate::holes::remove_holes;
pub use crate::merge::{deletion_set, extract_faces, merge_convex, DeletionSet};
pub use crate::mesh::{
    build_half_edge_graph, edge_flip, edge_flip_passes, EdgeId, HalfEdge, HalfEdgeId, Mesh,
};
// Polygon utilities
pub use crate::polygon::{signed_area, winding, Winding};
pub use crate::remap::Remapper;
// Random star polygons
pub use crate::rand::{
    draw_star_polygon, ReplayToken as StarReplay, StarCfg, VertexCount as StarVertexCount,
};
// Shared types
pub use crate::{DecompCfg, DecompError, IndexList, Point};
