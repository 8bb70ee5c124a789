//! Convex decomposition of simple polygons with holes.
//!
//! Pipeline (each stage is usable on its own):
//! 1. `remove_holes`: splice clockwise holes into the counter-clockwise outer
//!    polygon via bridging edges.
//! 2. `ear_clipping`: triangulate the resulting simple polygon.
//! 3. `build_half_edge_graph`: pair triangle corners into a half-edge mesh.
//! 4. `edge_flip`: raise the minimum interior angle by flipping diagonals.
//! 5. `hertel_mehlhorn`: greedily delete diagonals while faces stay convex.
//!
//! Conventions
//! - Points live in one caller-owned list and are referenced by `u16` index.
//! - Outer polygons are counter-clockwise, holes clockwise. Nothing here
//!   corrects winding; use `polygon::winding` to validate beforehand.
//! - Fixed edges (`EdgeId`) are never flipped and never removed.

pub mod api;
pub mod cfg;
pub mod ear_clip;
pub mod error;
pub mod geom;
pub mod holes;
pub mod merge;
pub mod mesh;
pub mod pipeline;
pub mod polygon;
pub mod queue;
pub mod rand;
pub mod remap;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 2D point (and vector) in double precision.
pub type Point = nalgebra::Vector2<f64>;

/// Cyclic or flat list of vertex indices into a point list.
pub type IndexList = Vec<u16>;

pub use cfg::DecompCfg;
pub use ear_clip::ear_clipping;
pub use error::DecompError;
pub use holes::remove_holes;
pub use mesh::{build_half_edge_graph, edge_flip, edge_flip_passes, EdgeId, HalfEdge, HalfEdgeId, Mesh};
pub use pipeline::{decompose, decompose_with_cfg, hertel_mehlhorn, hertel_mehlhorn_with_cfg};
pub use polygon::{signed_area, winding, Winding};
pub use remap::Remapper;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::pipeline::{decompose, decompose_with_cfg, hertel_mehlhorn};
    pub use crate::{DecompCfg, DecompError, EdgeId, IndexList, Point, Winding};
}
