//! End-to-end entry points: holes → triangles → mesh → flips → convex pieces.

use crate::cfg::DecompCfg;
use crate::ear_clip::ear_clipping;
use crate::error::{check_indices, DecompError};
use crate::holes::remove_holes;
use crate::merge::merge_convex;
use crate::mesh::{build_half_edge_graph, edge_flip_passes, EdgeId};
use crate::{IndexList, Point};

/// Merge a triangulation into convex polygons with the default `DecompCfg`.
///
/// `triangles` is a flat counter-clockwise triangle list over `points`.
/// Edges listed in `fixed` are never flipped or removed, so each of them
/// bounds at least one output polygon.
pub fn hertel_mehlhorn(
    points: &[Point],
    triangles: &[u16],
    fixed: &[EdgeId],
) -> Result<Vec<IndexList>, DecompError> {
    hertel_mehlhorn_with_cfg(points, triangles, fixed, DecompCfg::default())
}

/// `hertel_mehlhorn` with explicit configuration.
pub fn hertel_mehlhorn_with_cfg(
    points: &[Point],
    triangles: &[u16],
    fixed: &[EdgeId],
    cfg: DecompCfg,
) -> Result<Vec<IndexList>, DecompError> {
    check_indices(triangles, points.len())?;
    let mut mesh = build_half_edge_graph(triangles, fixed)?;

    if cfg.edge_flip {
        let passes = cfg.max_flip_passes.unwrap_or(mesh.len());
        let flips = edge_flip_passes(points, &mut mesh, passes);
        tracing::debug!(flips, passes, "edge flip refinement");
    }

    let polygons = merge_convex(points, &mesh)?;
    tracing::debug!(
        triangles = triangles.len() / 3,
        polygons = polygons.len(),
        "hertel-mehlhorn"
    );
    Ok(polygons)
}

/// Decompose a counter-clockwise `outer` polygon with clockwise `holes` into
/// convex polygons, using the default `DecompCfg`.
pub fn decompose(
    points: &[Point],
    outer: &[u16],
    holes: &[IndexList],
    fixed: &[EdgeId],
) -> Result<Vec<IndexList>, DecompError> {
    decompose_with_cfg(points, outer, holes, fixed, DecompCfg::default())
}

/// `decompose` with explicit configuration.
pub fn decompose_with_cfg(
    points: &[Point],
    outer: &[u16],
    holes: &[IndexList],
    fixed: &[EdgeId],
    cfg: DecompCfg,
) -> Result<Vec<IndexList>, DecompError> {
    let merged = remove_holes(points, outer, holes)?;
    tracing::debug!(
        outer = outer.len(),
        holes = holes.len(),
        merged = merged.len(),
        "holes merged"
    );
    let triangles = ear_clipping(points, &merged)?;
    tracing::debug!(triangles = triangles.len() / 3, "triangulated");
    hertel_mehlhorn_with_cfg(points, &triangles, fixed, cfg)
}
