//! Pipeline configuration.

/// Knobs for `decompose_with_cfg` / `hertel_mehlhorn_with_cfg`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecompCfg {
    /// Run edge-flip refinement between triangulation and merging.
    pub edge_flip: bool,
    /// Upper bound on flip passes. `None` means one pass per half-edge, which
    /// is never reached in practice because refinement stops at a fixed point.
    pub max_flip_passes: Option<usize>,
}

impl Default for DecompCfg {
    fn default() -> Self {
        Self {
            edge_flip: true,
            max_flip_passes: None,
        }
    }
}
