//! Errors surfaced by the decomposition pipeline.
//!
//! Three families:
//! - malformed input (`TooFewVertices`, `TriangleCount`, `IndexOutOfRange`,
//!   `NonManifold`), rejected before any mesh work;
//! - non-simple or unreachable geometry (`NotSimple`, `UnreachableHole`);
//! - corrupted half-edge topology (`BrokenMesh`).
//!
//! None of them are retried; a failing call returns no partial result.

use std::fmt;

use crate::mesh::EdgeId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecompError {
    /// A polygon needs at least three vertices.
    TooFewVertices { len: usize },
    /// A flat triangle list must have a length divisible by 3.
    TriangleCount { len: usize },
    /// An index list refers past the end of the point list.
    IndexOutOfRange { index: u16, len: usize },
    /// Ear clipping ran out of ears with `remaining` vertices left.
    NotSimple { remaining: usize },
    /// No vertex of the outer boundary can see the rightmost vertex of this hole.
    UnreachableHole { hole: usize },
    /// An undirected edge is shared by more than two triangle corners, or by
    /// two corners running the same direction.
    NonManifold { edge: EdgeId },
    /// A half-edge invariant does not hold (missing partner, unclosed face walk).
    BrokenMesh { reason: &'static str },
}

impl fmt::Display for DecompError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompError::TooFewVertices { len } => {
                write!(f, "polygon needs at least 3 vertices, got {len}")
            }
            DecompError::TriangleCount { len } => write!(
                f,
                "triangle list length {len} is not divisible by 3"
            ),
            DecompError::IndexOutOfRange { index, len } => {
                write!(f, "vertex index {index} out of range for {len} points")
            }
            DecompError::NotSimple { remaining } => write!(
                f,
                "polygon is not simple (no ear left with {remaining} vertices remaining)"
            ),
            DecompError::UnreachableHole { hole } => write!(
                f,
                "unable to find a visible point on the outer polygon for hole {hole}"
            ),
            DecompError::NonManifold { edge } => {
                write!(f, "non-manifold edge ({}, {})", edge.0, edge.1)
            }
            DecompError::BrokenMesh { reason } => write!(f, "broken half-edge mesh: {reason}"),
        }
    }
}

impl std::error::Error for DecompError {}

/// Reject any index that does not address `len` points.
pub(crate) fn check_indices<'a, I>(indices: I, len: usize) -> Result<(), DecompError>
where
    I: IntoIterator<Item = &'a u16>,
{
    match indices.into_iter().find(|&&i| usize::from(i) >= len) {
        Some(&index) => Err(DecompError::IndexOutOfRange { index, len }),
        None => Ok(()),
    }
}
