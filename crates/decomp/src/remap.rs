//! Dense re-indexing of the points an output actually uses.

use std::collections::HashMap;

use crate::error::DecompError;
use crate::{IndexList, Point};

/// Assigns new indices `0, 1, 2, ...` to original indices in first-seen order.
///
/// Feed every index list through `apply`, then build the matching point list
/// once with `mapped`.
#[derive(Clone, Debug, Default)]
pub struct Remapper {
    mapping: HashMap<u16, u16>,
    /// Original index per new index.
    originals: Vec<u16>,
}

impl Remapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct original indices seen so far.
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Remap `indices`, extending the mapping with unseen ones.
    pub fn apply(&mut self, indices: &[u16]) -> IndexList {
        indices
            .iter()
            .map(|&original| {
                *self.mapping.entry(original).or_insert_with(|| {
                    let fresh = self.originals.len() as u16;
                    self.originals.push(original);
                    fresh
                })
            })
            .collect()
    }

    /// Points in new-index order.
    pub fn mapped(&self, points: &[Point]) -> Result<Vec<Point>, DecompError> {
        self.originals
            .iter()
            .map(|&original| {
                points
                    .get(usize::from(original))
                    .copied()
                    .ok_or(DecompError::IndexOutOfRange {
                        index: original,
                        len: points.len(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn remaps_indices_and_points() {
        let mut remapper = Remapper::new();
        assert_eq!(remapper.apply(&[1, 4, 5]), vec![0, 1, 2]);

        let points = vec![
            vector![4.0, 4.0],
            vector![8.0, 8.0],
            vector![15.0, 15.0],
            vector![16.0, 16.0],
            vector![23.0, 23.0],
            vector![42.0, 42.0],
        ];
        let mapped = remapper.mapped(&points).unwrap();
        assert_eq!(
            mapped,
            vec![vector![8.0, 8.0], vector![23.0, 23.0], vector![42.0, 42.0]]
        );
    }

    #[test]
    fn mapping_is_shared_across_calls() {
        let mut remapper = Remapper::new();
        assert_eq!(remapper.apply(&[7, 3, 7]), vec![0, 1, 0]);
        assert_eq!(remapper.apply(&[3, 9]), vec![1, 2]);
        assert_eq!(remapper.len(), 3);
    }

    #[test]
    fn mapped_rejects_unknown_points() {
        let mut remapper = Remapper::new();
        remapper.apply(&[0, 5]);
        let err = remapper.mapped(&[vector![0.0, 0.0]]).unwrap_err();
        assert_eq!(err, DecompError::IndexOutOfRange { index: 5, len: 1 });
    }
}
