//! JSON documents read and written by the CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use decomp::api::{EdgeId, IndexList, Point};
use serde::{Deserialize, Serialize};

/// Decomposition request: one outer polygon, optional holes and fixed edges,
/// all indexing into `points`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Input {
    pub points: Vec<[f64; 2]>,
    pub outer: IndexList,
    #[serde(default)]
    pub holes: Vec<IndexList>,
    #[serde(default)]
    pub fixed: Vec<[u16; 2]>,
}

impl Input {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn points(&self) -> Vec<Point> {
        self.points.iter().map(|&[x, y]| Point::new(x, y)).collect()
    }

    pub fn fixed_edges(&self) -> Vec<EdgeId> {
        self.fixed.iter().map(|&[a, b]| EdgeId::new(a, b)).collect()
    }
}

/// Convex pieces, each an index list into `points`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Decomposition {
    pub points: Vec<[f64; 2]>,
    pub polygons: Vec<IndexList>,
}

/// Flat triangle list after hole merging.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Triangulation {
    pub points: Vec<[f64; 2]>,
    pub triangles: IndexList,
}

pub fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// Write `bytes` to `path`, creating missing parent directories.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    write_artifact(path, &serde_json::to_vec_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn holes_and_fixed_default_to_empty() {
        let input: Input =
            serde_json::from_str(r#"{"points": [[0,0],[1,0],[0,1]], "outer": [0,1,2]}"#).unwrap();
        assert!(input.holes.is_empty());
        assert!(input.fixed_edges().is_empty());
        assert_eq!(input.points()[1], Point::new(1.0, 0.0));
    }

    #[test]
    fn fixed_pairs_become_canonical_edges() {
        let input = Input {
            points: vec![],
            outer: vec![],
            holes: vec![],
            fixed: vec![[2, 0]],
        };
        assert_eq!(input.fixed_edges(), vec![EdgeId(0, 2)]);
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.json");
        let doc = Decomposition {
            points: vec![[0.0, 0.0]],
            polygons: vec![vec![0]],
        };
        write_json(&path, &doc).unwrap();
        let back: Decomposition = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(back, doc);
    }
}
