//! On-disk JSON form of a cycle: dimensions plus `[x, y]` pairs in order.

use anyhow::{Context, Result};
use hamcycle::{Cell, Cycle, CycleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    pub width: usize,
    pub height: usize,
    pub path: Vec<[usize; 2]>,
}

impl From<&Cycle> for CycleRecord {
    fn from(cycle: &Cycle) -> Self {
        Self {
            width: cycle.width(),
            height: cycle.height(),
            path: cycle.path().iter().map(|c| [c.x, c.y]).collect(),
        }
    }
}

impl CycleRecord {
    /// Re-validate against the cylinder rules.
    pub fn into_cycle(self) -> Result<Cycle, CycleError> {
        let path = self.path.into_iter().map(|[x, y]| Cell::new(x, y)).collect();
        Cycle::new(self.width, self.height, path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }
}
