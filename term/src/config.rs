use std::path::Path;

use anyhow::Context;
use fieldsweep_core::{CellCount, Coord, GameConfig};
use serde::Deserialize;

/// Settings read from a JSON file, every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Could not parse config file {}", path.display()))
    }

    /// Values from `over` win over values in `self`.
    pub fn merge(self, over: FileConfig) -> FileConfig {
        FileConfig {
            rows: over.rows.or(self.rows),
            cols: over.cols.or(self.cols),
            mines: over.mines.or(self.mines),
            seed: over.seed.or(self.seed),
        }
    }

    /// Fills gaps from the default field and validates the result.
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let default = GameConfig::default();
        let rows = self.rows.unwrap_or(default.rows());
        let cols = self.cols.unwrap_or(default.cols());
        let mines = self.mines.unwrap_or(default.mines());
        GameConfig::new(rows, cols, mines).map_err(|err| {
            log::warn!("Rejected config {}x{} with {} mines", rows, cols, mines);
            anyhow::anyhow!("{err}: {rows}x{cols} with {mines} mines")
        })
    }
}
