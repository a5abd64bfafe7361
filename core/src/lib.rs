use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod reveal;
mod session;
mod types;

/// Field dimensions and mine count.
///
/// Always holds at least one row and column and leaves at least one cell free of mines, whether built through
/// [`GameConfig::new`] or deserialized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.rows, raw.cols, raw.mines)
    }
}

impl GameConfig {
    /// Reference field, 16x16 with 40 mines.
    pub const DEFAULT: Self = Self::new_unchecked(16, 16, 40);

    const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// At least one row and column, and at least one cell must be left without a mine so the first reveal can always
    /// be made safe.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines >= mult(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_reference_field() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (16, 16));
        assert_eq!(config.mines(), 40);
        assert_eq!(config.total_cells(), 256);
    }

    #[test]
    fn config_needs_a_safe_cell() {
        assert_eq!(GameConfig::new(3, 3, 9), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(0, 3, 1), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(3, 0, 1), Err(GameError::InvalidSize));
        assert!(GameConfig::new(3, 3, 8).is_ok());
        assert!(GameConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn config_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows": 9, "cols": 9, "mines": 10}"#).unwrap();

        assert_eq!(config, GameConfig::new(9, 9, 10).unwrap());
    }

    #[test]
    fn full_field_from_json_is_rejected() {
        let full = serde_json::from_str::<GameConfig>(r#"{"rows": 2, "cols": 2, "mines": 4}"#);
        let empty = serde_json::from_str::<GameConfig>(r#"{"rows": 0, "cols": 2, "mines": 0}"#);

        assert!(full.unwrap_err().to_string().contains("Too many mines"));
        assert!(empty.is_err());
    }
}
