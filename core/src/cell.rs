use serde::{Deserialize, Serialize};

/// What a cell holds, fixed once the field has been generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    /// No adjacent mines.
    Empty,
    /// Number of adjacent mines, always in `1..=8`.
    BombCount(u8),
    Mine,
}

impl CellValue {
    /// Value of a non-mine cell with `count` adjacent mines.
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            count => Self::BombCount(count),
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Adjacent mine count for non-mine cells.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::BombCount(count) => Some(count),
            Self::Mine => None,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Empty
    }
}

/// Player-visible state, the only part of a cell that changes during play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed,
    Flagged,
    Questioned,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Cells the cascade is allowed to force open.
    pub const fn is_openable(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub state: CellState,
    /// Set only on the mine that ended the game.
    pub marked_wrong: bool,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.value.is_mine()
    }

    pub const fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Hidden cell that does not hold a mine, the win condition is that none remain.
    pub const fn is_hidden_safe(&self) -> bool {
        !self.value.is_mine() && matches!(self.state, CellState::Hidden)
    }
}
