use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Both end states are final, a replay starts a new session instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Playing
    }
}

/// One playthrough, from a freshly generated grid to a win or a loss.
#[derive(Clone, Debug)]
pub struct Session<G = RandomFieldGenerator> {
    config: GameConfig,
    generator: G,
    grid: Grid,
    status: Status,
    started: bool,
    remaining_flags: isize,
    triggered_mine: Option<Coord2>,
}

impl Session {
    /// New session with mines placed from operating system randomness.
    pub fn new(config: GameConfig) -> Self {
        Self::with_generator(config, RandomFieldGenerator::from_entropy())
    }

    /// New session whose grids, including any replays, are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomFieldGenerator::new(seed))
    }
}

impl<G: FieldGenerator> Session<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Self {
        let grid = generator.generate(config);
        log::debug!(
            "New session {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines()
        );
        Self {
            config,
            generator,
            grid,
            status: Default::default(),
            started: false,
            remaining_flags: config.mines() as isize,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Mines minus placed flags, can go negative since flagging is never limited.
    pub fn remaining_flags(&self) -> isize {
        self.remaining_flags
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.grid.validate_coords(coords)?;
        Ok(self.grid[coords])
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Throws away this session and starts over with a fresh grid, whatever the current status is.
    pub fn replay(&mut self) {
        log::debug!("Replay requested, previous status: {:?}", self.status);
        let grid = self.generator.generate(self.config);
        self.grid = grid;
        self.status = Status::Playing;
        self.started = false;
        self.remaining_flags = self.config.mines() as isize;
        self.triggered_mine = None;
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.grid.validate_coords(coords)?;
        self.check_playing()?;

        if !self.started {
            self.relocate_mines_from(coords)?;
            self.started = true;
        }

        let cell = self.grid[coords];
        if matches!(cell.state, CellState::Flagged | CellState::Revealed) {
            return Ok(NoChange);
        }

        match cell.value {
            CellValue::Mine => {
                self.lose(coords);
                return Ok(HitMine);
            }
            CellValue::Empty => {
                let wrong_flags = open_region(&mut self.grid, coords);
                self.remaining_flags += wrong_flags as isize;
                log::debug!(
                    "Opened region at {:?}, {} wrong flags returned",
                    coords,
                    wrong_flags
                );
            }
            CellValue::BombCount(count) => {
                self.grid.set_state(coords, CellState::Revealed);
                log::debug!("Open cell at {:?}, mine count: {}", coords, count);
            }
        }

        if self.grid.has_hidden_safe_cell() {
            Ok(Revealed)
        } else {
            self.win();
            Ok(Won)
        }
    }

    /// Cycles the marker on a cell: hidden, flagged, questioned, then hidden again.
    pub fn cycle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;
        use MarkOutcome::*;

        let coords = self.grid.validate_coords(coords)?;
        self.check_playing()?;
        if !self.started {
            return Err(GameError::NotStarted);
        }

        Ok(match self.grid[coords].state {
            Revealed => NoChange,
            Hidden => {
                self.grid.set_state(coords, Flagged);
                self.remaining_flags -= 1;
                Changed
            }
            Flagged => {
                self.grid.set_state(coords, Questioned);
                self.remaining_flags += 1;
                Changed
            }
            Questioned => {
                self.grid.set_state(coords, Hidden);
                Changed
            }
        })
    }

    fn check_playing(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    /// Regenerates until the first revealed cell is not a mine.
    ///
    /// A grid without a single safe cell can never be relocated and is rejected instead.
    fn relocate_mines_from(&mut self, coords: Coord2) -> Result<()> {
        let mut regenerated = 0;
        while self.grid[coords].is_mine() {
            if self.grid.safe_cell_count() == 0 {
                log::warn!("Generated grid has no safe cell, cannot move mines away from {:?}", coords);
                return Err(GameError::TooManyMines);
            }
            self.grid = self.generator.generate(self.config);
            regenerated += 1;
        }
        if regenerated > 0 {
            log::debug!(
                "Moved mines away from first reveal at {:?} after {} regenerations",
                coords,
                regenerated
            );
        }
        Ok(())
    }

    fn lose(&mut self, coords: Coord2) {
        self.grid.mark_wrong(coords);
        let mines: Vec<_> = self.grid.mine_coords().collect();
        for mine in mines {
            self.grid.set_state(mine, CellState::Revealed);
        }
        self.triggered_mine = Some(coords);
        self.status = Status::Lost;
        log::debug!("Hit mine at {:?}, game lost", coords);
    }

    /// Flags every mine still unflagged, taking one off the remaining-flags counter for each.
    fn win(&mut self) {
        let mines: Vec<_> = self.grid.mine_coords().collect();
        for mine in mines {
            if !matches!(self.grid[mine].state, CellState::Flagged) {
                self.grid.set_state(mine, CellState::Flagged);
                self.remaining_flags -= 1;
            }
        }
        self.status = Status::Won;
        log::debug!("All safe cells open, game won");
    }
}
