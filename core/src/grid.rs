use std::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular matrix of cells with a fixed mine layout.
///
/// The grid is the single owner of its cells: values are written while the field is built and only cell states are
/// touched afterwards, through crate-internal setters used by the reveal engine and the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// All cells `Empty` and `Hidden`, no mines placed yet.
    pub(crate) fn empty((rows, cols): Coord2) -> Self {
        Self {
            cells: Array2::default((rows, cols).to_nd_index()),
            mine_count: 0,
        }
    }

    /// Builds a grid with mines at exactly `mine_coords` and computes the counts of every other cell.
    ///
    /// Duplicate coordinates are only counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut grid = Self::empty(size);
        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            grid.place_mine(coords);
        }
        grid.compute_counts();
        Ok(grid)
    }

    /// Marks `coords` as a mine, returns `false` if it already was one.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            return false;
        }
        cell.value = CellValue::Mine;
        self.mine_count += 1;
        true
    }

    /// Fills in `Empty`/`BombCount` for every non-mine cell from the current mine layout.
    pub(crate) fn compute_counts(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if self[coords].is_mine() {
                    continue;
                }
                let count = self.adjacent_mine_count(coords);
                self.cells[coords.to_nd_index()].value = CellValue::from_count(count);
            }
        }
    }

    pub(crate) fn set_state(&mut self, coords: Coord2, state: CellState) {
        self.cells[coords.to_nd_index()].state = state;
    }

    pub(crate) fn mark_wrong(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].marked_wrong = true;
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        // built from `Coord` dimensions, so these always fit
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed()).count() as CellCount
    }

    pub fn has_hidden_safe_cell(&self) -> bool {
        self.cells.iter().any(Cell::is_hidden_safe)
    }

    /// Adjacency resolver: the eight neighbor slots of `coords`, absent where they leave the grid.
    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }

    pub fn neighbor_cells(&self, coords: Coord2) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.neighbors(coords).into_iter().map(move |pos| (pos, self[pos]))
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.neighbor_cells(coords)
            .filter(|(_, cell)| cell.is_mine())
            .count() as u8
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(coords, _)| coords)
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
