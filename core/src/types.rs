use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// One of the eight slots around a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// `(row, col)` displacement of this slot.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            TopLeft => (-1, -1),
            Top => (-1, 0),
            TopRight => (-1, 1),
            Left => (0, -1),
            Right => (0, 1),
            BottomLeft => (1, -1),
            Bottom => (1, 0),
            BottomRight => (1, 1),
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// The up to eight grid-bounded neighbors of a cell, one optional slot per [`Direction`].
///
/// A slot is `None` when it would fall outside the grid, this is not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbors {
    slots: [Option<Coord2>; 8],
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let mut slots = [None; 8];
        for direction in Direction::ALL {
            slots[direction.slot()] = apply_delta(center, direction.delta(), bounds);
        }
        Self { slots }
    }

    pub fn get(&self, direction: Direction) -> Option<Coord2> {
        self.slots[direction.slot()]
    }

    /// Number of slots that are inside the grid.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// In-bounds neighbors, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + use<> {
        self.slots.into_iter().flatten()
    }
}

impl IntoIterator for Neighbors {
    type Item = Coord2;
    type IntoIter = core::iter::Flatten<core::array::IntoIter<Option<Coord2>, 8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors = Neighbors::new((0, 0), (16, 16));

        assert_eq!(neighbors.len(), 3);
        assert_eq!(neighbors.get(Direction::TopLeft), None);
        assert_eq!(neighbors.get(Direction::Top), None);
        assert_eq!(neighbors.get(Direction::Left), None);
        assert_eq!(neighbors.get(Direction::Right), Some((0, 1)));
        assert_eq!(neighbors.get(Direction::Bottom), Some((1, 0)));
        assert_eq!(neighbors.get(Direction::BottomRight), Some((1, 1)));
    }

    #[test]
    fn bottom_right_corner_is_bounded() {
        let neighbors = Neighbors::new((15, 15), (16, 16));

        assert_eq!(
            neighbors.iter().collect::<Vec<_>>(),
            vec![(14, 14), (14, 15), (15, 14)]
        );
    }

    #[test]
    fn interior_cell_has_all_slots_in_order() {
        let neighbors = Neighbors::new((5, 7), (16, 16));

        assert_eq!(
            neighbors.iter().collect::<Vec<_>>(),
            vec![
                (4, 6),
                (4, 7),
                (4, 8),
                (5, 6),
                (5, 8),
                (6, 6),
                (6, 7),
                (6, 8)
            ]
        );
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let neighbors = Neighbors::new((0, 0), (1, 1));

        assert!(neighbors.is_empty());
    }

    #[test]
    fn edge_of_narrow_grid() {
        let neighbors = Neighbors::new((0, 2), (1, 4));

        assert_eq!(neighbors.get(Direction::Left), Some((0, 1)));
        assert_eq!(neighbors.get(Direction::Right), Some((0, 3)));
        assert_eq!(neighbors.len(), 2);
    }
}
