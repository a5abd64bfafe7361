use std::fmt::{self, Write};

use fieldsweep_core::*;

pub fn cell_char(cell: &Cell) -> char {
    match (cell.state, cell.value) {
        (CellState::Hidden, _) => '#',
        (CellState::Flagged, _) => 'F',
        (CellState::Questioned, _) => '?',
        (CellState::Revealed, CellValue::Mine) if cell.marked_wrong => 'X',
        (CellState::Revealed, CellValue::Mine) => '*',
        (CellState::Revealed, CellValue::Empty) => '.',
        (CellState::Revealed, CellValue::BombCount(count)) => char::from(b'0' + count),
    }
}

/// Text board with a status line and row/column rulers.
pub struct Board<'a, G>(pub &'a Session<G>);

impl<G: FieldGenerator> fmt::Display for Board<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let grid = session.grid();
        let (rows, cols) = grid.size();

        let status = match session.status() {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Lost => "lost",
        };
        writeln!(f, "mines left: {}  [{}]", session.remaining_flags(), status)?;

        f.write_str("    ")?;
        for col in 0..cols {
            write!(f, "{:>3}", col)?;
        }
        f.write_char('\n')?;
        for row in 0..rows {
            write!(f, "{:>3} ", row)?;
            for col in 0..cols {
                write!(f, "{:>3}", cell_char(&grid[(row, col)]))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
