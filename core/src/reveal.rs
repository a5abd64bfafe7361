use crate::*;

/// Opens `coords` and cascades through the connected region of empty cells.
///
/// Every empty cell reached is revealed and its openable neighbors follow: empty ones join the cascade, numbered ones
/// are revealed but stop it. Mines and questioned cells are never touched. Returns how many flagged cells were
/// forced open on the way into the cascade, so the caller can give those flags back to the counter.
///
/// Already revealed targets are a no-op. Callers must check for a mine at `coords` before calling this.
pub fn open_region(grid: &mut Grid, coords: Coord2) -> CellCount {
    let mut wrong_flags = 0;
    let mut to_visit = vec![coords];

    while let Some(visit_coords) = to_visit.pop() {
        let cell = grid[visit_coords];
        if cell.is_revealed() {
            continue;
        }
        if matches!(cell.state, CellState::Flagged) {
            log::trace!("Flag at {:?} was wrong", visit_coords);
            wrong_flags += 1;
        }
        grid.set_state(visit_coords, CellState::Revealed);
        log::trace!("Cascade opened cell at {:?}", visit_coords);

        let neighbors: Vec<_> = grid.neighbor_cells(visit_coords).collect();
        for (pos, neighbor) in neighbors {
            if neighbor.is_mine() || !neighbor.state.is_openable() {
                continue;
            }
            if neighbor.value.is_empty() {
                to_visit.push(pos);
            } else {
                grid.set_state(pos, CellState::Revealed);
            }
        }
    }

    wrong_flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: Coord2, mines: &[Coord2]) -> Grid {
        Grid::from_mine_coords(size, mines).unwrap()
    }

    fn revealed(grid: &Grid) -> Vec<Coord2> {
        grid.iter()
            .filter(|(_, cell)| cell.is_revealed())
            .map(|(coords, _)| coords)
            .collect()
    }

    #[test]
    fn opens_zero_region_and_numbered_border() {
        // column 2 is a wall of mines, right side stays closed
        let mut grid = grid((3, 5), &[(0, 2), (1, 2), (2, 2)]);

        let wrong_flags = open_region(&mut grid, (1, 0));

        assert_eq!(wrong_flags, 0);
        assert_eq!(
            revealed(&grid),
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
        assert_eq!(grid[(0, 1)].value, CellValue::BombCount(2));
        assert_eq!(grid[(0, 3)].state, CellState::Hidden);
        assert_eq!(grid[(1, 2)].state, CellState::Hidden);
    }

    #[test]
    fn whole_board_opens_without_mines() {
        let mut grid = grid((16, 16), &[]);

        open_region(&mut grid, (8, 8));

        assert_eq!(grid.revealed_count(), 256);
    }

    #[test]
    fn revealed_target_is_noop() {
        let mut grid = grid((3, 3), &[(2, 2)]);
        grid.set_state((0, 0), CellState::Revealed);
        let before = grid.clone();

        assert_eq!(open_region(&mut grid, (0, 0)), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn forced_open_flags_are_reported() {
        let mut grid = grid((3, 3), &[(2, 2)]);
        grid.set_state((0, 0), CellState::Flagged);
        grid.set_state((0, 1), CellState::Flagged);

        let wrong_flags = open_region(&mut grid, (0, 0));

        assert_eq!(wrong_flags, 2);
        assert_eq!(grid[(0, 0)].state, CellState::Revealed);
        assert_eq!(grid[(0, 1)].state, CellState::Revealed);
        assert_eq!(grid[(2, 2)].state, CellState::Hidden);
        assert_eq!(grid.revealed_count(), 8);
    }

    #[test]
    fn flagged_numbered_border_opens_without_adjustment() {
        let mut grid = grid((3, 3), &[(2, 2)]);
        grid.set_state((1, 1), CellState::Flagged);

        let wrong_flags = open_region(&mut grid, (0, 0));

        assert_eq!(wrong_flags, 0);
        assert_eq!(grid[(1, 1)].state, CellState::Revealed);
    }

    #[test]
    fn questioned_cells_block_the_cascade() {
        let mut grid = grid((1, 5), &[(0, 4)]);
        grid.set_state((0, 1), CellState::Questioned);

        open_region(&mut grid, (0, 0));

        assert_eq!(revealed(&grid), vec![(0, 0)]);
        assert_eq!(grid[(0, 1)].state, CellState::Questioned);
    }

    #[test]
    fn never_reveals_mines() {
        let mines = [(0, 3), (3, 0), (3, 3), (5, 5)];
        let mut grid = grid((6, 6), &mines);

        open_region(&mut grid, (0, 0));

        for mine in mines {
            assert_eq!(grid[mine].state, CellState::Hidden);
        }
    }
}
