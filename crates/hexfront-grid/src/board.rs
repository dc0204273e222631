//! The affiliation board: a fixed rows × cols grid of cells.
//!
//! Cells are created once, unaffiliated, and only change hands through
//! `claim` — which the sim engine calls when a unit spawns or a move
//! commits. Dimensions are immutable for the life of the board.

use hexfront_core::enums::Team;
use hexfront_core::state::TerritorySplit;
use hexfront_core::types::HexCoord;

use crate::geometry::in_bounds;

/// One hex tile. The coordinate never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub coord: HexCoord,
    pub affiliation: Option<Team>,
}

/// Row-major grid of cells with team affiliation.
#[derive(Debug, Clone)]
pub struct HexBoard {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl HexBoard {
    /// Build a rows × cols board with every cell unaffiliated.
    pub fn new(rows: u32, cols: u32) -> Self {
        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                cells.push(Cell {
                    coord: HexCoord::new(col, row),
                    affiliation: None,
                });
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Whether `coord` lies on this board.
    pub fn contains(&self, coord: HexCoord) -> bool {
        in_bounds(coord, self.rows, self.cols)
    }

    /// The cell at `coord`, if on the board.
    pub fn cell(&self, coord: HexCoord) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Claim the cell at `coord` for `team`, returning the previous
    /// affiliation. Overwrites unconditionally — re-claiming for the
    /// same team is an idempotent hand-back. Off-board claims return
    /// `None` and change nothing (the engine never issues one).
    pub fn claim(&mut self, coord: HexCoord, team: Team) -> Option<Team> {
        let idx = self.index_of(coord)?;
        self.cells[idx].affiliation.replace(team)
    }

    /// Share of the board held by each faction.
    ///
    /// Single pass over the cells; the unclaimed share is derived as
    /// `100 - blue - red` so the three values sum to exactly 100
    /// despite rounding in the other two. A zero-size board reports
    /// all zeros rather than dividing by zero.
    pub fn territory_split(&self) -> TerritorySplit {
        let total = self.cells.len();
        if total == 0 {
            return TerritorySplit::default();
        }

        let mut blue = 0usize;
        let mut red = 0usize;
        for cell in &self.cells {
            match cell.affiliation {
                Some(Team::Blue) => blue += 1,
                Some(Team::Red) => red += 1,
                None => {}
            }
        }

        let blue_pct = blue as f64 / total as f64 * 100.0;
        let red_pct = red as f64 / total as f64 * 100.0;
        TerritorySplit {
            blue_pct,
            red_pct,
            none_pct: 100.0 - blue_pct - red_pct,
        }
    }

    fn index_of(&self, coord: HexCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.row as usize * self.cols as usize + coord.col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_unclaimed() {
        let board = HexBoard::new(3, 4);
        assert_eq!(board.cells().len(), 12);
        assert!(board.cells().iter().all(|c| c.affiliation.is_none()));
        let split = board.territory_split();
        assert_eq!(split.blue_pct, 0.0);
        assert_eq!(split.red_pct, 0.0);
        assert_eq!(split.none_pct, 100.0);
    }

    #[test]
    fn test_cell_lookup_row_major() {
        let board = HexBoard::new(2, 3);
        let cell = board.cell(HexCoord::new(2, 1)).unwrap();
        assert_eq!(cell.coord, HexCoord::new(2, 1));
        assert!(board.cell(HexCoord::new(3, 0)).is_none());
        assert!(board.cell(HexCoord::new(0, 2)).is_none());
    }

    #[test]
    fn test_claim_reports_previous_holder() {
        let mut board = HexBoard::new(2, 2);
        let at = HexCoord::new(1, 1);
        assert_eq!(board.claim(at, Team::Blue), None);
        assert_eq!(board.claim(at, Team::Red), Some(Team::Blue));
        assert_eq!(board.claim(at, Team::Red), Some(Team::Red));
        assert_eq!(board.cell(at).unwrap().affiliation, Some(Team::Red));
    }

    #[test]
    fn test_claim_off_board_is_ignored() {
        let mut board = HexBoard::new(2, 2);
        assert_eq!(board.claim(HexCoord::new(5, 5), Team::Blue), None);
        assert!(board.cells().iter().all(|c| c.affiliation.is_none()));
    }

    #[test]
    fn test_territory_split_sums_to_exactly_100() {
        let mut board = HexBoard::new(3, 3);
        let _ = board.claim(HexCoord::new(0, 0), Team::Blue);
        let _ = board.claim(HexCoord::new(1, 0), Team::Blue);
        let _ = board.claim(HexCoord::new(2, 2), Team::Red);

        let split = board.territory_split();
        assert!((split.blue_pct - 2.0 / 9.0 * 100.0).abs() < 1e-9);
        assert!((split.red_pct - 1.0 / 9.0 * 100.0).abs() < 1e-9);
        let sum = split.blue_pct + split.red_pct + split.none_pct;
        assert!((sum - 100.0).abs() < 1e-9, "percentages sum to {sum}");
    }

    #[test]
    fn test_empty_board_degenerate_split() {
        let board = HexBoard::new(0, 0);
        assert_eq!(board.territory_split(), TerritorySplit::default());
    }

    #[test]
    fn test_fully_claimed_board_has_no_unclaimed_share() {
        let mut board = HexBoard::new(2, 2);
        for row in 0..2 {
            for col in 0..2 {
                let _ = board.claim(HexCoord::new(col, row), Team::Blue);
            }
        }
        let split = board.territory_split();
        assert_eq!(split.blue_pct, 100.0);
        assert_eq!(split.none_pct, 0.0);
    }
}
