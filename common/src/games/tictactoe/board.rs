use std::fmt;

use crate::error::SolverError;
use super::types::{GameStatus, Mark, Position};
use super::validate::validate_board;
use super::win_detector::check_win;

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a board from the signed search encoding (`1`, `-1`, `0`).
    pub fn from_grid(grid: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, SolverError> {
        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = Mark::from_value(value).ok_or_else(|| {
                    SolverError::InvalidBoard(format!(
                        "cell ({}, {}) holds {}, expected -1, 0 or 1",
                        row, col, value
                    ))
                })?;
            }
        }
        Ok(Self { cells })
    }

    /// Decodes the external three-string encoding, e.g. `["X00", "0O0", "000"]`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, SolverError> {
        validate_board(rows)?;

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, text) in rows.iter().enumerate() {
            for (col, symbol) in text.as_ref().chars().enumerate() {
                cells[row][col] = Mark::from_symbol(symbol).ok_or_else(|| {
                    SolverError::InvalidBoard(format!("unknown symbol {:?}", symbol))
                })?;
            }
        }
        Ok(Self { cells })
    }

    pub fn to_rows(&self) -> [String; BOARD_SIZE] {
        self.cells
            .map(|row| row.iter().map(Mark::to_symbol).collect::<String>())
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// `pos` must be on the board; check with `get` or `is_valid_move` first.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        debug_assert!(pos.row < BOARD_SIZE && pos.col < BOARD_SIZE, "position {} off the board", pos);
        self.cells[pos.row][pos.col] = mark;
    }

    /// Same in-range precondition as `set`.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Mark::Empty);
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    /// Empty cells in row-major order. Callers recompute this after every
    /// mutation; it is never cached.
    pub fn open_spots(&self) -> Vec<Position> {
        let mut spots = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    spots.push(Position::new(row, col));
                }
            }
        }
        spots
    }

    pub fn empty_count(&self) -> usize {
        self.count(Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn status(&self) -> GameStatus {
        if check_win(self, Mark::Minimizer) {
            return GameStatus::XWon;
        }
        if check_win(self, Mark::Maximizer) {
            return GameStatus::OWon;
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .map(|mark| match mark {
                    Mark::Empty => ".".to_string(),
                    other => other.to_symbol().to_string(),
                })
                .collect();
            write!(f, " {}", line.join(" | "))?;
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_decodes_symbols() {
        let board = Board::from_rows(&["X0O", "000", "O0X"]).unwrap();

        assert_eq!(board.get(Position::new(0, 0)), Some(Mark::Minimizer));
        assert_eq!(board.get(Position::new(0, 2)), Some(Mark::Maximizer));
        assert_eq!(board.get(Position::new(1, 1)), Some(Mark::Empty));
        assert_eq!(board.get(Position::new(2, 2)), Some(Mark::Minimizer));
    }

    #[test]
    fn test_to_rows_matches_external_encoding() {
        let board = Board::from_grid([[-1, 0, 1], [0, 0, 0], [1, 0, -1]]).unwrap();

        assert_eq!(board.to_rows(), ["X0O", "000", "O0X"]);
    }

    #[test]
    fn test_from_grid_rejects_out_of_range_value() {
        let result = Board::from_grid([[2, 0, 0], [0, 0, 0], [0, 0, 0]]);

        assert!(matches!(result, Err(SolverError::InvalidBoard(_))));
    }

    #[test]
    fn test_open_spots_are_row_major() {
        let board = Board::from_grid([[1, 0, -1], [0, 1, 0], [-1, 0, 0]]).unwrap();

        assert_eq!(
            board.open_spots(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_open_spots_recomputed_after_mutation() {
        let mut board = Board::empty();
        assert_eq!(board.open_spots().len(), 9);

        board.set(Position::new(0, 0), Mark::Maximizer);
        assert_eq!(board.open_spots().first(), Some(&Position::new(0, 1)));

        board.clear(Position::new(0, 0));
        assert_eq!(board.open_spots().first(), Some(&Position::new(0, 0)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn test_set_out_of_range_panics() {
        let mut board = Board::empty();

        board.set(Position::new(0, 3), Mark::Maximizer);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let board = Board::empty();

        assert_eq!(board.get(Position::new(3, 0)), None);
        assert!(!board.is_valid_move(Position::new(0, 3)));
    }

    #[test]
    fn test_status_detects_winner_and_draw() {
        let x_won = Board::from_rows(&["XXX", "OO0", "000"]).unwrap();
        let o_won = Board::from_rows(&["XX0", "OOO", "X00"]).unwrap();
        let draw = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();

        assert_eq!(x_won.status(), GameStatus::XWon);
        assert_eq!(o_won.status(), GameStatus::OWon);
        assert_eq!(draw.status(), GameStatus::Draw);
        assert_eq!(Board::empty().status(), GameStatus::InProgress);
    }
}
