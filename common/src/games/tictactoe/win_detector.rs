use super::board::Board;
use super::types::{Mark, Position};

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(Position::new(row, col)) == Some(mark))
    })
}

/// `+1` if the maximizer holds a line, `-1` for the minimizer, `0` otherwise.
///
/// A `0` does not mean the game is over; the search tells "no winner yet"
/// apart from a full board by the remaining depth.
pub fn score_board(board: &Board) -> i8 {
    if check_win(board, Mark::Maximizer) {
        Mark::Maximizer.value()
    } else if check_win(board, Mark::Minimizer) {
        Mark::Minimizer.value()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: [[i8; 3]; 3]) -> Board {
        Board::from_grid(grid).unwrap()
    }

    #[test]
    fn test_check_win_rows() {
        assert!(check_win(&board([[1, 1, 1], [0, 0, 0], [0, 0, 0]]), Mark::Maximizer));
        assert!(check_win(&board([[0, 0, 0], [-1, -1, -1], [0, 0, 0]]), Mark::Minimizer));
        assert!(check_win(&board([[0, 0, 0], [0, 0, 0], [1, 1, 1]]), Mark::Maximizer));
    }

    #[test]
    fn test_check_win_columns() {
        assert!(check_win(&board([[1, 0, 0], [1, 0, 0], [1, 0, 0]]), Mark::Maximizer));
        assert!(check_win(&board([[0, -1, 0], [0, -1, 0], [0, -1, 0]]), Mark::Minimizer));
        assert!(check_win(&board([[0, 0, 1], [0, 0, 1], [0, 0, 1]]), Mark::Maximizer));
    }

    #[test]
    fn test_check_win_diagonals() {
        assert!(check_win(&board([[-1, 0, 0], [0, -1, 0], [0, 0, -1]]), Mark::Minimizer));
        assert!(check_win(&board([[0, 0, 1], [0, 1, 0], [1, 0, 0]]), Mark::Maximizer));
    }

    #[test]
    fn test_check_win_requires_matching_mark() {
        let b = board([[1, 1, 1], [0, 0, 0], [0, 0, 0]]);

        assert!(!check_win(&b, Mark::Minimizer));
        assert!(!check_win(&Board::empty(), Mark::Empty));
    }

    #[test]
    fn test_check_win_ignores_two_in_a_row() {
        let b = board([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]);

        assert!(!check_win(&b, Mark::Maximizer));
        assert!(!check_win(&b, Mark::Minimizer));
    }

    #[test]
    fn test_score_board() {
        assert_eq!(score_board(&board([[1, 1, 1], [-1, -1, 0], [0, 0, 0]])), 1);
        assert_eq!(score_board(&board([[-1, -1, -1], [1, 1, 0], [1, 0, 0]])), -1);
        assert_eq!(score_board(&board([[1, -1, 1], [1, -1, -1], [-1, 1, 1]])), 0);
        assert_eq!(score_board(&Board::empty()), 0);
    }
}
