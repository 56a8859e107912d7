use crate::error::SolverError;
use super::board::Board;
use super::types::{Mark, SearchResult};
use super::validate::validate_player;
use super::win_detector::score_board;

/// Decodes a request in the external text encoding and searches for the
/// maximizer's best reply.
///
/// The root is always searched as the maximizer (`O`). `player_choice` is
/// validated but does not pick the search polarity.
pub fn solve<S: AsRef<str>>(rows: &[S], player_choice: &str) -> Result<SearchResult, SolverError> {
    validate_player(player_choice)?;
    let board = Board::from_rows(rows)?;
    Ok(solve_board(&board))
}

/// Searches a copy of `board`, so the caller's board is never touched.
pub fn solve_board(board: &Board) -> SearchResult {
    let mut board = *board;
    let depth = board.empty_count();
    minimax(&mut board, depth, true)
}

/// Exhaustive minimax without pruning.
///
/// `depth` is the number of empty cells left. Every mark placed on `board`
/// is cleared again before the next sibling is tried, so the board is
/// unchanged when this returns. Ties keep the first move in row-major order.
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> SearchResult {
    let score = score_board(board);
    if score != 0 || depth == 0 {
        return SearchResult::terminal(score, depth);
    }

    let mover = Mark::for_turn(is_maximizing);
    let mut best = SearchResult {
        score: if is_maximizing { i8::MIN } else { i8::MAX },
        depth,
        location: None,
    };

    for spot in board.open_spots() {
        board.set(spot, mover);
        let child = minimax(board, depth - 1, !is_maximizing);
        board.clear(spot);

        let improves = if is_maximizing {
            child.score > best.score
        } else {
            child.score < best.score
        };

        if improves {
            best = SearchResult {
                location: Some(spot),
                ..child
            };
        }
    }

    best
}
