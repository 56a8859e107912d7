mod board;
mod game_state;
mod minimax;
mod types;
mod validate;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use game_state::{COMPUTER_MARK, HUMAN_MARK, LocalGame};
pub use minimax::{minimax, solve, solve_board};
pub use types::{GameStatus, Mark, Position, SearchResult};
pub use validate::{validate_board, validate_player};
pub use win_detector::{check_win, score_board};
