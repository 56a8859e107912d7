use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("invalid player {0:?}: expected \"X\" or \"O\"")]
    InvalidPlayer(String),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
}
