use super::board::Board;
use super::minimax::solve;
use super::types::{GameStatus, Mark, Position, SearchResult};

pub const HUMAN_MARK: Mark = Mark::Minimizer;
pub const COMPUTER_MARK: Mark = Mark::Maximizer;

/// A human (`X`) against the solver (`O`), human moves first.
#[derive(Debug, Clone)]
pub struct LocalGame {
    pub board: Board,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl Default for LocalGame {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalGame {
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Places the human's mark and, unless that ended the game, lets the
    /// solver answer. Returns the solver's result when it moved.
    pub fn place_player_mark(&mut self, pos: Position) -> Result<Option<SearchResult>, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        match self.board.get(pos) {
            None => return Err("Position out of bounds".to_string()),
            Some(Mark::Empty) => {}
            Some(_) => return Err("Cell is already marked".to_string()),
        }

        self.board.set(pos, HUMAN_MARK);
        self.last_move = Some(pos);
        self.status = self.board.status();

        if self.status.is_over() {
            return Ok(None);
        }

        self.computer_move().map(Some)
    }

    fn computer_move(&mut self) -> Result<SearchResult, String> {
        let rows = self.board.to_rows();
        let result = solve(&rows, &HUMAN_MARK.to_symbol().to_string()).map_err(|e| e.to_string())?;

        let pos = result
            .location
            .ok_or_else(|| "Solver returned no move for an open board".to_string())?;
        if !self.board.is_valid_move(pos) {
            return Err(format!("Solver chose occupied cell {}", pos));
        }

        self.board.set(pos, COMPUTER_MARK);
        self.last_move = Some(pos);
        self.status = self.board.status();
        Ok(result)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::Minimizer),
            GameStatus::OWon => Some(Mark::Maximizer),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
