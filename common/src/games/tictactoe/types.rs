use std::fmt;

/// Cell content, encoded for search as `+1` / `-1` / `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Maximizer,
    Minimizer,
}

impl Mark {
    pub fn value(&self) -> i8 {
        match self {
            Mark::Empty => 0,
            Mark::Maximizer => 1,
            Mark::Minimizer => -1,
        }
    }

    pub fn from_value(value: i8) -> Option<Mark> {
        match value {
            0 => Some(Mark::Empty),
            1 => Some(Mark::Maximizer),
            -1 => Some(Mark::Minimizer),
            _ => None,
        }
    }

    pub fn for_turn(is_maximizing: bool) -> Mark {
        if is_maximizing {
            Mark::Maximizer
        } else {
            Mark::Minimizer
        }
    }

    /// External single-character encoding: `O` maximizes, `X` minimizes, `0` is blank.
    pub fn to_symbol(&self) -> char {
        match self {
            Mark::Empty => '0',
            Mark::Maximizer => 'O',
            Mark::Minimizer => 'X',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            '0' => Some(Mark::Empty),
            'O' => Some(Mark::Maximizer),
            'X' => Some(Mark::Minimizer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a search node.
///
/// `location` is `None` when the node was terminal and there was no move to
/// make; the wire format renders that as `[-1, -1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i8,
    pub depth: usize,
    pub location: Option<Position>,
}

impl SearchResult {
    pub fn terminal(score: i8, depth: usize) -> Self {
        Self {
            score,
            depth,
            location: None,
        }
    }

    pub fn location_or_sentinel(&self) -> [i32; 2] {
        match self.location {
            Some(pos) => [pos.row as i32, pos.col as i32],
            None => [-1, -1],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::XWon => write!(f, "X wins"),
            GameStatus::OWon => write!(f, "O wins"),
            GameStatus::Draw => write!(f, "tie game"),
        }
    }
}
