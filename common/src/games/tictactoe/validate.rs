use crate::error::SolverError;
use super::board::BOARD_SIZE;
use super::types::Mark;

pub fn validate_player(choice: &str) -> Result<Mark, SolverError> {
    match choice {
        "X" => Ok(Mark::Minimizer),
        "O" => Ok(Mark::Maximizer),
        other => Err(SolverError::InvalidPlayer(other.to_string())),
    }
}

pub fn validate_board<S: AsRef<str>>(rows: &[S]) -> Result<(), SolverError> {
    if rows.len() != BOARD_SIZE {
        return Err(SolverError::InvalidBoard(format!(
            "expected {} rows, got {}",
            BOARD_SIZE,
            rows.len()
        )));
    }

    let mut x_count = 0usize;
    let mut o_count = 0usize;

    for (row, text) in rows.iter().enumerate() {
        let text = text.as_ref();
        let cell_count = text.chars().count();
        if cell_count != BOARD_SIZE {
            return Err(SolverError::InvalidBoard(format!(
                "row {} has {} cells, expected {}",
                row, cell_count, BOARD_SIZE
            )));
        }

        for (col, symbol) in text.chars().enumerate() {
            match Mark::from_symbol(symbol) {
                Some(Mark::Minimizer) => x_count += 1,
                Some(Mark::Maximizer) => o_count += 1,
                Some(Mark::Empty) => {}
                None => {
                    return Err(SolverError::InvalidBoard(format!(
                        "cell ({}, {}) holds {:?}, expected X, O or 0",
                        row, col, symbol
                    )));
                }
            }
        }
    }

    if x_count.abs_diff(o_count) > 1 {
        return Err(SolverError::InvalidBoard(format!(
            "mark counts differ by more than one (X: {}, O: {})",
            x_count, o_count
        )));
    }

    Ok(())
}
