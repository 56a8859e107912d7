use std::io::{self, BufRead, Write};

use ttt_common::games::tictactoe::{GameStatus, LocalGame, Position};

enum Command {
    Move(Position),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed {
        "q" | "quit" => return Ok(Command::Quit),
        "r" | "reset" => return Ok(Command::Reset),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err("Enter a move as \"row col\" (0-2), \"r\" to reset or \"q\" to quit".to_string());
    };

    let row = row.parse::<usize>().map_err(|_| format!("Invalid row: {}", row))?;
    let col = col.parse::<usize>().map_err(|_| format!("Invalid column: {}", col))?;
    Ok(Command::Move(Position::new(row, col)))
}

/// Plays X against the solver on the given streams until quit or EOF.
pub fn run_local_game<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<GameStatus> {
    let mut game = LocalGame::new();
    writeln!(output, "You are X, the solver is O.")?;
    writeln!(output, "{}", game.board)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Reset => {
                game.reset();
                writeln!(output, "{}", game.board)?;
            }
            Command::Move(pos) => match game.place_player_mark(pos) {
                Ok(reply) => {
                    if let Some(solver_pos) = reply.and_then(|r| r.location) {
                        writeln!(output, "Solver plays {}", solver_pos)?;
                    }
                    writeln!(output, "{}", game.board)?;
                    if game.status.is_over() {
                        writeln!(output, "{}! Enter \"r\" to play again.", game.status)?;
                    }
                }
                Err(message) => writeln!(output, "{}", message)?,
            },
        }
    }

    Ok(game.status)
}

pub fn run_stdin_game() -> io::Result<GameStatus> {
    let stdin = io::stdin();
    run_local_game(stdin.lock(), io::stdout())
}
