use tictactoe_common::GameError;
use tictactoe_common::game::{BOARD_CELLS, BOARD_SIZE, BotType, Cell, GameSession};

pub const HELP_TEXT: &str = "\
Commands:
  1-9  place your mark (cells numbered left to right, top to bottom)
  r    restart game
  s    swap symbol (play as the other mark)
  a    toggle AI opponent
  z    reset score
  h    show this help
  q    quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    SwapSymbol,
    ToggleAi,
    ResetScore,
    Help,
    Show,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_ascii_lowercase();

    if let Ok(number) = input.parse::<usize>() {
        if (1..=BOARD_CELLS).contains(&number) {
            return Ok(Command::Place(number - 1));
        }
        return Err(format!("Cell number must be between 1 and {}", BOARD_CELLS));
    }

    match input.as_str() {
        "" => Ok(Command::Show),
        "r" | "restart" => Ok(Command::Restart),
        "s" | "swap" => Ok(Command::SwapSymbol),
        "a" | "ai" => Ok(Command::ToggleAi),
        "z" | "reset" => Ok(Command::ResetScore),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{}', type h for help", other)),
    }
}

/// Reports a rejected move using the 1-9 numbering shown on screen.
pub fn describe_error(err: &GameError) -> String {
    match err {
        GameError::IllegalMove { index } => format!("Cell {} is already taken", index + 1),
        GameError::OutOfRange { index } => format!("There is no cell {}", index + 1),
        GameError::GameOver => "The game is over, press r to play again".to_string(),
        other => other.to_string(),
    }
}

/// Empty cells show their number; the winning triple is bracketed.
pub fn render_board(session: &GameSession) -> String {
    let winning_line = session.winning_line();
    let rows: Vec<String> = session
        .board()
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match cell {
                        Cell::Empty => char::from_digit((index + 1) as u32, 10).unwrap_or(' '),
                        marked => marked.symbol(),
                    };
                    if winning_line.is_some_and(|line| line.contains(&index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_session(session: &GameSession) -> String {
    let opponent = if session.vs_ai() {
        let bot = match session.bot_type() {
            BotType::Minimax => "minimax",
            BotType::Random => "random",
        };
        format!("Vs AI: On ({})", bot)
    } else {
        "Vs AI: Off".to_string()
    };

    format!(
        "{}\n\n{}\nYou play {} | {}\n{}\n",
        render_board(session),
        session.status_text(),
        session.human_side(),
        opponent,
        session.score_text()
    )
}
