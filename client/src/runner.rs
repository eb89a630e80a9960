use std::error::Error;
use std::io::{BufRead, Write};

use tictactoe_common::config::{ConfigContentProvider, ConfigManager, ConfigSerializer};
use tictactoe_common::game::{GameSession, ScoreRecord, TurnReport};
use tictactoe_common::log;

use crate::terminal_ui::{Command, HELP_TEXT, describe_error, parse_command, render_session};

/// Reads commands line by line until `q` or end of input. The score is saved
/// through `stats` after every finished game and after a score reset.
pub fn run<I, O, P, S>(
    session: &mut GameSession,
    stats: &ConfigManager<P, ScoreRecord, S>,
    input: I,
    output: &mut O,
) -> Result<(), Box<dyn Error>>
where
    I: BufRead,
    O: Write,
    P: ConfigContentProvider,
    S: ConfigSerializer<ScoreRecord>,
{
    writeln!(output, "{}", HELP_TEXT)?;
    writeln!(output)?;
    write!(output, "{}", render_session(session))?;

    for line in input.lines() {
        let command = match parse_command(&line?) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        let report = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                continue;
            }
            Command::Show => None,
            Command::Place(index) => match session.play(index) {
                Ok(report) => Some(report),
                Err(err) => {
                    writeln!(output, "{}", describe_error(&err))?;
                    continue;
                }
            },
            Command::Restart => Some(session.restart()?),
            Command::SwapSymbol => Some(session.toggle_symbol()?),
            Command::ToggleAi => Some(session.toggle_ai()?),
            Command::ResetScore => {
                session.reset_score();
                save_score(session, stats);
                None
            }
        };

        if let Some(report) = report {
            describe_ai_moves(&report, output)?;
            if report.outcome.is_terminal() && !report.moves.is_empty() {
                save_score(session, stats);
            }
        }

        writeln!(output)?;
        write!(output, "{}", render_session(session))?;
    }

    Ok(())
}

fn describe_ai_moves<O: Write>(report: &TurnReport, output: &mut O) -> std::io::Result<()> {
    for applied in report.moves.iter().filter(|m| m.by_ai) {
        writeln!(output, "AI ({}) plays {}", applied.side, applied.index + 1)?;
    }
    Ok(())
}

// A failed write only loses the tally; the game itself carries on.
fn save_score<P, S>(session: &GameSession, stats: &ConfigManager<P, ScoreRecord, S>)
where
    P: ConfigContentProvider,
    S: ConfigSerializer<ScoreRecord>,
{
    if let Err(err) = stats.set_config(&session.score()) {
        log!("Failed to save score: {}", err);
    }
}
