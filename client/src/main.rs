mod config;
mod runner;
mod terminal_ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_common::game::{BotType, GameSession, Side};
use tictactoe_common::{debug_log, log, logger};

use config::{Config, get_config_manager, get_stats_manager};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Side {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Side::X,
            MarkArg::O => Side::O,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BotArg {
    Minimax,
    Random,
}

impl From<BotArg> for BotType {
    fn from(bot: BotArg) -> Self {
        match bot {
            BotArg::Minimax => BotType::Minimax,
            BotArg::Random => BotType::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic Tac Toe against a perfect-play AI")]
struct Args {
    /// Config file, defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    play_as: Option<MarkArg>,

    #[arg(long)]
    vs_ai: Option<bool>,

    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    #[arg(long)]
    stats_file: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(mark) = self.play_as {
            config.human_mark = mark.into();
        }
        if let Some(vs_ai) = self.vs_ai {
            config.vs_ai = vs_ai;
        }
        if let Some(bot) = self.bot {
            config.bot = bot.into();
        }
        if let Some(stats_file) = &self.stats_file {
            config.stats_file = stats_file.clone();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    args.apply(&mut config);
    if let Err(err) = config_manager.set_config(&config) {
        log!("Failed to save config: {}", err);
    }
    debug_log!("Effective config: {:?}", config);

    let stats_manager = get_stats_manager(&config.stats_file);
    let score = stats_manager.get_config().unwrap_or_else(|err| {
        log!("Ignoring unreadable stats file {}: {}", config.stats_file, err);
        Default::default()
    });

    let mut session = GameSession::new(config.session_settings(), score)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    runner::run(&mut session, &stats_manager, stdin.lock(), &mut stdout)?;

    log!("Bye ({})", session.score_text());
    Ok(())
}
