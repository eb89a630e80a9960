use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::game::{BotType, ScoreRecord, SessionSettings, Side};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
pub const DEFAULT_STATS_FILE: &str = "tic_tac_toe_stats.yaml";

fn exe_relative(file_name: &str) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    PathBuf::from(file_name)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(exe_relative(CONFIG_FILE_NAME)),
    }
}

pub fn get_stats_manager(
    stats_file: &str,
) -> ConfigManager<FileContentConfigProvider, ScoreRecord, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(stats_file)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub human_mark: Side,
    pub vs_ai: bool,
    #[serde(default)]
    pub bot: BotType,
    pub stats_file: String,
}

impl Config {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            human_side: self.human_mark,
            vs_ai: self.vs_ai,
            bot_type: self.bot,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.stats_file.trim().is_empty() {
            return Err("stats_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_mark: Side::X,
            vs_ai: true,
            bot: BotType::Minimax,
            stats_file: DEFAULT_STATS_FILE.to_string(),
        }
    }
}
