mod config;

pub use config::{Config, get_config_manager, get_stats_manager};
