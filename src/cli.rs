//! 명령행 인자

use crate::config::{Config, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the media server backend (e.g. http://localhost:6544).
    #[arg(short, long)]
    pub server: Option<String>,
    /// Initial host filter: a host name, or ALL for every host.
    #[arg(long)]
    pub host: Option<String>,
    /// Configuration file (defaults to $SGADMIN_CONFIG_FILE or the user config dir).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Color theme: dark, light or high_contrast.
    #[arg(long)]
    pub theme: Option<String>,
    /// Log level written to the log file (error, warn, info, debug, trace).
    #[arg(long, value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| format!("unknown log level '{}'", value))
}

impl Cli {
    /// 설정 파일 값을 명령행 값으로 덮어쓰기
    pub fn apply(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.server = server.clone();
        }
        if let Some(host) = &self.host {
            config.default_host = host.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}
