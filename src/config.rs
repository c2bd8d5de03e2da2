//! 설정 파일 (TOML)
//!
//! 위치: `$SGADMIN_CONFIG_FILE` 또는 `<config_dir>/sgadmin/config.toml`.
//! 파일이 없으면 기본값을 사용하고, 형식이 잘못된 파일은 에러입니다.

use crate::utils::error::{Result, SgAdminError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_ENV: &str = "SGADMIN_CONFIG_FILE";

/// 로그 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub to_disk: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            to_disk: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 백엔드 주소
    pub server: String,
    /// 시작 시 호스트 필터 ("ALL" 또는 호스트 이름)
    pub default_host: String,
    /// 목록에 없어도 선택지로 보여줄 호스트
    pub hosts: Vec<String>,
    /// 테마 이름
    pub theme: String,
    /// HTTP 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
    /// 디렉토리 삭제 전 확인
    pub confirm_remove: bool,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: "http://localhost:6544".to_string(),
            default_host: crate::models::ALL_HOSTS.to_string(),
            hosts: Vec::new(),
            theme: "dark".to_string(),
            request_timeout_secs: 30,
            confirm_remove: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// 설정 파일 경로 결정 (명시 경로 > 환경변수 > 기본 위치)
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(custom) = env::var(CONFIG_FILE_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("sgadmin").join("config.toml"))
    }

    /// 파일에서 로드. 파일이 없으면 기본값
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        match fs::read_to_string(path) {
            Ok(data) => Self::parse(&data)
                .map_err(|e| SgAdminError::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(data: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(temp.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_host, "ALL");
        assert!(config.confirm_remove);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::parse(
            r#"
            server = "http://backend:6544"
            hosts = ["frontend1"]

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.server, "http://backend:6544");
        assert_eq!(config.hosts, vec!["frontend1"]);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.to_disk);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "server = [").unwrap();
        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, SgAdminError::Config(_)));
    }

    #[test]
    fn test_full_file_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
server = "http://mythbox:6544"
default_host = "host1"
hosts = ["host1", "host2"]
theme = "light"
request_timeout_secs = 5
confirm_remove = false

[logging]
level = "debug"
to_disk = false
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.server, "http://mythbox:6544");
        assert_eq!(config.default_host, "host1");
        assert_eq!(config.hosts, vec!["host1", "host2"]);
        assert_eq!(config.theme, "light");
        assert_eq!(config.request_timeout(), std::time::Duration::from_secs(5));
        assert!(!config.confirm_remove);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(!config.logging.to_disk);
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(Config::resolve_path(Some(explicit.as_path())), Some(explicit));
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse("loud"), None);
        assert_eq!(LogLevel::Info.as_directive(), "info");
    }
}
