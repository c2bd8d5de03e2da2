//! 파일 로깅
//!
//! 터미널은 UI가 점유하므로 로그는 파일로만 남깁니다.

use crate::config::LoggingConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_DIR_ENV: &str = "SGADMIN_LOG_DIR";
const LOG_PREFIX: &str = "sgadmin.log";
const KEEP_DAYS: u64 = 7;

/// 로깅 초기화. 반환된 guard는 프로세스 종료까지 유지해야 함
///
/// 디스크 로깅이 꺼져 있거나 초기화에 실패하면 None (로그 없음)
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    if !config.to_disk {
        return None;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,sgadmin={}", config.level.as_directive()))
    });

    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!(
            "sgadmin: failed to create log directory {}: {}",
            dir.display(),
            e
        );
        return None;
    }
    cleanup_old_logs(&dir);

    let appender = tracing_appender::rolling::daily(&dir, LOG_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    tracing::info!(dir = %dir.display(), "logging initialized");
    Some(guard)
}

fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    if let Some(state) = dirs::state_dir() {
        return state.join("sgadmin").join("logs");
    }
    if let Some(home) = dirs::home_dir() {
        return home
            .join(".local")
            .join("state")
            .join("sgadmin")
            .join("logs");
    }
    std::env::temp_dir().join("sgadmin").join("logs")
}

/// 보관 기간이 지난 로그 파일 정리
fn cleanup_old_logs(dir: &Path) {
    let Some(cutoff) =
        SystemTime::now().checked_sub(Duration::from_secs(KEEP_DAYS * 24 * 60 * 60))
    else {
        return;
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        if !entry.file_name().to_string_lossy().starts_with(LOG_PREFIX) {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        if metadata.modified().is_ok_and(|modified| modified < cutoff) {
            let _ = fs::remove_file(entry.path());
        }
    }
}
