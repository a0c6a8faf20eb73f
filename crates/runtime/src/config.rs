use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "sweeper";
pub const PROGRAM_LOG_LEVEL: &str = "SWEEPER_LOG_LEVEL";
pub const BASE_DIR_ENV: &str = "SWEEPER_BASE_DIR";

/// Retention window used when no `--days` is given.
pub const DEFAULT_THRESHOLD_DAYS: u32 = 3;

pub const SOURCE_DIR_NAME: &str = "backupsFrom";
pub const DESTINATION_DIR_NAME: &str = "backupsTo";
pub const FROM_LOG_FILE_NAME: &str = "backupsFrom.log";
pub const TO_LOG_FILE_NAME: &str = "backupsTo.log";

/// Printed once both inventory logs are on disk.
pub const SUCCESS_MESSAGE: &str = "Automação de backup concluída com sucesso.";

fn home_or_cwd() -> PathBuf {
    #[cfg(unix)]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
    #[cfg(not(unix))]
    {
        dirs::home_dir()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

/// Directory that holds the source/destination directories and both logs.
///
/// `SWEEPER_BASE_DIR` wins when set and non-empty, otherwise the user's home.
pub fn default_base_dir() -> PathBuf {
    match std::env::var_os(BASE_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home_or_cwd(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
