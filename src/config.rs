use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::defaults::Defaults;

/// Resolved runtime settings: CLI/env overrides layered over `Defaults`.
#[derive(Debug, Clone)]
pub struct Config {
    pub quotes_url: String,
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    pub user_name: String,
    pub unlock_delay: Duration,
    pub fetch_timeout: Duration,
    pub offline: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let data_dir = match cli.data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let log_file = cli
            .log_file
            .unwrap_or_else(|| data_dir.join(Defaults::LOG_FILE));

        Ok(Self {
            quotes_url: cli.quotes_url,
            data_dir,
            log_file,
            user_name: cli.name,
            unlock_delay: Duration::from_millis(cli.unlock_delay_ms),
            fetch_timeout: Duration::from_secs(cli.fetch_timeout_secs),
            offline: cli.offline,
        })
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(Defaults::STORE_FILE)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "dailymindboost", "daily-mind-boost")
        .ok_or_else(|| anyhow!("Failed to get project directories"))?;
    Ok(dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["daily-mind-boost", "--data-dir", "/tmp/dmb"]);
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.quotes_url, Defaults::QUOTES_URL);
        assert_eq!(config.user_name, Defaults::USER_NAME);
        assert_eq!(config.unlock_delay, Duration::from_secs(2));
        assert_eq!(config.store_path(), PathBuf::from("/tmp/dmb/store.json"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/dmb/daily-mind-boost.log"));
        assert!(!config.offline);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "daily-mind-boost",
            "--data-dir",
            "/tmp/dmb",
            "--name",
            "Ada",
            "--unlock-delay-ms",
            "50",
            "--log-file",
            "/tmp/other.log",
            "--offline",
        ]);
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.user_name, "Ada");
        assert_eq!(config.unlock_delay, Duration::from_millis(50));
        assert_eq!(config.log_file, PathBuf::from("/tmp/other.log"));
        assert!(config.offline);
    }
}
