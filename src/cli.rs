use clap::Parser;
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Daily Mind Boost: quotes, a reflection journal and a theme to unlock
#[derive(Parser, Debug)]
#[command(version, about = "Daily Mind Boost")]
pub struct Cli {
    /// Endpoint returning a JSON array of {text, author} records
    #[arg(long, env = "DMB_QUOTES_URL", default_value = Defaults::QUOTES_URL)]
    pub quotes_url: String,

    /// Directory holding the reflection store (default: platform data dir)
    #[arg(long, env = "DMB_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Name shown in the greeting
    #[arg(long, env = "DMB_NAME", default_value = Defaults::USER_NAME)]
    pub name: String,

    /// Simulated ad length before the theme unlocks
    #[arg(long, env = "DMB_UNLOCK_DELAY_MS", default_value_t = Defaults::UNLOCK_DELAY_MS)]
    pub unlock_delay_ms: u64,

    /// Give up on the quote request after this many seconds
    #[arg(long, env = "DMB_FETCH_TIMEOUT_SECS", default_value_t = Defaults::FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_secs: u64,

    /// Log file (default: <data dir>/daily-mind-boost.log)
    #[arg(long, env = "DMB_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Skip the quote request entirely
    #[arg(long, env = "DMB_OFFLINE")]
    pub offline: bool,
}
