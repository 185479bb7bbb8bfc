//! Central place for all default values.
//! Update these and the whole app picks them up.

use std::time::Duration;

pub struct Defaults;

impl Defaults {
    /* Quote provider */
    pub const QUOTES_URL: &'static str = "https://type.fit/api/quotes";
    pub const FETCH_TIMEOUT_SECS: u64 = 15;

    /* Quote collection */
    pub const MAX_QUOTE_LEN: usize = 120; // exclusive, in UTF-16 units
    pub const MAX_QUOTES: usize = 10;
    pub const LOADING_QUOTE: &'static str = "Loading inspirational quote...";

    /* Reflection store */
    pub const REFLECTION_KEY: &'static str = "reflection";
    pub const STORE_FILE: &'static str = "store.json";
    pub const LOG_FILE: &'static str = "daily-mind-boost.log";

    /* Theme unlock */
    pub const UNLOCK_DELAY_MS: u64 = 2000;

    /* Home screen */
    pub const USER_NAME: &'static str = "Sarah";

    /* Event loop */
    pub const TICK: Duration = Duration::from_millis(250);
}
