use std::time::Duration;

use crate::cli::Settings;
use crate::error::Result;
use crate::format::Locale;
use crate::screen::{DEFAULT_EXIT_DELAY, ScreenOptions};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long the terminal waits for detached requests before exiting.
pub const SETTLE_GRACE: Duration = Duration::from_secs(5);

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub exit_delay: Duration,
    pub locale: Locale,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            exit_delay: DEFAULT_EXIT_DELAY,
            locale: Locale::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Validate and convert the raw command line settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            api_url: settings.api_url.trim().to_string(),
            exit_delay: Duration::from_millis(settings.exit_delay_ms),
            locale: settings.locale.parse()?,
            timeout: Duration::from_secs(settings.timeout_secs),
        })
    }

    pub fn screen_options(&self) -> ScreenOptions {
        ScreenOptions {
            exit_delay: self.exit_delay,
            locale: self.locale,
        }
    }
}
