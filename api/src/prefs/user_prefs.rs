use super::wallet_preference::WalletPreference;
use super::PrefsError;
use dioxus_logger::tracing::warn;
use dioxus_logger::tracing::Level;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;

/// How long the simulated submission waits before "completing".
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Represents all user prefs. Read once at startup.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    wallet: WalletPreference,
    submit_delay: Duration,
    log_level: String,
}

impl UserPrefs {
    pub fn new(wallet: WalletPreference, submit_delay: Duration) -> Self {
        Self {
            wallet,
            submit_delay,
            log_level: Level::INFO.to_string(),
        }
    }

    /// Reads every preference from the environment. Invalid values are
    /// logged and replaced by their defaults.
    ///
    /// # Environment Variables
    /// - `WALLET_MODE`, `DEMO_WALLET_ACCOUNT`: see [`WalletPreference::from_env`].
    /// - `SUBMIT_DELAY_MS`: simulated submit latency in milliseconds.
    /// - `LOG_LEVEL`: one of trace, debug, info, warn, error.
    pub fn from_env() -> Self {
        let wallet = WalletPreference::from_env().unwrap_or_else(|e| {
            warn!("{e}; using demo wallet");
            WalletPreference::default()
        });

        let submit_delay = parse_submit_delay(std::env::var("SUBMIT_DELAY_MS").ok().as_deref())
            .unwrap_or_else(|e| {
                warn!("{e}; using {}ms", DEFAULT_SUBMIT_DELAY.as_millis());
                DEFAULT_SUBMIT_DELAY
            });

        let log_level = parse_log_level(std::env::var("LOG_LEVEL").ok().as_deref())
            .unwrap_or_else(|e| {
                warn!("{e}; using {}", Level::INFO);
                Level::INFO
            });

        Self {
            wallet,
            submit_delay,
            log_level: log_level.to_string(),
        }
    }

    /// Only `LOG_LEVEL`, for launchers that init logging before anything
    /// else is read. Falls back silently; [`UserPrefs::from_env`] warns later.
    pub fn log_level_from_env() -> Level {
        parse_log_level(std::env::var("LOG_LEVEL").ok().as_deref()).unwrap_or(Level::INFO)
    }

    pub fn wallet(&self) -> &WalletPreference {
        &self.wallet
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }

    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_submit_delay(raw: Option<&str>) -> Result<Duration, PrefsError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_SUBMIT_DELAY),
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|source| PrefsError::InvalidNumber {
                var: "SUBMIT_DELAY_MS",
                value: value.to_string(),
                source,
            }),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<Level, PrefsError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Level::INFO),
        Some(value) => Level::from_str(value).map_err(|_| PrefsError::Unrecognized {
            var: "LOG_LEVEL",
            value: value.to_string(),
        }),
    }
}
