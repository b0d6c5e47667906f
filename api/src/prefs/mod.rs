pub mod user_prefs;
pub mod wallet_preference;

use std::num::ParseIntError;

/// Raised when an environment override cannot be parsed. Callers log it and
/// fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefsError {
    #[error("{var}: invalid value {value:?}: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{var}: unrecognized value {value:?}")]
    Unrecognized { var: &'static str, value: String },
}
