//! The simulated wallet behind the connect widget.
//!
//! There is no chain access here. Connecting resolves an account from the
//! configured [`WalletPreference`] and nothing else.

use crate::prefs::wallet_preference::WalletPreference;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("wallet connections are disabled")]
    Unavailable,
    #[error("wallet returned an empty account")]
    EmptyAccount,
}

/// Resolves the account a connect action should expose.
pub fn connect(pref: &WalletPreference) -> Result<String, WalletError> {
    match pref {
        WalletPreference::Disabled => Err(WalletError::Unavailable),
        WalletPreference::Demo { account } => {
            let account = account.trim();
            if account.is_empty() {
                Err(WalletError::EmptyAccount)
            } else {
                Ok(account.to_string())
            }
        }
    }
}

/// Shortens an account for display: the first 6 and last 4 characters
/// joined by `...`. Accounts of 10 characters or fewer are returned whole.
pub fn truncate_address(address: &str) -> String {
    const HEAD: usize = 6;
    const TAIL: usize = 4;

    let count = address.chars().count();
    if count <= HEAD + TAIL {
        return address.to_string();
    }
    let head: String = address.chars().take(HEAD).collect();
    let tail: String = address.chars().skip(count - TAIL).collect();
    format!("{head}...{tail}")
}
