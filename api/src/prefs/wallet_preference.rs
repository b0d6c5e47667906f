use super::PrefsError;
use serde::Deserialize;
use serde::Serialize;

/// Address the demo wallet reports when `DEMO_WALLET_ACCOUNT` is unset.
pub const DEFAULT_DEMO_ACCOUNT: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

/// How the wallet widget's connect action behaves.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum WalletPreference {
    /// Connecting always fails; the widget stays disconnected.
    Disabled,

    /// Connecting succeeds immediately with a fixed account.
    Demo {
        /// The account identifier handed to the wallet context.
        account: String,
    },
}

impl WalletPreference {
    /// Builds the preference from environment variables.
    ///
    /// # Environment Variables
    /// - `WALLET_MODE`: "demo" (default) or "disabled", case-insensitive.
    /// - `DEMO_WALLET_ACCOUNT`: account used in demo mode.
    pub fn from_env() -> Result<Self, PrefsError> {
        let account = std::env::var("DEMO_WALLET_ACCOUNT").ok();
        Self::from_vars(std::env::var("WALLET_MODE").ok().as_deref(), account)
    }

    pub(crate) fn from_vars(mode: Option<&str>, account: Option<String>) -> Result<Self, PrefsError> {
        match mode.map(str::trim) {
            None | Some("") => Ok(Self::demo(account)),
            Some(m) if m.eq_ignore_ascii_case("demo") => Ok(Self::demo(account)),
            Some(m) if m.eq_ignore_ascii_case("disabled") => Ok(Self::Disabled),
            Some(m) => Err(PrefsError::Unrecognized {
                var: "WALLET_MODE",
                value: m.to_string(),
            }),
        }
    }

    fn demo(account: Option<String>) -> Self {
        Self::Demo {
            account: account.unwrap_or_else(|| DEFAULT_DEMO_ACCOUNT.to_string()),
        }
    }
}

impl Default for WalletPreference {
    fn default() -> Self {
        Self::demo(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_mode_is_demo_with_default_account() {
        let pref = WalletPreference::from_vars(None, None).unwrap();
        assert_eq!(pref, WalletPreference::default());
        assert_eq!(
            pref,
            WalletPreference::Demo {
                account: DEFAULT_DEMO_ACCOUNT.to_string()
            }
        );
    }

    #[test]
    fn mode_is_case_insensitive() {
        assert!(WalletPreference::from_vars(Some("DISABLED"), None)
            .unwrap()
            .is_disabled());
        assert!(WalletPreference::from_vars(Some(" Demo "), None)
            .unwrap()
            .is_demo());
    }

    #[test]
    fn demo_uses_configured_account() {
        let pref = WalletPreference::from_vars(Some("demo"), Some("0xabc".to_string())).unwrap();
        assert_eq!(
            pref,
            WalletPreference::Demo {
                account: "0xabc".to_string()
            }
        );
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let err = WalletPreference::from_vars(Some("metamask"), None).unwrap_err();
        assert!(matches!(err, PrefsError::Unrecognized { var: "WALLET_MODE", .. }));
    }
}
