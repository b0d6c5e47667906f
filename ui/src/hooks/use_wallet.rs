use crate::wallet_context::WalletContext;
use dioxus::prelude::*;

/// Reads the wallet context set up by the app shell.
pub fn use_wallet() -> WalletContext {
    use_context::<WalletContext>()
}
