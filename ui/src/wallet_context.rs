//! Defines the reactive wallet state shared with the connect widget.

use api::prefs::wallet_preference::WalletPreference;
use api::wallet;
use api::wallet::truncate_address;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

/// The wallet context provided to the component tree.
///
/// Only [`use_wallet_provider`] writes `account`; every other component
/// reads it and goes through the two callbacks.
#[derive(Clone, Copy)]
pub struct WalletContext {
    /// The connected account, `None` while disconnected.
    pub account: Signal<Option<String>>,
    pub connect: Callback<()>,
    pub disconnect: Callback<()>,
}

impl WalletContext {
    /// The account if one is connected and non-empty.
    pub fn connected_account(&self) -> Option<String> {
        self.account.read().clone().filter(|a| !a.is_empty())
    }
}

/// Creates the wallet signal and actions and provides them as context.
pub fn use_wallet_provider(pref: WalletPreference) -> WalletContext {
    let mut account = use_signal(|| None::<String>);

    let connect = use_callback(move |_: ()| match wallet::connect(&pref) {
        Ok(acct) => {
            info!("wallet connected: {}", truncate_address(&acct));
            account.set(Some(acct));
        }
        Err(e) => {
            warn!("wallet connect failed: {e}");
            account.set(None);
        }
    });

    let disconnect = use_callback(move |_: ()| {
        if let Some(acct) = account.peek().as_deref() {
            info!("wallet disconnected: {}", truncate_address(acct));
        }
        account.set(None);
    });

    use_context_provider(|| WalletContext {
        account,
        connect,
        disconnect,
    })
}
