use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_wallet::use_wallet;
use api::wallet::truncate_address;
use dioxus::prelude::*;

pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const DISCONNECT_LABEL: &str = "Disconnect";

/// What the widget shows for a given account value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletView {
    Disconnected,
    Connected { short_address: String },
}

impl WalletView {
    /// An absent or empty account counts as disconnected.
    pub fn from_account(account: Option<&str>) -> Self {
        match account {
            Some(acct) if !acct.is_empty() => Self::Connected {
                short_address: truncate_address(acct),
            },
            _ => Self::Disconnected,
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Disconnected => CONNECT_LABEL,
            Self::Connected { .. } => DISCONNECT_LABEL,
        }
    }
}

/// Connect / disconnect control. All state lives in the wallet context.
#[component]
pub fn WalletConnect() -> Element {
    let wallet = use_wallet();
    let view = WalletView::from_account(wallet.connected_account().as_deref());
    let label = view.action_label();

    rsx! {
        div {
            class: "wallet-connect",
            match view {
                WalletView::Connected { short_address } => rsx! {
                    div {
                        class: "wallet-pill",
                        span { class: "status-dot" }
                        code { title: "Connected account", "{short_address}" }
                        button {
                            r#type: "button",
                            class: "wallet-disconnect",
                            onclick: move |_| wallet.disconnect.call(()),
                            "{label}"
                        }
                    }
                },
                WalletView::Disconnected => rsx! {
                    Button {
                        button_type: ButtonType::Primary,
                        on_click: move |_| wallet.connect.call(()),
                        "👛 {label}"
                    }
                },
            }
        }
    }
}
