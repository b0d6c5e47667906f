//! Shared components. Each one is a thin view; the state they show is owned
//! by a screen or by the app shell.
pub mod action_link;
pub mod category_tabs;
pub mod empty_state;
pub mod footer;
pub mod hero;
pub mod pico;
pub mod report_form;
pub mod stats_panel;
pub mod summary_card;
pub mod wallet_connect;
