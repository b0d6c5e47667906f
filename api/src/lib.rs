//! This crate contains the domain types shared by every dashboard front end.

pub mod category;
pub mod feed;
pub mod prefs;
pub mod report;
pub mod submission;
pub mod time_ago;
pub mod wallet;

pub type ApiError = anyhow::Error;
