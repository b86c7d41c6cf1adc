#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod create;
pub mod dispatch;
pub mod formats;
pub mod logging;
pub mod prompt;
pub mod todoist;
