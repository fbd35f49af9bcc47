pub mod commands;
pub mod config;
pub mod error;
pub mod platform;
pub mod status;
pub mod torn;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
