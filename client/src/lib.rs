pub mod api;
pub mod args;
pub mod commands;
pub mod config;
pub mod view;

pub use args::Cli;
pub use commands::{run, CommandContext};
pub use config::Settings;
