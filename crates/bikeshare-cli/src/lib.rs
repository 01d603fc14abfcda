mod args;
mod commands;
pub mod console;
pub mod handlers;
pub mod logging;
pub mod menu;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::{menu_loop, run};
