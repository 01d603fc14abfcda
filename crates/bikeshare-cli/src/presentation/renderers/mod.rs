pub mod tui;

pub use tui::{CrosstermKeys, Key, KeySource, TerminalSession, draw_placed};
