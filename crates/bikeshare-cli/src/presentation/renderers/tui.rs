//! Full-screen renderer for the explorer views.
//!
//! The renderer owns the terminal, never the data. Each frame is a list of
//! [`PlacedText`] computed for the current terminal size; anything falling
//! outside the frame is clipped here.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::presentation::view_models::{Emphasis, PlacedText};

/// Keys the explorer reacts to. Everything else only triggers a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Tab,
    /// Ctrl-C
    Interrupt,
    /// Unhandled keys and terminal resizes
    Other,
}

pub trait KeySource {
    /// Block until the next key.
    fn read_key(&mut self) -> Result<Key>;
}

/// Reads keys from the real terminal.
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, not release
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let mapped = match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            Key::Interrupt
                        }
                        KeyCode::Char(c) => Key::Char(c),
                        KeyCode::Tab => Key::Tab,
                        _ => Key::Other,
                    };
                    return Ok(mapped);
                }
                Event::Resize(_, _) => return Ok(Key::Other),
                _ => {}
            }
        }
    }
}

/// Raw mode plus alternate screen, restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(mut terminal) => {
                let _ = terminal.hide_cursor();
                Ok(Self { terminal })
            }
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e.into())
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn style_for(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Normal => Style::default(),
        Emphasis::Bold => Style::default().add_modifier(Modifier::BOLD),
        Emphasis::Underline => Style::default().add_modifier(Modifier::UNDERLINED),
        Emphasis::Reverse => Style::default().add_modifier(Modifier::REVERSED),
    }
}

/// Visible part of `item` inside a `width` x `height` area as
/// `(row, col, text)`, or `None` when nothing of it shows.
fn clip(item: &PlacedText, width: u16, height: u16) -> Option<(u16, u16, String)> {
    if item.row < 0 || item.row >= i32::from(height) || item.col >= i32::from(width) {
        return None;
    }

    let skip = if item.col < 0 { item.col.unsigned_abs() as usize } else { 0 };
    let col = item.col.max(0) as u16;
    let room = usize::from(width - col);
    let text: String = item.text.chars().skip(skip).take(room).collect();
    if text.is_empty() {
        return None;
    }
    Some((item.row as u16, col, text))
}

/// Render one frame of placed text.
pub fn draw_placed(f: &mut Frame, items: &[PlacedText]) {
    let area = f.area();
    for item in items {
        let Some((row, col, text)) = clip(item, area.width, area.height) else {
            continue;
        };
        let width = text.chars().count() as u16;
        let rect = Rect::new(area.x + col, area.y + row, width, 1);
        let widget = Paragraph::new(Span::styled(text, style_for(item.emphasis)));
        f.render_widget(widget, rect);
    }
}
