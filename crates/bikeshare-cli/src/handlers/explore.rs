//! Interactive explorer sessions (travel times, stations).
//!
//! The session state is just the city filter and the mode cycle. Every
//! iteration re-aggregates from the dataset and redraws for the size the
//! terminal reports at that moment.

use std::io;
use std::marker::PhantomData;

use anyhow::Result;
use bikeshare_engine::{CityFilter, Dataset, ModeCycle, ViewMode};
use is_terminal::IsTerminal;
use ratatui::{Terminal, backend::Backend};

use crate::console::Console;
use crate::presentation::presenters::{Explorer, build_screen_view_model};
use crate::presentation::renderers::{CrosstermKeys, Key, KeySource, TerminalSession, draw_placed};
use crate::presentation::view_models::ExplorerScreenViewModel;
use crate::presentation::views::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Exit,
}

pub struct ExplorerSession<E: Explorer> {
    filter: CityFilter,
    modes: ModeCycle<E::Mode>,
    last_key: Option<Key>,
    _explorer: PhantomData<E>,
}

impl<E: Explorer> ExplorerSession<E> {
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            filter: CityFilter::for_dataset(dataset),
            modes: ModeCycle::new(),
            last_key: None,
            _explorer: PhantomData,
        }
    }

    pub fn filter(&self) -> &CityFilter {
        &self.filter
    }

    pub fn mode(&self) -> E::Mode {
        self.modes.current()
    }

    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    pub fn handle_key(&mut self, key: Key) -> SessionControl {
        self.last_key = Some(key);
        match key {
            Key::Char('m') | Key::Char('M') | Key::Interrupt => return SessionControl::Exit,
            Key::Char(c) => {
                if let Some(position) = c.to_digit(10).filter(|&n| n >= 1) {
                    let position = position as usize - 1;
                    if self.filter.toggle(position) {
                        tracing::debug!(
                            position,
                            included = ?self.filter.included_cities(),
                            "city toggled"
                        );
                    }
                }
            }
            Key::Tab => {
                self.modes.advance();
                tracing::debug!(mode = self.modes.current().name(), "mode changed");
            }
            Key::Other => {}
        }
        SessionControl::Continue
    }

    pub fn screen(&self, dataset: &Dataset) -> ExplorerScreenViewModel {
        build_screen_view_model::<E>(dataset, &self.filter, self.modes.current())
    }
}

/// Draw, read one key, repeat until the session exits.
pub fn run_session<E, B, K>(terminal: &mut Terminal<B>, keys: &mut K, dataset: &Dataset) -> Result<()>
where
    E: Explorer,
    B: Backend,
    K: KeySource,
{
    let mut session = ExplorerSession::<E>::new(dataset);
    loop {
        let screen = session.screen(dataset);
        terminal.draw(|f| {
            let area = f.area();
            draw_placed(f, &layout(&screen, area.height, area.width));
        })?;

        if session.handle_key(keys.read_key()?) == SessionControl::Exit {
            return Ok(());
        }
    }
}

pub fn handle<E: Explorer, C: Console>(dataset: &Dataset, console: &mut C) -> Result<()> {
    if !io::stdout().is_terminal() {
        console.print(&format!("{} needs an interactive terminal.", E::TITLE))?;
        return Ok(());
    }

    tracing::info!(view = E::TITLE, "explorer session started");
    let result = {
        let mut session = TerminalSession::enter()?;
        run_session::<E, _, _>(session.terminal_mut(), &mut CrosstermKeys, dataset)
    };
    tracing::info!(view = E::TITLE, "explorer session ended");
    result
}
