use std::io;

use crate::console::Console;
use crate::presentation::views::CityPromptView;
use bikeshare_engine::{CitySelection, Dataset};

const PROMPT: &str = ">";

/// Ask for `All` or one city until the answer is valid.
///
/// Returns `None` at end of input.
pub fn prompt<C: Console>(console: &mut C, dataset: &Dataset) -> io::Result<Option<CitySelection>> {
    loop {
        console.print(&CityPromptView::new(dataset.city_names()).to_string())?;
        let Some(line) = console.read_line(PROMPT)? else {
            return Ok(None);
        };

        let selection = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|choice| CitySelection::from_choice(choice, dataset));
        match selection {
            Some(selection) => return Ok(Some(selection)),
            None => tracing::debug!(input = %line, "invalid city choice"),
        }
    }
}
