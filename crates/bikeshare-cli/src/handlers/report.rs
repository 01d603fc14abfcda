//! Loop shared by the paginated report sessions.

use std::io;

use crate::console::Console;
use bikeshare_engine::{PageCommand, PaginationState};

pub(super) const PAGE_PROMPT: &str = "(p)revious, (n)ext, m(enu)? ";

/// Print `render(page)` and read a page command until the user asks for the
/// menu or input ends.
pub(super) fn paginate<C, F>(console: &mut C, mut render: F) -> io::Result<()>
where
    C: Console,
    F: FnMut(&PaginationState) -> String,
{
    let mut page = PaginationState::new();
    loop {
        console.print(&render(&page))?;
        let Some(line) = console.read_line(PAGE_PROMPT)? else {
            return Ok(());
        };
        if !page.apply(PageCommand::parse(&line)) {
            return Ok(());
        }
    }
}
