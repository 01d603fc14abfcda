/// Rows shown per page in the report sessions.
pub const PAGE_SIZE: usize = 5;

/// Command parsed from one line of report-session input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    Next,
    Previous,
    Menu,
    Ignore,
}

impl PageCommand {
    /// Only the first character matters, case-insensitively.
    pub fn parse(line: &str) -> Self {
        match line.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('n') => PageCommand::Next,
            Some('p') => PageCommand::Previous,
            Some('m') => PageCommand::Menu,
            _ => PageCommand::Ignore,
        }
    }
}

/// Row offset into a report projection.
///
/// Clamped at zero going backwards; going forward is unbounded and a page
/// past the end is simply empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationState {
    offset: usize,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next(&mut self) {
        self.offset = self.offset.saturating_add(PAGE_SIZE);
    }

    pub fn previous(&mut self) {
        self.offset = self.offset.saturating_sub(PAGE_SIZE);
    }

    /// Apply a command; returns `false` when the session should end.
    pub fn apply(&mut self, command: PageCommand) -> bool {
        match command {
            PageCommand::Next => self.next(),
            PageCommand::Previous => self.previous(),
            PageCommand::Menu => return false,
            PageCommand::Ignore => {}
        }
        tracing::trace!(offset = self.offset, ?command, "pagination");
        true
    }

    /// The visible slice of `rows` at the current offset.
    pub fn page<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.offset.min(rows.len());
        let end = self.offset.saturating_add(PAGE_SIZE).min(rows.len());
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uses_first_char_case_insensitive() {
        assert_eq!(PageCommand::parse("n"), PageCommand::Next);
        assert_eq!(PageCommand::parse("Next please"), PageCommand::Next);
        assert_eq!(PageCommand::parse("P"), PageCommand::Previous);
        assert_eq!(PageCommand::parse("menu"), PageCommand::Menu);
        assert_eq!(PageCommand::parse("x"), PageCommand::Ignore);
        assert_eq!(PageCommand::parse(""), PageCommand::Ignore);
        assert_eq!(PageCommand::parse(" m"), PageCommand::Ignore);
        assert_eq!(PageCommand::parse(" n"), PageCommand::Ignore);
    }

    #[test]
    fn test_previous_at_zero_stays_at_zero() {
        let mut state = PaginationState::new();
        state.previous();
        assert_eq!(state.offset(), 0);
        state.previous();
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_next_then_previous_round_trips() {
        for start_pages in 1..6 {
            let mut state = PaginationState::new();
            for _ in 0..start_pages {
                state.next();
            }
            let before = state.offset();
            state.next();
            state.previous();
            assert_eq!(state.offset(), before);
        }
    }

    #[test]
    fn test_next_next_previous_over_twelve_rows() {
        let rows: Vec<usize> = (0..12).collect();
        let mut state = PaginationState::new();
        assert!(state.apply(PageCommand::Next));
        assert!(state.apply(PageCommand::Next));
        assert!(state.apply(PageCommand::Previous));
        assert_eq!(state.offset(), 5);
        assert_eq!(state.page(&rows), &[5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let rows: Vec<usize> = (0..7).collect();
        let mut state = PaginationState::new();
        state.next();
        assert_eq!(state.page(&rows), &[5, 6]);
        state.next();
        assert!(state.page(&rows).is_empty());
    }

    #[test]
    fn test_ignore_and_menu() {
        let mut state = PaginationState::new();
        assert!(state.apply(PageCommand::Ignore));
        assert_eq!(state.offset(), 0);
        assert!(!state.apply(PageCommand::Menu));
    }
}
