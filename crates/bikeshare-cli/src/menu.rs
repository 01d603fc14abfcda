/// Outer menu entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    About,
    TravelTimes,
    Stations,
    TripDuration,
    UserInfo,
    Quit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::About,
        MenuCommand::TravelTimes,
        MenuCommand::Stations,
        MenuCommand::TripDuration,
        MenuCommand::UserInfo,
        MenuCommand::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::About => "About",
            MenuCommand::TravelTimes => "Popular Travel Times",
            MenuCommand::Stations => "Popular Stations",
            MenuCommand::TripDuration => "Trip Duration",
            MenuCommand::UserInfo => "User Info",
            MenuCommand::Quit => "Quit",
        }
    }

    /// Parse a 1-based menu choice.
    ///
    /// Numbers past the end select the last entry (Quit); zero, negative and
    /// non-numeric input select nothing.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let choice = match input.parse::<usize>() {
            Ok(choice) => choice,
            // Too many digits for usize is still a number past the end.
            Err(_) if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) => usize::MAX,
            Err(_) => return None,
        };
        match choice {
            0 => None,
            n => Some(Self::ALL[n.min(Self::ALL.len()) - 1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::About));
        assert_eq!(MenuCommand::parse(" 4 "), Some(MenuCommand::TripDuration));
        assert_eq!(MenuCommand::parse("6"), Some(MenuCommand::Quit));
    }

    #[test]
    fn test_out_of_range_selects_quit() {
        assert_eq!(MenuCommand::parse("42"), Some(MenuCommand::Quit));
        assert_eq!(
            MenuCommand::parse("99999999999999999999999"),
            Some(MenuCommand::Quit)
        );
    }

    #[test]
    fn test_invalid_input_selects_nothing() {
        assert_eq!(MenuCommand::parse("0"), None);
        assert_eq!(MenuCommand::parse("-1"), None);
        assert_eq!(MenuCommand::parse("stations"), None);
        assert_eq!(MenuCommand::parse(""), None);
    }

    #[test]
    fn test_labels_in_display_order() {
        let labels: Vec<&str> = MenuCommand::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "About",
                "Popular Travel Times",
                "Popular Stations",
                "Trip Duration",
                "User Info",
                "Quit"
            ]
        );
    }
}
