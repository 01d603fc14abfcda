use std::fmt;

use crate::menu::MenuCommand;

pub struct MainMenuView;

impl fmt::Display for MainMenuView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nMain Menu\n---------")?;
        for (i, command) in MenuCommand::ALL.iter().enumerate() {
            writeln!(f, "{}) {}", i + 1, command.label())?;
        }
        Ok(())
    }
}

/// `1) All` followed by each city.
pub struct CityPromptView<'a> {
    cities: &'a [String],
}

impl<'a> CityPromptView<'a> {
    pub fn new(cities: &'a [String]) -> Self {
        Self { cities }
    }
}

impl fmt::Display for CityPromptView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nWhich city?")?;
        writeln!(f, "1) All")?;
        for (i, city) in self.cities.iter().enumerate() {
            writeln!(f, "{}) {}", i + 2, city)?;
        }
        Ok(())
    }
}
