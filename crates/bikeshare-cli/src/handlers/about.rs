use crate::console::Console;
use crate::presentation::presenters::build_about;
use crate::presentation::views::AboutView;
use anyhow::Result;
use bikeshare_engine::Dataset;

pub fn handle<C: Console>(dataset: &Dataset, console: &mut C) -> Result<()> {
    let vm = build_about(dataset);
    let color = console.supports_color();
    console.print(&AboutView::new(&vm, color).to_string())?;
    Ok(())
}
