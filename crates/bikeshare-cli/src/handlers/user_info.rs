use crate::console::Console;
use crate::handlers::{city_prompt, report};
use crate::presentation::presenters::{build_user_info_report, city_names};
use crate::presentation::views::UserInfoReportView;
use anyhow::Result;
use bikeshare_engine::{Dataset, UserStats};

pub fn handle<C: Console>(dataset: &Dataset, console: &mut C) -> Result<()> {
    let Some(selection) = city_prompt::prompt(console, dataset)? else {
        return Ok(());
    };

    let cities = selection.cities(dataset);
    let rows = dataset.filter_by_cities(&cities);
    let stats = UserStats::compute(&rows);
    let names = city_names(dataset, &cities);
    tracing::debug!(rows = rows.len(), ?selection, "user info session");

    let color = console.supports_color();
    report::paginate(console, |page| {
        let vm = build_user_info_report(names.clone(), stats.clone(), &rows, page);
        UserInfoReportView::new(&vm, color).to_string()
    })?;
    Ok(())
}
