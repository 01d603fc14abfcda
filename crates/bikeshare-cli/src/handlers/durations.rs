use crate::console::Console;
use crate::handlers::{city_prompt, report};
use crate::presentation::presenters::{build_durations_report, city_names};
use crate::presentation::views::DurationsReportView;
use anyhow::Result;
use bikeshare_engine::{Dataset, DurationStats, sort_by_duration_desc};

pub fn handle<C: Console>(dataset: &Dataset, console: &mut C) -> Result<()> {
    let Some(selection) = city_prompt::prompt(console, dataset)? else {
        return Ok(());
    };

    let cities = selection.cities(dataset);
    let rows = sort_by_duration_desc(dataset.filter_by_cities(&cities));
    let stats = DurationStats::compute(&rows);
    let names = city_names(dataset, &cities);
    tracing::debug!(rows = rows.len(), ?selection, "durations session");

    let color = console.supports_color();
    report::paginate(console, |page| {
        let vm = build_durations_report(names.clone(), stats, &rows, page);
        DurationsReportView::new(&vm, color).to_string()
    })?;
    Ok(())
}
