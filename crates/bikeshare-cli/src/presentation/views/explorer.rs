use crate::presentation::view_models::{
    ChartViewModel, Emphasis, ExplorerScreenViewModel, FrequencyRowViewModel, PlacedText,
    RankedRowViewModel,
};

/// Columns from the horizontal center to the start of the control rows.
const CONTROLS_HALF_WIDTH: i32 = 28;

fn width(text: &str) -> i32 {
    text.chars().count() as i32
}

/// Bar length for a frequency row: the integer part of its rank.
pub fn bar_len(row: &FrequencyRowViewModel) -> usize {
    row.rank.max(0.0).floor() as usize
}

/// Position every piece of the explorer screen for a `rows` x `cols` area.
pub fn layout(screen: &ExplorerScreenViewModel, rows: u16, cols: u16) -> Vec<PlacedText> {
    let lines = i32::from(rows);
    let cols = i32::from(cols);
    let mut out = Vec::new();

    match &screen.chart {
        ChartViewModel::Empty => {}
        ChartViewModel::Frequency(buckets) => {
            layout_frequency(&mut out, screen.mode_name, buckets, lines, cols)
        }
        ChartViewModel::Ranked(entries) => {
            layout_ranked(&mut out, screen.mode_name, entries, lines, cols)
        }
    }

    layout_annotations(&mut out, screen, lines, cols);
    out
}

fn layout_frequency(
    out: &mut Vec<PlacedText>,
    mode_name: &str,
    buckets: &[FrequencyRowViewModel],
    lines: i32,
    cols: i32,
) {
    let longest_bar = buckets.iter().map(bar_len).max().unwrap_or(0) as i32;
    let s_col = cols / 2 - (longest_bar / 2 + 3);
    let s_line = lines / 2 - buckets.len() as i32 / 2;
    let first_key = buckets.iter().map(|b| b.key).min().unwrap_or(0);

    out.push(
        PlacedText::new(s_line - 1, s_col - width(mode_name) + 3, mode_name)
            .with(Emphasis::Underline),
    );
    out.push(PlacedText::new(s_line - 1, s_col + 4, "Freq").with(Emphasis::Underline));

    for bucket in buckets {
        let row = s_line + (bucket.key - first_key) as i32;
        out.push(PlacedText::new(row, s_col, bucket.label.as_str()));
        out.push(PlacedText::new(row, s_col + 4, "*".repeat(bar_len(bucket))));
    }
}

fn layout_ranked(
    out: &mut Vec<PlacedText>,
    mode_name: &str,
    entries: &[RankedRowViewModel],
    lines: i32,
    cols: i32,
) {
    let s_col = cols / 2 + 12;
    let s_line = lines / 2 - entries.len() as i32 / 2;

    for (i, entry) in entries.iter().enumerate() {
        let row = s_line + i as i32;
        out.push(PlacedText::new(row, s_col - width(&entry.label), entry.label.as_str()));
        out.push(PlacedText::new(row, s_col + 2, entry.count.to_string()));
    }

    out.push(
        PlacedText::new(s_line - 1, s_col - width(mode_name), mode_name).with(Emphasis::Underline),
    );
    out.push(PlacedText::new(s_line - 1, s_col + 2, "Count").with(Emphasis::Underline));
}

/// Title, insight, city toggles and help line.
fn layout_annotations(
    out: &mut Vec<PlacedText>,
    screen: &ExplorerScreenViewModel,
    lines: i32,
    cols: i32,
) {
    out.push(
        PlacedText::new(1, cols / 2 - width(screen.title) / 2, screen.title).with(Emphasis::Bold),
    );

    for (i, line) in screen.insight.split('\n').enumerate() {
        out.push(PlacedText::new(3 + i as i32, cols / 2 - width(line) / 2, line));
    }

    let start_col = cols / 2 - CONTROLS_HALF_WIDTH;
    let city_row = lines - 4;
    out.push(PlacedText::new(city_row, start_col + 2, "Cities:"));

    let mut offset = 0;
    for (i, city) in screen.cities.iter().enumerate() {
        out.push(PlacedText::new(city_row, start_col + 12 + offset, format!("{})", i + 1)));
        offset += 3;
        let emphasis = if city.included {
            Emphasis::Reverse
        } else {
            Emphasis::Normal
        };
        out.push(PlacedText::new(city_row, start_col + 11 + offset, city.name.as_str()).with(emphasis));
        offset += width(&city.name) + 2;
    }

    let help_row = lines - 2;
    out.push(PlacedText::new(help_row, start_col + 4, "Mode:   TAB)"));
    out.push(PlacedText::new(help_row, start_col + 38, "m)Return to Menu"));
    out.push(PlacedText::new(help_row, start_col + 16, screen.mode_name).with(Emphasis::Reverse));
}
