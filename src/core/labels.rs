use chrono::NaiveDate;

/// Y-axis label text: one fixed decimal.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    format!("{value:.1}")
}

/// Sample value as shown in the tooltip.
///
/// Whole numbers keep a trailing `.0` so weights read as measurements
/// (`640.0`, not `640`); other values use the shortest exact representation.
#[must_use]
pub fn format_sample_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Tooltip text for one sample, with its ISO date appended when known.
#[must_use]
pub fn tooltip_text(value: f64, date: Option<NaiveDate>) -> String {
    let value = format_sample_value(value);
    match date {
        Some(date) => format!("{value} | {}", date.format("%Y-%m-%d")),
        None => value,
    }
}
