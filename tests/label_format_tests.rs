use chrono::NaiveDate;
use hawk_chart::core::{format_sample_value, format_tick_label, tooltip_text};

#[test]
fn tick_labels_round_to_one_decimal() {
    assert_eq!(format_tick_label(640.0), "640.0");
    assert_eq!(format_tick_label(12.345), "12.3");
    assert_eq!(format_tick_label(-0.26), "-0.3");
    assert_eq!(format_tick_label(0.0), "0.0");
}

#[test]
fn sample_values_keep_their_precision() {
    assert_eq!(format_sample_value(640.0), "640.0");
    assert_eq!(format_sample_value(652.5), "652.5");
    assert_eq!(format_sample_value(18.25), "18.25");
    assert_eq!(format_sample_value(0.0), "0.0");
}

#[test]
fn tooltip_text_appends_iso_date() {
    let date = NaiveDate::from_ymd_opt(2024, 11, 3).expect("valid date");
    assert_eq!(tooltip_text(645.5, Some(date)), "645.5 | 2024-11-03");
    assert_eq!(tooltip_text(645.5, None), "645.5");
}
