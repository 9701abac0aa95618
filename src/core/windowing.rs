/// Number of most recent samples a trend chart shows.
pub const DEFAULT_HISTORY_WINDOW: usize = 180;

/// Returns the last `max_len` samples, or the whole series when it is shorter.
#[must_use]
pub fn trailing_window(series: &[f64], max_len: usize) -> &[f64] {
    let start = series.len().saturating_sub(max_len);
    &series[start..]
}
