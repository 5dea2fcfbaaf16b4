/// Percentile helpers for already-sorted slices.
///
/// - Empty input => `None`.
/// - `percentile <= 0` => first element.
/// - `percentile >= 100` => last element.
/// - Otherwise the position within `[0, len-1]` is interpolated linearly between
///   its two neighbouring elements.

/// Returns the percentile value from a slice that is already sorted in
/// ascending order.
pub fn value_sorted(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    let first = *sorted_values.first()?;
    let last = *sorted_values.last()?;
    if percentile <= 0.0 {
        return Some(first);
    }
    if percentile >= 100.0 {
        return Some(last);
    }

    let position = (percentile / 100.0) * (sorted_values.len() as f64 - 1.0);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    let lower_value = sorted_values[lower];
    let upper_value = sorted_values[upper];
    Some(lower_value + (upper_value - lower_value) * fraction)
}

/// Sorts whole-month values ascending as `f64`, ready for [`value_sorted`].
pub fn sorted_months(months: &[usize]) -> Vec<f64> {
    let mut values: Vec<f64> = months.iter().map(|month| *month as f64).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}
