/// Linearly decaying weights `d, d-1, ..., 1` normalized to sum to 1.
///
/// A zero duration yields no weights.
pub fn linear_decay_weights(duration: usize) -> Vec<f64> {
    if duration == 0 {
        return Vec::new();
    }
    let total = (duration * (duration + 1)) as f64 / 2.0;
    (0..duration)
        .map(|offset| (duration - offset) as f64 / total)
        .collect()
}

/// Spreads `total_cost` over `duration` months starting at `start_month`.
///
/// The returned vector covers months `0..=horizon`. Months outside the window are
/// zero and any part of the window past the horizon is dropped.
pub fn amortization_schedule(
    total_cost: f64,
    start_month: usize,
    duration: usize,
    horizon: usize,
) -> Vec<f64> {
    let mut schedule = vec![0.0; horizon + 1];
    for (offset, weight) in linear_decay_weights(duration).into_iter().enumerate() {
        if let Some(slot) = schedule.get_mut(start_month + offset) {
            *slot = total_cost * weight;
        }
    }
    schedule
}
