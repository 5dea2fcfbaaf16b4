use crate::domain::cash_flow::{BreakevenResult, CashFlowSeries};

/// Finds the first month whose cumulative cash flow is non-negative.
///
/// With `discounted` set the cumulative present value is scanned, unless the
/// series was projected without a discount rate, in which case the plain
/// cumulative cash flow is used.
pub fn find_breakeven(series: &CashFlowSeries, discounted: bool) -> BreakevenResult {
    let discounted = discounted && series.is_discounted();
    let month = series
        .records()
        .iter()
        .find(|record| record.cumulative(discounted) >= 0.0)
        .map(|record| record.month);
    BreakevenResult { month }
}
