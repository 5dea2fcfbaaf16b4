use tracing::debug;

use crate::domain::cash_flow::{CashFlowRecord, CashFlowSeries};
use crate::domain::parameters::{InvalidParameterError, ParameterSet};
use crate::services::amortization::amortization_schedule;

/// Training starts the month after hiring; OJT follows the training window.
pub const TRAINING_START_MONTH: usize = 1;

/// Projects the monthly cash flow of one hire over months `0..=horizon_months`.
///
/// The parameters are validated first; nothing is computed for an invalid set.
pub fn project(params: &ParameterSet) -> Result<CashFlowSeries, InvalidParameterError> {
    params.validate()?;

    let horizon = params.horizon_months;
    let training = amortization_schedule(
        params.training_cost,
        TRAINING_START_MONTH,
        params.training_months,
        horizon,
    );
    let ojt = amortization_schedule(
        params.ojt_cost,
        TRAINING_START_MONTH + params.training_months,
        params.ojt_months,
        horizon,
    );
    let fixed_cost = params.fixed_monthly_cost();
    let discounted = params.is_discounted();
    let monthly_rate = params.monthly_discount_rate();

    let mut records = Vec::with_capacity(horizon + 1);
    let mut cumulative_cash_flow = 0.0;
    let mut cumulative_pv = 0.0;
    for month in 0..=horizon {
        let hiring_cost = if month == 0 { params.hiring_cost } else { 0.0 };
        let cost = fixed_cost + training[month] + ojt[month] + hiring_cost;

        let production_factor = params
            .ramp
            .production_factor(month, params.assignment_start_month);
        let revenue = params.baseline_monthly_billing * params.utilization_rate * production_factor;

        let net_cash_flow = revenue - cost;
        cumulative_cash_flow += net_cash_flow;

        let (discount_factor, pv_cash_flow, cumulative_pv_value) = if discounted {
            let factor = (1.0 + monthly_rate).powf(month as f64);
            let pv = net_cash_flow / factor;
            cumulative_pv += pv;
            (Some(factor), Some(pv), Some(cumulative_pv))
        } else {
            (None, None, None)
        };

        records.push(CashFlowRecord {
            month,
            production_factor,
            revenue,
            fixed_cost,
            hiring_cost,
            training_cost: training[month],
            ojt_cost: ojt[month],
            cost,
            net_cash_flow,
            cumulative_cash_flow,
            discount_factor,
            pv_cash_flow,
            cumulative_pv: cumulative_pv_value,
        });
    }

    debug!(
        horizon,
        discounted,
        final_cumulative = cumulative_cash_flow,
        "projected hire cash flow"
    );
    Ok(CashFlowSeries::new(records, discounted))
}
