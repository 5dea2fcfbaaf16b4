use chrono::{Months, NaiveDate};

use crate::domain::cash_flow::CashFlowRecord;
use crate::services::simulation_types::{MonteCarloReport, ProjectionReport};

pub fn format_projection_report(report: &ProjectionReport) -> String {
    let horizon = report.series.horizon_months();
    let basis = if report.discounted {
        "cumulative present value"
    } else {
        "cumulative cash flow"
    };

    let mut lines = Vec::new();
    lines.push("Hire Payback Projection".to_string());
    lines.push(format!("Hire date: {}", report.hire_date.format("%Y-%m-%d")));
    lines.push(format!("Horizon: {horizon} months"));
    lines.push(format!(
        "Initial investment: {}",
        format_amount(report.initial_investment)
    ));
    lines.push(format!("Breakeven basis: {basis}"));
    lines.push(match report.breakeven.month {
        Some(month) => format!(
            "Breakeven: month {month} ({})",
            month_label(report.hire_date, month)
        ),
        None => format!("Breakeven: not reached within {horizon} months"),
    });
    lines.push(String::new());
    lines.push("Month | Date | Revenue | Cost | Net | Cumulative | Cumulative PV".to_string());
    lines.push("------|------|---------|------|-----|------------|--------------".to_string());
    for record in report.series.records() {
        lines.push(format_record_row(record, report.hire_date));
    }

    lines.join("\n")
}

fn format_record_row(record: &CashFlowRecord, hire_date: NaiveDate) -> String {
    let cumulative_pv = match record.cumulative_pv {
        Some(value) => format_amount(value),
        None => "n/a".to_string(),
    };
    format!(
        "{month} | {date} | {revenue} | {cost} | {net} | {cumulative} | {cumulative_pv}",
        month = record.month,
        date = month_label(hire_date, record.month),
        revenue = format_amount(record.revenue),
        cost = format_amount(record.cost),
        net = format_amount(record.net_cash_flow),
        cumulative = format_amount(record.cumulative_cash_flow),
        cumulative_pv = cumulative_pv
    )
}

pub fn format_monte_carlo_report(report: &MonteCarloReport) -> String {
    let summary = &report.summary;
    let horizon = report.parameters.horizon_months;
    let seed = match report.seed {
        Some(seed) => seed.to_string(),
        None => "random".to_string(),
    };
    let baseline = match report.baseline_breakeven.month {
        Some(month) => format!("month {month}"),
        None => "not reached".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Monte Carlo Breakeven Report".to_string());
    lines.push(format!("Trials: {}", summary.trials));
    lines.push(format!("Seed: {seed}"));
    lines.push(format!("Horizon: {horizon} months"));
    lines.push(format!("Baseline breakeven: {baseline}"));
    lines.push(format!(
        "Converged: {} / {}",
        summary.converged_count(),
        summary.trials
    ));
    lines.push(format!("Not converged: {}", summary.non_converged_count));
    lines.push(String::new());
    match (summary.p5, summary.median, summary.p95) {
        (Some(p5), Some(median), Some(p95)) => {
            lines.push("Percentiles:".to_string());
            lines.push("Percentile | Month".to_string());
            lines.push("-----------|------".to_string());
            lines.push(format_percentile_row("P5", p5));
            lines.push(format_percentile_row("P50", median));
            lines.push(format_percentile_row("P95", p95));
        }
        _ => lines.push(format!("No trial reached breakeven within {horizon} months")),
    }

    lines.join("\n")
}

fn format_percentile_row(label: &str, month: f64) -> String {
    format!("{label} | {month:.1}")
}

fn format_amount(value: f64) -> String {
    format!("{value:.0}")
}

/// Calendar month (`YYYY-MM`) of a zero-based month offset from the hire date.
pub fn month_label(hire_date: NaiveDate, month: usize) -> String {
    u32::try_from(month)
        .ok()
        .and_then(|offset| hire_date.checked_add_months(Months::new(offset)))
        .map(|date| date.format("%Y-%m").to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cash_flow::BreakevenResult;
    use crate::services::monte_carlo::run_monte_carlo_with_sampler;
    use crate::services::projection::project;
    use crate::services::simulation_types::MonteCarloSummary;
    use crate::test_support::{FixedSampler, default_parameters};

    fn hire_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn build_projection_report() -> ProjectionReport {
        let parameters = default_parameters();
        ProjectionReport {
            hire_date: hire_date(),
            initial_investment: parameters.initial_investment(),
            discounted: true,
            breakeven: BreakevenResult { month: Some(25) },
            series: project(&parameters).unwrap(),
            parameters,
        }
    }

    fn build_monte_carlo_report() -> MonteCarloReport {
        let parameters = default_parameters();
        let mut sampler = FixedSampler;
        let summary = run_monte_carlo_with_sampler(&parameters, 4, true, &mut sampler).unwrap();
        MonteCarloReport {
            parameters,
            seed: Some(42),
            discounted: true,
            baseline_breakeven: BreakevenResult { month: Some(25) },
            summary,
        }
    }

    #[test]
    fn month_label_counts_calendar_months_from_hire_date() {
        assert_eq!(month_label(hire_date(), 0), "2026-01");
        assert_eq!(month_label(hire_date(), 11), "2026-12");
        assert_eq!(month_label(hire_date(), 25), "2028-02");
    }

    #[test]
    fn format_projection_report_includes_header_and_table() {
        let output = format_projection_report(&build_projection_report());

        assert!(output.contains("Hire Payback Projection"));
        assert!(output.contains("Hire date: 2026-01-15"));
        assert!(output.contains("Horizon: 60 months"));
        assert!(output.contains("Initial investment: 1400000"));
        assert!(output.contains("Breakeven basis: cumulative present value"));
        assert!(output.contains("Breakeven: month 25 (2028-02)"));
        assert!(output.contains("Month | Date | Revenue | Cost | Net | Cumulative | Cumulative PV"));
        assert!(output.contains("0 | 2026-01 | 0 | 1208333 | -1208333 | -1208333 | -1208333"));
    }

    #[test]
    fn format_projection_report_marks_missing_breakeven_and_pv() {
        let mut report = build_projection_report();
        let parameters = crate::domain::parameters::ParameterSet {
            annual_discount_rate: 0.0,
            ..default_parameters()
        };
        report.series = project(&parameters).unwrap();
        report.discounted = false;
        report.breakeven = BreakevenResult { month: None };

        let output = format_projection_report(&report);
        assert!(output.contains("Breakeven: not reached within 60 months"));
        assert!(output.contains("Breakeven basis: cumulative cash flow"));
        assert!(output.contains("| n/a"));
    }

    #[test]
    fn format_monte_carlo_report_includes_percentiles() {
        let output = format_monte_carlo_report(&build_monte_carlo_report());

        assert!(output.contains("Monte Carlo Breakeven Report"));
        assert!(output.contains("Trials: 4"));
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Baseline breakeven: month 25"));
        assert!(output.contains("Converged: 4 / 4"));
        assert!(output.contains("Not converged: 0"));
        assert!(output.contains("Percentile | Month"));
        assert!(output.contains("P5 | 25.0"));
        assert!(output.contains("P50 | 25.0"));
        assert!(output.contains("P95 | 25.0"));
    }

    #[test]
    fn format_monte_carlo_report_handles_empty_distribution() {
        let mut report = build_monte_carlo_report();
        report.seed = None;
        report.baseline_breakeven = BreakevenResult { month: None };
        report.summary = MonteCarloSummary::from_trials(Vec::new(), 4);

        let output = format_monte_carlo_report(&report);
        assert!(output.contains("Seed: random"));
        assert!(output.contains("Baseline breakeven: not reached"));
        assert!(output.contains("Converged: 0 / 4"));
        assert!(output.contains("No trial reached breakeven within 60 months"));
        assert!(!output.contains("Percentile | Month"));
    }
}
