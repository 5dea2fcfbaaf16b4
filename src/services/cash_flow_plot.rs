use plotters::prelude::*;
use thiserror::Error;

use crate::domain::cash_flow::{BreakevenResult, CashFlowSeries};

#[derive(Error, Debug)]
pub enum CashFlowPlotError {
    #[error("cash flow series is empty")]
    EmptySeries,
    #[error("failed to render cash flow plot: {0}")]
    Plot(String),
}

/// Vertical bounds of the chart: every cumulative value plus the zero line.
pub fn value_bounds(series: &CashFlowSeries) -> (f64, f64) {
    let (min, max) = series
        .records()
        .iter()
        .flat_map(|record| std::iter::once(record.cumulative_cash_flow).chain(record.cumulative_pv))
        .fold((0.0_f64, 0.0_f64), |(min, max), value| (min.min(value), max.max(value)));
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        let padding = (max - min) * 0.05;
        (min - padding, max + padding)
    }
}

/// Draws cumulative cash flow (and cumulative present value when discounted) with
/// the breakeven month marked.
pub fn write_cash_flow_plot_png(
    output_path: &str,
    series: &CashFlowSeries,
    breakeven: BreakevenResult,
) -> Result<(), CashFlowPlotError> {
    if series.is_empty() {
        return Err(CashFlowPlotError::EmptySeries);
    }

    let (y_min, y_max) = value_bounds(series);
    let x_max = series.horizon_months().max(1) as f64;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Payback Period Simulation", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(100)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("Cumulative cash flow")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (x_max, 0.0)],
            BLACK.stroke_width(1),
        )))
        .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            series
                .records()
                .iter()
                .map(|record| (record.month as f64, record.cumulative_cash_flow)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?
        .label("Cumulative cash flow")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    if series.is_discounted() {
        let pv_color = RGBColor(230, 126, 34);
        chart
            .draw_series(LineSeries::new(
                series.records().iter().filter_map(|record| {
                    record
                        .cumulative_pv
                        .map(|value| (record.month as f64, value))
                }),
                pv_color.stroke_width(2),
            ))
            .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?
            .label("Cumulative present value")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], pv_color));
    }

    if let Some(month) = breakeven.month {
        let month = month as f64;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(month, y_min), (month, y_max)],
                RED.stroke_width(1),
            )))
            .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?
            .label(format!("Payback month {month:.0}"))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()
        .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| CashFlowPlotError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::projection::project;
    use crate::test_support::default_parameters;

    #[test]
    fn value_bounds_include_zero_and_every_cumulative_value() {
        let series = project(&default_parameters()).unwrap();
        let (min, max) = value_bounds(&series);
        assert!(min < 0.0 && max > 0.0);
        for record in series.records() {
            assert!(record.cumulative_cash_flow >= min && record.cumulative_cash_flow <= max);
            let pv = record.cumulative_pv.unwrap();
            assert!(pv >= min && pv <= max);
        }
    }
}
