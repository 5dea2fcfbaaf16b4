use std::collections::BTreeMap;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Counts how many trials broke even in each month.
pub fn breakeven_counts(breakevens: &[usize]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for month in breakevens {
        *counts.entry(*month).or_insert(0usize) += 1;
    }
    counts
}

/// Writes a PNG histogram of breakeven months. Nothing is written for an empty slice.
pub fn write_histogram_png(output_path: &str, breakevens: &[usize]) -> Result<(), HistogramError> {
    if breakevens.is_empty() {
        return Ok(());
    }
    render_histogram_png(output_path, &breakeven_counts(breakevens))
}

fn render_histogram_png(
    output_path: &str,
    counts: &BTreeMap<usize, usize>,
) -> Result<(), HistogramError> {
    let min_month = counts.keys().next().copied().unwrap_or(0) as i32;
    let max_month = counts.keys().next_back().copied().unwrap_or(0) as i32;
    let max_count = counts.values().max().copied().unwrap_or(1);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Breakeven Month Distribution", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d((min_month - 1)..(max_month + 2), 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Breakeven month")
        .y_desc("Trials")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(counts.iter().map(|(month, count)| {
            let month = *month as i32;
            Rectangle::new([(month, 0), (month + 1, *count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
