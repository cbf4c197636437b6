//! Matrix heatmap transform
//!
//! Flattens the dense skills x locations matrix into one series of labeled
//! cells, skipping empty cells. Color and radius both scale with the value
//! normalized against the maximum included cell; an all-zero matrix yields
//! an explicitly empty point set rather than dividing by zero.

use ctc_charts_shared::{ChartSpec, ChartsResult, MatrixPayload, Paint, Point, Radius, Series, SeriesStyle};

const SERIES_LABEL: &str = "CTC by Skill and Location";
const CELL_BORDER: &str = "rgba(0, 0, 0, 0.2)";

// Cell radius runs from the floor at normalized 0 to floor + span at 1
const RADIUS_FLOOR: f64 = 8.0;
const RADIUS_SPAN: f64 = 12.0;

pub fn transform(payload: &MatrixPayload) -> ChartsResult<ChartSpec> {
    payload.validate()?;

    let mut cells: Vec<(usize, usize, f64)> = Vec::new();
    let mut max_value = 0.0_f64;
    for (i, row) in payload.matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value > 0.0 {
                max_value = max_value.max(value);
                cells.push((i, j, value));
            }
        }
    }

    let mut points = Vec::with_capacity(cells.len());
    let mut fills = Vec::with_capacity(cells.len());
    let mut radii = Vec::with_capacity(cells.len());
    for (i, j, value) in cells {
        // max_value > 0 whenever any cell was included
        let normalized = value / max_value;
        points.push(Point::Cell {
            x: payload.locations[j].clone(),
            y: payload.skills[i].clone(),
            value,
            formatted: ctc_charts_shared::format_lakhs(value),
        });
        fills.push(heat_color(normalized));
        radii.push((RADIUS_FLOOR + normalized * RADIUS_SPAN) as f32);
    }

    Ok(ChartSpec {
        categories: None,
        series: vec![Series {
            label: SERIES_LABEL.to_string(),
            points,
            style: SeriesStyle {
                fill: Paint::PerPoint(fills),
                border: Paint::Uniform(CELL_BORDER.to_string()),
                border_width: 1.0,
                radius: Some(Radius::PerPoint(radii)),
            },
        }],
    })
}

/// Linear blue-to-red ramp over the normalized value
fn heat_color(normalized: f64) -> String {
    let r = (normalized * 255.0).round() as u8;
    let g = ((1.0 - normalized) * 100.0).round() as u8;
    let b = ((1.0 - normalized) * 255.0).round() as u8;
    format!("rgba({r}, {g}, {b}, 0.8)")
}
