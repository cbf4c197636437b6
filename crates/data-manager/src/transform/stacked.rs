//! Stacked bar transform (jobs per skill across locations)
//!
//! Emits one series per skill, each with one value per location in location
//! order, read as `values[location_index][skill_index]` -- the transpose of
//! the heatmap matrix convention. Alignment is positional, never by name.

use ctc_charts_config::palette::{border_colors, generate_colors};
use ctc_charts_shared::{ChartSpec, ChartsResult, Paint, Point, Series, SeriesStyle, StackedPayload};

pub fn transform(payload: &StackedPayload) -> ChartsResult<ChartSpec> {
    payload.validate()?;
    let fills = generate_colors(payload.skills.len());
    let borders = border_colors(&fills);

    let series = payload
        .skills
        .iter()
        .enumerate()
        .map(|(skill_index, skill)| Series {
            label: skill.clone(),
            points: (0..payload.locations.len())
                .map(|location_index| Point::Scalar(payload.values[location_index][skill_index]))
                .collect(),
            style: SeriesStyle {
                fill: Paint::Uniform(fills[skill_index].clone()),
                border: Paint::Uniform(borders[skill_index].clone()),
                border_width: 1.0,
                radius: None,
            },
        })
        .collect();

    Ok(ChartSpec {
        categories: Some(payload.locations.clone()),
        series,
    })
}
