//! Bar and line transforms for `{labels, values}` payloads

use ctc_charts_config::palette::{border_colors, generate_colors};
use ctc_charts_shared::{
    CategoricalPayload, ChartSpec, ChartsResult, Paint, Point, Series, SeriesStyle,
};

/// Fixed teal used by the line chart instead of the hue palette
const LINE_BORDER: &str = "rgb(75, 192, 192)";
const LINE_FILL: &str = "rgba(75, 192, 192, 0.1)";

/// Labels become categories, values a single palette-colored series.
pub fn bar(payload: &CategoricalPayload, series_label: &str) -> ChartsResult<ChartSpec> {
    payload.validate()?;
    let fills = generate_colors(payload.labels.len());
    let borders = border_colors(&fills);
    Ok(ChartSpec::single_series(
        payload.labels.clone(),
        Series {
            label: series_label.to_string(),
            points: payload.values.iter().copied().map(Point::Scalar).collect(),
            style: SeriesStyle {
                fill: Paint::PerPoint(fills),
                border: Paint::PerPoint(borders),
                border_width: 1.0,
                radius: None,
            },
        },
    ))
}

/// Same shape as [`bar`] but drawn as a single filled teal line.
pub fn line(payload: &CategoricalPayload, series_label: &str) -> ChartsResult<ChartSpec> {
    payload.validate()?;
    Ok(ChartSpec::single_series(
        payload.labels.clone(),
        Series {
            label: series_label.to_string(),
            points: payload.values.iter().copied().map(Point::Scalar).collect(),
            style: SeriesStyle {
                fill: Paint::Uniform(LINE_FILL.to_string()),
                border: Paint::Uniform(LINE_BORDER.to_string()),
                border_width: 1.0,
                radius: None,
            },
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(n: usize) -> CategoricalPayload {
        CategoricalPayload {
            labels: (0..n).map(|i| format!("skill{i}")).collect(),
            values: (0..n).map(|i| i as f64 * 100_000.0).collect(),
            tooltip_label: None,
        }
    }

    #[test]
    fn bar_colors_align_with_label_count() {
        let spec = bar(&payload(5), "Average CTC").unwrap();
        assert_eq!(spec.categories.as_ref().unwrap().len(), 5);
        let series = &spec.series[0];
        assert_eq!(series.points.len(), 5);
        match (&series.style.fill, &series.style.border) {
            (Paint::PerPoint(fills), Paint::PerPoint(borders)) => {
                assert_eq!(fills.len(), 5);
                assert_eq!(borders.len(), 5);
                assert_eq!(borders[0], "hsla(0, 70%, 60%, 0.9)");
            }
            _ => panic!("bar charts color per point"),
        }
    }

    #[test]
    fn bar_rejects_mismatched_payload() {
        let broken = CategoricalPayload {
            labels: vec!["a".into()],
            values: vec![1.0, 2.0],
            tooltip_label: None,
        };
        assert!(bar(&broken, "x").is_err());
    }

    #[test]
    fn empty_payload_is_an_empty_chart_not_an_error() {
        let spec = bar(&payload(0), "Average CTC").unwrap();
        assert!(spec.series[0].points.is_empty());
        assert_eq!(spec.series[0].style.fill, Paint::PerPoint(Vec::new()));
    }

    #[test]
    fn line_uses_the_fixed_teal_style() {
        let spec = line(&payload(3), "Average CTC").unwrap();
        assert_eq!(
            spec.series[0].style.border,
            Paint::Uniform("rgb(75, 192, 192)".to_string())
        );
        assert_eq!(
            spec.series[0].style.fill,
            Paint::Uniform("rgba(75, 192, 192, 0.1)".to_string())
        );
    }
}
