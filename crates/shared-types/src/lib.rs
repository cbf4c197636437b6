//! Shared types for the CTC Charts dashboard
//!
//! This crate contains the types shared between the config-system,
//! data-manager, and wasm-bridge crates: the normalized chart-spec model,
//! the raw endpoint payload shapes, the error taxonomy, and the tooltip
//! formatting rules.

use serde::{Deserialize, Serialize};

pub mod chart_spec;
pub mod errors;
pub mod payloads;
pub mod tooltip;

pub use chart_spec::{ChartSpec, Paint, Point, PointMeta, Radius, Series, SeriesStyle};
pub use errors::{ChartsError, ChartsResult};
pub use payloads::{BubbleRow, CategoricalPayload, MatrixPayload, ScatterRow, StackedPayload};
pub use tooltip::{format_lakhs, share_percentage, TooltipRule};

/// Chart kinds rendered by the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    Heatmap,
    StackedBar,
    Bubble,
}

impl ChartKind {
    /// Name understood by the rendering engine. Heatmaps and stacked bars
    /// are drawn with the engine's scatter and bar primitives.
    pub fn engine_type(&self) -> &'static str {
        match self {
            ChartKind::Bar | ChartKind::StackedBar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Scatter | ChartKind::Heatmap => "scatter",
            ChartKind::Bubble => "bubble",
        }
    }
}

/// Identifies one chart's data source. Immutable, defined at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    /// DOM container / canvas id for the chart
    pub id: &'static str,
    /// Path under the dashboard origin, e.g. `/api/1_avg_ctc_per_skill`
    pub path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_type_maps_composite_kinds_to_primitives() {
        assert_eq!(ChartKind::Heatmap.engine_type(), "scatter");
        assert_eq!(ChartKind::StackedBar.engine_type(), "bar");
        assert_eq!(ChartKind::Bubble.engine_type(), "bubble");
    }
}
