//! Declarative per-chart rendering options
//!
//! The options object is the outbound half of a chart's contract: together
//! with the [`ChartSpec`](ctc_charts_shared::ChartSpec) it fully specifies
//! what the rendering engine should draw. Nothing here touches the DOM.

use ctc_charts_shared::{ChartKind, TooltipRule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartOptions {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub legend: LegendOptions,
    pub tooltip: TooltipRule,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
}

impl ChartOptions {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            title: None,
            legend: LegendOptions::default(),
            tooltip: TooltipRule::Index,
            x_axis: AxisOptions::default(),
            y_axis: AxisOptions::default(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Replace the tooltip rule; used where the rule depends on transformed
    /// data (the pie share total) rather than on static preset text.
    pub fn with_tooltip(mut self, tooltip: TooltipRule) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Attach data-derived category label axes (heatmap x/y).
    pub fn with_category_axes(mut self, x_labels: Vec<String>, y_labels: Vec<String>) -> Self {
        self.x_axis.category_labels = Some(x_labels);
        self.y_axis.category_labels = Some(y_labels);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: true,
            position: LegendPosition::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisOptions {
    pub title: Option<String>,
    pub begin_at_zero: bool,
    pub stacked: bool,
    /// Hide tick labels and grid lines (bubble y axis)
    pub hidden: bool,
    /// (max, min) tick label rotation in degrees
    pub tick_rotation: Option<(f32, f32)>,
    pub tick_format: TickFormat,
    /// Fixed label list for category axes; `None` means a linear axis
    pub category_labels: Option<Vec<String>>,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            title: None,
            begin_at_zero: false,
            stacked: false,
            hidden: false,
            tick_rotation: None,
            tick_format: TickFormat::Plain,
            category_labels: None,
        }
    }
}

impl AxisOptions {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}

/// Tick label formatting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TickFormat {
    Plain,
    /// `₹{value}`
    Rupee,
    /// `₹{value/100000:.1}L`
    RupeeLakh,
}

impl TickFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Plain => format!("{value}"),
            TickFormat::Rupee => format!("₹{value}"),
            TickFormat::RupeeLakh => format!("₹{:.1}L", value / 100_000.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_formats_match_axis_callbacks() {
        assert_eq!(TickFormat::Rupee.format(900000.0), "₹900000");
        assert_eq!(TickFormat::RupeeLakh.format(900000.0), "₹9.0L");
        assert_eq!(TickFormat::Plain.format(42.0), "42");
    }

    #[test]
    fn category_axes_attach_to_both_axes() {
        let options = ChartOptions::new(ChartKind::Heatmap)
            .with_category_axes(vec!["Pune".into()], vec!["Rust".into()]);
        assert_eq!(
            options.x_axis.category_labels,
            Some(vec!["Pune".to_string()])
        );
        assert_eq!(
            options.y_axis.category_labels,
            Some(vec!["Rust".to_string()])
        );
    }
}
