//! Normalized chart-spec model
//!
//! A [`ChartSpec`] is the rendering-engine-agnostic structure produced by a
//! transformer. It is constructed fresh on every load cycle and handed once
//! to the rendering engine; it is never mutated after handoff.

use serde::{Deserialize, Serialize};

/// Normalized output of a chart transformer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    /// Shared label axis, present for category-aligned charts
    pub categories: Option<Vec<String>>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn single_series(categories: Vec<String>, series: Series) -> Self {
        Self {
            categories: Some(categories),
            series: vec![series],
        }
    }
}

/// One named, colored sequence of data points rendered as a unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
    pub style: SeriesStyle,
}

/// Visual styling for a series. `PerPoint` paint and radius vectors are
/// positionally aligned with the series' point vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesStyle {
    pub fill: Paint,
    pub border: Paint,
    pub border_width: f32,
    pub radius: Option<Radius>,
}

/// A CSS color, either one per series or one per point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Paint {
    Uniform(String),
    PerPoint(Vec<String>),
}

/// Point radius, either one per series or one per point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Radius {
    Uniform(f32),
    PerPoint(Vec<f32>),
}

/// A single data point.
///
/// Entity fields carried in [`PointMeta`] or in the cell labels exist only
/// for tooltip text, never for rendering geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Point {
    /// Category-aligned scalar (bar, line, pie, stacked bar)
    Scalar(f64),
    /// (x, y) pair for scatter charts
    Xy {
        x: f64,
        y: f64,
        #[serde(flatten)]
        meta: PointMeta,
    },
    /// (x, y, r) for bubble charts; `y` is presentation-only jitter
    Bubble {
        x: f64,
        y: f64,
        r: f64,
        #[serde(flatten)]
        meta: PointMeta,
    },
    /// Heatmap cell addressed by axis labels, with raw and formatted value
    Cell {
        x: String,
        y: String,
        #[serde(rename = "v")]
        value: f64,
        formatted: String,
    },
}

impl Point {
    pub fn meta(&self) -> Option<&PointMeta> {
        match self {
            Point::Xy { meta, .. } | Point::Bubble { meta, .. } => Some(meta),
            _ => None,
        }
    }
}

/// Originating entity fields retained for tooltip text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PointMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ctc: Option<f64>,
}
