//! Raw endpoint payload shapes
//!
//! There is no shared schema across endpoints; each transformer knows its own
//! input shape. Every shape is validated explicitly on ingestion rather than
//! trusting field presence, so a structurally wrong body surfaces as a
//! [`ChartsError::Shape`] instead of a panic deep in a transformer.

use crate::errors::{ChartsError, ChartsResult};
use serde::{Deserialize, Serialize};

/// `{labels, values}` shape returned by the bar/line/pie endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoricalPayload {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Unit noun for tooltip text, e.g. "Job Listings"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_label: Option<String>,
}

impl CategoricalPayload {
    pub fn validate(&self) -> ChartsResult<()> {
        if self.labels.len() != self.values.len() {
            return Err(ChartsError::shape(format!(
                "{} labels but {} values",
                self.labels.len(),
                self.values.len()
            )));
        }
        Ok(())
    }
}

/// `{skills, locations, matrix}` shape for the heatmap endpoint.
/// `matrix` is dense and indexed `[skill][location]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixPayload {
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

impl MatrixPayload {
    pub fn validate(&self) -> ChartsResult<()> {
        if self.matrix.len() != self.skills.len() {
            return Err(ChartsError::shape(format!(
                "matrix has {} rows for {} skills",
                self.matrix.len(),
                self.skills.len()
            )));
        }
        for (i, row) in self.matrix.iter().enumerate() {
            if row.len() != self.locations.len() {
                return Err(ChartsError::shape(format!(
                    "matrix row {} has {} cells for {} locations",
                    i,
                    row.len(),
                    self.locations.len()
                )));
            }
        }
        Ok(())
    }
}

/// `{locations, skills, values}` shape for the stacked-bar endpoint.
/// `values` is indexed `[location][skill]` -- transposed relative to
/// [`MatrixPayload::matrix`]. The asymmetry is part of the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackedPayload {
    pub locations: Vec<String>,
    pub skills: Vec<String>,
    pub values: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_label: Option<String>,
}

impl StackedPayload {
    pub fn validate(&self) -> ChartsResult<()> {
        if self.values.len() != self.locations.len() {
            return Err(ChartsError::shape(format!(
                "values has {} rows for {} locations",
                self.values.len(),
                self.locations.len()
            )));
        }
        for (i, row) in self.values.iter().enumerate() {
            if row.len() != self.skills.len() {
                return Err(ChartsError::shape(format!(
                    "values row {} has {} cells for {} skills",
                    i,
                    row.len(),
                    self.skills.len()
                )));
            }
        }
        Ok(())
    }
}

/// One row of the scatter endpoint (`/api/10_scatter_ctc_vs_avg`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterRow {
    pub company: String,
    pub skill: String,
    pub ctc: f64,
    pub avg_ctc: f64,
}

/// One row of the bubble endpoint (`/api/13_bubble_company_ctc`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BubbleRow {
    pub company_name: String,
    pub skill_required: String,
    pub ctc: f64,
    pub bubble_size: f64,
}
