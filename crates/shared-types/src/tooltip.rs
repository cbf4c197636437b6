//! Tooltip formatting rules
//!
//! Tooltip text rules are pure data + functions so every chart's tooltip is
//! reproducible in tests; the wasm bridge wraps them in engine callbacks.

use crate::chart_spec::Point;
use serde::{Deserialize, Serialize};

/// Compensation figures are displayed in lakhs of rupees
pub fn format_lakhs(value: f64) -> String {
    format!("{:.2} Lakhs", value / 100_000.0)
}

/// Percentage of `total`, rounded to 2 decimals. Zero when `total` is zero.
pub fn share_percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total * 100.0 * 100.0).round() / 100.0
}

/// Declarative tooltip rule attached to a chart's options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum TooltipRule {
    /// Engine-default index-mode tooltip (bar and line charts)
    Index,
    /// Pie slice share: `label: value (pct%)`, unit noun inserted when present
    Share { total: f64, unit: Option<String> },
    /// Scatter point: company, skill, CTC, and the skill's average CTC
    ScatterCtc,
    /// Heatmap cell: `{skill} in {location}: ₹{formatted}`
    HeatmapCell,
    /// Bubble point: company, skill, CTC
    BubbleCtc,
}

impl TooltipRule {
    /// Tooltip lines for a hovered point. `label` is the hovered slice or
    /// series label, used by the share rule.
    pub fn lines(&self, point: &Point, label: &str) -> Vec<String> {
        match self {
            TooltipRule::Index => Vec::new(),
            TooltipRule::Share { total, unit } => {
                let value = match point {
                    Point::Scalar(v) => *v,
                    _ => return Vec::new(),
                };
                let pct = share_percentage(value, *total);
                let line = match unit {
                    Some(unit) => {
                        format!("{}: {} {} ({:.2}%)", label, format_count(value), unit, pct)
                    }
                    None => format!("{}: {} ({:.2}%)", label, format_count(value), pct),
                };
                vec![line]
            }
            TooltipRule::ScatterCtc => {
                let (meta, skill) = match point.meta() {
                    Some(meta) => (meta, meta.skill.clone().unwrap_or_default()),
                    None => return Vec::new(),
                };
                vec![
                    format!("Company: {}", meta.company.clone().unwrap_or_default()),
                    format!("Skill: {skill}"),
                    format!("CTC: ₹{}", format_lakhs(meta.ctc.unwrap_or(0.0))),
                    format!(
                        "Avg CTC for {skill}: ₹{}",
                        format_lakhs(meta.avg_ctc.unwrap_or(0.0))
                    ),
                ]
            }
            TooltipRule::HeatmapCell => match point {
                Point::Cell { x, y, formatted, .. } => {
                    vec![format!("{y} in {x}: ₹{formatted}")]
                }
                _ => Vec::new(),
            },
            TooltipRule::BubbleCtc => {
                let meta = match point.meta() {
                    Some(meta) => meta,
                    None => return Vec::new(),
                };
                vec![
                    format!("Company: {}", meta.company.clone().unwrap_or_default()),
                    format!("Skill: {}", meta.skill.clone().unwrap_or_default()),
                    format!("CTC: ₹{}", format_lakhs(meta.ctc.unwrap_or(0.0))),
                ]
            }
        }
    }
}

/// Counts come over the wire as JSON numbers; print whole counts as integers
fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_spec::PointMeta;

    #[test]
    fn lakhs_formatting_uses_two_decimals() {
        assert_eq!(format_lakhs(250_000.0), "2.50 Lakhs");
        assert_eq!(format_lakhs(1_234_567.0), "12.35 Lakhs");
    }

    #[test]
    fn share_percentages_round_to_two_decimals() {
        assert_eq!(share_percentage(1.0, 4.0), 25.0);
        assert_eq!(share_percentage(3.0, 4.0), 75.0);
        assert_eq!(share_percentage(1.0, 3.0), 33.33);
        assert_eq!(share_percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn share_rule_formats_slice_line() {
        let rule = TooltipRule::Share {
            total: 4.0,
            unit: None,
        };
        assert_eq!(
            rule.lines(&Point::Scalar(1.0), "Rust"),
            vec!["Rust: 1 (25.00%)".to_string()]
        );
    }

    #[test]
    fn share_rule_inserts_unit_noun() {
        let rule = TooltipRule::Share {
            total: 10.0,
            unit: Some("Job Listings".into()),
        };
        assert_eq!(
            rule.lines(&Point::Scalar(4.0), "Pune"),
            vec!["Pune: 4 Job Listings (40.00%)".to_string()]
        );
    }

    #[test]
    fn scatter_rule_emits_four_lines() {
        let point = Point::Xy {
            x: 650_000.0,
            y: 900_000.0,
            meta: PointMeta {
                company: Some("Acme".into()),
                skill: Some("Rust".into()),
                ctc: Some(900_000.0),
                avg_ctc: Some(650_000.0),
            },
        };
        let lines = TooltipRule::ScatterCtc.lines(&point, "Rust");
        assert_eq!(
            lines,
            vec![
                "Company: Acme".to_string(),
                "Skill: Rust".to_string(),
                "CTC: ₹9.00 Lakhs".to_string(),
                "Avg CTC for Rust: ₹6.50 Lakhs".to_string(),
            ]
        );
    }

    #[test]
    fn heatmap_rule_reads_cell_labels() {
        let point = Point::Cell {
            x: "Pune".into(),
            y: "Rust".into(),
            value: 250_000.0,
            formatted: "2.50 Lakhs".into(),
        };
        assert_eq!(
            TooltipRule::HeatmapCell.lines(&point, ""),
            vec!["Rust in Pune: ₹2.50 Lakhs".to_string()]
        );
    }
}
