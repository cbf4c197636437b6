//! Pie (share) transform
//!
//! Categorical transform plus the derived slice total the share tooltip
//! rule needs: `label: value (value/total*100 rounded to 2 decimals)%`.

use super::categorical;
use ctc_charts_shared::{CategoricalPayload, ChartSpec, ChartsResult};

/// A categorical spec with the derived share total and optional unit noun
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSpec {
    pub spec: ChartSpec,
    pub total: f64,
    pub tooltip_label: Option<String>,
}

pub fn transform(payload: &CategoricalPayload, series_label: &str) -> ChartsResult<ShareSpec> {
    let label = payload
        .tooltip_label
        .clone()
        .unwrap_or_else(|| series_label.to_string());
    let spec = categorical::bar(payload, &label)?;
    Ok(ShareSpec {
        spec,
        total: payload.values.iter().sum(),
        tooltip_label: payload.tooltip_label.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctc_charts_shared::share_percentage;

    #[test]
    fn total_is_the_sum_of_values() {
        let payload = CategoricalPayload {
            labels: vec!["a".into(), "b".into()],
            values: vec![1.0, 3.0],
            tooltip_label: None,
        };
        let share = transform(&payload, "Skill Demand").unwrap();
        assert_eq!(share.total, 4.0);
        assert_eq!(share_percentage(1.0, share.total), 25.0);
        assert_eq!(share_percentage(3.0, share.total), 75.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred_within_rounding() {
        let values = [3.0, 7.0, 11.0, 29.0];
        let total: f64 = values.iter().sum();
        let pct_sum: f64 = values.iter().map(|v| share_percentage(*v, total)).sum();
        assert!((pct_sum - 100.0).abs() < 0.02, "sum was {pct_sum}");
    }

    #[test]
    fn wire_tooltip_label_names_the_series() {
        let payload = CategoricalPayload {
            labels: vec!["Pune".into()],
            values: vec![10.0],
            tooltip_label: Some("Job Listings".into()),
        };
        let share = transform(&payload, "fallback").unwrap();
        assert_eq!(share.spec.series[0].label, "Job Listings");
        assert_eq!(share.tooltip_label.as_deref(), Some("Job Listings"));
    }
}
