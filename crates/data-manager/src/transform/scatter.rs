//! Grouped scatter transform (CTC vs the skill's average CTC)
//!
//! Rows are partitioned by skill in first-seen order; each group becomes one
//! uniformly colored series with the company retained for tooltip text.

use super::partition_by;
use ctc_charts_config::palette::group_color;
use ctc_charts_shared::{ChartSpec, Paint, Point, PointMeta, Radius, ScatterRow, Series, SeriesStyle};

pub fn transform(rows: &[ScatterRow]) -> ChartSpec {
    let groups = partition_by(rows, |r| &r.skill);
    let count = groups.len();

    let series = groups
        .into_iter()
        .enumerate()
        .map(|(index, (skill, members))| {
            let points = members
                .into_iter()
                .map(|row| Point::Xy {
                    x: row.avg_ctc,
                    y: row.ctc,
                    meta: PointMeta {
                        company: Some(row.company.clone()),
                        skill: Some(row.skill.clone()),
                        ctc: Some(row.ctc),
                        avg_ctc: Some(row.avg_ctc),
                    },
                })
                .collect();
            Series {
                label: skill,
                points,
                style: SeriesStyle {
                    fill: Paint::Uniform(group_color(index, count)),
                    border: Paint::Uniform(group_color(index, count)),
                    border_width: 0.0,
                    radius: Some(Radius::Uniform(5.0)),
                },
            }
        })
        .collect();

    ChartSpec {
        categories: None,
        series,
    }
}
