//! Grouped bubble transform (top companies by CTC)
//!
//! Like the grouped scatter, keyed by required skill. The vertical position
//! is presentation-only spread with no data meaning; it is derived from a
//! hash of the company name so repeated loads of the same data render
//! identically.

use super::partition_by;
use ctc_charts_config::palette::{group_color, group_fill};
use ctc_charts_shared::{BubbleRow, ChartSpec, Paint, Point, PointMeta, Series, SeriesStyle};

pub fn transform(rows: &[BubbleRow]) -> ChartSpec {
    let groups = partition_by(rows, |r| &r.skill_required);
    let count = groups.len();

    let series = groups
        .into_iter()
        .enumerate()
        .map(|(index, (skill, members))| {
            let points = members
                .into_iter()
                .map(|row| Point::Bubble {
                    x: row.ctc,
                    y: jitter(&row.company_name),
                    r: row.bubble_size.sqrt() / 10.0,
                    meta: PointMeta {
                        company: Some(row.company_name.clone()),
                        skill: Some(row.skill_required.clone()),
                        ctc: Some(row.ctc),
                        avg_ctc: None,
                    },
                })
                .collect();
            Series {
                label: skill,
                points,
                style: SeriesStyle {
                    fill: Paint::Uniform(group_fill(index, count)),
                    border: Paint::Uniform(group_color(index, count)),
                    border_width: 1.0,
                    radius: None,
                },
            }
        })
        .collect();

    ChartSpec {
        categories: None,
        series,
    }
}

/// Deterministic vertical offset in `[0, 10)` keyed by company name
pub fn jitter(company: &str) -> f64 {
    (fnv1a(company.as_bytes()) % 10_000) as f64 / 1_000.0
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
