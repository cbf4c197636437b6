//! Built-in rendering presets, one per dashboard chart
//!
//! Titles, axis text, legend placement, and tick rotations mirror the
//! dashboard layout; data-dependent pieces (the pie share totals and the
//! heatmap category axes) are filled in by the chart wiring after the
//! transform runs.

use crate::options::{AxisOptions, ChartOptions, LegendPosition, TickFormat};
use ctc_charts_shared::{ChartKind, TooltipRule};

/// Look up the preset for a dashboard chart id.
pub fn for_chart(id: &str) -> Option<ChartOptions> {
    let options = match id {
        "chart1_avg_ctc_per_skill" => ctc_bar("Average CTC (₹)"),
        "chart2_company_count_per_skill" => ctc_bar("Number of Companies"),
        "chart3_company_count_per_location" => ctc_bar("Number of Companies"),
        "chart6_line_avg_ctc_skills" => ctc_line(),
        "chart7_pie_skill_demand" => share_pie(None),
        "chart8_pie_location_distribution" => {
            share_pie(Some("Job Distribution by Location"))
        }
        "chart9_avg_ctc_per_location" => ctc_bar("Average CTC (₹)"),
        "chart10_scatter_ctc_vs_avg" => scatter(),
        "chart11_heatmap_skill_location" => heatmap(),
        "chart12_stacked_skills_location" => stacked_bar(),
        "chart13_bubble_company_ctc" => bubble(),
        _ => {
            log::warn!("no preset for chart id {id}");
            return None;
        }
    };
    Some(options)
}

/// Vertical bar chart with rotated category ticks and a zero-based y axis
fn ctc_bar(y_title: &str) -> ChartOptions {
    let mut options = ChartOptions::new(ChartKind::Bar);
    options.x_axis.tick_rotation = Some((45.0, 45.0));
    options.y_axis = AxisOptions {
        begin_at_zero: true,
        ..AxisOptions::titled(y_title)
    };
    options
}

fn ctc_line() -> ChartOptions {
    let mut options = ChartOptions::new(ChartKind::Line);
    options.x_axis.tick_rotation = Some((45.0, 45.0));
    options.y_axis = AxisOptions::titled("Average CTC (₹)");
    options
}

fn share_pie(title: Option<&str>) -> ChartOptions {
    let mut options = ChartOptions::new(ChartKind::Pie).with_tooltip(TooltipRule::Share {
        total: 0.0,
        unit: None,
    });
    if let Some(title) = title {
        options = options.with_title(title);
    }
    options.legend.position = LegendPosition::Right;
    options
}

fn scatter() -> ChartOptions {
    let mut options = ChartOptions::new(ChartKind::Scatter)
        .with_title("CTC vs Average CTC by Skill (Top 100 Companies)")
        .with_tooltip(TooltipRule::ScatterCtc);
    options.legend.display = false;
    options.x_axis = AxisOptions {
        tick_format: TickFormat::Rupee,
        ..AxisOptions::titled("Average CTC for Skill (₹)")
    };
    options.y_axis = AxisOptions {
        tick_format: TickFormat::Rupee,
        ..AxisOptions::titled("Individual CTC (₹)")
    };
    options
}

fn heatmap() -> ChartOptions {
    let mut options =
        ChartOptions::new(ChartKind::Heatmap).with_tooltip(TooltipRule::HeatmapCell);
    options.legend.display = false;
    options.x_axis = AxisOptions {
        tick_rotation: Some((90.0, 45.0)),
        ..AxisOptions::titled("Location")
    };
    options.y_axis = AxisOptions::titled("Skill");
    options
}

fn stacked_bar() -> ChartOptions {
    let mut options = ChartOptions::new(ChartKind::StackedBar);
    // Legend hidden: one entry per skill is too many
    options.legend.display = false;
    options.x_axis = AxisOptions {
        tick_rotation: Some((45.0, 45.0)),
        ..AxisOptions::titled("Location")
    };
    options.y_axis = AxisOptions {
        stacked: true,
        ..AxisOptions::titled("Number of Jobs")
    };
    options
}

fn bubble() -> ChartOptions {
    let mut options = ChartOptions::new(ChartKind::Bubble)
        .with_title("Top 100 Companies by CTC")
        .with_tooltip(TooltipRule::BubbleCtc);
    options.x_axis = AxisOptions {
        tick_format: TickFormat::RupeeLakh,
        ..AxisOptions::titled("CTC (₹)")
    };
    // Jitter axis carries no data meaning
    options.y_axis.hidden = true;
    options
}
