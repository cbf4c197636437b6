//! Dashboard chart wiring
//!
//! One independent task per chart: fetch from the chart's endpoint,
//! transform, and hand the result to the engine through the lifecycle
//! controller. Tasks never share state and never wait on each other.

use crate::dom::DomHost;
use crate::lifecycle::run_chart;
use ctc_charts_config::{presets, ChartOptions};
use ctc_charts_data::transform::{bubble, categorical, heatmap, scatter, share, stacked};
use ctc_charts_data::ChartDataClient;
use ctc_charts_shared::{ChartKind, ChartSpec, ChartsResult, Endpoint, TooltipRule};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

const AVG_CTC_PER_SKILL: Endpoint = Endpoint {
    id: "chart1_avg_ctc_per_skill",
    path: "/api/1_avg_ctc_per_skill",
};
const COMPANY_COUNT_PER_SKILL: Endpoint = Endpoint {
    id: "chart2_company_count_per_skill",
    path: "/api/2_company_count_per_skill",
};
const COMPANY_COUNT_PER_LOCATION: Endpoint = Endpoint {
    id: "chart3_company_count_per_location",
    path: "/api/3_company_count_per_location",
};
const LINE_AVG_CTC_SKILLS: Endpoint = Endpoint {
    id: "chart6_line_avg_ctc_skills",
    path: "/api/6_line_avg_ctc_skills",
};
const PIE_SKILL_DEMAND: Endpoint = Endpoint {
    id: "chart7_pie_skill_demand",
    path: "/api/7_pie_skill_demand",
};
const PIE_LOCATION_DISTRIBUTION: Endpoint = Endpoint {
    id: "chart8_pie_location_distribution",
    path: "/api/8_pie_location_distribution",
};
const AVG_CTC_PER_LOCATION: Endpoint = Endpoint {
    id: "chart9_avg_ctc_per_location",
    path: "/api/9_avg_ctc_per_location",
};
const SCATTER_CTC_VS_AVG: Endpoint = Endpoint {
    id: "chart10_scatter_ctc_vs_avg",
    path: "/api/10_scatter_ctc_vs_avg",
};
const HEATMAP_SKILL_LOCATION: Endpoint = Endpoint {
    id: "chart11_heatmap_skill_location",
    path: "/api/11_heatmap_skill_location",
};
const STACKED_SKILLS_LOCATION: Endpoint = Endpoint {
    id: "chart12_stacked_skills_location",
    path: "/api/12_stacked_skills_location",
};
const BUBBLE_COMPANY_CTC: Endpoint = Endpoint {
    id: "chart13_bubble_company_ctc",
    path: "/api/13_bubble_company_ctc",
};

/// Start every chart's load cycle. Each chart is its own task; completion
/// order is unspecified and failures stay local to their chart.
pub fn spawn_all(client: Rc<ChartDataClient>, host: Rc<DomHost>) {
    spawn_bar(&client, &host, AVG_CTC_PER_SKILL, "Average CTC");
    spawn_bar(&client, &host, COMPANY_COUNT_PER_SKILL, "Number of Companies");
    spawn_bar(&client, &host, COMPANY_COUNT_PER_LOCATION, "Number of Companies");
    spawn_line(&client, &host, LINE_AVG_CTC_SKILLS, "Average CTC");
    spawn_pie(&client, &host, PIE_SKILL_DEMAND, "Skill Demand");
    spawn_pie(&client, &host, PIE_LOCATION_DISTRIBUTION, "Job Listings");
    spawn_bar(&client, &host, AVG_CTC_PER_LOCATION, "Average CTC");
    spawn_scatter(&client, &host, SCATTER_CTC_VS_AVG);
    spawn_heatmap(&client, &host, HEATMAP_SKILL_LOCATION);
    spawn_stacked(&client, &host, STACKED_SKILLS_LOCATION);
    spawn_bubble(&client, &host, BUBBLE_COMPANY_CTC);
}

fn options_for(chart_id: &str, kind: ChartKind) -> ChartOptions {
    presets::for_chart(chart_id).unwrap_or_else(|| ChartOptions::new(kind))
}

type Prepared = ChartsResult<(ChartSpec, ChartOptions)>;

fn spawn_task(
    host: Rc<DomHost>,
    endpoint: Endpoint,
    optional: bool,
    load: impl std::future::Future<Output = Prepared> + 'static,
) {
    spawn_local(async move {
        let phase = run_chart(host.as_ref(), endpoint.id, optional, load).await;
        log::debug!("{} finished: {phase:?}", endpoint.id);
    });
}

fn spawn_bar(
    client: &Rc<ChartDataClient>,
    host: &Rc<DomHost>,
    endpoint: Endpoint,
    series_label: &'static str,
) {
    let client = client.clone();
    spawn_task(host.clone(), endpoint, false, async move {
        let payload = client.categorical(endpoint.path).await?;
        let spec = categorical::bar(&payload, series_label)?;
        Ok((spec, options_for(endpoint.id, ChartKind::Bar)))
    });
}

fn spawn_line(
    client: &Rc<ChartDataClient>,
    host: &Rc<DomHost>,
    endpoint: Endpoint,
    series_label: &'static str,
) {
    let client = client.clone();
    spawn_task(host.clone(), endpoint, false, async move {
        let payload = client.categorical(endpoint.path).await?;
        let spec = categorical::line(&payload, series_label)?;
        Ok((spec, options_for(endpoint.id, ChartKind::Line)))
    });
}

fn spawn_pie(
    client: &Rc<ChartDataClient>,
    host: &Rc<DomHost>,
    endpoint: Endpoint,
    fallback_label: &'static str,
) {
    let client = client.clone();
    spawn_task(host.clone(), endpoint, false, async move {
        let payload = client.categorical(endpoint.path).await?;
        let prepared = share::transform(&payload, fallback_label)?;
        let options = options_for(endpoint.id, ChartKind::Pie).with_tooltip(TooltipRule::Share {
            total: prepared.total,
            unit: prepared.tooltip_label,
        });
        Ok((prepared.spec, options))
    });
}

fn spawn_scatter(client: &Rc<ChartDataClient>, host: &Rc<DomHost>, endpoint: Endpoint) {
    let client = client.clone();
    spawn_task(host.clone(), endpoint, false, async move {
        let rows = client.scatter_rows(endpoint.path).await?;
        let spec = scatter::transform(&rows);
        Ok((spec, options_for(endpoint.id, ChartKind::Scatter)))
    });
}

/// The heatmap section is not present on every page variant, so its task
/// first checks for the container and skips without fetching when absent.
fn spawn_heatmap(client: &Rc<ChartDataClient>, host: &Rc<DomHost>, endpoint: Endpoint) {
    let client = client.clone();
    spawn_task(host.clone(), endpoint, true, async move {
        let payload = client.matrix(endpoint.path).await?;
        let spec = heatmap::transform(&payload)?;
        let options = options_for(endpoint.id, ChartKind::Heatmap)
            .with_category_axes(payload.locations.clone(), payload.skills.clone());
        Ok((spec, options))
    });
}

fn spawn_stacked(client: &Rc<ChartDataClient>, host: &Rc<DomHost>, endpoint: Endpoint) {
    let client = client.clone();
    spawn_task(host.clone(), endpoint, false, async move {
        let payload = client.stacked(endpoint.path).await?;
        let spec = stacked::transform(&payload)?;
        Ok((spec, options_for(endpoint.id, ChartKind::StackedBar)))
    });
}

fn spawn_bubble(client: &Rc<ChartDataClient>, host: &Rc<DomHost>, endpoint: Endpoint) {
    let client = client.clone();
    spawn_task(host.clone(), endpoint, false, async move {
        let rows = client.bubble_rows(endpoint.path).await?;
        let spec = bubble::transform(&rows);
        Ok((spec, options_for(endpoint.id, ChartKind::Bubble)))
    });
}
