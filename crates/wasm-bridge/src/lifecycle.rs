//! Per-chart load lifecycle
//!
//! Each chart runs `Idle -> Loading -> Rendered | Failed` independently; a
//! failing fetch or transform is caught here and never reaches sibling
//! charts. The DOM sits behind [`ChartHost`] so the whole state machine is
//! testable without a browser.

use ctc_charts_config::ChartOptions;
use ctc_charts_shared::{ChartSpec, ChartsResult};
use std::future::Future;

/// Phase of one chart's load cycle. `Rendered`, `Failed`, and `Skipped` are
/// terminal; a page reload restarts every chart at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    Idle,
    Loading,
    Rendered,
    Failed,
    Skipped,
}

/// The page surface a chart lifecycle drives
pub trait ChartHost {
    fn container_exists(&self, chart_id: &str) -> bool;
    fn show_loading(&self, chart_id: &str);
    fn hide_loading(&self, chart_id: &str);
    fn show_error(&self, chart_id: &str, message: &str);
    fn render(&self, chart_id: &str, spec: &ChartSpec, options: &ChartOptions)
        -> ChartsResult<()>;
}

/// Drive one chart through its load cycle.
///
/// `load` performs the fetch and transform; it is constructed lazily, so an
/// optional chart whose container is missing drops it unpolled and issues
/// zero fetch calls.
pub async fn run_chart<H, F>(host: &H, chart_id: &str, optional: bool, load: F) -> ChartPhase
where
    H: ChartHost,
    F: Future<Output = ChartsResult<(ChartSpec, ChartOptions)>>,
{
    if optional && !host.container_exists(chart_id) {
        log::warn!("chart {chart_id} container not found, skipping");
        return ChartPhase::Skipped;
    }

    host.show_loading(chart_id);
    match load.await {
        Ok((spec, options)) => {
            host.hide_loading(chart_id);
            match host.render(chart_id, &spec, &options) {
                Ok(()) => ChartPhase::Rendered,
                Err(err) => {
                    log::error!("chart {chart_id} render failed: {err}");
                    host.show_error(chart_id, "Failed to load chart data");
                    ChartPhase::Failed
                }
            }
        }
        Err(err) => {
            host.hide_loading(chart_id);
            log::error!("chart {chart_id} failed: {err}");
            host.show_error(chart_id, "Failed to load chart data");
            ChartPhase::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctc_charts_shared::{ChartKind, ChartsError};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records host calls instead of touching a DOM
    #[derive(Default)]
    struct RecordingHost {
        events: RefCell<Vec<String>>,
        missing_containers: Vec<String>,
        fail_render: bool,
    }

    impl ChartHost for RecordingHost {
        fn container_exists(&self, chart_id: &str) -> bool {
            !self.missing_containers.iter().any(|c| c == chart_id)
        }

        fn show_loading(&self, chart_id: &str) {
            self.events.borrow_mut().push(format!("loading:{chart_id}"));
        }

        fn hide_loading(&self, chart_id: &str) {
            self.events.borrow_mut().push(format!("loaded:{chart_id}"));
        }

        fn show_error(&self, chart_id: &str, message: &str) {
            self.events
                .borrow_mut()
                .push(format!("error:{chart_id}:{message}"));
        }

        fn render(
            &self,
            chart_id: &str,
            _spec: &ChartSpec,
            _options: &ChartOptions,
        ) -> ChartsResult<()> {
            if self.fail_render {
                return Err(ChartsError::network("canvas missing"));
            }
            self.events.borrow_mut().push(format!("render:{chart_id}"));
            Ok(())
        }
    }

    fn empty_spec() -> ChartSpec {
        ChartSpec {
            categories: None,
            series: Vec::new(),
        }
    }

    #[test]
    fn success_path_renders_and_clears_loading() {
        let host = RecordingHost::default();
        let phase = block_on(run_chart(&host, "chart1", false, async {
            Ok((empty_spec(), ChartOptions::new(ChartKind::Bar)))
        }));
        assert_eq!(phase, ChartPhase::Rendered);
        assert_eq!(
            *host.events.borrow(),
            vec!["loading:chart1", "loaded:chart1", "render:chart1"]
        );
    }

    #[test]
    fn fetch_failure_shows_inline_error() {
        let host = RecordingHost::default();
        let phase = block_on(run_chart(&host, "chart1", false, async {
            Err(ChartsError::Http { status: 502 })
        }));
        assert_eq!(phase, ChartPhase::Failed);
        assert_eq!(
            *host.events.borrow(),
            vec![
                "loading:chart1",
                "loaded:chart1",
                "error:chart1:Failed to load chart data"
            ]
        );
    }

    #[test]
    fn render_failure_is_also_terminal_failed() {
        let host = RecordingHost {
            fail_render: true,
            ..Default::default()
        };
        let phase = block_on(run_chart(&host, "chart1", false, async {
            Ok((empty_spec(), ChartOptions::new(ChartKind::Bar)))
        }));
        assert_eq!(phase, ChartPhase::Failed);
    }

    #[test]
    fn one_failing_chart_does_not_block_a_succeeding_sibling() {
        let host = RecordingHost::default();
        let failing = run_chart(&host, "chartA", false, async {
            Err(ChartsError::network("unreachable"))
        });
        let succeeding = run_chart(&host, "chartB", false, async {
            Ok((empty_spec(), ChartOptions::new(ChartKind::Line)))
        });

        // Completion order must not matter
        let (phase_a, phase_b) = block_on(futures::future::join(failing, succeeding));
        assert_eq!(phase_a, ChartPhase::Failed);
        assert_eq!(phase_b, ChartPhase::Rendered);
        assert!(host
            .events
            .borrow()
            .contains(&"render:chartB".to_string()));
        assert!(host
            .events
            .borrow()
            .contains(&"error:chartA:Failed to load chart data".to_string()));
    }

    #[test]
    fn optional_chart_with_missing_container_issues_no_fetch() {
        let host = RecordingHost {
            missing_containers: vec!["chart11".to_string()],
            ..Default::default()
        };
        let polled = RefCell::new(false);
        let phase = block_on(run_chart(&host, "chart11", true, async {
            *polled.borrow_mut() = true;
            Ok((empty_spec(), ChartOptions::new(ChartKind::Heatmap)))
        }));
        assert_eq!(phase, ChartPhase::Skipped);
        assert!(!*polled.borrow(), "load future must stay unpolled");
        assert!(host.events.borrow().is_empty(), "page state unchanged");
    }

    #[test]
    fn optional_chart_with_present_container_loads_normally() {
        let host = RecordingHost::default();
        let phase = block_on(run_chart(&host, "chart11", true, async {
            Ok((empty_spec(), ChartOptions::new(ChartKind::Heatmap)))
        }));
        assert_eq!(phase, ChartPhase::Rendered);
    }
}
