//! DOM host for the chart lifecycle
//!
//! Mirrors the dashboard markup: each chart lives in `#{id}-container` with
//! a `.loading-overlay` and a `.chart-wrapper` around the canvas whose id is
//! the chart id.

use crate::engine;
use crate::lifecycle::ChartHost;
use ctc_charts_config::ChartOptions;
use ctc_charts_shared::{ChartSpec, ChartsError, ChartsResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new() -> ChartsResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ChartsError::network("no document available"))?;
        Ok(Self { document })
    }

    fn overlay(&self, chart_id: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(&format!("#{chart_id}-container .loading-overlay"))
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    fn set_overlay_display(&self, chart_id: &str, display: &str) {
        if let Some(overlay) = self.overlay(chart_id) {
            let _ = overlay.style().set_property("display", display);
        }
    }
}

impl ChartHost for DomHost {
    fn container_exists(&self, chart_id: &str) -> bool {
        self.document.get_element_by_id(chart_id).is_some()
    }

    fn show_loading(&self, chart_id: &str) {
        self.set_overlay_display(chart_id, "flex");
    }

    fn hide_loading(&self, chart_id: &str) {
        self.set_overlay_display(chart_id, "none");
    }

    fn show_error(&self, chart_id: &str, message: &str) {
        let wrapper = self
            .document
            .query_selector(&format!("#{chart_id}-container .chart-wrapper"))
            .ok()
            .flatten();
        match wrapper {
            Some(wrapper) => {
                if let Ok(element) = self.document.create_element("div") {
                    element.set_class_name("error-message");
                    element.set_text_content(Some(message));
                    let _ = wrapper.append_child(&element);
                }
            }
            None => {
                log::warn!("chart wrapper for {chart_id} not found, cannot display error");
            }
        }
    }

    fn render(
        &self,
        chart_id: &str,
        spec: &ChartSpec,
        options: &ChartOptions,
    ) -> ChartsResult<()> {
        let canvas: HtmlCanvasElement = self
            .document
            .get_element_by_id(chart_id)
            .ok_or_else(|| ChartsError::network(format!("canvas #{chart_id} not found")))?
            .dyn_into()
            .map_err(|_| ChartsError::network(format!("#{chart_id} is not a canvas")))?;
        engine::render_chart(&canvas, spec, options)
    }
}
