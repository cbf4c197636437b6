//! WASM bridge for the CTC Charts dashboard
//!
//! Entry point the page calls after load: builds the data client from the
//! page's own origin and starts one independent load task per chart.

use ctc_charts_data::ChartDataClient;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod charts;
pub mod dom;
pub mod engine;
pub mod lifecycle;

use dom::DomHost;

#[wasm_bindgen]
pub struct Dashboard {
    client: Rc<ChartDataClient>,
    host: Rc<DomHost>,
}

#[wasm_bindgen]
impl Dashboard {
    /// Construct against the window's own origin.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Dashboard, JsValue> {
        init_diagnostics();

        let origin = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window object available"))?
            .location()
            .origin()?;

        let host = DomHost::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Dashboard {
            client: Rc::new(ChartDataClient::new(origin)),
            host: Rc::new(host),
        })
    }

    /// Start every chart's load cycle. Returns immediately; charts render
    /// (or show their inline error) as their tasks complete.
    pub fn run(&self) {
        log::info!("starting dashboard chart tasks");
        charts::spawn_all(self.client.clone(), self.host.clone());
    }
}

fn init_diagnostics() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    });
}
