//! Rendering-engine boundary
//!
//! Builds the fully-specified Chart.js configuration object from a
//! [`ChartSpec`] and its [`ChartOptions`], then instantiates the engine over
//! a canvas. Config assembly is pure JSON and unit-tested natively; only the
//! instantiation and the tooltip/tick callbacks touch JS.

use ctc_charts_config::{AxisOptions, ChartOptions, LegendPosition, TickFormat};
use ctc_charts_shared::{ChartKind, ChartSpec, ChartsError, ChartsResult, Point, Series, TooltipRule};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// The external charting engine (Chart.js), loaded by the page
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    pub fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> ChartJs;
}

/// Hand a prepared chart to the engine. The returned engine object is owned
/// by the page (the canvas keeps it alive) and also backs the page-level
/// image export affordance via the canvas.
pub fn render_chart(
    canvas: &HtmlCanvasElement,
    spec: &ChartSpec,
    options: &ChartOptions,
) -> ChartsResult<()> {
    let config = build_config(spec, options);
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let config_js = config
        .serialize(&serializer)
        .map_err(|e| ChartsError::network(format!("config conversion failed: {e}")))?;

    attach_tooltip_callback(&config_js, options)?;
    attach_tick_callbacks(&config_js, options)?;

    let _chart = ChartJs::new(canvas, &config_js);
    Ok(())
}

/// Assemble the declarative part of the engine configuration.
pub fn build_config(spec: &ChartSpec, options: &ChartOptions) -> Value {
    let datasets: Vec<Value> = spec
        .series
        .iter()
        .map(|series| dataset_json(series, options.kind))
        .collect();

    let mut data = json!({ "datasets": datasets });
    if let Some(categories) = &spec.categories {
        data["labels"] = json!(categories);
    }

    json!({
        "type": options.kind.engine_type(),
        "data": data,
        "options": options_json(options),
    })
}

fn dataset_json(series: &Series, kind: ChartKind) -> Value {
    let mut dataset = json!({
        "label": series.label,
        "data": series.points,
        "backgroundColor": series.style.fill,
        "borderColor": series.style.border,
        "borderWidth": series.style.border_width,
    });
    if let Some(radius) = &series.style.radius {
        dataset["pointRadius"] = json!(radius);
    }
    match kind {
        ChartKind::Line => {
            dataset["tension"] = json!(0.1);
            dataset["fill"] = json!(true);
        }
        ChartKind::Pie => {
            dataset["hoverOffset"] = json!(4);
        }
        ChartKind::Scatter => {
            dataset["pointHoverRadius"] = json!(7);
        }
        ChartKind::Heatmap => {
            dataset["pointHoverRadius"] = json!(14);
        }
        _ => {}
    }
    dataset
}

fn options_json(options: &ChartOptions) -> Value {
    let mut plugins = json!({
        "legend": legend_json(options),
    });
    if let Some(title) = &options.title {
        plugins["title"] = json!({
            "display": true,
            "text": title,
            "font": { "size": 16 },
        });
    }
    if matches!(options.tooltip, TooltipRule::Index) {
        plugins["tooltip"] = json!({ "mode": "index", "intersect": false });
    }

    let mut rendered = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": plugins,
    });
    if options.kind != ChartKind::Pie {
        rendered["scales"] = json!({
            "x": axis_json(&options.x_axis),
            "y": axis_json(&options.y_axis),
        });
    }
    rendered
}

fn legend_json(options: &ChartOptions) -> Value {
    match options.legend.position {
        LegendPosition::Top => json!({
            "display": options.legend.display,
            "position": "top",
        }),
        LegendPosition::Right => json!({
            "display": options.legend.display,
            "position": "right",
            "align": "start",
        }),
    }
}

fn axis_json(axis: &AxisOptions) -> Value {
    let mut rendered = json!({});
    if let Some(labels) = &axis.category_labels {
        rendered["type"] = json!("category");
        rendered["labels"] = json!(labels);
    }
    if let Some(title) = &axis.title {
        rendered["title"] = json!({ "display": true, "text": title });
    }
    if axis.begin_at_zero {
        rendered["beginAtZero"] = json!(true);
    }
    if axis.stacked {
        rendered["stacked"] = json!(true);
    }
    let mut ticks = json!({});
    if let Some((max, min)) = axis.tick_rotation {
        ticks["maxRotation"] = json!(max);
        ticks["minRotation"] = json!(min);
    }
    if axis.hidden {
        ticks["display"] = json!(false);
        rendered["grid"] = json!({ "display": false });
    }
    if ticks.as_object().is_some_and(|o| !o.is_empty()) {
        rendered["ticks"] = ticks;
    }
    rendered
}

/// Attach the tooltip `label` callback for rules the engine cannot express
/// declaratively. Closures are forgotten: a chart lives for the page.
fn attach_tooltip_callback(config: &JsValue, options: &ChartOptions) -> ChartsResult<()> {
    if matches!(options.tooltip, TooltipRule::Index) {
        return Ok(());
    }
    let callbacks = ensure_path(config, &["options", "plugins", "tooltip", "callbacks"])?;
    let rule = options.tooltip.clone();
    let callback = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |context: JsValue| {
        tooltip_lines(&rule, &context)
    });
    js_sys::Reflect::set(&callbacks, &"label".into(), callback.as_ref())
        .map_err(|_| ChartsError::network("failed to attach tooltip callback"))?;
    callback.forget();
    Ok(())
}

fn tooltip_lines(rule: &TooltipRule, context: &JsValue) -> JsValue {
    let label = js_sys::Reflect::get(context, &"label".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let raw = js_sys::Reflect::get(context, &"raw".into()).unwrap_or(JsValue::UNDEFINED);

    let point: Point = if let Some(value) = raw.as_f64() {
        Point::Scalar(value)
    } else {
        match serde_wasm_bindgen::from_value(raw) {
            Ok(point) => point,
            Err(_) => return JsValue::UNDEFINED,
        }
    };

    let mut lines = rule.lines(&point, &label);
    match lines.len() {
        0 => JsValue::UNDEFINED,
        1 => JsValue::from_str(&lines.remove(0)),
        _ => {
            let array = js_sys::Array::new();
            for line in lines {
                array.push(&JsValue::from_str(&line));
            }
            array.into()
        }
    }
}

fn attach_tick_callbacks(config: &JsValue, options: &ChartOptions) -> ChartsResult<()> {
    for (key, axis) in [("x", &options.x_axis), ("y", &options.y_axis)] {
        if axis.tick_format == TickFormat::Plain {
            continue;
        }
        let ticks = ensure_path(config, &["options", "scales", key, "ticks"])?;
        let format = axis.tick_format;
        let callback = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |value: JsValue| {
            match value.as_f64() {
                Some(v) => JsValue::from_str(&format.format(v)),
                None => value,
            }
        });
        js_sys::Reflect::set(&ticks, &"callback".into(), callback.as_ref())
            .map_err(|_| ChartsError::network("failed to attach tick callback"))?;
        callback.forget();
    }
    Ok(())
}

/// Walk (or create) a chain of nested objects under `root`.
fn ensure_path(root: &JsValue, path: &[&str]) -> ChartsResult<JsValue> {
    let mut current = root.clone();
    for key in path {
        let next = js_sys::Reflect::get(&current, &JsValue::from_str(key))
            .map_err(|_| ChartsError::network("config object traversal failed"))?;
        current = if next.is_undefined() || next.is_null() {
            let created = js_sys::Object::new();
            js_sys::Reflect::set(&current, &JsValue::from_str(key), &created)
                .map_err(|_| ChartsError::network("config object traversal failed"))?;
            created.into()
        } else {
            next
        };
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctc_charts_config::presets;
    use ctc_charts_shared::{Paint, SeriesStyle};

    fn scalar_series(label: &str, values: &[f64]) -> Series {
        Series {
            label: label.to_string(),
            points: values.iter().copied().map(Point::Scalar).collect(),
            style: SeriesStyle {
                fill: Paint::PerPoint(vec!["hsla(0, 70%, 60%, 0.7)".into()]),
                border: Paint::PerPoint(vec!["hsla(0, 70%, 60%, 0.9)".into()]),
                border_width: 1.0,
                radius: None,
            },
        }
    }

    #[test]
    fn bar_config_carries_labels_and_colors() {
        let spec = ChartSpec::single_series(
            vec!["Rust".into()],
            scalar_series("Average CTC", &[650_000.0]),
        );
        let options = presets::for_chart("chart1_avg_ctc_per_skill").unwrap();
        let config = build_config(&spec, &options);

        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][0], "Rust");
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["label"], "Average CTC");
        assert_eq!(dataset["data"][0], 650_000.0);
        assert_eq!(dataset["backgroundColor"][0], "hsla(0, 70%, 60%, 0.7)");
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(
            config["options"]["plugins"]["tooltip"]["mode"],
            "index"
        );
    }

    #[test]
    fn pie_config_has_no_scales() {
        let spec = ChartSpec::single_series(
            vec!["Rust".into()],
            scalar_series("Skill Demand", &[10.0]),
        );
        let options = presets::for_chart("chart7_pie_skill_demand").unwrap();
        let config = build_config(&spec, &options);

        assert_eq!(config["type"], "pie");
        assert!(config["options"].get("scales").is_none());
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "right");
        assert_eq!(config["data"]["datasets"][0]["hoverOffset"], 4);
    }

    #[test]
    fn stacked_config_stacks_the_y_axis_only() {
        let spec = ChartSpec {
            categories: Some(vec!["Pune".into()]),
            series: vec![scalar_series("Rust", &[3.0])],
        };
        let options = presets::for_chart("chart12_stacked_skills_location").unwrap();
        let config = build_config(&spec, &options);
        assert_eq!(config["type"], "bar");
        assert_eq!(config["options"]["scales"]["y"]["stacked"], true);
        assert!(config["options"]["scales"]["x"].get("stacked").is_none());
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
    }

    #[test]
    fn heatmap_config_renders_category_axes_from_data() {
        let spec = ChartSpec {
            categories: None,
            series: vec![Series {
                label: "CTC by Skill and Location".into(),
                points: vec![Point::Cell {
                    x: "Pune".into(),
                    y: "Rust".into(),
                    value: 200_000.0,
                    formatted: "2.00 Lakhs".into(),
                }],
                style: SeriesStyle {
                    fill: Paint::PerPoint(vec!["rgba(255, 0, 0, 0.8)".into()]),
                    border: Paint::Uniform("rgba(0, 0, 0, 0.2)".into()),
                    border_width: 1.0,
                    radius: None,
                },
            }],
        };
        let options = presets::for_chart("chart11_heatmap_skill_location")
            .unwrap()
            .with_category_axes(vec!["Pune".into()], vec!["Rust".into()]);
        let config = build_config(&spec, &options);

        assert_eq!(config["type"], "scatter");
        assert_eq!(config["options"]["scales"]["x"]["type"], "category");
        assert_eq!(config["options"]["scales"]["x"]["labels"][0], "Pune");
        assert_eq!(config["options"]["scales"]["y"]["labels"][0], "Rust");
        let point = &config["data"]["datasets"][0]["data"][0];
        assert_eq!(point["v"], 200_000.0);
        assert_eq!(point["formatted"], "2.00 Lakhs");
    }

    #[test]
    fn bubble_config_hides_the_jitter_axis() {
        let spec = ChartSpec {
            categories: None,
            series: Vec::new(),
        };
        let options = presets::for_chart("chart13_bubble_company_ctc").unwrap();
        let config = build_config(&spec, &options);
        assert_eq!(config["options"]["scales"]["y"]["ticks"]["display"], false);
        assert_eq!(config["options"]["scales"]["y"]["grid"]["display"], false);
        assert_eq!(config["options"]["plugins"]["title"]["text"], "Top 100 Companies by CTC");
    }
}
