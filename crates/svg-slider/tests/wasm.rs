//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use svg_slider::{
    Canvas, Color, DrawCommand, Layer, Point, StrokeStyle, SvgCanvas, SvgSlider, ViewBox,
};
use web_sys::Element;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn attach(tag: &str) -> Element {
    let doc = document();
    let element = if tag == "svg" {
        doc.create_element_ns(Some(SVG_NS), "svg").unwrap()
    } else {
        doc.create_element(tag).unwrap()
    };
    doc.body().unwrap().append_child(&element).unwrap();
    element
}

fn conf(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

/// Replace `console.log` with a recorder; returns the recorded lines and the
/// original function.
fn record_console_log() -> (js_sys::Array, JsValue) {
    let console = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("console")).unwrap();
    let original = js_sys::Reflect::get(&console, &JsValue::from_str("log")).unwrap();
    let lines = js_sys::Array::new();
    let record = js_sys::Function::new_with_args("line", "this.push(String(line))").bind(&lines);
    js_sys::Reflect::set(&console, &JsValue::from_str("log"), &record).unwrap();
    (lines, original)
}

fn restore_console_log(original: &JsValue) {
    let console = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("console")).unwrap();
    js_sys::Reflect::set(&console, &JsValue::from_str("log"), original).unwrap();
}

fn logged(lines: &js_sys::Array, needle: &str) -> bool {
    lines
        .iter()
        .filter_map(|line| line.as_string())
        .any(|line| line.contains(needle))
}

fn wheel(target: &Element, delta_y: f64) {
    let init = web_sys::WheelEventInit::new();
    init.set_delta_y(delta_y);
    let event = web_sys::WheelEvent::new_with_wheel_event_init_dict("wheel", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn layer_element(svg: &Element, layer: &str) -> Option<Element> {
    svg.query_selector(&format!(".slider-{layer}")).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[wasm_bindgen_test]
fn test_missing_element_is_an_error() {
    assert!(SvgSlider::new(None, JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_invalid_config_is_an_error() {
    let host = attach("svg");
    let result = SvgSlider::new(Some(host), conf(r#"{"position_min": 10, "position_max": 10}"#));
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_draws_into_existing_svg() {
    let svg = attach("svg");
    let _slider = SvgSlider::new(Some(svg.clone()), JsValue::UNDEFINED).unwrap();

    assert_eq!(svg.get_attribute("viewBox").as_deref(), Some("0 0 20 130"));
    assert_eq!(
        svg.get_attribute("preserveAspectRatio").as_deref(),
        Some("xMidYMid meet")
    );
    assert!(layer_element(&svg, "track-bg").is_some());
    assert!(layer_element(&svg, "bg").is_none());
    let label = layer_element(&svg, "value").unwrap();
    assert_eq!(label.text_content().as_deref(), Some("0"));
}

#[wasm_bindgen_test]
fn test_creates_svg_inside_other_elements() {
    let div = attach("div");
    let _slider = SvgSlider::new(Some(div.clone()), JsValue::UNDEFINED).unwrap();

    let svg = div.first_element_child().unwrap();
    assert_eq!(svg.tag_name().to_lowercase(), "svg");
    assert!(layer_element(&svg, "track").is_some());
}

#[wasm_bindgen_test]
fn test_data_config_overrides_caller() {
    let svg = attach("svg");
    svg.set_attribute("data-config", r#"{"value_max": 50, "initial_value": 40}"#)
        .unwrap();
    let slider = SvgSlider::new(
        Some(svg),
        conf(r#"{"value_max": 10, "geometry": "radial"}"#),
    )
    .unwrap();
    assert_eq!(slider.value(), 40.0);
}

#[wasm_bindgen_test]
fn test_malformed_data_config_is_ignored() {
    let svg = attach("svg");
    svg.set_attribute("data-config", "{not json").unwrap();
    let slider = SvgSlider::new(Some(svg), conf(r#"{"initial_value": 7}"#)).unwrap();
    assert_eq!(slider.value(), 7.0);
}

// ============================================================================
// Value and Config
// ============================================================================

#[wasm_bindgen_test]
fn test_value_setter_clamps_and_repaints() {
    let svg = attach("svg");
    let slider = SvgSlider::new(Some(svg.clone()), JsValue::UNDEFINED).unwrap();

    slider.set_value(250.0);
    assert_eq!(slider.value(), 100.0);
    let label = layer_element(&svg, "value").unwrap();
    assert_eq!(label.text_content().as_deref(), Some("100"));
}

#[wasm_bindgen_test]
fn test_format_callback_drives_label() {
    let svg = attach("svg");
    let conf = conf(r#"{"initial_value": 3}"#);
    let format = js_sys::Function::new_with_args("v", "return v + ' dB'");
    js_sys::Reflect::set(&conf, &JsValue::from_str("format"), &format).unwrap();

    let _slider = SvgSlider::new(Some(svg.clone()), conf).unwrap();
    let label = layer_element(&svg, "value").unwrap();
    assert_eq!(label.text_content().as_deref(), Some("3 dB"));
}

#[wasm_bindgen_test]
fn test_config_setter_replaces_layers() {
    let svg = attach("svg");
    let slider = SvgSlider::new(Some(svg.clone()), JsValue::UNDEFINED).unwrap();

    slider.set_config(conf(r#"{"value_text": false, "bg": true}"#));
    assert!(layer_element(&svg, "value").is_none());
    assert!(layer_element(&svg, "bg").is_some());
}

#[wasm_bindgen_test]
fn test_invalid_config_setter_keeps_slider() {
    let svg = attach("svg");
    let slider = SvgSlider::new(Some(svg.clone()), conf(r#"{"initial_value": 5}"#)).unwrap();

    slider.set_config(conf(r#"{"value_min": 10, "value_max": 3}"#));
    assert_eq!(slider.value(), 5.0);
    assert!(layer_element(&svg, "value").is_some());
}

// ============================================================================
// Notifications and Diagnostics
// ============================================================================

#[wasm_bindgen_test]
fn test_wheel_dispatches_change_event() {
    let svg = attach("svg");
    let slider = SvgSlider::new(Some(svg.clone()), JsValue::UNDEFINED).unwrap();

    let details = js_sys::Array::new();
    let listener = js_sys::Function::new_with_args("e", "this.push(e.detail)").bind(&details);
    svg.add_event_listener_with_callback("change", &listener).unwrap();

    wheel(&svg, 100.0);
    assert_eq!(slider.value(), 1.0);
    assert_eq!(details.length(), 1);
    assert_eq!(details.get(0).as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn test_throwing_onchange_does_not_break_slider() {
    let svg = attach("svg");
    let conf = conf("{}");
    let throws = js_sys::Function::new_with_args("v", "throw new Error('boom ' + v)");
    js_sys::Reflect::set(&conf, &JsValue::from_str("onchange"), &throws).unwrap();
    let slider = SvgSlider::new(Some(svg.clone()), conf).unwrap();

    wheel(&svg, 100.0);
    wheel(&svg, 100.0);
    assert_eq!(slider.value(), 2.0);
}

#[wasm_bindgen_test]
fn test_debug_mirrors_engine_diagnostics_to_console() {
    let svg = attach("svg");
    let slider = SvgSlider::new(Some(svg), JsValue::UNDEFINED).unwrap();
    let (lines, original) = record_console_log();

    slider.enable_debug();
    slider.set_value(30.0);
    let with_debug = logged(&lines, "set_position");

    lines.set_length(0);
    slider.disable_debug();
    slider.set_value(40.0);
    let after_disable = logged(&lines, "set_position");

    restore_console_log(&original);
    assert!(with_debug, "engine trace reaches console.log");
    assert!(!after_disable, "no engine trace once debug is off");
}

// ============================================================================
// SvgCanvas
// ============================================================================

#[wasm_bindgen_test]
fn test_canvas_keeps_layer_order() {
    let svg = attach("svg");
    let mut canvas = SvgCanvas::new(svg.clone()).unwrap();
    let style = StrokeStyle::new(Color::BLACK, 2.0);

    canvas.set_view_box(ViewBox::new(20.0, 100.0));
    canvas.submit(
        Layer::Cursor,
        DrawCommand::polyline(vec![Point::new(0.0, 5.0), Point::new(20.0, 5.0)], style),
    );
    canvas.submit(
        Layer::TrackBackground,
        DrawCommand::polyline(vec![Point::new(10.0, 0.0), Point::new(10.0, 100.0)], style),
    );

    let first = svg.first_element_child().unwrap();
    assert_eq!(first.get_attribute("class").as_deref(), Some("slider-track-bg"));
    assert_eq!(svg.child_element_count(), 2);
}

#[wasm_bindgen_test]
fn test_canvas_hides_and_clears() {
    let svg = attach("svg");
    let mut canvas = SvgCanvas::new(svg.clone()).unwrap();
    let line = DrawCommand::polyline(
        vec![Point::new(10.0, 100.0), Point::new(10.0, 40.0)],
        StrokeStyle::new(Color::BLACK, 10.0),
    );

    canvas.submit(Layer::Track, line.clone());
    let track = layer_element(&svg, "track").unwrap();
    assert_eq!(track.tag_name(), "path");
    assert_eq!(track.get_attribute("stroke-width").as_deref(), Some("10"));

    canvas.submit(Layer::Track, DrawCommand::Hidden);
    assert_eq!(track.get_attribute("display").as_deref(), Some("none"));

    canvas.submit(Layer::Track, line);
    assert!(track.get_attribute("display").is_none());

    canvas.clear();
    assert_eq!(svg.child_element_count(), 0);
}
