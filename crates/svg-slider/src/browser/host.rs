//! JavaScript-facing slider handle.

use super::console::{self, log, DebugGuard};
use super::events::{mouse_event_to_slider, wheel_event_to_slider};
use super::svg::SvgCanvas;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::rc::Rc;
use svg_slider_core::{Event, Rect, Widget};
use svg_slider_widgets::{
    declarative_overlay, Response, Slider, SliderConfig, SliderError, ValueFormat,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CustomEvent, CustomEventInit, Document, Element, MouseEvent,
    WheelEvent,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn js_error(err: &SliderError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Plain-data part of a JS configuration object (functions are dropped).
fn config_object(conf: &JsValue) -> Map<String, Value> {
    if conf.is_undefined() || conf.is_null() {
        return Map::new();
    }
    let json = js_sys::JSON::stringify(conf)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default();
    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// A function-valued member of a JS configuration object.
fn config_function(conf: &JsValue, name: &str) -> Option<js_sys::Function> {
    if !conf.is_object() {
        return None;
    }
    js_sys::Reflect::get(conf, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
}

fn js_format(format: js_sys::Function) -> ValueFormat {
    ValueFormat::new(move |v| {
        match format.call1(&JsValue::NULL, &JsValue::from_f64(v)) {
            Ok(out) => out
                .as_string()
                .or_else(|| out.as_f64().map(|n| n.to_string()))
                .unwrap_or_else(|| v.to_string()),
            Err(_) => v.to_string(),
        }
    })
}

fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Where change notifications go.
#[derive(Clone)]
struct ChangeTarget {
    host: Element,
    onchange: Option<js_sys::Function>,
}

impl ChangeTarget {
    /// `change` event on the host element, then the `onchange` callback.
    fn send(&self, value: f64) {
        let detail = JsValue::from_f64(value);
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let dispatched = CustomEvent::new_with_event_init_dict("change", &init)
            .and_then(|event| self.host.dispatch_event(&event));
        if let Err(err) = dispatched {
            console::error("cannot dispatch change event", &err);
        }
        if let Some(callback) = &self.onchange {
            if let Err(err) = callback.call1(&JsValue::NULL, &detail) {
                console::error("onchange threw", &err);
            }
        }
    }
}

struct Inner {
    slider: Slider,
    canvas: SvgCanvas,
    document: Document,
    target: ChangeTarget,
    /// Construction-time configuration object
    conf: JsValue,
    /// Present while console diagnostics are on
    debug: Option<DebugGuard>,
    /// Document-level listeners, registered only during a drag
    on_move: Option<js_sys::Function>,
    on_up: Option<js_sys::Function>,
    listening: bool,
}

impl Inner {
    fn trace(&self, msg: &str) {
        if self.debug.is_some() {
            log(msg);
        }
    }

    /// Feed an event and repaint if needed.
    fn apply(&mut self, event: &Event) -> Response {
        let response = self.slider.handle(event);
        if response.redraw {
            self.slider.paint(&mut self.canvas);
        }
        response
    }

    fn listen_document(&mut self) {
        if self.listening {
            return;
        }
        let (Some(on_move), Some(on_up)) = (&self.on_move, &self.on_up) else {
            return;
        };
        let added = self
            .document
            .add_event_listener_with_callback("mousemove", on_move)
            .and_then(|()| self.document.add_event_listener_with_callback("mouseup", on_up));
        match added {
            Ok(()) => self.listening = true,
            Err(err) => {
                console::error("cannot track the drag", &err);
                self.remove_document_listeners();
            }
        }
    }

    fn unlisten_document(&mut self) {
        if self.listening {
            self.remove_document_listeners();
            self.listening = false;
        }
    }

    fn remove_document_listeners(&self) {
        if let (Some(on_move), Some(on_up)) = (&self.on_move, &self.on_up) {
            let removed = self
                .document
                .remove_event_listener_with_callback("mousemove", on_move)
                .and_then(|()| {
                    self.document
                        .remove_event_listener_with_callback("mouseup", on_up)
                });
            if let Err(err) = removed {
                console::error("cannot remove drag listeners", &err);
            }
        }
    }
}

/// Build a configuration from the caller's object and an overlay, taking
/// `format` from the first object that has one.
fn build_config(
    caller: &JsValue,
    overlay: &Map<String, Value>,
    overlay_source: Option<&JsValue>,
) -> Result<SliderConfig, SliderError> {
    let mut config = SliderConfig::from_layers(&config_object(caller), overlay)?;
    let format = overlay_source
        .and_then(|conf| config_function(conf, "format"))
        .or_else(|| config_function(caller, "format"));
    if let Some(format) = format {
        config.format = js_format(format);
    }
    Ok(config)
}

/// A slider attached to a host element.
///
/// ```javascript
/// const slider = new SvgSlider(document.getElementById('volume'), {
///     value_max: 11,
///     onchange: v => console.log(v),
/// });
/// slider.value = 5;
/// ```
#[wasm_bindgen]
pub struct SvgSlider {
    inner: Rc<RefCell<Inner>>,
    svg: Element,
    mousedown: Closure<dyn FnMut(MouseEvent)>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    _mousemove: Closure<dyn FnMut(MouseEvent)>,
    _mouseup: Closure<dyn FnMut(MouseEvent)>,
}

#[wasm_bindgen]
impl SvgSlider {
    /// Attach a slider to `elem` (an `<svg>`, or any element to hold one).
    ///
    /// Configuration precedence: defaults, palette, `conf`, then the
    /// element's `data-config` attribute.
    #[wasm_bindgen(constructor)]
    pub fn new(elem: Option<Element>, conf: JsValue) -> Result<SvgSlider, JsValue> {
        console_error_panic_hook::set_once();

        let host = elem.ok_or_else(|| js_error(&SliderError::MissingSurface))?;
        let document = host
            .owner_document()
            .ok_or_else(|| js_error(&SliderError::MissingSurface))?;

        let svg = if host.tag_name().eq_ignore_ascii_case("svg") {
            host.clone()
        } else {
            let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
            host.append_child(&svg)?;
            svg
        };

        let declarative = declarative_overlay(host.get_attribute("data-config").as_deref());
        let config = build_config(&conf, &declarative, None).map_err(|e| js_error(&e))?;
        let slider = Slider::new(config).map_err(|e| js_error(&e))?;

        let mut canvas = SvgCanvas::new(svg.clone())?;
        slider.paint_all(&mut canvas);

        let inner = Rc::new(RefCell::new(Inner {
            slider,
            canvas,
            document,
            target: ChangeTarget {
                host,
                onchange: config_function(&conf, "onchange"),
            },
            conf,
            debug: None,
            on_move: None,
            on_up: None,
            listening: false,
        }));

        let mousedown: Closure<dyn FnMut(MouseEvent)> = {
            let inner = Rc::clone(&inner);
            Closure::new(move |e: MouseEvent| {
                e.prevent_default();
                let Some(event) = mouse_event_to_slider(&e, "mousedown") else {
                    return;
                };
                let (response, target) = {
                    let mut state = inner.borrow_mut();
                    let bounds = client_rect(state.canvas.svg());
                    state.slider.layout(bounds);
                    let response = state.apply(&event);
                    if state.slider.is_dragging() {
                        state.trace("startDrag");
                        state.listen_document();
                    }
                    (response, state.target.clone())
                };
                if let Some(changed) = response.changed {
                    target.send(changed.value);
                }
            })
        };

        let mousemove: Closure<dyn FnMut(MouseEvent)> = {
            let inner = Rc::clone(&inner);
            Closure::new(move |e: MouseEvent| {
                e.prevent_default();
                let Some(event) = mouse_event_to_slider(&e, "mousemove") else {
                    return;
                };
                let (response, target) = {
                    let mut state = inner.borrow_mut();
                    (state.apply(&event), state.target.clone())
                };
                if let Some(changed) = response.changed {
                    target.send(changed.value);
                }
            })
        };

        let mouseup: Closure<dyn FnMut(MouseEvent)> = {
            let inner = Rc::clone(&inner);
            Closure::new(move |e: MouseEvent| {
                let Some(event) = mouse_event_to_slider(&e, "mouseup") else {
                    return;
                };
                let mut state = inner.borrow_mut();
                state.apply(&event);
                state.unlisten_document();
                state.trace("endDrag");
            })
        };

        let wheel: Closure<dyn FnMut(WheelEvent)> = {
            let inner = Rc::clone(&inner);
            Closure::new(move |e: WheelEvent| {
                let event = wheel_event_to_slider(&e);
                let (response, target) = {
                    let mut state = inner.borrow_mut();
                    (state.apply(&event), state.target.clone())
                };
                if response.prevent_default {
                    e.prevent_default();
                }
                if let Some(changed) = response.changed {
                    target.send(changed.value);
                }
            })
        };

        {
            let mut state = inner.borrow_mut();
            state.on_move = Some(mousemove.as_ref().unchecked_ref::<js_sys::Function>().clone());
            state.on_up = Some(mouseup.as_ref().unchecked_ref::<js_sys::Function>().clone());
        }

        svg.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        svg.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            inner,
            svg,
            mousedown,
            wheel,
            _mousemove: mousemove,
            _mouseup: mouseup,
        })
    }

    /// Current value.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.inner.borrow().slider.value()
    }

    /// Set the value and repaint. Does not fire `change`.
    #[wasm_bindgen(setter)]
    pub fn set_value(&self, value: f64) {
        let mut state = self.inner.borrow_mut();
        state.slider.set_value(value);
        let Inner { slider, canvas, .. } = &mut *state;
        slider.paint(canvas);
    }

    /// Replace the configuration and repaint from scratch.
    ///
    /// The new object is layered over the construction-time one. An invalid
    /// configuration is reported on the console and the old one kept.
    #[wasm_bindgen(setter)]
    pub fn set_config(&self, new_config: JsValue) {
        let mut state = self.inner.borrow_mut();
        let overlay = config_object(&new_config);
        let result = build_config(&state.conf, &overlay, Some(&new_config))
            .and_then(|config| state.slider.reconfigure(config));
        match result {
            Ok(()) => {
                if let Some(onchange) = config_function(&new_config, "onchange") {
                    state.target.onchange = Some(onchange);
                }
                let Inner { slider, canvas, .. } = &mut *state;
                slider.paint_all(canvas);
                state.trace("config replaced");
            }
            Err(err) => console::error("invalid configuration", &js_error(&err)),
        }
    }

    /// Log diagnostics to the console.
    #[wasm_bindgen(js_name = enableDebug)]
    pub fn enable_debug(&self) {
        let mut state = self.inner.borrow_mut();
        if state.debug.is_none() {
            state.debug = Some(DebugGuard::new());
        }
        state.slider.set_verbose(true);
    }

    /// Stop logging diagnostics.
    #[wasm_bindgen(js_name = disableDebug)]
    pub fn disable_debug(&self) {
        let mut state = self.inner.borrow_mut();
        state.debug = None;
        state.slider.set_verbose(false);
    }
}

impl Drop for SvgSlider {
    fn drop(&mut self) {
        let removed = self
            .svg
            .remove_event_listener_with_callback("mousedown", self.mousedown.as_ref().unchecked_ref())
            .and_then(|()| {
                self.svg
                    .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref())
            });
        if let Err(err) = removed {
            console::error("cannot remove slider listeners", &err);
        }
        if let Ok(mut state) = self.inner.try_borrow_mut() {
            state.unlisten_document();
            state.debug = None;
        }
    }
}
