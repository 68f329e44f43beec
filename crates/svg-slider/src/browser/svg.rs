//! SVG renderer - keeps one SVG element per slider layer.

use std::collections::BTreeMap;
use std::ops::Bound;
use svg_slider_core::{BoxStyle, Canvas, DrawCommand, Layer, StrokeStyle, ViewBox};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Retained canvas over an `<svg>` element.
///
/// The first command submitted to a layer creates its element; later
/// commands update that element's attributes in place. Elements stay in
/// layer order whatever order they are created in.
pub struct SvgCanvas {
    document: Document,
    svg: Element,
    layers: BTreeMap<Layer, Element>,
}

impl SvgCanvas {
    /// Wrap an `<svg>` element.
    pub fn new(svg: Element) -> Result<Self, JsValue> {
        let document = svg
            .owner_document()
            .ok_or_else(|| JsValue::from_str("svg element has no document"))?;
        Ok(Self {
            document,
            svg,
            layers: BTreeMap::new(),
        })
    }

    /// The wrapped `<svg>` element.
    pub const fn svg(&self) -> &Element {
        &self.svg
    }

    fn tag(command: &DrawCommand) -> Option<&'static str> {
        match command {
            DrawCommand::Rect { .. } => Some("rect"),
            DrawCommand::Circle { .. } => Some("circle"),
            DrawCommand::Path { .. } | DrawCommand::Segments { .. } => Some("path"),
            DrawCommand::Text { .. } => Some("text"),
            DrawCommand::Hidden => None,
        }
    }

    /// Element for `layer`, created (or re-created with another tag) on demand.
    fn element(&mut self, layer: Layer, tag: &str) -> Result<Element, JsValue> {
        if let Some(existing) = self.layers.get(&layer) {
            if existing.tag_name().eq_ignore_ascii_case(tag) {
                return Ok(existing.clone());
            }
            existing.remove();
            self.layers.remove(&layer);
        }

        let element = self.document.create_element_ns(Some(SVG_NS), tag)?;
        element.set_attribute("class", &format!("slider-{}", layer.name()))?;

        let above = self
            .layers
            .range((Bound::Excluded(layer), Bound::Unbounded))
            .next()
            .map(|(_, e)| e.clone());
        match above {
            Some(next) => self.svg.insert_before(&element, Some(&next))?,
            None => self.svg.append_child(&element)?,
        };

        self.layers.insert(layer, element.clone());
        Ok(element)
    }

    fn apply(&mut self, layer: Layer, command: &DrawCommand) -> Result<(), JsValue> {
        let Some(tag) = Self::tag(command) else {
            if let Some(element) = self.layers.get(&layer) {
                element.set_attribute("display", "none")?;
            }
            return Ok(());
        };

        let el = self.element(layer, tag)?;
        el.remove_attribute("display")?;

        match command {
            DrawCommand::Rect { bounds, style } => {
                set_number(&el, "x", bounds.x)?;
                set_number(&el, "y", bounds.y)?;
                set_number(&el, "width", bounds.width)?;
                set_number(&el, "height", bounds.height)?;
                set_box_style(&el, style)?;
            }
            DrawCommand::Circle {
                center,
                radius,
                style,
            } => {
                set_number(&el, "cx", center.x)?;
                set_number(&el, "cy", center.y)?;
                set_number(&el, "r", *radius)?;
                set_box_style(&el, style)?;
            }
            DrawCommand::Path { style, .. } | DrawCommand::Segments { style, .. } => {
                el.set_attribute("d", &command.svg_path_data())?;
                el.set_attribute("fill", "none")?;
                set_stroke(&el, style)?;
            }
            DrawCommand::Text {
                content,
                position,
                style,
            } => {
                set_number(&el, "x", position.x)?;
                set_number(&el, "y", position.y)?;
                el.set_attribute("text-anchor", "middle")?;
                el.set_attribute("cursor", "default")?;
                el.set_attribute("font-family", &style.family)?;
                set_number(&el, "font-size", style.size)?;
                el.set_attribute("font-weight", style.weight.as_str())?;
                el.set_attribute("fill", &style.color.to_css())?;
                el.set_text_content(Some(content));
            }
            DrawCommand::Hidden => {}
        }
        Ok(())
    }
}

fn set_number(el: &Element, name: &str, value: f32) -> Result<(), JsValue> {
    el.set_attribute(name, &value.to_string())
}

fn set_stroke(el: &Element, style: &StrokeStyle) -> Result<(), JsValue> {
    el.set_attribute("stroke", &style.color.to_css())?;
    set_number(el, "stroke-width", style.width)?;
    el.set_attribute("stroke-linecap", style.cap.as_str())
}

fn set_box_style(el: &Element, style: &BoxStyle) -> Result<(), JsValue> {
    match style.fill {
        Some(color) => el.set_attribute("fill", &color.to_css())?,
        None => el.set_attribute("fill", "none")?,
    }
    match &style.stroke {
        Some(stroke) => set_stroke(el, stroke),
        None => el.set_attribute("stroke", "none"),
    }
}

impl Canvas for SvgCanvas {
    fn set_view_box(&mut self, view_box: ViewBox) {
        // pointer mapping assumes the default meet fit, whatever the page sets
        let result = self
            .svg
            .set_attribute("viewBox", &view_box.to_attr())
            .and_then(|()| self.svg.set_attribute("preserveAspectRatio", "xMidYMid meet"));
        if let Err(err) = result {
            web_sys::console::error_2(&JsValue::from_str("svg-slider: viewBox"), &err);
        }
    }

    fn submit(&mut self, layer: Layer, command: DrawCommand) {
        if let Err(err) = self.apply(layer, &command) {
            web_sys::console::error_2(
                &JsValue::from_str(&format!("svg-slider: cannot draw layer {}", layer.name())),
                &err,
            );
        }
    }

    fn clear(&mut self) {
        for element in std::mem::take(&mut self.layers).into_values() {
            element.remove();
        }
    }
}
