//! Slider widget: engine, controller, layout and renderer behind the
//! [`Widget`] trait.

use crate::config::SliderConfig;
use crate::engine::{SliderChanged, SliderEngine};
use crate::error::SliderError;
use crate::interaction::{InteractionController, Response};
use crate::layout::TrackLayout;
use crate::render::SliderRenderer;
use std::any::Any;
use svg_slider_core::{Canvas, Event, MouseButton, Rect, Widget};

/// A complete slider.
///
/// Hosts report the surface's client-space bounding box through
/// [`Widget::layout`], feed input through [`Slider::handle`] (or
/// [`Widget::event`]) and repaint when the returned [`Response`] asks for it.
#[derive(Debug)]
pub struct Slider {
    engine: SliderEngine,
    controller: InteractionController,
    layout: TrackLayout,
    /// Client-space bounds of the drawing surface
    bounds: Rect,
    test_id_value: Option<String>,
}

impl Slider {
    /// Create a slider.
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        let engine = SliderEngine::new(config)?;
        let layout = TrackLayout::new(engine.config());
        let mut slider = Self {
            engine,
            controller: InteractionController::new(),
            layout,
            bounds: Rect::default(),
            test_id_value: None,
        };
        slider.engine.refresh_changed();
        Ok(slider)
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Engine state.
    #[must_use]
    pub const fn engine(&self) -> &SliderEngine {
        &self.engine
    }

    /// Track geometry.
    #[must_use]
    pub const fn track_layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.engine.value()
    }

    /// Current value, formatted.
    #[must_use]
    pub fn display_value(&self) -> String {
        self.engine.display_value(None)
    }

    /// A drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Set the value from the host. Never notifies; repaint afterwards.
    pub fn set_value(&mut self, value: f64) {
        self.engine.set_value(value);
        self.engine.refresh_changed();
    }

    /// Replace the configuration. Clear and repaint afterwards
    /// (see [`paint_all`](Self::paint_all)).
    pub fn reconfigure(&mut self, config: SliderConfig) -> Result<(), SliderError> {
        self.engine.reconfigure(config)?;
        self.layout = TrackLayout::new(self.engine.config());
        self.engine.refresh_changed();
        Ok(())
    }

    /// Turn per-mutation trace output on or off.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.engine.set_verbose(verbose);
        tracing::debug!(verbose, "slider diagnostics");
    }

    /// Feed one input event.
    ///
    /// A drag only starts with the left button inside the bounds; any button
    /// release ends it.
    pub fn handle(&mut self, event: &Event) -> Response {
        let transform = self.layout.transform();
        let response = match *event {
            Event::PointerDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(&position) => self.controller.pointer_down(
                &mut self.engine,
                &transform,
                self.bounds,
                position,
            ),
            Event::PointerDown { .. } => Response::default(),
            Event::PointerMove { position } => {
                self.controller
                    .pointer_move(&mut self.engine, &transform, position)
            }
            Event::PointerUp { .. } => self.controller.pointer_up(),
            Event::Wheel { delta_y, .. } => self.controller.wheel(&mut self.engine, delta_y),
        };
        if response.redraw {
            self.engine.refresh_changed();
        }
        response
    }

    /// Clear the canvas and paint every layer from scratch.
    pub fn paint_all(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
        self.paint(canvas);
    }
}

impl Widget for Slider {
    fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.set_view_box(self.layout.view_box());
        SliderRenderer::new(&self.engine, &self.layout).paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.handle(event)
            .changed
            .map(|changed: SliderChanged| Box::new(changed) as Box<dyn Any + Send>)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
