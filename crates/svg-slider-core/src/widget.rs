//! Widget trait and the canvas seam widgets paint through.
//!
//! Widgets follow a layout-event-paint cycle:
//!
//! 1. **Layout**: the host reports the client-space bounds of the drawing surface
//! 2. **Event**: input is turned into state changes and, possibly, a message
//! 3. **Paint**: the widget submits one draw command per layer to a [`Canvas`]

use crate::draw::{DrawCommand, Layer};
use crate::event::Event;
use crate::geometry::{Rect, ViewBox};
use std::any::Any;

/// Core widget trait.
pub trait Widget {
    /// Record the client-space bounds of the drawing surface.
    fn layout(&mut self, bounds: Rect);

    /// Submit draw commands for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, returning a message when it produced one.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }
}

/// Retained drawing surface.
///
/// Each [`Layer`] holds at most one command; submitting to a layer that
/// already shows something updates it in place.
pub trait Canvas {
    /// Set the surface's user coordinate system.
    fn set_view_box(&mut self, view_box: ViewBox);

    /// Show `command` on `layer`, replacing the previous content.
    fn submit(&mut self, layer: Layer, command: DrawCommand);

    /// Remove every layer.
    fn clear(&mut self);
}
