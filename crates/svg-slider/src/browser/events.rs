//! Browser event handling - converts DOM events to slider [`Event`]s.

use svg_slider_core::{Event, MouseButton, Point};
use web_sys::{MouseEvent, WheelEvent};

/// Convert a DOM mouse event.
///
/// Positions are client coordinates, the space `getBoundingClientRect`
/// reports the drawing surface in. Returns `None` for event types the slider
/// does not handle.
pub fn mouse_event_to_slider(event: &MouseEvent, event_type: &str) -> Option<Event> {
    let position = Point::new(event.client_x() as f32, event.client_y() as f32);
    let button = MouseButton::from(event.button());

    match event_type {
        "mousedown" => Some(Event::PointerDown { position, button }),
        "mousemove" => Some(Event::PointerMove { position }),
        "mouseup" => Some(Event::PointerUp { position, button }),
        _ => None,
    }
}

/// Convert a DOM wheel event.
pub fn wheel_event_to_slider(event: &WheelEvent) -> Event {
    Event::Wheel {
        delta_x: event.delta_x(),
        delta_y: event.delta_y(),
    }
}
