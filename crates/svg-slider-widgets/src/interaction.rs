//! Pointer and wheel handling.
//!
//! [`InteractionController`] turns raw input into engine updates. It owns the
//! only state that lives for a gesture (the surface rectangle captured at
//! pointer-down) and the wheel normalisation base, which lives as long as the
//! slider does.

use crate::config::Rotation;
use crate::engine::{SliderChanged, SliderEngine};
use svg_slider_core::{Point, Rect, ViewBox};

/// Maps a client-space pointer location to a slider position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionTransform {
    /// Height along a vertical track.
    Linear {
        /// Surface coordinate system
        view_box: ViewBox,
        /// View box y of `position_max`
        top: f32,
        /// View box y of `position_min`
        bottom: f32,
        /// Lowest position
        position_min: f64,
        /// Highest position
        position_max: f64,
    },
    /// Angle around a center; positions are degrees.
    Angular {
        /// Surface coordinate system
        view_box: ViewBox,
        /// Center of the track in view box units
        center: Point,
        /// Polar angle of position 0
        zero_at: f64,
        /// Direction positions grow in
        rotation: Rotation,
    },
}

impl PositionTransform {
    /// Unclamped position under `client`, with `surface` as the client-space
    /// rectangle of the drawing surface.
    ///
    /// Returns `None` for non-finite input or a surface without area.
    #[must_use]
    pub fn position(&self, surface: &Rect, client: Point) -> Option<f64> {
        if !client.is_finite() {
            return None;
        }
        match *self {
            Self::Linear {
                view_box,
                top,
                bottom,
                position_min,
                position_max,
            } => {
                let (_, y) = view_box.map_client_point(surface, client)?;
                let span = f64::from(bottom - top);
                if span <= 0.0 {
                    return None;
                }
                // scale before dividing so half steps stay exact
                Some((f64::from(bottom) - y) * (position_max - position_min) / span + position_min)
            }
            Self::Angular {
                view_box,
                center,
                zero_at,
                rotation,
            } => {
                let (x, y) = view_box.map_client_point(surface, client)?;
                let mut dx = x - f64::from(center.x);
                let dy = f64::from(center.y) - y;
                if rotation == Rotation::Ccw {
                    dx = -dx;
                }
                let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
                Some((zero_at - angle).rem_euclid(360.0))
            }
        }
    }
}

/// What the host should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Response {
    /// State changed in a way that needs a repaint
    pub redraw: bool,
    /// Suppress the surface's default handling (page scroll on wheel)
    pub prevent_default: bool,
    /// Value change to report, after the repaint
    pub changed: Option<SliderChanged>,
}

impl Response {
    const IGNORED: Self = Self {
        redraw: false,
        prevent_default: false,
        changed: None,
    };

    const fn moved(changed: Option<SliderChanged>) -> Self {
        Self {
            redraw: true,
            prevent_default: true,
            changed,
        }
    }
}

/// Gesture and wheel state for one slider.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    /// Surface rectangle captured when the current drag started
    drag_origin: Option<Rect>,
    /// Smallest non-zero wheel magnitude seen so far
    min_wheel_delta: Option<f64>,
}

impl InteractionController {
    /// Create a controller with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Surface rectangle the current drag uses.
    #[must_use]
    pub const fn drag_origin(&self) -> Option<Rect> {
        self.drag_origin
    }

    /// Current wheel normalisation base.
    #[must_use]
    pub const fn min_wheel_delta(&self) -> Option<f64> {
        self.min_wheel_delta
    }

    /// Start a drag and jump to the pointer.
    ///
    /// `surface` is captured for the whole gesture. A pointer-down during a
    /// drag restarts it with the new rectangle.
    pub fn pointer_down(
        &mut self,
        engine: &mut SliderEngine,
        transform: &PositionTransform,
        surface: Rect,
        client: Point,
    ) -> Response {
        if self.drag_origin.is_some() {
            tracing::debug!("pointer down during drag, restarting gesture");
        } else {
            tracing::debug!(x = client.x, y = client.y, "drag start");
        }
        self.drag_origin = Some(surface);
        self.update(engine, transform, surface, client)
    }

    /// Follow the pointer while dragging; ignored otherwise.
    pub fn pointer_move(
        &mut self,
        engine: &mut SliderEngine,
        transform: &PositionTransform,
        client: Point,
    ) -> Response {
        match self.drag_origin {
            Some(surface) => self.update(engine, transform, surface, client),
            None => Response::IGNORED,
        }
    }

    /// End the drag. Never moves the slider.
    pub fn pointer_up(&mut self) -> Response {
        if self.drag_origin.take().is_some() {
            tracing::debug!("drag end");
        }
        Response::IGNORED
    }

    /// Step by a wheel event.
    ///
    /// The increment is `delta_y` in units of the smallest magnitude seen so
    /// far, so one notch moves one position whatever units the device
    /// reports. A zero or non-finite delta does nothing.
    pub fn wheel(&mut self, engine: &mut SliderEngine, delta_y: f64) -> Response {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return Response {
                prevent_default: true,
                ..Response::IGNORED
            };
        }

        let magnitude = delta_y.abs();
        let base = match self.min_wheel_delta {
            Some(base) if base <= magnitude => base,
            previous => {
                tracing::debug!(?previous, base = magnitude, "wheel normalisation base");
                self.min_wheel_delta = Some(magnitude);
                magnitude
            }
        };

        let config = engine.config();
        let increment =
            delta_y / base * config.mouse_wheel_direction * config.mouse_wheel_acceleration;
        Response::moved(engine.inc_position(increment))
    }

    fn update(
        &self,
        engine: &mut SliderEngine,
        transform: &PositionTransform,
        surface: Rect,
        client: Point,
    ) -> Response {
        let Some(position) = transform.position(&surface, client) else {
            if engine.is_verbose() {
                tracing::trace!(x = client.x, y = client.y, "pointer outside any position");
            }
            return Response::IGNORED;
        };
        Response::moved(engine.set_position(position, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SliderConfig, TrackGeometry};
    use crate::layout::TrackLayout;

    fn setup(config: SliderConfig) -> (SliderEngine, PositionTransform, InteractionController) {
        let transform = TrackLayout::new(&config).transform();
        let engine = SliderEngine::new(config).unwrap();
        (engine, transform, InteractionController::new())
    }

    /// 20 x 100 view box (no label) shown at 40 x 200 pixels, offset (100, 50).
    fn linear() -> SliderConfig {
        let mut config = SliderConfig::default();
        config.value_text = false;
        config
    }

    const SURFACE: Rect = Rect::new(100.0, 50.0, 40.0, 200.0);

    // =========================================================================
    // Transforms
    // =========================================================================

    #[test]
    fn test_linear_transform() {
        let transform = TrackLayout::new(&linear()).transform();
        let at = |y| transform.position(&SURFACE, Point::new(120.0, y));
        assert_eq!(at(250.0), Some(0.0));
        assert_eq!(at(150.0), Some(50.0));
        assert_eq!(at(50.0), Some(100.0));
        // beyond the ends is left for the engine to clamp
        assert_eq!(at(0.0), Some(125.0));
    }

    #[test]
    fn test_linear_transform_on_letterboxed_surface() {
        // 20 x 100 view box centered in a square box, 40 px of slack each side
        let transform = TrackLayout::new(&linear()).transform();
        let square = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(transform.position(&square, Point::new(50.0, 25.0)), Some(75.0));
        assert_eq!(transform.position(&square, Point::new(45.0, 100.0)), Some(0.0));
    }

    #[test]
    fn test_linear_transform_keeps_half_steps() {
        // label band makes the view box 20 x 130, shown at 2x
        let transform = TrackLayout::new(&SliderConfig::default()).transform();
        let surface = Rect::new(100.0, 100.0, 40.0, 260.0);
        assert_eq!(transform.position(&surface, Point::new(120.0, 199.0)), Some(50.5));

        let (mut engine, _, mut ctl) = setup(SliderConfig::default());
        let r = ctl.pointer_down(&mut engine, &transform, surface, Point::new(120.0, 199.0));
        assert_eq!(r.changed, Some(SliderChanged { value: 51.0 }));
    }

    #[test]
    fn test_transform_rejects_bad_input() {
        let transform = TrackLayout::new(&linear()).transform();
        assert_eq!(transform.position(&SURFACE, Point::new(f32::NAN, 10.0)), None);
        assert_eq!(
            transform.position(&Rect::new(0.0, 0.0, 0.0, 0.0), Point::new(1.0, 1.0)),
            None
        );
    }

    #[test]
    fn test_angular_transform() {
        let mut config = SliderConfig::default().with_geometry(TrackGeometry::Radial);
        let surface = Rect::new(0.0, 0.0, 200.0, 200.0);

        let transform = TrackLayout::new(&config).transform();
        let left = transform.position(&surface, Point::new(20.0, 100.0)).unwrap();
        let top = transform.position(&surface, Point::new(100.0, 20.0)).unwrap();
        assert!((left - 90.0).abs() < 1e-4);
        assert!((top - 180.0).abs() < 1e-4);

        config.rotation = Rotation::Ccw;
        let transform = TrackLayout::new(&config).transform();
        let right = transform.position(&surface, Point::new(180.0, 100.0)).unwrap();
        assert!((right - 90.0).abs() < 1e-4);
    }

    // =========================================================================
    // Drag Gesture
    // =========================================================================

    #[test]
    fn test_pointer_down_jumps_and_notifies() {
        let (mut engine, transform, mut ctl) = setup(linear());
        let r = ctl.pointer_down(&mut engine, &transform, SURFACE, Point::new(120.0, 150.0));

        assert!(ctl.is_dragging());
        assert!(r.redraw);
        assert_eq!(r.changed, Some(SliderChanged { value: 50.0 }));
        assert_eq!(engine.value(), 50.0);
    }

    #[test]
    fn test_move_uses_rect_captured_at_down() {
        let (mut engine, transform, mut ctl) = setup(linear());
        ctl.pointer_down(&mut engine, &transform, SURFACE, Point::new(120.0, 250.0));

        let r = ctl.pointer_move(&mut engine, &transform, Point::new(120.0, 70.0));
        assert_eq!(r.changed, Some(SliderChanged { value: 90.0 }));
        assert_eq!(ctl.drag_origin(), Some(SURFACE));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let (mut engine, transform, mut ctl) = setup(linear());
        let r = ctl.pointer_move(&mut engine, &transform, Point::new(120.0, 70.0));
        assert_eq!(r, Response::default());
        assert_eq!(engine.value(), 0.0);
    }

    #[test]
    fn test_pointer_up_ends_drag_without_moving() {
        let (mut engine, transform, mut ctl) = setup(linear());
        ctl.pointer_down(&mut engine, &transform, SURFACE, Point::new(120.0, 150.0));

        let r = ctl.pointer_up();
        assert!(!ctl.is_dragging());
        assert!(!r.redraw);
        assert_eq!(engine.value(), 50.0);

        ctl.pointer_move(&mut engine, &transform, Point::new(120.0, 50.0));
        assert_eq!(engine.value(), 50.0);
    }

    #[test]
    fn test_drag_past_end_clamps_and_stops_notifying() {
        let (mut engine, transform, mut ctl) = setup(linear());
        ctl.pointer_down(&mut engine, &transform, SURFACE, Point::new(120.0, 50.0));
        assert_eq!(engine.value(), 100.0);

        let r = ctl.pointer_move(&mut engine, &transform, Point::new(120.0, -500.0));
        assert_eq!(r.changed, None);
        assert_eq!(engine.position(), 100.0);
    }

    #[test]
    fn test_pointer_down_during_drag_restarts() {
        let (mut engine, transform, mut ctl) = setup(linear());
        ctl.pointer_down(&mut engine, &transform, SURFACE, Point::new(120.0, 150.0));

        let moved = Rect::new(0.0, 0.0, 20.0, 100.0);
        ctl.pointer_down(&mut engine, &transform, moved, Point::new(10.0, 75.0));
        assert_eq!(ctl.drag_origin(), Some(moved));
        assert_eq!(engine.value(), 25.0);
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let (mut engine, transform, mut ctl) = setup(linear());
        let r = ctl.pointer_down(&mut engine, &transform, SURFACE, Point::new(f32::NAN, 0.0));
        assert!(!r.redraw);
        assert_eq!(engine.position(), 0.0);
    }

    // =========================================================================
    // Wheel
    // =========================================================================

    #[test]
    fn test_wheel_base_is_running_minimum() {
        let (mut engine, _, mut ctl) = setup(SliderConfig::default());
        ctl.wheel(&mut engine, 40.0);
        assert_eq!(ctl.min_wheel_delta(), Some(40.0));
        ctl.wheel(&mut engine, 10.0);
        assert_eq!(ctl.min_wheel_delta(), Some(10.0));
        ctl.wheel(&mut engine, 100.0);
        assert_eq!(ctl.min_wheel_delta(), Some(10.0));
    }

    #[test]
    fn test_wheel_steps_in_units_of_base() {
        let (mut engine, _, mut ctl) = setup(SliderConfig::default());
        let r = ctl.wheel(&mut engine, 53.0);
        assert!(r.prevent_default);
        assert_eq!(r.changed, Some(SliderChanged { value: 1.0 }));

        ctl.wheel(&mut engine, 106.0);
        assert_eq!(engine.position(), 3.0);

        ctl.wheel(&mut engine, -53.0);
        assert_eq!(engine.position(), 2.0);
    }

    #[test]
    fn test_wheel_direction_and_acceleration() {
        let mut config = SliderConfig::default().with_initial_value(50.0);
        config.mouse_wheel_direction = -1.0;
        config.mouse_wheel_acceleration = 5.0;
        let (mut engine, _, mut ctl) = setup(config);

        ctl.wheel(&mut engine, 3.0);
        assert_eq!(engine.position(), 45.0);
    }

    #[test]
    fn test_zero_wheel_delta_is_a_no_op() {
        let (mut engine, _, mut ctl) = setup(SliderConfig::default());
        let r = ctl.wheel(&mut engine, 0.0);
        assert!(r.prevent_default);
        assert!(!r.redraw);
        assert_eq!(ctl.min_wheel_delta(), None);
        assert_eq!(engine.position(), 0.0);
    }
}
