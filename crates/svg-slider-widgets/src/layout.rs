//! Track geometry in view box units.
//!
//! A [`TrackLayout`] is derived from the configuration only; it never looks
//! at the current position. Both the renderer and the pointer transform use
//! it, so what is drawn and what is hit always agree.

use crate::config::{Rotation, SliderConfig, TrackGeometry};
use crate::interaction::PositionTransform;
use svg_slider_core::{LineCap, Point, ViewBox};

/// Length of a linear track, and side of the radial view box.
const TRACK_SPAN: f32 = 100.0;

/// Narrowest linear view box.
const MIN_LINEAR_WIDTH: f32 = 20.0;

/// Largest angle covered by one segment of a sampled arc.
const ARC_STEP_DEG: f64 = 5.0;

const FULL_TURN_DEG: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Track {
    /// Vertical; `position_min` at `bottom`
    Linear { x: f32, top: f32, bottom: f32 },
    /// Circle around `center`
    Radial {
        center: Point,
        radius: f32,
        zero_at: f64,
        rotation: Rotation,
    },
}

/// Where the track, markers and label sit inside the view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    track: Track,
    view_box: ViewBox,
    label: Point,
    position_min: f64,
    position_max: f64,
}

impl TrackLayout {
    /// Compute the layout for a configuration.
    #[must_use]
    pub fn new(config: &SliderConfig) -> Self {
        let reach = reach(config);
        match config.geometry {
            TrackGeometry::Linear => {
                let x = reach.max(MIN_LINEAR_WIDTH / 2.0);

                let mut pad = if config.cursor {
                    config.cursor_length / 2.0
                } else {
                    0.0
                };
                if config.linecap != LineCap::Butt {
                    pad = pad.max(config.track_width.max(config.track_bg_width) / 2.0);
                }

                let (height, label) = if config.value_text {
                    let band = config.font_size * 1.2;
                    (TRACK_SPAN + band, Point::new(x, TRACK_SPAN + config.font_size))
                } else {
                    (TRACK_SPAN, Point::new(x, TRACK_SPAN))
                };

                Self {
                    track: Track::Linear {
                        x,
                        top: pad,
                        bottom: TRACK_SPAN - pad,
                    },
                    view_box: ViewBox::new(x * 2.0, height),
                    label,
                    position_min: config.position_min,
                    position_max: config.position_max,
                }
            }
            TrackGeometry::Radial => {
                let half = TRACK_SPAN / 2.0;
                let center = Point::new(half, half);
                Self {
                    track: Track::Radial {
                        center,
                        radius: (half - reach - 1.0).max(1.0),
                        zero_at: config.zero_at,
                        rotation: config.rotation,
                    },
                    view_box: ViewBox::new(TRACK_SPAN, TRACK_SPAN),
                    label: Point::new(half, config.font_size.mul_add(1.0 / 3.0, half)),
                    position_min: config.position_min,
                    position_max: config.position_max,
                }
            }
        }
    }

    /// The surface's coordinate system.
    #[must_use]
    pub const fn view_box(&self) -> ViewBox {
        self.view_box
    }

    /// Track shape.
    #[must_use]
    pub const fn geometry(&self) -> TrackGeometry {
        match self.track {
            Track::Linear { .. } => TrackGeometry::Linear,
            Track::Radial { .. } => TrackGeometry::Radial,
        }
    }

    /// Linear: midpoint of the track. Radial: center of the circle.
    #[must_use]
    pub fn center(&self) -> Point {
        match self.track {
            Track::Linear { x, top, bottom } => Point::new(x, (top + bottom) / 2.0),
            Track::Radial { center, .. } => center,
        }
    }

    /// Radius of a radial track; `None` for a linear one.
    #[must_use]
    pub const fn radius(&self) -> Option<f32> {
        match self.track {
            Track::Linear { .. } => None,
            Track::Radial { radius, .. } => Some(radius),
        }
    }

    /// Anchor of the value label.
    #[must_use]
    pub const fn label_anchor(&self) -> Point {
        self.label
    }

    /// Polar angle (degrees) of `position` on a radial track.
    fn polar_angle(zero_at: f64, position: f64) -> f64 {
        (zero_at - position).rem_euclid(360.0)
    }

    /// Point at `position`, moved `offset` away from the track line
    /// (to the right of a linear track, outwards on a radial one).
    #[must_use]
    pub fn point_at(&self, position: f64, offset: f32) -> Point {
        match self.track {
            Track::Linear { x, top, bottom } => {
                let fraction =
                    ((position - self.position_min) / (self.position_max - self.position_min)) as f32;
                Point::new(x + offset, fraction.mul_add(top - bottom, bottom))
            }
            Track::Radial {
                center,
                radius,
                zero_at,
                rotation,
            } => {
                let angle = Self::polar_angle(zero_at, position) as f32;
                let p = Point::polar(center, radius + offset, angle);
                match rotation {
                    Rotation::Cw => p,
                    Rotation::Ccw => Point::new(2.0f32.mul_add(center.x, -p.x), p.y),
                }
            }
        }
    }

    /// Points along the track line from `from` to `to`.
    ///
    /// Arcs are sampled so that no segment covers more than a few degrees.
    /// Positions wrap every full turn, so a sweep longer than one turn is
    /// drawn as a single full circle.
    #[must_use]
    pub fn track_points(&self, from: f64, to: f64) -> Vec<Point> {
        match self.track {
            Track::Linear { .. } => vec![self.point_at(from, 0.0), self.point_at(to, 0.0)],
            Track::Radial { .. } => {
                let sweep = (to - from).clamp(-FULL_TURN_DEG, FULL_TURN_DEG);
                let steps = (sweep.abs() / ARC_STEP_DEG).ceil().max(1.0) as usize;
                (0..=steps)
                    .map(|i| {
                        let t = i as f64 / steps as f64;
                        self.point_at(sweep.mul_add(t, from), 0.0)
                    })
                    .collect()
            }
        }
    }

    /// Evenly spaced marker positions, both ends included.
    #[must_use]
    pub fn marker_positions(&self, count: u32) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let step = (self.position_max - self.position_min) / f64::from(count);
        (0..=count)
            .map(|i| step.mul_add(f64::from(i), self.position_min))
            .collect()
    }

    /// Pointer transform matching this layout.
    #[must_use]
    pub const fn transform(&self) -> PositionTransform {
        match self.track {
            Track::Linear { top, bottom, .. } => PositionTransform::Linear {
                view_box: self.view_box,
                top,
                bottom,
                position_min: self.position_min,
                position_max: self.position_max,
            },
            Track::Radial {
                center,
                zero_at,
                rotation,
                ..
            } => PositionTransform::Angular {
                view_box: self.view_box,
                center,
                zero_at,
                rotation,
            },
        }
    }
}

/// Furthest any painted element reaches from the track line.
fn reach(config: &SliderConfig) -> f32 {
    let widest = [
        config.bg_width,
        config.track_bg_width,
        config.track_width,
        config.cursor_width,
    ]
    .into_iter()
    .fold(0.0f32, f32::max);

    let mut reach = widest / 2.0;
    if config.markers > 0 {
        reach = reach.max(config.markers_width / 2.0 + config.markers_length);
    }
    reach
}
