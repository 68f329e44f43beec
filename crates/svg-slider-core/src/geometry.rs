//! Geometric primitives: Point, Size, Rect, `ViewBox`.

use serde::{Deserialize, Serialize};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` along `angle_deg`, measured
    /// counter-clockwise from 3 o'clock with y growing downwards.
    #[must_use]
    pub fn polar(center: Self, radius: f32, angle_deg: f32) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self::new(center.x + cos * radius, center.y - sin * radius)
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, negative or not a number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
///
/// Used both for drawing in viewbox units and for the client-space
/// bounding box a host reports for its drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from two corner points.
    ///
    /// The corners may be given in any order.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// The user coordinate system of a drawing surface (SVG `viewBox`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    /// Left edge in user units
    pub min_x: f32,
    /// Top edge in user units
    pub min_y: f32,
    /// Width in user units
    pub width: f32,
    /// Height in user units
    pub height: f32,
}

impl ViewBox {
    /// Create a view box anchored at the origin.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width,
            height,
        }
    }

    /// The view box as a rectangle in its own units.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.width, self.height)
    }

    /// Value of the SVG `viewBox` attribute.
    #[must_use]
    pub fn to_attr(&self) -> String {
        format!("{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }

    /// Uniform scale and client-space offset of the view box when fitted
    /// into `surface` the way SVG's default `xMidYMid meet` does: the whole
    /// view box visible, centered along the axis with slack.
    ///
    /// Returns `None` when the surface or the view box has no area.
    fn fit(&self, surface: &Rect) -> Option<(f64, f64, f64)> {
        if surface.size().is_empty() || Size::new(self.width, self.height).is_empty() {
            return None;
        }
        let (sw, sh) = (f64::from(surface.width), f64::from(surface.height));
        let (vw, vh) = (f64::from(self.width), f64::from(self.height));
        let scale = (sw / vw).min(sh / vh);
        let left = f64::from(surface.x) + (sw - vw * scale) / 2.0;
        let top = f64::from(surface.y) + (sh - vh * scale) / 2.0;
        Some((scale, left, top))
    }

    /// Map a client-space point into view box units, with `surface` the
    /// client-space box the `<svg>` occupies.
    ///
    /// Computed in `f64` so a pointer exactly between two values keeps the
    /// tie. Returns `None` when the surface has no area.
    #[must_use]
    pub fn map_client_point(&self, surface: &Rect, client: Point) -> Option<(f64, f64)> {
        let (scale, left, top) = self.fit(surface)?;
        Some((
            f64::from(self.min_x) + (f64::from(client.x) - left) / scale,
            f64::from(self.min_y) + (f64::from(client.y) - top) / scale,
        ))
    }

}
