//! Draw commands and the layers they are painted into.
//!
//! A slider is a fixed stack of layers. Each paint pass submits at most one
//! command per layer; a retained surface creates the layer's element the
//! first time and updates it on every later submission.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Paint layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Widget background
    Background,
    /// Full-length track underlay
    TrackBackground,
    /// Graduation marks
    Markers,
    /// Value portion of the track
    Track,
    /// Cursor (thumb)
    Cursor,
    /// Formatted value label
    Value,
}

impl Layer {
    /// All layers in paint order.
    pub const ALL: [Self; 6] = [
        Self::Background,
        Self::TrackBackground,
        Self::Markers,
        Self::Track,
        Self::Cursor,
        Self::Value,
    ];

    /// Stable lowercase name, used to tag surface elements.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "bg",
            Self::TrackBackground => "track-bg",
            Self::Markers => "markers",
            Self::Track => "track",
            Self::Cursor => "cursor",
            Self::Value => "value",
        }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

impl LineCap {
    /// Value of the SVG `stroke-linecap` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Stroke style for paths and outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in view box units
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Create a stroke with butt caps.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    /// Use the given line cap.
    #[must_use]
    pub const fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

/// Box style for rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Add an outline.
    #[must_use]
    pub const fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
    /// Lighter than the parent
    Lighter,
    /// Bolder than the parent
    Bolder,
}

impl FontWeight {
    /// Value of the SVG `font-weight` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Lighter => "lighter",
            Self::Bolder => "bolder",
        }
    }
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family list
    pub family: String,
    /// Font size in view box units
    pub size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 16.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
        }
    }
}

/// Drawing primitive - everything a slider paints reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },
    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },
    /// Draw a polyline (or polygon when closed)
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },
    /// Draw disjoint line segments sharing one style
    Segments {
        /// Segment end points
        segments: Vec<(Point, Point)>,
        /// Stroke style
        style: StrokeStyle,
    },
    /// Draw text centered horizontally on `position`
    Text {
        /// Text content
        content: String,
        /// Baseline anchor
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Keep the layer but show nothing
    Hidden,
}

impl DrawCommand {
    /// Filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(color),
        }
    }

    /// Open polyline.
    #[must_use]
    pub fn polyline(points: Vec<Point>, style: StrokeStyle) -> Self {
        Self::Path {
            points,
            closed: false,
            style,
        }
    }

    /// SVG path data (`d` attribute) for path-like commands.
    ///
    /// Returns an empty string for commands that are not drawn as paths,
    /// which is also how an SVG path is hidden.
    #[must_use]
    pub fn svg_path_data(&self) -> String {
        match self {
            Self::Path { points, closed, .. } => {
                let mut d = String::new();
                for (i, p) in points.iter().enumerate() {
                    let op = if i == 0 { 'M' } else { 'L' };
                    if i > 0 {
                        d.push(' ');
                    }
                    d.push_str(&format!("{op} {},{}", p.x, p.y));
                }
                if *closed && !points.is_empty() {
                    d.push_str(" Z");
                }
                d
            }
            Self::Segments { segments, .. } => segments
                .iter()
                .map(|(a, b)| format!("M {},{} L {},{}", a.x, a.y, b.x, b.y))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Rect { .. } | Self::Circle { .. } | Self::Text { .. } | Self::Hidden => {
                String::new()
            }
        }
    }
}
