//! Slider configuration and layered merging.
//!
//! Configuration comes from up to four sources, merged field by field with
//! later sources winning:
//!
//! 1. [`SliderConfig::default`]
//! 2. the selected [`Palette`]
//! 3. the caller's configuration object
//! 4. the declarative configuration embedded in the host element
//!
//! Field names are the snake_case names used in `data-config` attributes.

use crate::error::SliderError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;
use svg_slider_core::{Color, FontWeight, LineCap, Palette};

/// Shape of the track, which also decides how pointer positions map to
/// slider positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackGeometry {
    /// Vertical straight track; pointer height maps directly to position.
    #[default]
    Linear,
    /// Circular track; pointer angle around the center maps to position
    /// (positions are degrees).
    Radial,
}

/// Direction in which positions grow on a radial track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// Clockwise
    #[default]
    Cw,
    /// Counter-clockwise
    Ccw,
}

/// Turns a value into the text shown in the value label.
#[derive(Clone)]
pub struct ValueFormat(Rc<dyn Fn(f64) -> String>);

impl ValueFormat {
    /// Wrap a formatting function.
    pub fn new(format: impl Fn(f64) -> String + 'static) -> Self {
        Self(Rc::new(format))
    }

    /// Shows the number as is.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|v| v.to_string())
    }

    /// Format a value.
    #[must_use]
    pub fn apply(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormat(..)")
    }
}

/// Full slider configuration.
///
/// The numeric contract is carried by the `value_*`, `position_*`,
/// `mouse_wheel_*`, `center_*` and `initial_value`/`default_value` fields;
/// everything else only affects painting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SliderConfig {
    /// Name of the palette layered under caller configuration
    pub palette: String,

    /// Baseline value; the slider switches to its "changed" colors once the
    /// value first differs from it
    pub default_value: f64,
    /// Value applied at construction; `0` means "use `default_value`"
    pub initial_value: f64,
    /// Lowest value
    pub value_min: f64,
    /// Highest value
    pub value_max: f64,
    /// Granularity values snap to; `null` disables snapping
    pub value_resolution: Option<f64>,

    /// Draw the track from `center_value` instead of from the start
    pub center_zero: bool,
    /// Track anchor in center-zero mode; derived from the range when unset
    pub center_value: Option<f64>,

    /// Lowest position
    pub position_min: f64,
    /// Highest position
    pub position_max: f64,

    /// Track shape
    pub geometry: TrackGeometry,
    /// Polar angle (degrees, counter-clockwise from 3 o'clock) of position 0
    /// on a radial track
    pub zero_at: f64,
    /// Direction positions grow on a radial track
    pub rotation: Rotation,

    /// Multiplier on wheel increments
    pub mouse_wheel_acceleration: f64,
    /// Sign applied to wheel increments (`1` or `-1`)
    pub mouse_wheel_direction: f64,

    /// Show the background
    pub bg: bool,
    /// Show the track underlay
    pub track_bg: bool,
    /// Show the track
    pub track: bool,
    /// Show the cursor
    pub cursor: bool,
    /// Show the value label
    pub value_text: bool,

    /// Background width
    pub bg_width: f32,
    /// Background outline width
    pub bg_border_width: f32,
    /// Track underlay width
    pub track_bg_width: f32,
    /// Track width
    pub track_width: f32,
    /// Cursor width (across the track)
    pub cursor_width: f32,
    /// Cursor length (along the track)
    pub cursor_length: f32,
    /// Number of marker intervals; `0` or `false` disables markers
    #[serde(deserialize_with = "markers_count")]
    pub markers: u32,
    /// Marker length
    pub markers_length: f32,
    /// Marker span across the track
    pub markers_width: f32,
    /// Line cap for strokes
    pub linecap: LineCap,

    /// Value label font family
    pub font_family: String,
    /// Value label font size
    pub font_size: f32,
    /// Value label font weight
    pub font_weight: FontWeight,

    /// Background fill
    pub bg_color: Color,
    /// Background outline
    pub bg_border_color: Color,
    /// Track underlay fill
    pub track_bg_color: Color,
    /// Track underlay outline
    pub track_bg_border_color: Color,
    /// Track color until the value first changes
    pub track_color_init: Color,
    /// Track color after the value changed
    pub track_color: Color,
    /// Cursor color until the value first changes
    pub cursor_color_init: Color,
    /// Cursor color after the value changed
    pub cursor_color: Color,
    /// Marker color
    pub markers_color: Color,
    /// Value label color
    pub font_color: Color,

    /// Value label formatting
    #[serde(skip)]
    pub format: ValueFormat,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            palette: "light".to_string(),
            default_value: 0.0,
            initial_value: 0.0,
            value_min: 0.0,
            value_max: 100.0,
            value_resolution: Some(1.0),
            center_zero: false,
            center_value: None,
            position_min: 0.0,
            position_max: 100.0,
            geometry: TrackGeometry::Linear,
            zero_at: 270.0,
            rotation: Rotation::Cw,
            mouse_wheel_acceleration: 1.0,
            mouse_wheel_direction: 1.0,
            bg: false,
            track_bg: true,
            track: true,
            cursor: false,
            value_text: true,
            bg_width: 20.0,
            bg_border_width: 1.0,
            track_bg_width: 10.0,
            track_width: 10.0,
            cursor_width: 18.0,
            cursor_length: 10.0,
            markers: 0,
            markers_length: 8.0,
            markers_width: 12.0,
            linecap: LineCap::Butt,
            font_family: "sans-serif".to_string(),
            font_size: 25.0,
            font_weight: FontWeight::Bold,
            bg_color: Color::from_rgb8(0xe0, 0xe0, 0xe0),
            bg_border_color: Color::from_rgb8(0xbd, 0xbd, 0xbd),
            track_bg_color: Color::from_rgb8(0xd0, 0xd0, 0xd0),
            track_bg_border_color: Color::WHITE,
            track_color_init: Color::from_rgb8(0x64, 0xb5, 0xf6),
            track_color: Color::from_rgb8(0x42, 0xa5, 0xf5),
            cursor_color_init: Color::from_rgb8(0x64, 0xb5, 0xf6),
            cursor_color: Color::from_rgb8(0x3c, 0xa0, 0xf0),
            markers_color: Color::from_rgb8(0xaa, 0xaa, 0xaa),
            font_color: Color::from_rgb8(0x42, 0x42, 0x42),
            format: ValueFormat::identity(),
        }
    }
}

impl SliderConfig {
    /// Merge the configuration layers.
    ///
    /// A declarative layer that makes the merge fail is dropped with a
    /// warning; a failing caller layer is an error.
    pub fn from_layers(
        caller: &Map<String, Value>,
        declarative: &Map<String, Value>,
    ) -> Result<Self, SliderError> {
        match Self::merge(caller, declarative) {
            Ok(config) => Ok(config),
            Err(err) if !declarative.is_empty() => {
                tracing::warn!(%err, "ignoring declarative slider configuration");
                Self::merge(caller, &Map::new())
            }
            Err(err) => Err(err),
        }
    }

    fn merge(
        caller: &Map<String, Value>,
        declarative: &Map<String, Value>,
    ) -> Result<Self, SliderError> {
        let mut merged = match serde_json::to_value(Self::default()) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(err) => return Err(SliderError::Config(err.to_string())),
        };

        let palette = [declarative, caller, &merged]
            .into_iter()
            .find_map(|layer| layer.get("palette").and_then(Value::as_str))
            .map(str::to_owned);
        match palette.as_deref().and_then(Palette::named) {
            Some(palette) => merged.extend(palette.overlay()),
            None => tracing::debug!(?palette, "no palette layer"),
        }

        merged.extend(caller.clone());
        merged.extend(declarative.clone());

        serde_json::from_value(Value::Object(merged))
            .map_err(|err| SliderError::Config(err.to_string()))
    }

    /// Check the numeric contract.
    pub fn validate(&self) -> Result<(), SliderError> {
        let positions_ok = self.position_min.is_finite()
            && self.position_max.is_finite()
            && self.position_min < self.position_max;
        if !positions_ok {
            return Err(SliderError::EmptyPositionDomain {
                min: self.position_min,
                max: self.position_max,
            });
        }

        let values_ok = self.value_min.is_finite()
            && self.value_max.is_finite()
            && self.value_min <= self.value_max;
        if !values_ok {
            return Err(SliderError::InvertedValueRange {
                min: self.value_min,
                max: self.value_max,
            });
        }

        if let Some(resolution) = self.value_resolution {
            if !(resolution.is_finite() && resolution > 0.0) {
                return Err(SliderError::InvalidResolution(resolution));
            }
        }

        let acceleration = self.mouse_wheel_acceleration;
        if !(acceleration.is_finite() && acceleration > 0.0) {
            return Err(SliderError::InvalidAcceleration(acceleration));
        }

        Ok(())
    }

    /// Set the value range.
    #[must_use]
    pub const fn with_value_range(mut self, min: f64, max: f64) -> Self {
        self.value_min = min;
        self.value_max = max;
        self
    }

    /// Set the position domain.
    #[must_use]
    pub const fn with_position_range(mut self, min: f64, max: f64) -> Self {
        self.position_min = min;
        self.position_max = max;
        self
    }

    /// Set the value resolution (`None` disables snapping).
    #[must_use]
    pub const fn with_resolution(mut self, resolution: Option<f64>) -> Self {
        self.value_resolution = resolution;
        self
    }

    /// Set the initial value.
    #[must_use]
    pub const fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    /// Set the default value.
    #[must_use]
    pub const fn with_default_value(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }

    /// Set the track geometry.
    #[must_use]
    pub const fn with_geometry(mut self, geometry: TrackGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the value label formatter.
    #[must_use]
    pub fn with_format(mut self, format: impl Fn(f64) -> String + 'static) -> Self {
        self.format = ValueFormat::new(format);
        self
    }
}

/// Parse a declarative configuration blob.
///
/// Anything other than a JSON object (including malformed JSON) yields an
/// empty overlay.
#[must_use]
pub fn declarative_overlay(source: Option<&str>) -> Map<String, Value> {
    let Some(source) = source.map(str::trim).filter(|s| !s.is_empty()) else {
        return Map::new();
    };
    match serde_json::from_str::<Value>(source) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(kind = json_kind(&other), "declarative slider config is not an object");
            Map::new()
        }
        Err(err) => {
            tracing::warn!(%err, "malformed declarative slider config");
            Map::new()
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn markers_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Markers {
        Count(u32),
        Flag(bool),
    }

    Ok(match Markers::deserialize(deserializer)? {
        Markers::Count(n) => n,
        Markers::Flag(on) => u32::from(on),
    })
}
