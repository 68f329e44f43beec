//! Built-in color palettes.
//!
//! Palettes are immutable tables looked up by name. A palette contributes a
//! configuration layer that sits between the defaults and caller-supplied
//! configuration, so every entry can still be overridden field by field.

use serde::Serialize;
use serde_json::{Map, Value};

static PALETTES: [Palette; 3] = Palette::ALL;

/// A named set of slider colors, plus optional appearance switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Lookup name
    #[serde(skip)]
    pub name: &'static str,
    /// Background fill
    pub bg_color: &'static str,
    /// Background outline
    pub bg_border_color: &'static str,
    /// Track underlay
    pub track_bg_color: &'static str,
    /// Track underlay outline
    pub track_bg_border_color: &'static str,
    /// Track while the value still equals the default
    pub track_color_init: &'static str,
    /// Track once the value has changed
    pub track_color: &'static str,
    /// Cursor while the value still equals the default
    pub cursor_color_init: &'static str,
    /// Cursor once the value has changed
    pub cursor_color: &'static str,
    /// Graduation marks
    pub markers_color: &'static str,
    /// Value label
    pub font_color: &'static str,
    /// Show the background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<bool>,
    /// Show the track underlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_bg: Option<bool>,
    /// Show the track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<bool>,
    /// Show the cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<bool>,
}

impl Palette {
    /// Light grey and blue.
    pub const LIGHT: Self = Self {
        name: "light",
        bg_color: "#E0E0E0",
        bg_border_color: "#BDBDBD",
        track_bg_color: "#D0D0D0",
        track_bg_border_color: "#FFFFFF",
        track_color_init: "#64B5F6",
        track_color: "#42A5F5",
        cursor_color_init: "#64B5F6",
        cursor_color: "#3CA0F0",
        markers_color: "#AAAAAA",
        font_color: "#424242",
        bg: None,
        track_bg: None,
        track: None,
        cursor: None,
    };

    /// Pale blue.
    pub const LIGHT2: Self = Self {
        name: "light2",
        bg_color: "#B1DAEE",
        bg_border_color: "#569DC0",
        track_bg_color: "#B1DAEE",
        track_bg_border_color: "#888",
        track_color_init: "#569DC0",
        track_color: "#1D6D93",
        cursor_color_init: "#569DC0",
        cursor_color: "#1D6D93",
        markers_color: "#3680A4",
        font_color: "#1D6D93",
        bg: None,
        track_bg: None,
        track: None,
        cursor: None,
    };

    /// Dark grey with a yellow cursor; also turns the cursor on.
    pub const DARK: Self = Self {
        name: "dark",
        bg_color: "#333",
        bg_border_color: "#888",
        track_bg_color: "#555",
        track_bg_border_color: "#373738",
        track_color_init: "#999",
        track_color: "#bbb",
        cursor_color_init: "#999",
        cursor_color: "#d3d347",
        markers_color: "#999",
        font_color: "#FFEA00",
        bg: Some(false),
        track_bg: Some(true),
        track: Some(true),
        cursor: Some(true),
    };

    /// Every built-in palette.
    pub const ALL: [Self; 3] = [Self::LIGHT, Self::LIGHT2, Self::DARK];

    /// Look a palette up by name.
    #[must_use]
    pub fn named(name: &str) -> Option<&'static Self> {
        PALETTES.iter().find(|p| p.name == name)
    }

    /// The palette as a configuration overlay (field name to JSON value).
    #[must_use]
    pub fn overlay(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(Palette::named("light"), Some(&Palette::LIGHT));
        assert_eq!(Palette::named("light2"), Some(&Palette::LIGHT2));
        assert_eq!(Palette::named("dark"), Some(&Palette::DARK));
        assert_eq!(Palette::named("neon"), None);
    }

    #[test]
    fn test_palette_colors_parse() {
        for palette in Palette::ALL {
            for (key, value) in palette.overlay() {
                if let Value::String(hex) = value {
                    assert!(
                        Color::from_hex(&hex).is_ok(),
                        "{}.{key} = {hex} is not a color",
                        palette.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_overlay_skips_unset_switches() {
        let light = Palette::LIGHT.overlay();
        assert!(!light.contains_key("cursor"));
        assert!(!light.contains_key("name"));
        assert_eq!(light["track_color"], Value::from("#42A5F5"));

        let dark = Palette::DARK.overlay();
        assert_eq!(dark["cursor"], Value::Bool(true));
        assert_eq!(dark["bg"], Value::Bool(false));
    }
}
