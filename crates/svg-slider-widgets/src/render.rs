//! Turns slider state into per-layer draw commands.

use crate::config::TrackGeometry;
use crate::engine::SliderEngine;
use crate::layout::TrackLayout;
use svg_slider_core::{
    BoxStyle, Canvas, DrawCommand, Layer, Rect, StrokeStyle, TextStyle,
};

/// Paints one slider.
///
/// Every enabled layer is submitted on every paint; disabled layers are never
/// submitted. A track with no length is submitted as [`DrawCommand::Hidden`]
/// so a retained surface keeps the element but shows nothing.
#[derive(Debug, Clone, Copy)]
pub struct SliderRenderer<'a> {
    engine: &'a SliderEngine,
    layout: &'a TrackLayout,
}

impl<'a> SliderRenderer<'a> {
    /// Create a renderer over the current state.
    #[must_use]
    pub const fn new(engine: &'a SliderEngine, layout: &'a TrackLayout) -> Self {
        Self { engine, layout }
    }

    /// Submit every enabled layer, bottom to top.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let config = self.engine.config();
        if config.bg {
            canvas.submit(Layer::Background, self.background());
        }
        if config.track_bg {
            canvas.submit(Layer::TrackBackground, self.track_background());
        }
        if config.markers > 0 {
            canvas.submit(Layer::Markers, self.markers());
        }
        if config.track {
            canvas.submit(Layer::Track, self.track());
        }
        if config.cursor {
            canvas.submit(Layer::Cursor, self.cursor());
        }
        if config.value_text {
            canvas.submit(Layer::Value, self.value_label());
        }
    }

    fn background(&self) -> DrawCommand {
        let c = self.engine.config();
        let style = BoxStyle::fill(c.bg_color)
            .with_stroke(StrokeStyle::new(c.bg_border_color, c.bg_border_width));
        let half = c.bg_width / 2.0;
        match self.layout.radius() {
            Some(radius) => DrawCommand::Circle {
                center: self.layout.center(),
                radius: radius + half,
                style,
            },
            None => DrawCommand::Rect {
                bounds: Rect::from_points(
                    self.layout.point_at(c.position_min, -half),
                    self.layout.point_at(c.position_max, half),
                ),
                style,
            },
        }
    }

    fn track_background(&self) -> DrawCommand {
        let c = self.engine.config();
        match self.layout.geometry() {
            TrackGeometry::Linear => {
                let half = c.track_bg_width / 2.0;
                DrawCommand::Rect {
                    bounds: Rect::from_points(
                        self.layout.point_at(c.position_min, -half),
                        self.layout.point_at(c.position_max, half),
                    ),
                    style: BoxStyle::fill(c.track_bg_color).with_stroke(StrokeStyle::new(
                        c.track_bg_border_color,
                        c.bg_border_width,
                    )),
                }
            }
            TrackGeometry::Radial => DrawCommand::polyline(
                self.layout.track_points(c.position_min, c.position_max),
                StrokeStyle::new(c.track_bg_color, c.track_bg_width).with_cap(c.linecap),
            ),
        }
    }

    fn markers(&self) -> DrawCommand {
        let c = self.engine.config();
        let inner = c.markers_width / 2.0;
        let outer = inner + c.markers_length;
        let segments = self
            .layout
            .marker_positions(c.markers)
            .into_iter()
            .map(|p| (self.layout.point_at(p, inner), self.layout.point_at(p, outer)))
            .collect();
        DrawCommand::Segments {
            segments,
            style: StrokeStyle::new(c.markers_color, 1.0).with_cap(c.linecap),
        }
    }

    /// Position the track starts from.
    fn anchor(&self) -> f64 {
        let c = self.engine.config();
        match c.center_value {
            Some(center) if c.center_zero => self
                .engine
                .position_of(center)
                .clamp(c.position_min, c.position_max),
            _ => c.position_min,
        }
    }

    fn track(&self) -> DrawCommand {
        let c = self.engine.config();
        let from = self.anchor();
        let to = self.engine.position();
        if from == to {
            return DrawCommand::Hidden;
        }
        let color = if self.engine.has_changed() {
            c.track_color
        } else {
            c.track_color_init
        };
        DrawCommand::polyline(
            self.layout.track_points(from, to),
            StrokeStyle::new(color, c.track_width).with_cap(c.linecap),
        )
    }

    fn cursor(&self) -> DrawCommand {
        let c = self.engine.config();
        let position = self.engine.position();
        let half = c.cursor_width / 2.0;
        let color = if self.engine.has_changed() {
            c.cursor_color
        } else {
            c.cursor_color_init
        };
        DrawCommand::polyline(
            vec![
                self.layout.point_at(position, -half),
                self.layout.point_at(position, half),
            ],
            StrokeStyle::new(color, c.cursor_length),
        )
    }

    fn value_label(&self) -> DrawCommand {
        let c = self.engine.config();
        DrawCommand::Text {
            content: self.engine.display_value(None),
            position: self.layout.label_anchor(),
            style: TextStyle {
                family: c.font_family.clone(),
                size: c.font_size,
                weight: c.font_weight,
                color: c.font_color,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use svg_slider_core::{Point, RecordingCanvas};

    fn paint(engine: &SliderEngine) -> RecordingCanvas {
        let layout = TrackLayout::new(engine.config());
        let mut canvas = RecordingCanvas::new();
        SliderRenderer::new(engine, &layout).paint(&mut canvas);
        canvas
    }

    fn track_style(canvas: &RecordingCanvas) -> StrokeStyle {
        match canvas.layer(Layer::Track) {
            Some(DrawCommand::Path { style, .. }) => *style,
            other => panic!("expected a track path, got {other:?}"),
        }
    }

    // =========================================================================
    // Layer Selection
    // =========================================================================

    #[test]
    fn test_default_layers() {
        let engine = SliderEngine::new(SliderConfig::default()).unwrap();
        let canvas = paint(&engine);
        let layers: Vec<Layer> = canvas.layers().collect();
        assert_eq!(
            layers,
            vec![Layer::TrackBackground, Layer::Track, Layer::Value]
        );
    }

    #[test]
    fn test_all_layers_in_paint_order() {
        let mut config = SliderConfig::default().with_initial_value(30.0);
        config.bg = true;
        config.cursor = true;
        config.markers = 5;
        let engine = SliderEngine::new(config).unwrap();

        let order: Vec<Layer> = paint(&engine).commands().iter().map(|(l, _)| *l).collect();
        assert_eq!(order, Layer::ALL.to_vec());
    }

    // =========================================================================
    // Track
    // =========================================================================

    #[test]
    fn test_empty_track_is_hidden() {
        let engine = SliderEngine::new(SliderConfig::default()).unwrap();
        assert_eq!(paint(&engine).layer(Layer::Track), Some(&DrawCommand::Hidden));
    }

    #[test]
    fn test_track_runs_from_start_to_position() {
        let mut config = SliderConfig::default().with_initial_value(50.0);
        config.value_text = false;
        let engine = SliderEngine::new(config).unwrap();

        match paint(&engine).layer(Layer::Track) {
            Some(DrawCommand::Path { points, .. }) => {
                assert_eq!(points, &vec![Point::new(10.0, 100.0), Point::new(10.0, 50.0)]);
            }
            other => panic!("expected a track path, got {other:?}"),
        }
    }

    #[test]
    fn test_center_zero_track_starts_at_center() {
        let mut config = SliderConfig::default()
            .with_value_range(-50.0, 50.0)
            .with_initial_value(-20.0);
        config.center_zero = true;
        let engine = SliderEngine::new(config).unwrap();

        match paint(&engine).layer(Layer::Track) {
            Some(DrawCommand::Path { points, .. }) => {
                assert_eq!(points[0], Point::new(10.0, 50.0));
                assert_eq!(points[1], Point::new(10.0, 70.0));
            }
            other => panic!("expected a track path, got {other:?}"),
        }
    }

    #[test]
    fn test_track_color_switches_once_changed() {
        let config = SliderConfig::default().with_default_value(50.0);
        let mut engine = SliderEngine::new(config.clone()).unwrap();
        engine.refresh_changed();
        assert_eq!(track_style(&paint(&engine)).color, config.track_color_init);

        engine.set_value(60.0);
        engine.refresh_changed();
        let style = track_style(&paint(&engine));
        assert_eq!(style.color, config.track_color);
        assert_eq!(style.width, config.track_width);
    }

    // =========================================================================
    // Decorations
    // =========================================================================

    #[test]
    fn test_markers_include_both_ends() {
        let mut config = SliderConfig::default();
        config.markers = 4;
        let engine = SliderEngine::new(config).unwrap();

        match paint(&engine).layer(Layer::Markers) {
            Some(DrawCommand::Segments { segments, .. }) => {
                assert_eq!(segments.len(), 5);
                // 28 wide view box, track at x = 14, ticks from 20 to 28
                assert_eq!(segments[0], (Point::new(20.0, 100.0), Point::new(28.0, 100.0)));
            }
            other => panic!("expected marker segments, got {other:?}"),
        }
    }

    #[test]
    fn test_cursor_crosses_track() {
        let mut config = SliderConfig::default().with_initial_value(50.0);
        config.cursor = true;
        config.value_text = false;
        let engine = SliderEngine::new(config).unwrap();

        match paint(&engine).layer(Layer::Cursor) {
            Some(DrawCommand::Path { points, style, .. }) => {
                assert_eq!(points, &vec![Point::new(1.0, 50.0), Point::new(19.0, 50.0)]);
                assert_eq!(style.width, 10.0);
            }
            other => panic!("expected a cursor path, got {other:?}"),
        }
    }

    #[test]
    fn test_radial_background_is_a_disk() {
        let mut config = SliderConfig::default().with_geometry(TrackGeometry::Radial);
        config.bg = true;
        let engine = SliderEngine::new(config).unwrap();

        match paint(&engine).layer(Layer::Background) {
            Some(DrawCommand::Circle { center, radius, .. }) => {
                assert_eq!(*center, Point::new(50.0, 50.0));
                assert_eq!(*radius, 49.0);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn test_radial_track_background_with_huge_domain() {
        let config = SliderConfig::default()
            .with_geometry(TrackGeometry::Radial)
            .with_position_range(0.0, 1.0e7);
        let engine = SliderEngine::new(config).unwrap();

        match paint(&engine).layer(Layer::TrackBackground) {
            Some(DrawCommand::Path { points, .. }) => assert_eq!(points.len(), 73),
            other => panic!("expected a track path, got {other:?}"),
        }
    }

    #[test]
    fn test_value_label_uses_format_and_font() {
        let config = SliderConfig::default()
            .with_initial_value(42.0)
            .with_format(|v| format!("{v} dB"));
        let engine = SliderEngine::new(config).unwrap();

        match paint(&engine).layer(Layer::Value) {
            Some(DrawCommand::Text { content, style, .. }) => {
                assert_eq!(content, "42 dB");
                assert_eq!(style.size, 25.0);
                assert_eq!(style.family, "sans-serif");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
