//! Radial knob example: a dark-palette dial driven by a simulated drag and a
//! few wheel notches, printing what each layer shows.
//!
//! Run with: `cargo run --example radial_knob`

#![allow(clippy::unwrap_used, clippy::disallowed_methods)]

use serde_json::json;
use svg_slider::widgets::declarative_overlay;
use svg_slider::{
    DrawCommand, Event, MouseButton, Point, RecordingCanvas, Rect, Slider, SliderConfig, Widget,
};

fn main() {
    println!("=== svg-slider Radial Knob Example ===\n");

    let caller = json!({
        "palette": "dark",
        "geometry": "radial",
        "position_min": 0,
        "position_max": 270,
        "zero_at": 225,
        "value_min": -12,
        "value_max": 12,
        "value_resolution": 0.5,
        "center_zero": true,
        "markers": 8,
    });
    let declarative = declarative_overlay(Some(r#"{"font_size": 18}"#));
    let config = SliderConfig::from_layers(caller.as_object().unwrap(), &declarative).unwrap();

    let mut knob = Slider::new(config.with_format(|v| format!("{v:+} dB"))).unwrap();
    // 100 x 100 view box shown at 2x
    knob.layout(Rect::new(0.0, 0.0, 200.0, 200.0));

    let gesture = [
        Event::PointerDown {
            position: Point::new(100.0, 10.0),
            button: MouseButton::Left,
        },
        Event::PointerMove {
            position: Point::new(190.0, 100.0),
        },
        Event::PointerUp {
            position: Point::new(190.0, 100.0),
            button: MouseButton::Left,
        },
        Event::Wheel {
            delta_x: 0.0,
            delta_y: -100.0,
        },
        Event::Wheel {
            delta_x: 0.0,
            delta_y: -100.0,
        },
    ];

    for event in &gesture {
        let response = knob.handle(event);
        if let Some(changed) = response.changed {
            println!("change -> {} ({})", changed.value, knob.display_value());
        }
    }

    let mut canvas = RecordingCanvas::new();
    knob.paint_all(&mut canvas);
    println!("\nLayers:");
    for layer in canvas.layers() {
        match canvas.layer(layer).unwrap() {
            DrawCommand::Text { content, .. } => println!("  {:>8}: text {content:?}", layer.name()),
            DrawCommand::Hidden => println!("  {:>8}: hidden", layer.name()),
            DrawCommand::Circle { radius, .. } => println!("  {:>8}: circle r={radius}", layer.name()),
            DrawCommand::Rect { bounds, .. } => println!("  {:>8}: rect {bounds:?}", layer.name()),
            command => println!("  {:>8}: d=\"{}\"", layer.name(), command.svg_path_data()),
        }
    }

    println!("\n=== Example Complete ===");
}
