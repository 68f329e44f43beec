//! svg-slider: a skinnable slider rendered as inline SVG.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { SvgSlider } from './svg_slider.js';
//!
//! async function main() {
//!     await init();
//!     const elem = document.getElementById('volume');
//!     const slider = new SvgSlider(elem, { palette: 'dark', markers: 10 });
//!     elem.addEventListener('change', e => console.log(e.detail));
//! }
//! ```
//!
//! # Native Usage
//!
//! The widget itself has no browser dependency; any [`Canvas`] can host it:
//!
//! ```
//! use svg_slider::{Event, MouseButton, Point, RecordingCanvas, Rect, Widget};
//! use svg_slider::widgets::{Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::default()).unwrap();
//! slider.layout(Rect::new(0.0, 0.0, 20.0, 130.0));
//! let response = slider.handle(&Event::PointerDown {
//!     position: Point::new(10.0, 50.0),
//!     button: MouseButton::Left,
//! });
//! assert_eq!(response.changed.map(|c| c.value), Some(50.0));
//!
//! let mut canvas = RecordingCanvas::new();
//! slider.paint(&mut canvas);
//! ```

pub use svg_slider_core::*;
pub use svg_slider_widgets as widgets;
pub use svg_slider_widgets::{Slider, SliderChanged, SliderConfig, SliderError};

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{SvgCanvas, SvgSlider};
