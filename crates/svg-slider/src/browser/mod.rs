//! Browser runtime for svg-slider.
//!
//! Bridges the slider widget to the DOM: SVG elements as the drawing
//! surface, DOM mouse/wheel events as input, and `change` events out.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod console;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod host;
#[cfg(target_arch = "wasm32")]
pub mod svg;

#[cfg(target_arch = "wasm32")]
pub use host::SvgSlider;
#[cfg(target_arch = "wasm32")]
pub use svg::SvgCanvas;
