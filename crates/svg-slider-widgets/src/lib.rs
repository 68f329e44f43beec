//! The svg-slider widget.
//!
//! - [`SliderConfig`]: configuration and layered merging
//! - [`SliderEngine`]: position/value state, snapping, clamping, notifications
//! - [`InteractionController`]: drag gestures and wheel normalisation
//! - [`TrackLayout`] and [`SliderRenderer`]: geometry and per-layer drawing
//! - [`Slider`]: all of the above behind the [`svg_slider_core::Widget`] trait
//!
//! ```
//! use svg_slider_widgets::{Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::default().with_resolution(Some(10.0))).unwrap();
//! slider.set_value(24.0);
//! assert_eq!(slider.value(), 20.0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod slider;

pub use config::{declarative_overlay, Rotation, SliderConfig, TrackGeometry, ValueFormat};
pub use engine::{SliderChanged, SliderEngine};
pub use error::SliderError;
pub use interaction::{InteractionController, PositionTransform, Response};
pub use layout::TrackLayout;
pub use render::SliderRenderer;
pub use slider::Slider;
