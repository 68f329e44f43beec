//! Core types and traits for the svg-slider widget.
//!
//! This crate provides foundational types used throughout svg-slider:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`ViewBox`]
//! - Color representation: [`Color`] with CSS hex parsing
//! - Input events: [`Event`], [`MouseButton`]
//! - Drawing: [`DrawCommand`], [`Layer`], the [`Canvas`] seam and [`RecordingCanvas`]
//! - Built-in color [`Palette`]s

pub mod canvas;
mod color;
pub mod draw;
mod event;
mod geometry;
mod palette;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use draw::{BoxStyle, DrawCommand, FontWeight, Layer, LineCap, StrokeStyle, TextStyle};
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size, ViewBox};
pub use palette::Palette;
pub use widget::{Canvas, Widget};
