//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, Layer};
use crate::geometry::ViewBox;
use crate::widget::Canvas;
use std::collections::BTreeMap;

/// A Canvas implementation that records draw operations.
///
/// This is useful for:
/// - Testing (verify what was painted, and in which layer)
/// - Serialization (ship commands to another renderer)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<(Layer, DrawCommand)>,
    layers: BTreeMap<Layer, DrawCommand>,
    view_box: Option<ViewBox>,
    clears: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submission since creation (or the last `take_commands`), in order.
    #[must_use]
    pub fn commands(&self) -> &[(Layer, DrawCommand)] {
        &self.commands
    }

    /// Take ownership of the submission log. Layer contents are kept.
    pub fn take_commands(&mut self) -> Vec<(Layer, DrawCommand)> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded submissions.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// What a layer currently shows.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> Option<&DrawCommand> {
        self.layers.get(&layer)
    }

    /// Layers that currently exist, in paint order.
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.layers.keys().copied()
    }

    /// Last view box set on the canvas.
    #[must_use]
    pub const fn view_box(&self) -> Option<ViewBox> {
        self.view_box
    }

    /// How many times the canvas was cleared.
    #[must_use]
    pub const fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Canvas for RecordingCanvas {
    fn set_view_box(&mut self, view_box: ViewBox) {
        self.view_box = Some(view_box);
    }

    fn submit(&mut self, layer: Layer, command: DrawCommand) {
        self.layers.insert(layer, command.clone());
        self.commands.push((layer, command));
    }

    fn clear(&mut self) {
        self.layers.clear();
        self.clears += 1;
    }
}
