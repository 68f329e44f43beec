//! Position and value state of a slider.
//!
//! The engine keeps a linear *position* inside `[position_min, position_max]`
//! and derives the user-facing *value* from it: a linear map onto
//! `[value_min, value_max]` followed by snapping to `value_resolution`.
//! Two positions are "the same value" exactly when they snap to the same
//! number, and only a change of snapped value is ever reported.

use crate::config::SliderConfig;
use crate::error::SliderError;

/// Message emitted when a gesture changes the slider's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChanged {
    /// The new (snapped) value
    pub value: f64,
}

/// Owns the configuration and the mutable position/value state.
#[derive(Debug, Clone)]
pub struct SliderEngine {
    config: SliderConfig,
    position: f64,
    /// Always `value_at(position)`
    value: f64,
    has_changed: bool,
    verbose: bool,
}

impl SliderEngine {
    /// Build an engine and apply the configured starting value.
    ///
    /// Construction never produces a [`SliderChanged`].
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        let mut engine = Self {
            position: config.position_min,
            value: config.value_min,
            config,
            has_changed: false,
            verbose: false,
        };
        engine.derive_center();
        engine.initialize();
        Ok(engine)
    }

    /// Replace the configuration wholesale and re-apply the starting value.
    ///
    /// The "has changed" latch survives reconfiguration. On error the
    /// previous configuration and state are kept.
    pub fn reconfigure(&mut self, config: SliderConfig) -> Result<(), SliderError> {
        config.validate()?;
        self.config = config;
        self.derive_center();
        self.initialize();
        tracing::debug!(
            position = self.position,
            value = self.value,
            "slider reconfigured"
        );
        Ok(())
    }

    fn derive_center(&mut self) {
        if self.config.center_zero && self.config.center_value.is_none() {
            let mid = (self.config.value_min + self.config.value_max) / 2.0;
            self.config.center_value = Some(self.rounded_value(mid));
        }
    }

    fn initialize(&mut self) {
        self.position = self.config.position_min;
        self.value = self.value_at(None);

        let initial = self.config.initial_value;
        let start = if initial != 0.0 && !initial.is_nan() {
            initial
        } else {
            self.config.default_value
        };
        self.set_value(start);
    }

    /// Current configuration (with derived fields filled in).
    #[must_use]
    pub const fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Current snapped value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Whether the value has ever differed from `default_value` as of the
    /// last [`refresh_changed`](Self::refresh_changed).
    #[must_use]
    pub const fn has_changed(&self) -> bool {
        self.has_changed
    }

    /// Turn trace output for this instance on or off.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Whether trace output is on.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Snap `value` to the nearest multiple of the resolution.
    ///
    /// Halves round up, so `-2.5` snaps to `-2` with a resolution of `1`.
    #[must_use]
    pub fn rounded_value(&self, value: f64) -> f64 {
        match self.config.value_resolution {
            Some(resolution) => (value / resolution + 0.5).floor() * resolution,
            None => value,
        }
    }

    /// Snapped value at `position`, or at the current position.
    ///
    /// Snapping happens before clamping, so the result always lies within
    /// `[value_min, value_max]` even when the bounds are not multiples of
    /// the resolution.
    #[must_use]
    pub fn value_at(&self, position: Option<f64>) -> f64 {
        let c = &self.config;
        let position = position.unwrap_or(self.position);
        let fraction = (position - c.position_min) / (c.position_max - c.position_min);
        let raw = fraction.mul_add(c.value_max - c.value_min, c.value_min);
        self.rounded_value(raw).clamp(c.value_min, c.value_max)
    }

    /// Position that maps to `value` (no clamping, no snapping).
    ///
    /// A single-value range maps everything to `position_min`.
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        let c = &self.config;
        let span = c.value_max - c.value_min;
        if span == 0.0 {
            return c.position_min;
        }
        ((value - c.value_min) / span).mul_add(c.position_max - c.position_min, c.position_min)
    }

    /// Formatted value at `position`, or at the current position.
    #[must_use]
    pub fn display_value(&self, position: Option<f64>) -> String {
        self.config.format.apply(self.value_at(position))
    }

    /// Move to `value`, clamped into range. Never notifies.
    ///
    /// `NaN` is ignored.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            if self.verbose {
                tracing::trace!("set_value(NaN) ignored");
            }
            return;
        }
        let value = value.clamp(self.config.value_min, self.config.value_max);
        let position = self.position_of(value);
        self.set_position(position, false);
    }

    /// Move to `position`, clamped into the position domain.
    ///
    /// With `fire` set, returns a [`SliderChanged`] when both the position
    /// and the snapped value changed. State is updated before the message
    /// is built. `NaN` is ignored.
    pub fn set_position(&mut self, position: f64, fire: bool) -> Option<SliderChanged> {
        if position.is_nan() {
            if self.verbose {
                tracing::trace!("set_position(NaN) ignored");
            }
            return None;
        }

        let clamped = position.clamp(self.config.position_min, self.config.position_max);
        let previous_position = self.position;
        let previous_value = self.value;

        self.position = clamped;
        self.value = self.value_at(None);

        if self.verbose {
            tracing::trace!(
                requested = position,
                position = clamped,
                value = self.value,
                fire,
                "set_position"
            );
        }

        let changed = fire && clamped != previous_position && self.value != previous_value;
        changed.then(|| {
            if self.verbose {
                tracing::trace!(from = previous_value, to = self.value, "value changed");
            }
            SliderChanged { value: self.value }
        })
    }

    /// Move by `delta`, notifying like a gesture would.
    pub fn inc_position(&mut self, delta: f64) -> Option<SliderChanged> {
        let target = (self.position + delta).clamp(self.config.position_min, self.config.position_max);
        self.set_position(target, true)
    }

    /// Update the "has changed" latch from the current value and return it.
    ///
    /// The latch only ever goes from `false` to `true`.
    pub fn refresh_changed(&mut self) -> bool {
        if !self.has_changed && self.value != self.config.default_value {
            self.has_changed = true;
            if self.verbose {
                tracing::trace!(value = self.value, "value left its default");
            }
        }
        self.has_changed
    }
}
