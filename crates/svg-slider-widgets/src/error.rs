//! Slider construction and configuration errors.

use thiserror::Error;

/// Errors raised while building or reconfiguring a slider.
///
/// Out-of-range values are never an error: they are clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// No drawing surface was supplied.
    #[error("a drawing surface is required to construct a slider")]
    MissingSurface,

    /// The position domain has no width, so positions cannot map to values.
    #[error("position domain is empty: position_min ({min}) must be less than position_max ({max})")]
    EmptyPositionDomain {
        /// Configured `position_min`
        min: f64,
        /// Configured `position_max`
        max: f64,
    },

    /// `value_min` is above `value_max` (or one of them is not a number).
    #[error("value range is inverted: value_min ({min}) must not exceed value_max ({max})")]
    InvertedValueRange {
        /// Configured `value_min`
        min: f64,
        /// Configured `value_max`
        max: f64,
    },

    /// `value_resolution` is zero, negative or not finite.
    #[error("value_resolution must be a positive number, got {0}")]
    InvalidResolution(f64),

    /// `mouse_wheel_acceleration` is zero, negative or not finite.
    #[error("mouse_wheel_acceleration must be a positive number, got {0}")]
    InvalidAcceleration(f64),

    /// Caller-supplied configuration could not be read.
    #[error("invalid slider configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = SliderError::EmptyPositionDomain { min: 5.0, max: 5.0 };
        assert_eq!(
            e.to_string(),
            "position domain is empty: position_min (5) must be less than position_max (5)"
        );
        assert_eq!(
            SliderError::InvalidResolution(-1.0).to_string(),
            "value_resolution must be a positive number, got -1"
        );
    }
}
