use thiserror::Error;

/// Layout parameters for a radar projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarConfig {
    max_value: f64,
    fill_ratio: f64,
    label_ratio: f64,
}

/// Errors that can occur when validating a radar config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RadarConfigError {
    #[error("max_value must be finite and positive")]
    MaxValue,

    #[error("fill_ratio must be finite and within (0, 0.5]")]
    FillRatio,

    #[error("label_ratio must be finite and at least 1")]
    LabelRatio,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            max_value: Self::DEFAULT_MAX_VALUE,
            fill_ratio: Self::DEFAULT_FILL_RATIO,
            label_ratio: Self::DEFAULT_LABEL_RATIO,
        }
    }
}

impl RadarConfig {
    /// Top of the sensory scale.
    pub const DEFAULT_MAX_VALUE: f64 = 5.0;

    /// Drawing radius as a share of the canvas size (70% of the half-width).
    pub const DEFAULT_FILL_RATIO: f64 = 0.35;

    /// Label distance as a multiple of the drawing radius.
    pub const DEFAULT_LABEL_RATIO: f64 = 1.16;

    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_value` is not positive, if `fill_ratio` is
    /// outside `(0, 0.5]`, or if `label_ratio` is below one. Non-finite values
    /// are always rejected.
    pub fn new(
        max_value: f64,
        fill_ratio: f64,
        label_ratio: f64,
    ) -> Result<Self, RadarConfigError> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(RadarConfigError::MaxValue);
        }
        if !fill_ratio.is_finite() || fill_ratio <= 0.0 || fill_ratio > 0.5 {
            return Err(RadarConfigError::FillRatio);
        }
        if !label_ratio.is_finite() || label_ratio < 1.0 {
            return Err(RadarConfigError::LabelRatio);
        }

        Ok(Self {
            max_value,
            fill_ratio,
            label_ratio,
        })
    }

    /// Returns a default config with the given scale maximum.
    ///
    /// # Errors
    ///
    /// Returns [`RadarConfigError::MaxValue`] if `max_value` is not finite and
    /// positive.
    pub fn with_max_value(max_value: f64) -> Result<Self, RadarConfigError> {
        Self::new(max_value, Self::DEFAULT_FILL_RATIO, Self::DEFAULT_LABEL_RATIO)
    }

    /// Returns the value drawn at the full-scale ring.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Returns the drawing radius as a share of the canvas size.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.fill_ratio
    }

    /// Returns the label distance as a multiple of the drawing radius.
    #[must_use]
    pub fn label_ratio(&self) -> f64 {
        self.label_ratio
    }

    /// Returns the drawing radius for a canvas of `size`.
    #[must_use]
    pub fn radius(&self, size: f64) -> f64 {
        self.fill_ratio * size
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_constants() {
        let config = RadarConfig::default();
        assert_eq!(config.max_value(), 5.0);
        assert_eq!(config.fill_ratio(), 0.35);
        assert_eq!(config.label_ratio(), 1.16);
        assert_relative_eq!(config.radius(200.0), 70.0);
    }

    #[test]
    fn rejects_bad_max_value() {
        assert_eq!(RadarConfig::with_max_value(0.0), Err(RadarConfigError::MaxValue));
        assert_eq!(RadarConfig::with_max_value(-5.0), Err(RadarConfigError::MaxValue));
        assert_eq!(
            RadarConfig::with_max_value(f64::NAN),
            Err(RadarConfigError::MaxValue)
        );
    }

    #[test]
    fn rejects_bad_ratios() {
        assert_eq!(
            RadarConfig::new(5.0, 0.0, 1.16),
            Err(RadarConfigError::FillRatio)
        );
        assert_eq!(
            RadarConfig::new(5.0, 0.6, 1.16),
            Err(RadarConfigError::FillRatio)
        );
        assert_eq!(
            RadarConfig::new(5.0, 0.35, 0.9),
            Err(RadarConfigError::LabelRatio)
        );
        assert!(RadarConfig::new(10.0, 0.5, 1.0).is_ok());
    }
}
