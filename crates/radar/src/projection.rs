use std::f64::consts::{FRAC_PI_2, TAU};

use cupping_core::SensoryProfile;

use crate::{LabelAnchor, Point, RadarConfig, RadarGeometry, Segment};

/// Projects labeled values onto a radar chart with the default layout.
///
/// Values are clamped to `[0, max_value]`; `NaN` is drawn at the center.
/// An empty `values` slice yields empty geometry. A `max_value` that is not
/// finite and positive falls back to [`RadarConfig::DEFAULT_MAX_VALUE`].
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use cupping_radar::project_radar;
///
/// let values = [("Acidity", 5.0), ("Body", 3.0), ("Sweetness", 3.0)];
/// let geometry = project_radar(&values, 5.0, 200.0);
///
/// // Axis 0 points straight up from the center at full scale.
/// assert_relative_eq!(geometry.polygon[0].x, 100.0, epsilon = 1e-9);
/// assert_relative_eq!(geometry.polygon[0].y, 30.0, epsilon = 1e-9);
/// assert_eq!(geometry.rings.len(), 5);
/// ```
#[must_use]
pub fn project_radar<L: AsRef<str>>(
    values: &[(L, f64)],
    max_value: f64,
    size: f64,
) -> RadarGeometry {
    let config = RadarConfig::with_max_value(max_value).unwrap_or_else(|err| {
        tracing::warn!(max_value, %err, "using default radar scale");
        RadarConfig::default()
    });
    config.project(values, size)
}

/// Projects a sensory profile, one axis per attribute in chart order.
#[must_use]
pub fn project_profile(profile: &SensoryProfile, size: f64) -> RadarGeometry {
    let values = profile.values().map(|(attr, score)| (attr.label(), score));
    RadarConfig::default().project(&values, size)
}

impl RadarConfig {
    /// Projects labeled values onto a radar chart drawn on a `size` × `size`
    /// canvas.
    ///
    /// A negative or non-finite `size` is treated as zero, collapsing every
    /// point onto the origin.
    #[must_use]
    pub fn project<L: AsRef<str>>(&self, values: &[(L, f64)], size: f64) -> RadarGeometry {
        let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
        let frame = Frame {
            center: Point::new(size / 2.0, size / 2.0),
            radius: self.radius(size),
            count: values.len(),
        };

        if values.is_empty() {
            return RadarGeometry {
                center: frame.center,
                radius: frame.radius,
                ..RadarGeometry::default()
            };
        }

        let axes = (0..frame.count)
            .map(|i| Segment {
                from: frame.center,
                to: frame.vertex(i, 1.0),
            })
            .collect();

        let rings = self
            .ring_levels()
            .map(|level| frame.ring(level / self.max_value()))
            .collect();

        let polygon = values
            .iter()
            .enumerate()
            .map(|(i, (_, value))| frame.vertex(i, self.clamp(*value) / self.max_value()))
            .collect();

        let labels = values
            .iter()
            .enumerate()
            .map(|(i, (label, _))| LabelAnchor {
                label: label.as_ref().to_owned(),
                position: frame.vertex(i, self.label_ratio()),
            })
            .collect();

        RadarGeometry {
            center: frame.center,
            radius: frame.radius,
            axes,
            rings,
            polygon,
            labels,
        }
    }

    /// Integer grid levels `1..=floor(max_value)`.
    fn ring_levels(&self) -> impl Iterator<Item = f64> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = self.max_value().floor() as u32;
        (1..=count).map(f64::from)
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.max_value())
        }
    }
}

/// The polar frame of a chart: where it sits and how many axes it has.
struct Frame {
    center: Point,
    radius: f64,
    count: usize,
}

impl Frame {
    /// Returns the point on axis `index` at `scale` times the drawing radius.
    ///
    /// Axis 0 sits at -90° (straight up on a y-down canvas) and indices
    /// advance clockwise.
    #[allow(clippy::cast_precision_loss)]
    fn vertex(&self, index: usize, scale: f64) -> Point {
        let angle = index as f64 * (TAU / self.count as f64) - FRAC_PI_2;
        let r = self.radius * scale;
        Point::new(
            self.center.x + r * angle.cos(),
            self.center.y + r * angle.sin(),
        )
    }

    fn ring(&self, scale: f64) -> Vec<Point> {
        (0..self.count).map(|i| self.vertex(i, scale)).collect()
    }
}
