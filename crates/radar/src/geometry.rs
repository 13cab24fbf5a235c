#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A line segment, used for axis guides.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Where to place an axis label, just outside the outermost ring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct LabelAnchor {
    pub label: String,
    pub position: Point,
}

/// Renderable geometry for a radar chart.
///
/// Every list is ordered by axis index. Rings and the data polygon are open
/// vertex lists; the renderer closes the path, or uses
/// [`RadarGeometry::closed_polygon`] when it needs the first vertex repeated.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct RadarGeometry {
    /// Canvas center; every axis starts here.
    pub center: Point,
    /// Drawing radius of the full-scale ring.
    pub radius: f64,
    /// One full-scale guide per axis, from the center outward.
    pub axes: Vec<Segment>,
    /// Grid rings from the innermost (`1 / max`) to the full-scale ring.
    pub rings: Vec<Vec<Point>>,
    /// The data polygon, one vertex per axis.
    pub polygon: Vec<Point>,
    pub labels: Vec<LabelAnchor>,
}

impl RadarGeometry {
    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Returns the data polygon with its first vertex repeated at the end.
    #[must_use]
    pub fn closed_polygon(&self) -> Vec<Point> {
        close(&self.polygon)
    }

    /// Returns each grid ring with its first vertex repeated at the end.
    #[must_use]
    pub fn closed_rings(&self) -> Vec<Vec<Point>> {
        self.rings.iter().map(|ring| close(ring)).collect()
    }
}

fn close(points: &[Point]) -> Vec<Point> {
    let mut closed = points.to_vec();
    if let Some(&first) = points.first() {
        closed.push(first);
    }
    closed
}
