//! Preview window for radar geometry.
//!
//! See [`show`] and [`ShowConfig`] for usage.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::{Point, RadarGeometry};

/// Configuration for rendering radar geometry.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot::show(geometry, ShowConfig::new().title("Yirgacheffe").hide_labels())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    labels: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, labels shown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            labels: true,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Omits the axis labels.
    #[must_use]
    pub fn hide_labels(mut self) -> Self {
        self.labels = false;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a blocking egui window drawing `geometry`.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(geometry: RadarGeometry, config: ShowConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = config.title.unwrap_or_default();
    let shapes = Shapes::from_geometry(&geometry);
    let labels = config.labels;

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(RadarApp { shapes, labels }))),
    )
}

/// Geometry converted to plot space: centered on the origin with `y` up.
struct Shapes {
    rings: Vec<Vec<[f64; 2]>>,
    axes: Vec<[[f64; 2]; 2]>,
    polygon: Vec<[f64; 2]>,
    labels: Vec<(String, [f64; 2])>,
}

impl Shapes {
    fn from_geometry(geometry: &RadarGeometry) -> Self {
        let center = geometry.center;
        let flip = |p: &Point| [p.x - center.x, center.y - p.y];

        Self {
            rings: geometry
                .closed_rings()
                .iter()
                .map(|ring| ring.iter().map(flip).collect())
                .collect(),
            axes: geometry
                .axes
                .iter()
                .map(|axis| [flip(&axis.from), flip(&axis.to)])
                .collect(),
            polygon: geometry.polygon.iter().map(flip).collect(),
            labels: geometry
                .labels
                .iter()
                .map(|anchor| (anchor.label.clone(), flip(&anchor.position)))
                .collect(),
        }
    }
}

/// The egui [`eframe::App`] that renders a radar chart.
struct RadarApp {
    shapes: Shapes,
    labels: bool,
}

impl eframe::App for RadarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("radar").data_aspect(1.0).show(ui, |plot_ui| {
                for ring in &self.shapes.rings {
                    let points: PlotPoints = ring.iter().copied().collect();
                    plot_ui.line(Line::new(points));
                }
                for axis in &self.shapes.axes {
                    let points: PlotPoints = axis.iter().copied().collect();
                    plot_ui.line(Line::new(points));
                }
                let polygon: PlotPoints = self.shapes.polygon.iter().copied().collect();
                plot_ui.polygon(Polygon::new(polygon).name("profile"));
                if self.labels {
                    for (label, [x, y]) in &self.shapes.labels {
                        plot_ui.text(Text::new(PlotPoint::new(*x, *y), label.as_str()));
                    }
                }
            });
        });
    }
}
