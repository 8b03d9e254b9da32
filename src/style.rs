//! Typed look/style value objects for the plot wrapper and widgets.
//!
//! These replace ad-hoc styling parameters with plain structs; there are no
//! invariants beyond the field types. Serializable mirrors live in
//! [`crate::persistence`].

use egui::{Align2, Color32};
use egui_plot::{LineStyle, MarkerShape};

/// Stroke styling for a plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLook {
    pub color: Color32,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for LineLook {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(247, 40, 40),
            width: 2.0,
            style: LineStyle::Solid,
        }
    }
}

/// Styling for scatter markers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLook {
    pub size: f32,
    pub color: Color32,
    /// Optional outline stroke around each marker.
    pub outline: Option<LineLook>,
    pub marker: MarkerShape,
}

impl Default for ScatterLook {
    fn default() -> Self {
        Self {
            size: 10.0,
            color: Color32::RED,
            outline: None,
            marker: MarkerShape::Circle,
        }
    }
}

/// Styling and placement for a text annotation on the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLook {
    pub text: String,
    pub color: Color32,
    pub size: f32,
    pub anchor: Align2,
    /// Plot-space position; `None` leaves the item at the origin.
    pub position: Option<(f64, f64)>,
}

impl Default for TextLook {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: Color32::WHITE,
            size: 14.0,
            anchor: Align2::CENTER_CENTER,
            position: None,
        }
    }
}

/// Axis label configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLook {
    pub label: String,
    pub label_color: Color32,
    pub axis_color: Color32,
    pub units: String,
}

impl Default for AxisLook {
    fn default() -> Self {
        Self {
            label: String::new(),
            label_color: Color32::WHITE,
            axis_color: Color32::WHITE,
            units: String::new(),
        }
    }
}

impl AxisLook {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Axis title with units appended when present.
    pub fn title(&self) -> String {
        if self.units.is_empty() {
            self.label.clone()
        } else {
            format!("{} ({})", self.label, self.units)
        }
    }
}

/// Grid visibility and transparency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLook {
    pub show_x: bool,
    pub show_y: bool,
    pub alpha: f32,
}

impl Default for GridLook {
    fn default() -> Self {
        Self {
            show_x: false,
            show_y: false,
            alpha: 0.3,
        }
    }
}

/// Size constraints applied to the plot widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
}
