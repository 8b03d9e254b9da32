//! Save and load widget styling to/from JSON or YAML files.
//!
//! egui types (`Color32`, `LineStyle`, `MarkerShape`) do not derive serde
//! traits, so this module provides serializable mirror types plus conversion
//! helpers.

use std::path::Path;

use egui::Color32;
use egui_plot::{LineStyle, MarkerShape};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::{LineLook, ScatterLook};

/// Serializable version of `egui_plot::LineStyle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SerLineStyle {
    Solid,
    Dashed { length: f32 },
    Dotted { spacing: f32 },
}

impl From<LineStyle> for SerLineStyle {
    fn from(s: LineStyle) -> Self {
        match s {
            LineStyle::Solid => SerLineStyle::Solid,
            LineStyle::Dashed { length } => SerLineStyle::Dashed { length },
            LineStyle::Dotted { spacing } => SerLineStyle::Dotted { spacing },
        }
    }
}

impl From<SerLineStyle> for LineStyle {
    fn from(s: SerLineStyle) -> Self {
        match s {
            SerLineStyle::Solid => LineStyle::Solid,
            SerLineStyle::Dashed { length } => LineStyle::Dashed { length },
            SerLineStyle::Dotted { spacing } => LineStyle::Dotted { spacing },
        }
    }
}

/// Serializable version of `egui_plot::MarkerShape`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SerMarkerShape {
    Circle,
    Square,
    Diamond,
    Cross,
    Plus,
    Asterisk,
    Up,
    Down,
    Left,
    Right,
}

impl From<MarkerShape> for SerMarkerShape {
    fn from(m: MarkerShape) -> Self {
        match m {
            MarkerShape::Circle => SerMarkerShape::Circle,
            MarkerShape::Square => SerMarkerShape::Square,
            MarkerShape::Diamond => SerMarkerShape::Diamond,
            MarkerShape::Cross => SerMarkerShape::Cross,
            MarkerShape::Plus => SerMarkerShape::Plus,
            MarkerShape::Asterisk => SerMarkerShape::Asterisk,
            MarkerShape::Up => SerMarkerShape::Up,
            MarkerShape::Down => SerMarkerShape::Down,
            MarkerShape::Left => SerMarkerShape::Left,
            MarkerShape::Right => SerMarkerShape::Right,
        }
    }
}

impl From<SerMarkerShape> for MarkerShape {
    fn from(m: SerMarkerShape) -> Self {
        match m {
            SerMarkerShape::Circle => MarkerShape::Circle,
            SerMarkerShape::Square => MarkerShape::Square,
            SerMarkerShape::Diamond => MarkerShape::Diamond,
            SerMarkerShape::Cross => MarkerShape::Cross,
            SerMarkerShape::Plus => MarkerShape::Plus,
            SerMarkerShape::Asterisk => MarkerShape::Asterisk,
            SerMarkerShape::Up => MarkerShape::Up,
            SerMarkerShape::Down => MarkerShape::Down,
            SerMarkerShape::Left => MarkerShape::Left,
            SerMarkerShape::Right => MarkerShape::Right,
        }
    }
}

/// Serializable version of [`LineLook`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineLookSerde {
    pub color_rgba: [u8; 4],
    pub width: f32,
    pub style: SerLineStyle,
}

impl From<&LineLook> for LineLookSerde {
    fn from(l: &LineLook) -> Self {
        Self {
            color_rgba: [l.color.r(), l.color.g(), l.color.b(), l.color.a()],
            width: l.width,
            style: l.style.into(),
        }
    }
}

impl LineLookSerde {
    pub fn into_look(self) -> LineLook {
        LineLook {
            color: Color32::from_rgba_unmultiplied(
                self.color_rgba[0],
                self.color_rgba[1],
                self.color_rgba[2],
                self.color_rgba[3],
            ),
            width: self.width,
            style: self.style.into(),
        }
    }
}

/// Serializable version of [`ScatterLook`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterLookSerde {
    pub size: f32,
    pub color_rgba: [u8; 4],
    pub outline: Option<LineLookSerde>,
    pub marker: SerMarkerShape,
}

impl From<&ScatterLook> for ScatterLookSerde {
    fn from(s: &ScatterLook) -> Self {
        Self {
            size: s.size,
            color_rgba: [s.color.r(), s.color.g(), s.color.b(), s.color.a()],
            outline: s.outline.as_ref().map(LineLookSerde::from),
            marker: s.marker.into(),
        }
    }
}

impl ScatterLookSerde {
    pub fn into_look(self) -> ScatterLook {
        ScatterLook {
            size: self.size,
            color: Color32::from_rgba_unmultiplied(
                self.color_rgba[0],
                self.color_rgba[1],
                self.color_rgba[2],
                self.color_rgba[3],
            ),
            outline: self.outline.map(LineLookSerde::into_look),
            marker: self.marker.into(),
        }
    }
}

/// A named bundle of looks a host application saves alongside its settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleSheet {
    pub lines: Vec<(String, LineLookSerde)>,
    pub scatters: Vec<(String, ScatterLookSerde)>,
}

/// Serialize a style sheet as pretty JSON.
pub fn styles_to_json(styles: &StyleSheet) -> Result<String> {
    Ok(serde_json::to_string_pretty(styles)?)
}

/// Deserialize a style sheet from JSON.
pub fn styles_from_json(json: &str) -> Result<StyleSheet> {
    Ok(serde_json::from_str(json)?)
}

/// Save a style sheet to a JSON or YAML file, chosen by extension.
pub fn save_styles_to_path(styles: &StyleSheet, path: &Path) -> Result<()> {
    let txt = if is_yaml(path) {
        serde_yaml::to_string(styles)?
    } else {
        styles_to_json(styles)?
    };
    std::fs::write(path, txt)?;
    Ok(())
}

/// Load a style sheet from a JSON or YAML file, chosen by extension.
pub fn load_styles_from_path(path: &Path) -> Result<StyleSheet> {
    let txt = std::fs::read_to_string(path)?;
    if is_yaml(path) {
        Ok(serde_yaml::from_str(&txt)?)
    } else {
        styles_from_json(&txt)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
