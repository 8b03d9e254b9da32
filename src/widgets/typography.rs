//! Gradient text and the application title row.

use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, CursorIcon, FontId, Response, Sense, TextureHandle, Ui, Vec2};

use crate::flim::sample_colormap;

/// Text painted with a per-character color gradient. While pressed, a white
/// shadow copy is drawn slightly offset underneath.
pub struct GradientText {
    text: String,
    stops: Vec<(f32, Color32)>,
    size: f32,
}

impl GradientText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stops: vec![(0.0, Color32::RED), (1.0, Color32::BLUE)],
            size: 20.0,
        }
    }

    /// Gradient stops as `(position, color)` pairs over [0, 1].
    pub fn colors(mut self, stops: Vec<(f32, Color32)>) -> Self {
        self.stops = stops;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let font = FontId::proportional(self.size);
        let chars: Vec<char> = self.text.chars().collect();
        let mut job = LayoutJob::default();
        let denom = chars.len().saturating_sub(1).max(1) as f32;
        for (i, ch) in chars.iter().enumerate() {
            let t = i as f32 / denom;
            let color = sample_colormap(&self.stops, t);
            job.append(
                &ch.to_string(),
                0.0,
                TextFormat {
                    font_id: font.clone(),
                    color,
                    ..Default::default()
                },
            );
        }
        let galley = ui.fonts_mut(|f| f.layout_job(job));
        let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::click());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            if response.is_pointer_button_down_on() {
                painter.galley_with_override_text_color(
                    rect.min + Vec2::new(3.0, -2.0),
                    galley.clone(),
                    Color32::WHITE,
                );
            }
            painter.galley(rect.min, galley, Color32::WHITE);
        }
        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

/// Icon plus gradient text in a horizontal row that expands to fill the
/// remaining width.
pub struct FlimTitle {
    text: GradientText,
    icon: Option<TextureHandle>,
    icon_size: f32,
    spacing: f32,
}

impl FlimTitle {
    pub fn new(text: GradientText) -> Self {
        Self {
            text,
            icon: None,
            icon_size: 40.0,
            spacing: 10.0,
        }
    }

    pub fn icon(mut self, texture: TextureHandle) -> Self {
        self.icon = Some(texture);
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            if let Some(icon) = &self.icon {
                ui.add(egui::Image::new(icon).fit_to_exact_size(Vec2::splat(self.icon_size)));
            }
            ui.add_space(self.spacing);
            let response = self.text.show(ui);
            // Trailing expansion keeps the title left-aligned.
            ui.allocate_space(Vec2::new(ui.available_width(), 0.0));
            response
        })
        .inner
    }
}
