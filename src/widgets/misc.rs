//! Layout separators, the watermark overlay and the device check card.

use egui::{Color32, CornerRadius, Frame, Response, RichText, Sense, Stroke, Ui, Vec2};

use crate::config::Orientation;
use crate::widgets::button::ActionButton;

/// Spacer plus a thin separator line.
pub struct LayoutSeparator {
    pub line_width: f32,
    pub color: Color32,
    pub horizontal_space: f32,
    pub vertical_space: f32,
    pub orientation: Orientation,
}

impl Default for LayoutSeparator {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: Color32::from_rgb(0x28, 0x28, 0x28),
            horizontal_space: 1.0,
            vertical_space: 10.0,
            orientation: Orientation::Horizontal,
        }
    }
}

impl LayoutSeparator {
    pub fn horizontal() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Default::default()
        }
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        match self.orientation {
            Orientation::Horizontal => {
                ui.add_space(self.vertical_space);
                let (rect, response) = ui.allocate_exact_size(
                    Vec2::new(ui.available_width(), self.line_width),
                    Sense::hover(),
                );
                ui.painter()
                    .rect_filled(rect, CornerRadius::ZERO, self.color);
                response
            }
            Orientation::Vertical => {
                ui.add_space(self.horizontal_space);
                let (rect, response) = ui.allocate_exact_size(
                    Vec2::new(self.line_width, ui.available_height()),
                    Sense::hover(),
                );
                ui.painter()
                    .rect_filled(rect, CornerRadius::ZERO, self.color);
                response
            }
        }
    }
}

/// Translucent watermark image painted at the bottom-right corner of the
/// viewport, transparent to the mouse.
pub struct WatermarkOverlay {
    pub texture: egui::TextureHandle,
    pub width: f32,
    pub opacity: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
}

impl WatermarkOverlay {
    pub fn new(texture: egui::TextureHandle) -> Self {
        Self {
            texture,
            width: 100.0,
            opacity: 0.3,
            padding_right: 10.0,
            padding_bottom: 20.0,
        }
    }

    pub fn show(&self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        let tex_size = self.texture.size_vec2();
        let scale = self.width / tex_size.x.max(1.0);
        let size = tex_size * scale;
        let pos = egui::pos2(
            screen.right() - size.x - self.padding_right,
            screen.bottom() - size.y - self.padding_bottom,
        );
        egui::Area::new(egui::Id::new(("watermark", self.texture.id())))
            .order(egui::Order::Background)
            .fixed_pos(pos)
            .interactable(false)
            .show(ctx, |ui| {
                let tint = Color32::WHITE.gamma_multiply(self.opacity);
                ui.add(
                    egui::Image::new(&self.texture)
                        .fit_to_exact_size(size)
                        .tint(tint),
                );
            });
    }
}

/// Status message shown next to the check-card button.
#[derive(Debug, Clone)]
struct CardMessage {
    text: String,
    error: bool,
}

/// Device check control: an action button plus a status label that appears
/// after the first check, showing either the card ID or an error message.
pub struct CheckCard {
    pub button_text: String,
    pub enabled: bool,
    pub visible: bool,
    message: Option<CardMessage>,
    pub message_color: Color32,
    pub message_background: Color32,
    pub message_border: Color32,
    pub error_color: Color32,
}

impl Default for CheckCard {
    fn default() -> Self {
        Self {
            button_text: "CHECK DEVICE".to_string(),
            enabled: true,
            visible: true,
            message: None,
            message_color: Color32::from_rgb(0x28, 0x5d, 0xa6),
            message_background: Color32::from_rgb(0x24, 0x24, 0x24),
            message_border: Color32::from_rgb(0x28, 0x5d, 0xa6),
            error_color: Color32::from_rgb(0xda, 0x12, 0x12),
        }
    }
}

impl CheckCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the detected card ID.
    pub fn set_card_id(&mut self, card_id: impl std::fmt::Display) {
        self.message = Some(CardMessage {
            text: format!("Card ID: {card_id}"),
            error: false,
        });
    }

    /// Show a check failure.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = Some(CardMessage {
            text: message.into(),
            error: true,
        });
    }

    /// Render the card. Returns `true` when the check button was clicked.
    pub fn show(&mut self, ui: &mut Ui) -> bool {
        if !self.visible {
            return false;
        }
        ui.horizontal(|ui| {
            let clicked = ActionButton::new(&self.button_text)
                .icon(egui_phosphor::regular::IDENTIFICATION_CARD)
                .auto_size()
                .colors(
                    Color32::WHITE,
                    Color32::from_rgb(0x11, 0x46, 0x8f),
                    Color32::from_rgb(0x00, 0x53, 0xa4),
                    Color32::from_rgb(0x0d, 0x3a, 0x73),
                )
                .enabled(self.enabled)
                .show(ui)
                .clicked();
            if let Some(message) = &self.message {
                let (color, border) = if message.error {
                    (self.error_color, self.error_color)
                } else {
                    (self.message_color, self.message_border)
                };
                Frame::new()
                    .fill(self.message_background)
                    .stroke(Stroke::new(1.0, border))
                    .corner_radius(CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(8, 4))
                    .show(ui, |ui| {
                        ui.label(RichText::new(&message.text).color(color));
                    });
            }
            clicked
        })
        .inner
    }
}
