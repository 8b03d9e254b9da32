//! Buttons: the primary action button, the collapse toggle and the
//! time-tagger enable control.

use egui::{Color32, CursorIcon, Frame, Response, RichText, Stroke, Ui, Vec2};

/// Primary push-button with per-state background colors and an optional
/// phosphor icon glyph.
pub struct ActionButton {
    text: String,
    icon: Option<&'static str>,
    width: Option<f32>,
    height: Option<f32>,
    fg_color: Color32,
    bg_color: Color32,
    bg_color_hover: Color32,
    bg_color_pressed: Color32,
    bg_color_disabled: Color32,
    fg_color_disabled: Color32,
    border_color: Color32,
    enabled: bool,
}

impl ActionButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            width: Some(110.0),
            height: Some(55.0),
            fg_color: Color32::WHITE,
            bg_color: Color32::from_rgb(0x13, 0xb6, 0xb4),
            bg_color_hover: Color32::from_rgb(0x1e, 0xc9, 0x9f),
            bg_color_pressed: Color32::from_rgb(0x1a, 0xae, 0x88),
            bg_color_disabled: Color32::from_rgb(0xce, 0xce, 0xce),
            fg_color_disabled: Color32::from_rgb(0x8c, 0x8b, 0x8b),
            border_color: Color32::from_rgb(0x13, 0xb6, 0xb4),
            enabled: true,
        }
    }

    /// Phosphor icon glyph rendered before the text
    /// (e.g. `egui_phosphor::regular::PLAY`).
    pub fn icon(mut self, glyph: &'static str) -> Self {
        self.icon = Some(glyph);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Let the button size itself to its content.
    pub fn auto_size(mut self) -> Self {
        self.width = None;
        self.height = None;
        self
    }

    pub fn colors(mut self, fg: Color32, base: Color32, hover: Color32, pressed: Color32) -> Self {
        self.fg_color = fg;
        self.bg_color = base;
        self.bg_color_hover = hover;
        self.bg_color_pressed = pressed;
        self
    }

    pub fn border_color(mut self, color: Color32) -> Self {
        self.border_color = color;
        self
    }

    pub fn disabled_colors(mut self, fg: Color32, bg: Color32) -> Self {
        self.fg_color_disabled = fg;
        self.bg_color_disabled = bg;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        ui.add_enabled_ui(self.enabled, |ui| {
            let v = ui.visuals_mut();
            v.widgets.inactive.weak_bg_fill = self.bg_color;
            v.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border_color);
            v.widgets.hovered.weak_bg_fill = self.bg_color_hover;
            v.widgets.hovered.bg_stroke = Stroke::new(1.0, self.border_color);
            v.widgets.active.weak_bg_fill = self.bg_color_pressed;
            v.widgets.noninteractive.weak_bg_fill = self.bg_color_disabled;
            v.widgets.noninteractive.fg_stroke.color = self.fg_color_disabled;

            let fg = if self.enabled {
                self.fg_color
            } else {
                self.fg_color_disabled
            };
            let label = match self.icon {
                Some(glyph) => format!("{glyph} {}", self.text),
                None => self.text.clone(),
            };
            let mut button = egui::Button::new(RichText::new(label).color(fg).strong())
                .corner_radius(egui::CornerRadius::same(4));
            if let (Some(w), Some(h)) = (self.width, self.height) {
                button = button.min_size(Vec2::new(w, h));
            }
            ui.add(button).on_hover_cursor(CursorIcon::PointingHand)
        })
        .inner
    }
}

/// Arrow button that expands/collapses a content region with an animated
/// open/close.
pub struct CollapseButton {
    id: egui::Id,
    default_open: bool,
}

impl CollapseButton {
    pub fn new(id: impl std::hash::Hash, default_open: bool) -> Self {
        Self {
            id: egui::Id::new(id),
            default_open,
        }
    }

    /// Render the arrow button and, when expanded, the content underneath.
    /// Returns whether the region is currently expanded.
    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> bool {
        let mut state = egui::collapsing_header::CollapsingState::load_with_default_open(
            ui.ctx(),
            self.id,
            self.default_open,
        );
        let glyph = if state.is_open() {
            egui_phosphor::regular::CARET_UP
        } else {
            egui_phosphor::regular::CARET_DOWN
        };
        let clicked = ui
            .add(
                egui::Button::new(RichText::new(glyph).size(15.0))
                    .corner_radius(egui::CornerRadius::same(15))
                    .min_size(Vec2::splat(30.0)),
            )
            .on_hover_cursor(CursorIcon::PointingHand)
            .clicked();
        if clicked {
            state.toggle(ui);
        }
        let open = state.is_open();
        state.show_body_unindented(ui, add_contents);
        open
    }
}

/// Response of the time-tagger toggle.
pub struct TimeTaggerResponse {
    pub response: Response,
    pub changed: bool,
    pub enabled_state: bool,
}

/// Bordered "TIME TAGGER" enable control: a checkbox plus an icon glyph in a
/// framed container.
pub struct TimeTaggerToggle<'a> {
    checked: &'a mut bool,
    text: String,
    fg_color: Color32,
    bg_color: Color32,
    border_color: Color32,
    enabled: bool,
}

impl<'a> TimeTaggerToggle<'a> {
    pub fn new(checked: &'a mut bool) -> Self {
        Self {
            checked,
            text: "TIME TAGGER".to_string(),
            fg_color: Color32::from_rgb(0x00, 0x53, 0xa4),
            bg_color: Color32::WHITE,
            border_color: Color32::from_rgb(0x00, 0x53, 0xa4),
            enabled: true,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn colors(mut self, fg: Color32, bg: Color32, border: Color32) -> Self {
        self.fg_color = fg;
        self.bg_color = bg;
        self.border_color = border;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> TimeTaggerResponse {
        let mut changed = false;
        let inner = Frame::new()
            .fill(self.bg_color)
            .stroke(Stroke::new(1.0, self.border_color))
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let resp = ui
                        .add_enabled(
                            self.enabled,
                            egui::Checkbox::new(
                                self.checked,
                                RichText::new(&self.text).color(self.fg_color).strong(),
                            ),
                        )
                        .on_hover_cursor(CursorIcon::PointingHand);
                    changed = resp.changed();
                    ui.label(
                        RichText::new(egui_phosphor::regular::TIMER)
                            .size(20.0)
                            .color(self.fg_color),
                    );
                    resp
                })
                .inner
            })
            .inner;
        TimeTaggerResponse {
            response: inner,
            changed,
            enabled_state: *self.checked,
        }
    }
}
