//! Channel checkboxes: the custom-painted circular "fancy" form, a standard
//! wrapper and a framed variant.

use egui::{Color32, CursorIcon, Frame, Response, Sense, Stroke, Ui, Vec2};

/// Response of a checkbox widget.
pub struct CheckboxResponse {
    pub response: Response,
    pub changed: bool,
    pub checked: bool,
}

/// Custom-painted circular checkbox: an outline ring with a filled inner dot
/// when checked. The label forwards clicks to the ring.
pub struct FancyCheckbox<'a> {
    checked: &'a mut bool,
    label: String,
    checked_color: Color32,
    disabled_color: Color32,
    enabled: bool,
}

impl<'a> FancyCheckbox<'a> {
    pub fn new(label: impl Into<String>, checked: &'a mut bool) -> Self {
        Self {
            checked,
            label: label.into(),
            checked_color: Color32::from_rgb(0xff, 0x42, 0x42),
            disabled_color: Color32::from_rgb(0x3c, 0x3c, 0x3c),
            enabled: true,
        }
    }

    pub fn checked_color(mut self, color: Color32) -> Self {
        self.checked_color = color;
        self
    }

    pub fn disabled_color(mut self, color: Color32) -> Self {
        self.disabled_color = color;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> CheckboxResponse {
        let mut changed = false;
        let response = ui
            .horizontal(|ui| {
                let sense = if self.enabled {
                    Sense::click()
                } else {
                    Sense::hover()
                };
                let (rect, ring_resp) = ui.allocate_exact_size(Vec2::splat(20.0), sense);
                let label_resp = ui
                    .add(egui::Label::new(self.label.clone()).sense(sense))
                    .on_hover_cursor(CursorIcon::PointingHand);
                if self.enabled && (ring_resp.clicked() || label_resp.clicked()) {
                    *self.checked = !*self.checked;
                    changed = true;
                }
                if ui.is_rect_visible(rect) {
                    let color = if self.enabled {
                        self.checked_color
                    } else {
                        self.disabled_color
                    };
                    let painter = ui.painter();
                    painter.circle_stroke(rect.center(), 9.0, Stroke::new(1.0, color));
                    if *self.checked {
                        painter.circle_filled(rect.center(), 6.0, color);
                    }
                }
                ring_resp.on_hover_cursor(CursorIcon::PointingHand)
            })
            .inner;
        CheckboxResponse {
            response,
            changed,
            checked: *self.checked,
        }
    }
}

/// Channel checkbox: standard egui checkbox by default, the painted circular
/// form with `fancy(true)`.
pub struct LabeledCheckbox<'a> {
    checked: &'a mut bool,
    label: String,
    /// Identifier reported back to the caller, e.g. the channel index.
    pub key: usize,
    checked_color: Color32,
    unchecked_color: Color32,
    enabled: bool,
    fancy: bool,
}

impl<'a> LabeledCheckbox<'a> {
    pub fn new(key: usize, label: impl Into<String>, checked: &'a mut bool) -> Self {
        Self {
            checked,
            label: label.into(),
            key,
            checked_color: Color32::from_rgb(0x1e, 0x90, 0xff),
            unchecked_color: Color32::from_rgb(0x6b, 0x6a, 0x6a),
            enabled: true,
            fancy: false,
        }
    }

    pub fn checked_color(mut self, color: Color32) -> Self {
        self.checked_color = color;
        self
    }

    pub fn unchecked_color(mut self, color: Color32) -> Self {
        self.unchecked_color = color;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn fancy(mut self, fancy: bool) -> Self {
        self.fancy = fancy;
        self
    }

    pub fn show(self, ui: &mut Ui) -> CheckboxResponse {
        if self.fancy {
            return FancyCheckbox::new(self.label, self.checked)
                .checked_color(self.checked_color)
                .disabled_color(self.unchecked_color)
                .enabled(self.enabled)
                .show(ui);
        }
        let mut changed = false;
        let response = ui
            .add_enabled_ui(self.enabled, |ui| {
                let accent = if *self.checked {
                    self.checked_color
                } else {
                    self.unchecked_color
                };
                ui.visuals_mut().selection.bg_fill = accent;
                let resp = ui
                    .checkbox(self.checked, self.label)
                    .on_hover_cursor(CursorIcon::PointingHand);
                changed = resp.changed();
                resp
            })
            .inner;
        CheckboxResponse {
            response,
            changed,
            checked: *self.checked,
        }
    }
}

/// A checkbox inside a styled, bordered wrapper frame.
pub struct WrappedCheckbox<'a> {
    inner: LabeledCheckbox<'a>,
    fill: Color32,
    border_color: Color32,
    min_width: Option<f32>,
}

impl<'a> WrappedCheckbox<'a> {
    pub fn new(key: usize, label: impl Into<String>, checked: &'a mut bool) -> Self {
        Self {
            inner: LabeledCheckbox::new(key, label, checked),
            fill: Color32::from_rgb(0x25, 0x25, 0x25),
            border_color: Color32::from_rgb(0x3b, 0x3b, 0x3b),
            min_width: None,
        }
    }

    pub fn checkbox(
        mut self,
        configure: impl FnOnce(LabeledCheckbox<'a>) -> LabeledCheckbox<'a>,
    ) -> Self {
        self.inner = configure(self.inner);
        self
    }

    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    pub fn border_color(mut self, color: Color32) -> Self {
        self.border_color = color;
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn show(self, ui: &mut Ui) -> CheckboxResponse {
        Frame::new()
            .fill(self.fill)
            .stroke(Stroke::new(1.0, self.border_color))
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::symmetric(8, 6))
            .show(ui, |ui| {
                if let Some(w) = self.min_width {
                    ui.set_min_width(w);
                }
                self.inner.show(ui)
            })
            .inner
    }
}
