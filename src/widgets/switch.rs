//! Two-state switch with drag-to-toggle and release animation.
//!
//! The control has three interaction states: idle, dragging (the knob
//! follows the pointer inside the track) and animating (after release the
//! knob snaps to the nearest edge and glides there). A plain click toggles.

use egui::{Color32, CursorIcon, Response, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::config::Orientation;

/// Track padding around the knob, in points.
const KNOB_PADDING: f32 = 3.0;

/// Response of a switch: the egui response plus toggle reporting.
pub struct SwitchResponse {
    pub response: Response,
    /// The switch changed state this frame.
    pub changed: bool,
    /// Current state after this frame.
    pub on: bool,
}

/// The bare switch control.
pub struct Switch<'a> {
    on: &'a mut bool,
    width: f32,
    height: f32,
    knob_color: Color32,
    active_color: Color32,
    unchecked_color: Color32,
    animation_secs: f32,
    enabled: bool,
    vertical: bool,
}

impl<'a> Switch<'a> {
    pub fn new(on: &'a mut bool) -> Self {
        Self {
            on,
            width: 80.0,
            height: 28.0,
            knob_color: Color32::from_rgb(0x22, 0x22, 0x22),
            active_color: Color32::from_rgb(0xaa, 0x00, 0xff),
            unchecked_color: Color32::DARK_GRAY,
            animation_secs: 0.3,
            enabled: true,
            vertical: false,
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn knob_color(mut self, color: Color32) -> Self {
        self.knob_color = color;
        self
    }

    pub fn active_color(mut self, color: Color32) -> Self {
        self.active_color = color;
        self
    }

    pub fn unchecked_color(mut self, color: Color32) -> Self {
        self.unchecked_color = color;
        self
    }

    pub fn animation_secs(mut self, secs: f32) -> Self {
        self.animation_secs = secs;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Rotate the track 90°, knob travelling along y.
    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn show(self, ui: &mut Ui) -> SwitchResponse {
        let desired = if self.vertical {
            Vec2::new(self.height, self.width)
        } else {
            Vec2::new(self.width, self.height)
        };
        let sense = if self.enabled {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(desired, sense);
        let id = response.id;
        let mut changed = false;

        let thickness = if self.vertical {
            rect.width()
        } else {
            rect.height()
        };
        let radius = thickness / 2.0 - KNOB_PADDING;
        let (lo, hi) = if self.vertical {
            (
                rect.top() + KNOB_PADDING + radius,
                rect.bottom() - KNOB_PADDING - radius,
            )
        } else {
            (
                rect.left() + KNOB_PADDING + radius,
                rect.right() - KNOB_PADDING - radius,
            )
        };

        let drag_key = id.with("drag_pos");
        if self.enabled {
            if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let along = if self.vertical { pos.y } else { pos.x };
                    ui.memory_mut(|m| m.data.insert_temp(drag_key, along.clamp(lo, hi)));
                }
            }
            if response.drag_stopped() {
                let along = ui
                    .memory(|m| m.data.get_temp::<f32>(drag_key))
                    .unwrap_or(if *self.on { hi } else { lo });
                // Release snaps to the closest end of the travel range.
                let target = (along - lo) > (hi - along);
                if target != *self.on {
                    *self.on = target;
                    changed = true;
                }
                ui.memory_mut(|m| m.data.remove::<f32>(drag_key));
            }
            if response.clicked() {
                *self.on = !*self.on;
                changed = true;
            }
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let rounding = egui::CornerRadius::same((thickness / 2.0) as u8);
            if self.enabled {
                let fill = if *self.on {
                    self.active_color
                } else {
                    self.unchecked_color
                };
                painter.rect_filled(rect, rounding, fill);
            } else {
                painter.rect_filled(rect, rounding, Color32::BLACK);
                painter.rect_stroke(
                    rect,
                    rounding,
                    Stroke::new(1.0, Color32::WHITE),
                    StrokeKind::Inside,
                );
            }

            let dragging = ui.memory(|m| m.data.get_temp::<f32>(drag_key));
            let along = match dragging {
                Some(pos) => pos,
                None => {
                    let t = ui
                        .ctx()
                        .animate_bool_with_time(id.with("anim"), *self.on, self.animation_secs);
                    lo + (hi - lo) * t
                }
            };
            let center = if self.vertical {
                egui::pos2(rect.center().x, along)
            } else {
                egui::pos2(along, rect.center().y)
            };
            painter.circle_filled(center, radius, self.knob_color);
        }

        let response = if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand)
        } else {
            response
        };
        SwitchResponse {
            changed,
            on: *self.on,
            response,
        }
    }
}

/// Label + switch in a vertical or horizontal arrangement.
pub struct SwitchBox<'a> {
    label: String,
    switch: Switch<'a>,
    orientation: Orientation,
    spacing: f32,
}

impl<'a> SwitchBox<'a> {
    pub fn new(label: impl Into<String>, on: &'a mut bool) -> Self {
        Self {
            label: label.into(),
            switch: Switch::new(on),
            orientation: Orientation::Vertical,
            spacing: 8.0,
        }
    }

    pub fn switch(mut self, configure: impl FnOnce(Switch<'a>) -> Switch<'a>) -> Self {
        self.switch = configure(self.switch);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn show(self, ui: &mut Ui) -> SwitchResponse {
        let Self {
            label,
            switch,
            orientation,
            spacing,
        } = self;
        let inner = |ui: &mut Ui| {
            ui.label(label);
            ui.add_space(spacing);
            switch.show(ui)
        };
        match orientation {
            Orientation::Vertical => ui.vertical(inner).inner,
            Orientation::Horizontal => ui.horizontal(inner).inner,
        }
    }
}

/// Switch flanked by "off" and "on" labels, e.g. the LIN/LOG scale toggle.
pub struct DualLabelSwitch<'a> {
    label_on: String,
    label_off: String,
    switch: Switch<'a>,
    orientation: Orientation,
    label_color: Option<Color32>,
}

impl<'a> DualLabelSwitch<'a> {
    pub fn new(
        label_off: impl Into<String>,
        label_on: impl Into<String>,
        on: &'a mut bool,
    ) -> Self {
        Self {
            label_on: label_on.into(),
            label_off: label_off.into(),
            switch: Switch::new(on),
            orientation: Orientation::Vertical,
            label_color: None,
        }
    }

    pub fn switch(mut self, configure: impl FnOnce(Switch<'a>) -> Switch<'a>) -> Self {
        self.switch = configure(self.switch);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn label_color(mut self, color: Color32) -> Self {
        self.label_color = Some(color);
        self
    }

    pub fn show(self, ui: &mut Ui) -> SwitchResponse {
        let Self {
            label_on,
            label_off,
            switch,
            orientation,
            label_color,
        } = self;
        let label = |ui: &mut Ui, text: &str| {
            let mut rich = egui::RichText::new(text);
            if let Some(color) = label_color {
                rich = rich.color(color);
            }
            ui.label(rich);
        };
        let vertical = orientation == Orientation::Vertical;
        let inner = |ui: &mut Ui| {
            label(ui, &label_off);
            let resp = switch.vertical(vertical).show(ui);
            label(ui, &label_on);
            resp
        };
        if vertical {
            ui.vertical_centered(inner).inner
        } else {
            ui.horizontal(inner).inner
        }
    }
}

/// The LIN/LOG scale toggle used next to decay plots.
pub fn lin_log_switch<'a>(on_lin: &'a mut bool) -> DualLabelSwitch<'a> {
    DualLabelSwitch::new("LOG", "LIN", on_lin)
        .switch(|s| {
            s.active_color(Color32::from_rgb(247, 40, 40))
                .unchecked_color(Color32::from_rgb(247, 40, 40))
        })
}

/// The quantize-phasors toggle.
pub fn quantize_switch<'a>(on: &'a mut bool) -> SwitchBox<'a> {
    SwitchBox::new("Quantize Phasors:", on)
        .switch(|s| s.active_color(Color32::from_rgb(0x11, 0x46, 0x8f)))
}
