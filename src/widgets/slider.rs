//! Sliders: a bare labeled slider and the slider + numeric input combination
//! used for time-shift controls.

use egui::{Response, Ui};

use crate::config::{LabelPosition, Orientation};
use crate::widgets::inputs::InputResponse;

/// Labeled range slider over integer values.
pub struct LabeledSlider<'a> {
    value: &'a mut i64,
    min: i64,
    max: i64,
    label: Option<String>,
    vertical: bool,
    enabled: bool,
}

impl<'a> LabeledSlider<'a> {
    pub fn new(value: &'a mut i64, min: i64, max: i64) -> Self {
        Self {
            value,
            min,
            max,
            label: None,
            vertical: false,
            enabled: true,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> InputResponse {
        let Self {
            value,
            min,
            max,
            label,
            vertical,
            enabled,
        } = self;
        let mut changed = false;
        let response: Response = ui
            .add_enabled_ui(enabled, |ui| {
                if let Some(label) = &label {
                    ui.label(label.clone());
                }
                let mut slider = egui::Slider::new(value, min..=max).show_value(false);
                if vertical {
                    slider = slider.vertical();
                }
                let resp = ui.add(slider);
                changed = resp.changed();
                resp
            })
            .inner;
        InputResponse { response, changed }
    }
}

/// Slider and numeric input bound to the same value, input position
/// configurable around the slider.
pub struct SliderWithInput<'a> {
    value: &'a mut i64,
    min: i64,
    max: i64,
    label: String,
    input_position: LabelPosition,
    orientation: Orientation,
    spacing: f32,
    enabled: bool,
}

impl<'a> SliderWithInput<'a> {
    pub fn new(label: impl Into<String>, value: &'a mut i64, min: i64, max: i64) -> Self {
        Self {
            value,
            min,
            max,
            label: label.into(),
            input_position: LabelPosition::Right,
            orientation: Orientation::Horizontal,
            spacing: 10.0,
            enabled: true,
        }
    }

    pub fn input_position(mut self, position: LabelPosition) -> Self {
        self.input_position = position;
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

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> InputResponse {
        let Self {
            value,
            min,
            max,
            label,
            input_position,
            orientation,
            spacing,
            enabled,
        } = self;
        let mut changed = false;
        let inner = |ui: &mut Ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::splat(spacing);
            ui.add_enabled_ui(enabled, |ui| {
                let input_first = matches!(input_position, LabelPosition::Left | LabelPosition::Top);
                let mut first: Option<Response> = None;
                if input_first {
                    let resp = ui
                        .horizontal(|ui| {
                            ui.label(label.clone());
                            ui.add(egui::DragValue::new(&mut *value).range(min..=max))
                        })
                        .inner;
                    changed |= resp.changed();
                    first = Some(resp);
                }
                let slider_resp = ui.add(egui::Slider::new(&mut *value, min..=max).show_value(false));
                changed |= slider_resp.changed();
                if !input_first {
                    let resp = ui
                        .horizontal(|ui| {
                            ui.label(label.clone());
                            ui.add(egui::DragValue::new(&mut *value).range(min..=max))
                        })
                        .inner;
                    changed |= resp.changed();
                    first = Some(resp);
                }
                match first {
                    Some(other) => slider_resp.union(other),
                    None => slider_resp,
                }
            })
            .inner
        };
        let response = match orientation {
            Orientation::Horizontal => ui.horizontal(inner).inner,
            Orientation::Vertical => ui.vertical(inner).inner,
        };
        InputResponse { response, changed }
    }
}

/// The time-shift control: slider plus bin input over the 0..=255 range.
pub fn time_shift_control<'a>(value: &'a mut i64) -> SliderWithInput<'a> {
    SliderWithInput::new("Time shift (bin):", value, 0, 255)
}
