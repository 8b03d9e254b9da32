//! Labeled input widgets: numeric spin inputs, dropdown selects and single-
//! and multi-line text entry.

use egui::emath::Numeric;
use egui::{Response, Ui};

use crate::config::Orientation;

/// Response of an input widget.
pub struct InputResponse {
    pub response: Response,
    pub changed: bool,
}

/// Labeled numeric input over any numeric type (integer or float).
pub struct NumericInput<'a, T: Numeric> {
    label: String,
    value: &'a mut T,
    min: T,
    max: T,
    default_value: Option<T>,
    speed: f64,
    orientation: Orientation,
    width: Option<f32>,
    enabled: bool,
    tooltip: Option<String>,
}

impl<'a, T: Numeric> NumericInput<'a, T> {
    pub fn new(label: impl Into<String>, value: &'a mut T, min: T, max: T) -> Self {
        Self {
            label: label.into(),
            value,
            min,
            max,
            default_value: None,
            speed: 1.0,
            orientation: Orientation::Vertical,
            width: None,
            enabled: true,
            tooltip: None,
        }
    }

    /// Show a reset affordance restoring this value.
    pub fn default_value(mut self, default: T) -> Self {
        self.default_value = Some(default);
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    pub fn show(self, ui: &mut Ui) -> InputResponse {
        let Self {
            label,
            value,
            min,
            max,
            default_value,
            speed,
            orientation,
            width,
            enabled,
            tooltip,
        } = self;
        let mut changed = false;
        let inner = |ui: &mut Ui| {
            ui.label(label);
            ui.add_enabled_ui(enabled, |ui| {
                ui.horizontal(|ui| {
                    if let Some(w) = width {
                        ui.spacing_mut().interact_size.x = w;
                    }
                    let drag = egui::DragValue::new(value).range(min..=max).speed(speed);
                    let mut resp = ui.add(drag);
                    if let Some(tip) = &tooltip {
                        resp = resp.on_hover_text(tip.clone());
                    }
                    changed = resp.changed();
                    if let Some(default) = default_value {
                        if ui
                            .small_button(egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE)
                            .on_hover_text("Reset to default")
                            .clicked()
                        {
                            *value = default;
                            changed = true;
                        }
                    }
                    resp
                })
                .inner
            })
            .inner
        };
        let response = match orientation {
            Orientation::Vertical => ui.vertical(inner).inner,
            Orientation::Horizontal => ui.horizontal(inner).inner,
        };
        InputResponse { response, changed }
    }
}

/// The option list of a [`SelectInput`], with the original's mutation
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList(pub Vec<String>);

impl OptionList {
    pub fn new(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(options.into_iter().map(Into::into).collect())
    }

    pub fn add_option(&mut self, option: impl Into<String>) {
        self.0.push(option.into());
    }

    /// Append several options, optionally clearing the existing ones first.
    pub fn add_options(
        &mut self,
        options: impl IntoIterator<Item = impl Into<String>>,
        clear: bool,
    ) {
        if clear {
            self.0.clear();
        }
        self.0.extend(options.into_iter().map(Into::into));
    }

    pub fn remove_option(&mut self, index: usize) {
        if index < self.0.len() {
            self.0.remove(index);
        }
    }
}

/// Labeled dropdown menu over a list of options.
pub struct SelectInput<'a> {
    label: String,
    selected: &'a mut usize,
    options: &'a [String],
    orientation: Orientation,
    width: Option<f32>,
    enabled: bool,
    tooltip: Option<String>,
}

impl<'a> SelectInput<'a> {
    pub fn new(label: impl Into<String>, selected: &'a mut usize, options: &'a OptionList) -> Self {
        Self {
            label: label.into(),
            selected,
            options: &options.0,
            orientation: Orientation::Vertical,
            width: None,
            enabled: true,
            tooltip: None,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    pub fn show(self, ui: &mut Ui) -> InputResponse {
        let Self {
            label,
            selected,
            options,
            orientation,
            width,
            enabled,
            tooltip,
        } = self;
        let mut changed = false;
        let inner = |ui: &mut Ui| {
            ui.label(label.clone());
            ui.add_enabled_ui(enabled, |ui| {
                let mut combo = egui::ComboBox::from_id_salt(ui.id().with(&label));
                if let Some(w) = width {
                    combo = combo.width(w);
                }
                let selected_text = options.get(*selected).cloned().unwrap_or_default();
                let mut resp = combo
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for (i, option) in options.iter().enumerate() {
                            if ui.selectable_label(*selected == i, option).clicked() && *selected != i
                            {
                                *selected = i;
                                changed = true;
                            }
                        }
                    })
                    .response;
                if let Some(tip) = &tooltip {
                    resp = resp.on_hover_text(tip.clone());
                }
                resp
            })
            .inner
        };
        let response = match orientation {
            Orientation::Vertical => ui.vertical(inner).inner,
            Orientation::Horizontal => ui.horizontal(inner).inner,
        };
        InputResponse { response, changed }
    }
}

/// Labeled single-line text input with optional placeholder.
pub struct TextInput<'a> {
    label: String,
    text: &'a mut String,
    placeholder: Option<String>,
    orientation: Orientation,
    width: Option<f32>,
    enabled: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(label: impl Into<String>, text: &'a mut String) -> Self {
        Self {
            label: label.into(),
            text,
            placeholder: None,
            orientation: Orientation::Vertical,
            width: None,
            enabled: true,
        }
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> InputResponse {
        let Self {
            label,
            text,
            placeholder,
            orientation,
            width,
            enabled,
        } = self;
        let mut changed = false;
        let inner = |ui: &mut Ui| {
            ui.label(label);
            ui.add_enabled_ui(enabled, |ui| {
                let mut edit = egui::TextEdit::singleline(text);
                if let Some(hint) = &placeholder {
                    edit = edit.hint_text(hint.clone());
                }
                if let Some(w) = width {
                    edit = edit.desired_width(w);
                }
                let resp = ui.add(edit);
                changed = resp.changed();
                resp
            })
            .inner
        };
        let response = match orientation {
            Orientation::Vertical => ui.vertical(inner).inner,
            Orientation::Horizontal => ui.horizontal(inner).inner,
        };
        InputResponse { response, changed }
    }
}

/// Labeled multi-line text input with an optional character limit.
pub struct TextArea<'a> {
    label: String,
    text: &'a mut String,
    placeholder: Option<String>,
    max_chars: Option<usize>,
    rows: usize,
    width: Option<f32>,
    enabled: bool,
}

impl<'a> TextArea<'a> {
    pub fn new(label: impl Into<String>, text: &'a mut String) -> Self {
        Self {
            label: label.into(),
            text,
            placeholder: None,
            max_chars: None,
            rows: 4,
            width: None,
            enabled: true,
        }
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> InputResponse {
        let Self {
            label,
            text,
            placeholder,
            max_chars,
            rows,
            width,
            enabled,
        } = self;
        let mut changed = false;
        let response = ui
            .vertical(|ui| {
                ui.label(label);
                ui.add_enabled_ui(enabled, |ui| {
                    let mut edit = egui::TextEdit::multiline(text).desired_rows(rows);
                    if let Some(hint) = &placeholder {
                        edit = edit.hint_text(hint.clone());
                    }
                    if let Some(w) = width {
                        edit = edit.desired_width(w);
                    }
                    let output = edit.show(ui);
                    changed = output.response.changed();
                    if let Some(max) = max_chars {
                        if text.chars().count() > max {
                            // Over the limit: keep the head up to the limit
                            // plus everything beyond the cursor, so typing in
                            // the middle does not discard the tail.
                            let cursor = output
                                .cursor_range
                                .map(|r| r.primary.index)
                                .unwrap_or_else(|| text.chars().count());
                            let head: String = text.chars().take(max).collect();
                            let tail: String = text.chars().skip(cursor).collect();
                            *text = head + &tail;
                        }
                    }
                    output.response
                })
                .inner
            })
            .inner;
        InputResponse { response, changed }
    }
}
