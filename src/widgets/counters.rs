//! Readout widgets: CPS counters, the acquisition time counter and the SBR
//! label.
//!
//! These are retained widgets: the host keeps the struct in its state, feeds
//! it data through `update*` calls and renders it with `show` each frame.

use egui::{Align2, Color32, Frame, Response, RichText, Sense, Stroke, Ui};

use crate::config::Orientation;
use crate::convert::{self, TimeUnit};
use crate::flim;

/// Counts-per-second readout with an optional vibrate animation above a
/// warning threshold.
pub struct CpsCounter {
    text: String,
    vibrating: bool,
    /// Vibrate when the CPS value exceeds the threshold passed to `update`.
    pub threshold_animation: bool,
    pub color: Color32,
    pub warning_color: Color32,
    pub font_size: f32,
    pub visible: bool,
}

impl Default for CpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CpsCounter {
    pub fn new() -> Self {
        Self {
            text: "No CPS".to_string(),
            vibrating: false,
            threshold_animation: true,
            color: Color32::WHITE,
            warning_color: Color32::from_rgb(0xda, 0x12, 0x12),
            font_size: 18.0,
            visible: true,
        }
    }

    /// Recompute the CPS readout once `interval_ns` has elapsed since the
    /// last update. Returns the computed rate when a recomputation happened.
    pub fn update(
        &mut self,
        current_time_ns: f64,
        last_time_ns: f64,
        interval_ns: f64,
        current_count: u64,
        last_count: u64,
        threshold: f64,
    ) -> Option<f64> {
        let elapsed = current_time_ns - last_time_ns;
        if elapsed <= interval_ns {
            return None;
        }
        let cps = (current_count.saturating_sub(last_count)) as f64 / (elapsed / 1e9);
        self.text = format!("{} CPS", convert::humanize_number(cps));
        if self.threshold_animation {
            if cps > threshold {
                self.start_animation();
            } else {
                self.stop_animation();
            }
        }
        Some(cps)
    }

    pub fn start_animation(&mut self) {
        self.vibrating = true;
    }

    pub fn stop_animation(&mut self) {
        self.vibrating = false;
    }

    pub fn is_vibrating(&self) -> bool {
        self.vibrating
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn show(&self, ui: &mut Ui) -> Option<Response> {
        if !self.visible {
            return None;
        }
        let color = if self.vibrating {
            self.warning_color
        } else {
            self.color
        };
        let galley = ui.painter().layout_no_wrap(
            self.text.clone(),
            egui::FontId::proportional(self.font_size),
            color,
        );
        let (rect, response) =
            ui.allocate_exact_size(galley.size() + egui::vec2(8.0, 4.0), Sense::hover());
        let mut pos = rect.center();
        if self.vibrating {
            // Small horizontal shake while above threshold.
            let t = ui.input(|i| i.time);
            pos.x += ((t * 40.0).sin() * 3.0) as f32;
            ui.ctx().request_repaint();
        }
        ui.painter().galley(
            pos - galley.size() * 0.5,
            galley,
            color,
        );
        Some(response)
    }

    /// Stop every animation in a collection of counters.
    pub fn clear_all_animations<'a>(counters: impl IntoIterator<Item = &'a mut CpsCounter>) {
        for counter in counters {
            counter.stop_animation();
        }
    }
}

/// Channel label + arrow + CPS counter in a bordered container.
pub struct ChannelCps<'a> {
    counter: &'a CpsCounter,
    channel_label: String,
    orientation: Orientation,
    border_color: Color32,
    fill: Color32,
}

impl<'a> ChannelCps<'a> {
    pub fn new(channel_label: impl Into<String>, counter: &'a CpsCounter) -> Self {
        Self {
            counter,
            channel_label: channel_label.into(),
            orientation: Orientation::Horizontal,
            border_color: Color32::from_rgb(0x3b, 0x3b, 0x3b),
            fill: Color32::TRANSPARENT,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn border_color(mut self, color: Color32) -> Self {
        self.border_color = color;
        self
    }

    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        Frame::new()
            .fill(self.fill)
            .stroke(Stroke::new(1.0, self.border_color))
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                let inner = |ui: &mut Ui| {
                    ui.label(&self.channel_label);
                    if self.orientation == Orientation::Horizontal {
                        ui.label(RichText::new(egui_phosphor::regular::ARROW_RIGHT).weak());
                    }
                    self.counter.show(ui);
                };
                match self.orientation {
                    Orientation::Horizontal => ui.horizontal(inner).response,
                    Orientation::Vertical => ui.vertical_centered(inner).response,
                }
            })
            .response
    }
}

/// Counting direction of a [`TimeCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterMode {
    #[default]
    Countdown,
    Countup,
}

/// Acquisition time counter supporting countdown and countup display.
pub struct TimeCounter {
    pub input_unit: TimeUnit,
    pub output_unit: TimeUnit,
    pub mode: CounterMode,
    /// Countup start, in `input_unit`.
    pub start_time: f64,
    /// Countdown end, in `input_unit`.
    pub end_time: f64,
    pub label_text: String,
    pub color: Color32,
    pub font_size: f32,
    pub visible: bool,
    text: String,
    completed: bool,
}

impl Default for TimeCounter {
    fn default() -> Self {
        Self {
            input_unit: TimeUnit::Nanos,
            output_unit: TimeUnit::Seconds,
            mode: CounterMode::Countdown,
            start_time: 0.0,
            end_time: 10.0,
            label_text: "Remaining time:".to_string(),
            color: Color32::from_rgb(0x31, 0xc9, 0x14),
            font_size: 18.0,
            visible: true,
            text: String::new(),
            completed: false,
        }
    }
}

impl TimeCounter {
    pub fn countdown(end_time: f64, input_unit: TimeUnit, output_unit: TimeUnit) -> Self {
        Self {
            end_time,
            input_unit,
            output_unit,
            ..Default::default()
        }
    }

    pub fn countup(start_time: f64, input_unit: TimeUnit, output_unit: TimeUnit) -> Self {
        Self {
            mode: CounterMode::Countup,
            start_time,
            input_unit,
            output_unit,
            label_text: "Elapsed time:".to_string(),
            ..Default::default()
        }
    }

    /// Update the display from the current time value (in `input_unit`).
    /// A countdown reaching zero sets the `completed` flag.
    pub fn update_count(&mut self, value: f64) {
        let current_s = convert::convert_time(value, self.input_unit, TimeUnit::Seconds);
        let span_s = match self.mode {
            CounterMode::Countdown => {
                let end_s = convert::convert_time(self.end_time, self.input_unit, TimeUnit::Seconds);
                let remaining = end_s - current_s;
                if remaining <= 0.0 {
                    self.completed = true;
                    0.0
                } else {
                    remaining
                }
            }
            CounterMode::Countup => {
                let start_s =
                    convert::convert_time(self.start_time, self.input_unit, TimeUnit::Seconds);
                current_s - start_s
            }
        };
        let out = convert::convert_time(span_s, TimeUnit::Seconds, self.output_unit);
        self.text = format_time_value(out, self.output_unit);
    }

    /// Whether a countdown has reached zero.
    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn reset(&mut self) {
        self.completed = false;
        self.text.clear();
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.label_text, self.text)
    }

    pub fn show(&self, ui: &mut Ui) -> Option<Response> {
        if !self.visible {
            return None;
        }
        Some(ui.label(
            RichText::new(self.text())
                .color(self.color)
                .size(self.font_size),
        ))
    }
}

/// Render a time span in `unit` as the two-part `MM:SS`-style display used
/// by the counter.
pub fn format_time_value(value: f64, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Seconds => {
            let seconds = value % 60.0;
            let millis = (value * 1000.0) % 1000.0;
            format!("{:02}:{:02} (s)", seconds as i64, millis as i64)
        }
        TimeUnit::Minutes => {
            let hours = (value / 60.0) / 60.0;
            let minutes = (value / 60.0) % 60.0;
            format!("{:02}:{:02} (m)", hours as i64, minutes as i64)
        }
        TimeUnit::Millis => {
            let seconds = value / 1000.0;
            let millis = value % 1000.0;
            format!("{:02}:{:03} (ms)", seconds as i64, millis as i64)
        }
        TimeUnit::Micros => {
            let seconds = value / 1e6;
            let micros = value % 1e6;
            format!("{:02}:{:06} (us)", seconds as i64, micros as i64)
        }
        TimeUnit::Nanos => {
            let seconds = value / 1e9;
            let nanos = value % 1e9;
            format!("{:02}:{:09} (ns)", seconds as i64, nanos as i64)
        }
    }
}

/// Signal-to-Background Ratio readout.
pub struct SbrLabel {
    text: String,
    pub color: Color32,
    pub background: Color32,
    pub font_size: f32,
    pub visible: bool,
}

impl Default for SbrLabel {
    fn default() -> Self {
        Self {
            text: "0 SBR".to_string(),
            color: Color32::from_rgb(0xf7, 0x28, 0x28),
            background: Color32::from_rgb(0x0a, 0x0a, 0x0a),
            font_size: 22.0,
            visible: true,
        }
    }
}

impl SbrLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the SBR from the latest trace data.
    pub fn update(&mut self, y: &[f64], decimals: usize) {
        let sbr = flim::calculate_sbr(y);
        self.text = format!("{:.*} SBR", decimals, sbr);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn show(&self, ui: &mut Ui) -> Option<Response> {
        if !self.visible {
            return None;
        }
        let galley = ui.painter().layout_no_wrap(
            self.text.clone(),
            egui::FontId::proportional(self.font_size),
            self.color,
        );
        let (rect, response) =
            ui.allocate_exact_size(galley.size() + egui::vec2(12.0, 6.0), Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(3), self.background);
        ui.painter().galley(
            Align2::CENTER_CENTER
                .align_size_within_rect(galley.size(), rect)
                .min,
            galley,
            self.color,
        );
        Some(response)
    }
}
