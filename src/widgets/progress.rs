//! Progress and loading indicators.

use egui::{Color32, CornerRadius, Rect, Response, RichText, Sense, Ui, Vec2};

use crate::assets::Animation;
use crate::config::LabelPosition;

/// Labeled progress bar with determinate and indeterminate modes.
pub struct ProgressBar {
    fraction: f32,
    label: Option<String>,
    pub color: Color32,
    pub height: f32,
    pub width: Option<f32>,
    pub indeterminate: bool,
    pub visible: bool,
    completed: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            fraction: 0.0,
            label: None,
            color: Color32::from_rgb(0x31, 0xc9, 0x14),
            height: 15.0,
            width: None,
            indeterminate: false,
            visible: true,
            completed: false,
        }
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Switch between indeterminate and determinate mode.
    pub fn set_indeterminate(&mut self, on: bool) {
        self.indeterminate = on;
        if on {
            self.fraction = 0.0;
        }
    }

    /// Update progress from current/total values; sets the `completed` flag
    /// at 100%. Ignored in indeterminate mode.
    pub fn update(&mut self, current: u64, total: u64, label: Option<&str>) {
        if self.indeterminate {
            return;
        }
        let frac = if total == 0 {
            0.0
        } else {
            current as f32 / total as f32
        };
        self.fraction = frac.clamp(0.0, 1.0);
        if let Some(text) = label {
            self.label = Some(text.to_string());
        }
        if frac >= 1.0 {
            self.completed = true;
        }
    }

    /// Reset progress and clear the label.
    pub fn clear(&mut self) {
        if !self.indeterminate {
            self.fraction = 0.0;
            self.label = None;
            self.completed = false;
        }
    }

    pub fn value(&self) -> u32 {
        (self.fraction * 100.0) as u32
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn show(&self, ui: &mut Ui) -> Option<Response> {
        if !self.visible {
            return None;
        }
        let response = ui
            .vertical(|ui| {
                if let Some(label) = &self.label {
                    ui.label(label);
                }
                let width = self.width.unwrap_or_else(|| ui.available_width());
                let (rect, response) =
                    ui.allocate_exact_size(Vec2::new(width, self.height), Sense::hover());
                let painter = ui.painter();
                let rounding = CornerRadius::same((self.height / 2.0) as u8);
                painter.rect_filled(rect, rounding, ui.visuals().extreme_bg_color);
                if self.indeterminate {
                    // Sweeping segment bouncing across the track.
                    let t = ui.input(|i| i.time);
                    let phase = ((t * 0.8).fract() * 2.0 - 1.0).abs() as f32;
                    let seg_w = rect.width() * 0.3;
                    let x0 = rect.left() + phase * (rect.width() - seg_w);
                    let seg = Rect::from_min_size(
                        egui::pos2(x0, rect.top()),
                        Vec2::new(seg_w, rect.height()),
                    );
                    painter.rect_filled(seg, rounding, self.color);
                    ui.ctx().request_repaint();
                } else if self.fraction > 0.0 {
                    let filled = Rect::from_min_size(
                        rect.min,
                        Vec2::new(rect.width() * self.fraction, rect.height()),
                    );
                    painter.rect_filled(filled, rounding, self.color);
                }
                response
            })
            .inner;
        Some(response)
    }
}

/// Animated loading indicator: GIF frames when an [`Animation`] is supplied,
/// an egui spinner otherwise, with the label on a configurable side.
pub struct LoadingIndicator {
    pub label: String,
    pub label_position: LabelPosition,
    pub label_color: Color32,
    pub size: f32,
    pub spacing: f32,
    pub animation: Option<Animation>,
    running: bool,
    started_at: Option<f64>,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self {
            label: "Processing data...".to_string(),
            label_position: LabelPosition::Left,
            label_color: Color32::from_rgb(0x50, 0xb3, 0xd7),
            size: 36.0,
            spacing: 20.0,
            animation: None,
            running: false,
            started_at: None,
        }
    }
}

impl LoadingIndicator {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Start the animation and make the indicator visible.
    pub fn start(&mut self) {
        self.running = true;
        self.started_at = None;
    }

    /// Stop the animation and hide the indicator.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<Response> {
        if !self.running {
            return None;
        }
        let now = ui.input(|i| i.time);
        let started = *self.started_at.get_or_insert(now);
        let elapsed = std::time::Duration::from_secs_f64((now - started).max(0.0));

        let spinner = |ui: &mut Ui, this: &Self| {
            match this
                .animation
                .as_ref()
                .and_then(|a| a.frame_at(elapsed))
            {
                Some(frame) => {
                    let img = egui::Image::new(&frame.texture)
                        .fit_to_exact_size(Vec2::splat(this.size));
                    ui.add(img);
                }
                None => {
                    ui.add(egui::Spinner::new().size(this.size).color(this.label_color));
                }
            }
            ui.ctx().request_repaint();
        };
        let label = |ui: &mut Ui, this: &Self| {
            ui.label(
                RichText::new(&this.label)
                    .color(this.label_color)
                    .size(18.0)
                    .strong(),
            );
        };

        let response = match self.label_position {
            LabelPosition::Left => ui
                .horizontal(|ui| {
                    label(ui, self);
                    ui.add_space(self.spacing);
                    spinner(ui, self);
                })
                .response,
            LabelPosition::Right => ui
                .horizontal(|ui| {
                    spinner(ui, self);
                    ui.add_space(self.spacing);
                    label(ui, self);
                })
                .response,
            LabelPosition::Top => ui
                .vertical_centered(|ui| {
                    label(ui, self);
                    ui.add_space(self.spacing);
                    spinner(ui, self);
                })
                .response,
            LabelPosition::Bottom => ui
                .vertical_centered(|ui| {
                    spinner(ui, self);
                    ui.add_space(self.spacing);
                    label(ui, self);
                })
                .response,
        };
        Some(response)
    }
}

/// Translucent veil over the whole viewport with a centered loading
/// indicator.
pub struct LoadingOverlay {
    pub indicator: LoadingIndicator,
    pub veil: Color32,
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self {
            indicator: LoadingIndicator {
                label_position: LabelPosition::Bottom,
                ..Default::default()
            },
            veil: Color32::from_rgba_unmultiplied(0, 0, 0, 160),
        }
    }
}

impl LoadingOverlay {
    pub fn start(&mut self) {
        self.indicator.start();
    }

    pub fn stop(&mut self) {
        self.indicator.stop();
    }

    pub fn is_running(&self) -> bool {
        self.indicator.is_running()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.indicator.is_running() {
            return;
        }
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("loading_overlay_veil"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .interactable(false)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, CornerRadius::ZERO, self.veil);
            });
        egui::Area::new(egui::Id::new("loading_overlay_indicator"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .interactable(false)
            .show(ctx, |ui| {
                self.indicator.show(ui);
            });
    }
}
