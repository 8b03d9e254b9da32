//! Example: switches and checkboxes
//!
//! What it demonstrates
//! - The drag-to-toggle `Switch`, `SwitchBox` and the LIN/LOG dual-label switch.
//! - Fancy (painted) and standard channel checkboxes.
//!
//! How to run
//! ```bash
//! cargo run --example switch
//! ```

use flim_widgets::widgets::switch::{lin_log_switch, quantize_switch, Switch};
use flim_widgets::{FancyCheckbox, LabeledCheckbox, Theme};

struct DemoApp {
    enabled_switch: bool,
    quantize: bool,
    lin_scale: bool,
    fancy_checked: bool,
    standard_checked: bool,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Switches");
            let resp = Switch::new(&mut self.enabled_switch).show(ui);
            if resp.changed {
                println!("switch -> {}", resp.on);
            }
            ui.add_space(12.0);
            quantize_switch(&mut self.quantize).show(ui);
            ui.add_space(12.0);
            lin_log_switch(&mut self.lin_scale).show(ui);

            ui.separator();
            ui.heading("Checkboxes");
            FancyCheckbox::new("Channel 1", &mut self.fancy_checked).show(ui);
            LabeledCheckbox::new(1, "Channel 2", &mut self.standard_checked).show(ui);
        });
    }
}

fn main() -> eframe::Result<()> {
    eframe::run_native(
        "flim-widgets: switches",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            Theme::FlimDark.apply(&cc.egui_ctx);
            flim_widgets::install_icon_font(&cc.egui_ctx);
            Ok(Box::new(DemoApp {
                enabled_switch: false,
                quantize: false,
                lin_scale: true,
                fancy_checked: true,
                standard_checked: false,
            }))
        }),
    )
}
