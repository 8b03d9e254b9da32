//! Example: acquisition parameter inputs
//!
//! What it demonstrates
//! - Numeric, select and text inputs plus the time-shift slider combo.
//! - Tabs and toggle rows built from `Toggleable` records.
//! - Parameter validation surfaced through a warning popup.
//!
//! How to run
//! ```bash
//! cargo run --example flim_inputs
//! ```

use flim_widgets::widgets::slider::time_shift_control;
use flim_widgets::{
    popups, validate, ActionButton, NumericInput, OptionList, SelectInput, Tabs, TextInput, Theme,
    ToggleButtonRow, Toggleable,
};

struct DemoApp {
    bin_width_us: u32,
    frequency_mhz: f64,
    time_shift: i64,
    harmonic_index: usize,
    harmonics: OptionList,
    export_name: String,
    tabs: Vec<Toggleable>,
    acquisition_mode: Vec<Toggleable>,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(key) = Tabs::new(&mut self.tabs).show(ui).activated {
                println!("tab -> {key}");
            }
            ui.separator();

            NumericInput::new("Bin width (\u{3bc}s):", &mut self.bin_width_us, 1000, 1_000_000)
                .default_value(1000)
                .show(ui);
            NumericInput::new("Frequency (MHz):", &mut self.frequency_mhz, 0.0, 500.0)
                .speed(0.5)
                .show(ui);
            SelectInput::new("Harmonic:", &mut self.harmonic_index, &self.harmonics).show(ui);
            TextInput::new("Export name:", &mut self.export_name)
                .placeholder("acquisition")
                .show(ui);
            time_shift_control(&mut self.time_shift).show(ui);

            ui.add_space(8.0);
            ToggleButtonRow::new(&mut self.acquisition_mode).show(ui);

            ui.add_space(16.0);
            if ActionButton::new("START").auto_size().show(ui).clicked() {
                if let Err(e) =
                    validate::check_spectroscopy(self.bin_width_us, self.frequency_mhz, &[0])
                {
                    popups::warning("Error", &e.to_string());
                } else {
                    println!("acquisition started");
                }
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    eframe::run_native(
        "flim-widgets: inputs",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            Theme::FlimDark.apply(&cc.egui_ctx);
            flim_widgets::install_icon_font(&cc.egui_ctx);
            Ok(Box::new(DemoApp {
                bin_width_us: 1000,
                frequency_mhz: 80.0,
                time_shift: 0,
                harmonic_index: 0,
                harmonics: OptionList::new(["1", "2", "3", "4"]),
                export_name: String::new(),
                tabs: vec![
                    Toggleable::new("Spectroscopy", "spectroscopy", true),
                    Toggleable::new("Phasors", "phasors", false),
                ],
                acquisition_mode: vec![
                    Toggleable::new("Free running", "free", true),
                    Toggleable::new("Time span", "span", false),
                ],
            }))
        }),
    )
}
