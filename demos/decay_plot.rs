//! Example: decay curve plot with LIN/LOG toggle
//!
//! What it demonstrates
//! - `FlimPlot` with a registered decay series re-derived in lin or log mode.
//! - Formatted power-of-ten ticks, grid config and a region of interest.
//! - The SBR readout fed from the same data.
//!
//! How to run
//! ```bash
//! cargo run --example decay_plot
//! ```

use flim_widgets::widgets::switch::lin_log_switch;
use flim_widgets::{
    Axis, AxisLook, FlimPlot, GridLook, LineLook, SbrLabel, SeriesOptions, Theme,
};

fn decay_curve() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..256).map(|i| i as f64 * 12.5 / 256.0).collect();
    let y: Vec<f64> = x.iter().map(|t| 50_000.0 * (-t / 2.5).exp() + 120.0).collect();
    (x, y)
}

struct DemoApp {
    plot: FlimPlot,
    sbr: SbrLabel,
    lin_scale: bool,
}

impl DemoApp {
    fn new() -> Self {
        let (x, y) = decay_curve();
        let mut plot = FlimPlot::new("decay")
            .title("Decay")
            .x_axis(AxisLook {
                label: "Time".to_string(),
                units: "ns".to_string(),
                ..Default::default()
            })
            .y_axis(AxisLook {
                label: "Photon counts".to_string(),
                ..Default::default()
            })
            .grid(GridLook {
                show_x: true,
                show_y: true,
                alpha: 0.3,
            });
        plot.init_series("decay", &x, &y, LineLook::default(), &Self::options(false));
        plot.add_region(2.0, 6.0, egui::Color32::from_rgba_unmultiplied(30, 144, 255, 40));
        let mut sbr = SbrLabel::new();
        sbr.update(&y, 2);
        Self {
            plot,
            sbr,
            lin_scale: false,
        }
    }

    fn options(lin: bool) -> SeriesOptions {
        SeriesOptions {
            log_mode: !lin,
            scale_axis: Axis::Y,
            format_ticks: true,
            ..Default::default()
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            let resp = lin_log_switch(&mut self.lin_scale).show(ui);
            if resp.changed {
                let (x, y) = decay_curve();
                let _ = self.plot.update_series(
                    "decay",
                    &x,
                    &y,
                    true,
                    &Self::options(self.lin_scale),
                );
            }
            ui.add_space(20.0);
            self.sbr.show(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(resp) = self.plot.show(ui) {
                if resp.region_changed {
                    if let Ok((x, _)) = self.plot.region_series("decay") {
                        println!("region now holds {} samples", x.len());
                    }
                }
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    eframe::run_native(
        "flim-widgets: decay plot",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            Theme::FlimDark.apply(&cc.egui_ctx);
            Ok(Box::new(DemoApp::new()))
        }),
    )
}
