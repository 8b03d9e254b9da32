//! Example: phasor plot
//!
//! What it demonstrates
//! - The universal semicircle drawn with `draw_semicircle`.
//! - Reference lifetime points from the phasor geometry helpers, annotated
//!   with text items, plus the mean phasor marker and a colorbar.
//!
//! How to run
//! ```bash
//! cargo run --example phasor_plot
//! ```

use egui::Color32;
use flim_widgets::{
    flim, AxisLook, ColormapKind, FlimPlot, LineLook, ScatterLook, SemicircleOrientation,
    TextLook, Theme,
};

fn build_plot() -> FlimPlot {
    let mut plot = FlimPlot::new("phasor")
        .title("Phasor")
        .x_axis(AxisLook::new("g"))
        .y_axis(AxisLook::new("s"));
    plot.draw_semicircle(
        "universal",
        0.5,
        0.0,
        0.5,
        1000,
        LineLook {
            color: Color32::from_rgb(0x1e, 0x90, 0xff),
            width: 2.0,
            ..Default::default()
        },
        SemicircleOrientation::Up,
    );

    // Reference lifetimes along the semicircle, labelled in ns.
    let (g, s, tau) = flim::phasor_points(1, 12.5, 80.0, &flim::PHASOR_LIFETIMES);
    for ((gv, sv), lifetime) in g.iter().zip(&s).zip(&tau) {
        let ns = lifetime * 1e9;
        let key = format!("tau_{ns:.1}");
        plot.add_scatter(
            &key,
            &[(*gv, *sv)],
            ScatterLook {
                size: 8.0,
                color: Color32::WHITE,
                ..Default::default()
            },
            Some(&format!("{key}:label")),
            Some(TextLook {
                text: format!("{ns:.1} ns"),
                color: Color32::GRAY,
                size: 10.0,
                position: Some((*gv, *sv + 0.04)),
                ..Default::default()
            }),
        )
        .expect("scatter with label");
    }

    // Mean of a simulated phasor cloud.
    let cloud: Vec<(f64, f64)> = (0..500)
        .map(|i| {
            let a = i as f64 * 0.013;
            (0.45 + a.sin() * 0.02, 0.38 + a.cos() * 0.02)
        })
        .collect();
    if let Some((mg, ms)) = flim::phasor_points_mean(&cloud) {
        plot.add_scatter(
            "mean",
            &[(mg, ms)],
            ScatterLook {
                size: 14.0,
                color: Color32::from_rgb(0xf7, 0x28, 0x28),
                ..Default::default()
            },
            None,
            None,
        )
        .expect("mean marker");
    }

    plot.add_colorbar(0.0, 1.0, ColormapKind::Cool);
    plot.set_range(Some((-0.1, 1.1)), Some((-0.1, 0.7)));
    plot
}

struct DemoApp {
    plot: FlimPlot,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot.show(ui);
        });
    }
}

fn main() -> eframe::Result<()> {
    eframe::run_native(
        "flim-widgets: phasor plot",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            Theme::FlimDark.apply(&cc.egui_ctx);
            Ok(Box::new(DemoApp {
                plot: build_plot(),
            }))
        }),
    )
}
