//! Example: Embedding the HUD panel into your own egui application window
//!
//! What it demonstrates
//! - How to embed `HudPanel` inside an existing `eframe`/`egui` application.
//! - Driving `refresh()` from your own update loop and toggling the plot.
//!
//! How to run
//! ```bash
//! cargo run --example embedded_hud
//! ```

use std::time::{Duration, Instant};

use eframe::{egui, NativeOptions};
use livehud::{DataTracker, HudConfig, HudPanel, TrackerRef};

struct DemoApp {
    hud: HudPanel,
    fps: TrackerRef,
    frame_time: TrackerRef,
    status: TrackerRef,
    started: Instant,
    frames: u64,
}

impl DemoApp {
    fn new() -> Self {
        let fps = DataTracker::numeric("FPS", 0.0);
        let frame_time = DataTracker::numeric("Frame ms", 0.0);
        let status = DataTracker::text("Status", "running");

        let hud = HudPanel::new(
            HudConfig::new(280.0, 380.0, "Engine HUD", true),
            vec![fps.clone(), frame_time.clone(), status.clone()],
        );
        Self {
            hud,
            fps,
            frame_time,
            status,
            started: Instant::now(),
            frames: 0,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frames += 1;
        let elapsed = self.started.elapsed().as_secs_f64().max(1e-6);
        self.fps.set_numeric((self.frames as f64 / elapsed).round());
        self.frame_time
            .set_numeric(1000.0 * elapsed / self.frames as f64);
        self.status
            .set_text(if self.hud.plots_visible() { "plotting" } else { "running" });

        self.hud.refresh();

        egui::SidePanel::right("hud_side")
            .resizable(false)
            .show(ctx, |ui| {
                self.hud.ui_embed(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Embedding HudPanel in an egui app");
            ui.horizontal(|ui| {
                if ui.button("Toggle plot").clicked() {
                    self.hud.toggle_plots();
                }
                if ui.button("Rename HUD").clicked() {
                    self.hud.set_title(format!("Engine HUD ({} frames)", self.frames));
                }
            });
            ui.label("The panel on the right refreshes every frame.");
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

fn main() -> eframe::Result<()> {
    eframe::run_native(
        "LiveHUD embedded demo",
        NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}
