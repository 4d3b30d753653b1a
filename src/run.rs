//! Top-level entry point for running the HUD in its own native window.
//!
//! Games normally embed [`HudPanel`] into their existing UI via
//! [`HudPanel::ui_embed`]; [`run_hud`] is the standalone variant for demos
//! and quick diagnostics. It opens a window, drives the tick/refresh loop,
//! and blocks until the window is closed.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::HudConfig;
use crate::panel::HudPanel;
use crate::tracker::TrackerRef;

/// Per-frame host callback: receives the elapsed seconds since the window
/// opened and mutates the trackers. Runs before the panel refresh.
pub type TickFn = Box<dyn FnMut(f64)>;

struct HudApp {
    panel: HudPanel,
    on_tick: TickFn,
    started: Instant,
}

impl eframe::App for HudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let t = self.started.elapsed().as_secs_f64();
        (self.on_tick)(t);
        self.panel.refresh();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.ui_embed(ui);
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// Open a native window showing a HUD over `trackers`.
///
/// `on_tick` is called once per frame with the elapsed time in seconds; this
/// is where the host mutates tracker values. The panel then refreshes and
/// redraws. Blocks until the window is closed.
pub fn run_hud(
    mut cfg: HudConfig,
    trackers: Vec<TrackerRef>,
    on_tick: TickFn,
) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Try to set application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = egui::ViewportBuilder::default().with_icon(icon);
        }
    }

    // Size the window around the panel unless the host provided options.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.width + 40.0, cfg.height + 40.0));
    }

    let app = HudApp {
        panel: HudPanel::new(cfg, trackers),
        on_tick,
        started: Instant::now(),
    };

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
