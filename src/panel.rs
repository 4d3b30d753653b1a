//! The HUD panel: a title, one live text row per tracker, and an optional
//! embedded plot.
//!
//! The host game loop stores data in [`DataTracker`]s and calls
//! [`HudPanel::refresh`] once per tick to reflect the current values. Numeric
//! trackers are additionally forwarded to the embedded [`Plotter`].

use eframe::egui;

use crate::config::HudConfig;
use crate::plotter::Plotter;
use crate::style::{HudStyle, HUD_SCROLL_AREA_ID};
use crate::tracker::{numeric_trackers, DataTracker, TrackerRef};

/// Composite HUD widget.
///
/// Row membership is fixed at construction: one row per tracker, in the given
/// order. There is no add/remove-tracker operation; the panel keeps its own
/// clone of the tracker handles, so the wiring cannot drift underneath it.
pub struct HudPanel {
    width: f32,
    height: f32,
    title: String,
    trackers: Vec<TrackerRef>,
    rows: Vec<String>,
    plotter: Plotter,
    plots_visible: bool,
    style: HudStyle,
}

impl HudPanel {
    /// Build a panel over the given trackers.
    ///
    /// `cfg.width` and `cfg.height` must be positive. An empty tracker
    /// sequence is valid (zero rows); a sequence with no numeric tracker is
    /// valid too (the plot then renders empty). One initial [`refresh`]
    /// happens here so the panel is never shown with stale rows.
    ///
    /// [`refresh`]: HudPanel::refresh
    pub fn new(cfg: HudConfig, trackers: Vec<TrackerRef>) -> Self {
        let plotter = Plotter::new(
            cfg.width,
            cfg.height * 0.5,
            numeric_trackers(&trackers),
            cfg.plot.clone(),
        );
        let rows = vec![String::new(); trackers.len()];
        let mut panel = Self {
            width: cfg.width,
            height: cfg.height,
            title: cfg.title,
            trackers,
            rows,
            plotter,
            plots_visible: cfg.include_plots,
            style: cfg.style,
        };
        panel.refresh();
        panel
    }

    /// Re-read every tracker and update the row texts to
    /// `"<name>: <value>"`; if plots are visible, also sample the plot.
    ///
    /// Runs synchronously on the caller's thread. Calling it twice with
    /// unchanged tracker state yields the same displayed text.
    pub fn refresh(&mut self) {
        for (row, tracker) in self.rows.iter_mut().zip(self.trackers.iter()) {
            row.clear();
            row.push_str(&tracker.display_text());
        }
        if self.plots_visible {
            self.plotter.redraw();
        }
    }

    /// Replace the heading text. Rows are unaffected.
    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = title.into();
    }

    /// The current heading text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Show the plot if hidden and vice versa. Two toggles restore the
    /// original state exactly.
    pub fn toggle_plots(&mut self) {
        self.set_plots_visible(!self.plots_visible);
    }

    /// Set plot visibility directly.
    pub fn set_plots_visible(&mut self, visible: bool) {
        self.plots_visible = visible;
    }

    /// Whether the plot is currently shown.
    pub fn plots_visible(&self) -> bool {
        self.plots_visible
    }

    /// The current row texts, in tracker order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The trackers this panel displays, in row order.
    pub fn trackers(&self) -> &[TrackerRef] {
        &self.trackers
    }

    /// The embedded plot component.
    pub fn plotter(&self) -> &Plotter {
        &self.plotter
    }

    /// The panel's fixed pixel size.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Presentation knobs, mutable so hosts can restyle at runtime.
    pub fn style_mut(&mut self) -> &mut HudStyle {
        &mut self.style
    }

    /// Render the panel into the given ui: title, rows, then (if visible)
    /// the plot, inside a fixed-size scroll area. Drawing only; call
    /// [`refresh`](HudPanel::refresh) first to update the texts.
    pub fn ui_embed(&mut self, ui: &mut egui::Ui) {
        ui.set_max_width(self.width);
        egui::ScrollArea::both()
            .id_salt(HUD_SCROLL_AREA_ID)
            .max_width(self.width)
            .max_height(self.height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_min_width(self.width - ui.spacing().scroll.bar_width);

                let mut title = egui::RichText::new(&self.title).size(self.style.title_size);
                if let Some(c) = self.style.title_color {
                    title = title.color(c);
                }
                ui.label(title);

                ui.spacing_mut().item_spacing.y = self.style.row_spacing;
                for row in &self.rows {
                    let mut text = egui::RichText::new(row);
                    if let Some(c) = self.style.row_color {
                        text = text.color(c);
                    }
                    ui.label(text);
                }

                if self.plots_visible {
                    ui.add_space(self.style.plot_spacing);
                    self.plotter.ui(ui);
                }
            });
    }

    /// Build a panel straight from parts, matching the classic argument
    /// order. Equivalent to `HudPanel::new(HudConfig::new(..), trackers)`.
    pub fn with_trackers<S: Into<String>>(
        width: f32,
        height: f32,
        title: S,
        include_plots: bool,
        trackers: Vec<TrackerRef>,
    ) -> Self {
        Self::new(HudConfig::new(width, height, title, include_plots), trackers)
    }
}

impl std::fmt::Debug for HudPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HudPanel")
            .field("title", &self.title)
            .field("rows", &self.rows.len())
            .field("plots_visible", &self.plots_visible)
            .finish()
    }
}

/// Convenience: build trackers and a default-config panel in one call.
/// Mostly useful in demos and tests.
pub fn panel_with_values<S: Into<String>>(
    title: S,
    values: &[(&str, f64)],
) -> (HudPanel, Vec<TrackerRef>) {
    let trackers: Vec<TrackerRef> = values
        .iter()
        .map(|(name, v)| DataTracker::numeric(*name, *v))
        .collect();
    let cfg = HudConfig {
        title: title.into(),
        ..HudConfig::default()
    };
    let panel = HudPanel::new(cfg, trackers.clone());
    (panel, trackers)
}
