//! Configuration types for the HUD panel and the embedded plot.

use crate::style::HudStyle;

// ─────────────────────────────────────────────────────────────────────────────
// PlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for the embedded plot.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Rolling time window in seconds.
    pub time_window_secs: f64,
    /// Maximum number of points retained per series.
    pub max_points: usize,
    /// Optional unit label for the Y axis (e.g. "HP", "ms").
    pub y_unit: Option<String>,
    /// Show the plot legend.
    pub legend: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            time_window_secs: 10.0,
            max_points: 10_000,
            y_unit: None,
            legend: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HudConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Construction options for [`crate::HudPanel`].
///
/// | Field           | Purpose |
/// |-----------------|---------|
/// | `width`/`height`| Fixed pixel size of the panel's scroll area (> 0) |
/// | `title`         | Initial heading text |
/// | `include_plots` | Whether the plot is visible at start |
/// | `plot`          | Embedded plot settings |
/// | `style`         | Spacing, font sizes, color overrides |
pub struct HudConfig {
    /// Pixel width of the panel.
    pub width: f32,
    /// Pixel height of the panel.
    pub height: f32,
    /// Initial heading text.
    pub title: String,
    /// Whether the plot is visible at start.
    pub include_plots: bool,
    /// Embedded plot settings.
    pub plot: PlotConfig,
    /// Presentation knobs.
    pub style: HudStyle,
    /// Optional eframe native-window options (used by [`crate::run_hud`] only).
    pub native_options: Option<eframe::NativeOptions>,
}

impl Clone for HudConfig {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            title: self.title.clone(),
            include_plots: self.include_plots,
            plot: self.plot.clone(),
            style: self.style.clone(),
            native_options: self.native_options.clone(),
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            width: 260.0,
            height: 360.0,
            title: "HUD".to_string(),
            include_plots: true,
            plot: PlotConfig::default(),
            style: HudStyle::default(),
            native_options: None,
        }
    }
}

impl HudConfig {
    /// Convenience constructor matching the classic argument order.
    pub fn new<S: Into<String>>(width: f32, height: f32, title: S, include_plots: bool) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            include_plots,
            ..Self::default()
        }
    }
}
