//! Presentation constants and the trace color palette.
//!
//! The identifier constants mirror the style hooks a host can target when
//! restyling the HUD; they carry no behavior beyond being stable.

use eframe::egui::Color32;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Stable id salt for the HUD title label.
pub const HUD_TITLE_ID: &str = "hud-title";
/// Stable id salt / class for the per-tracker value rows.
pub const HUD_ROW_CLASS: &str = "data-label";
/// Stable id salt for the outer scroll area.
pub const HUD_SCROLL_AREA_ID: &str = "hud-scroll-area";

// Global palette used for plot series color allocation.  The value is cloned
// on read so callers can freely mutate the returned vector.
static GLOBAL_PALETTE: Lazy<Mutex<Vec<Color32>>> = Lazy::new(|| Mutex::new(default_palette()));

/// The built-in series palette: eight well-separated hues that read on both
/// dark and light backgrounds.
pub fn default_palette() -> Vec<Color32> {
    vec![
        Color32::from_rgb(0x4f, 0xc3, 0xf7),
        Color32::from_rgb(0xff, 0xb7, 0x4d),
        Color32::from_rgb(0x81, 0xc7, 0x84),
        Color32::from_rgb(0xe5, 0x73, 0x73),
        Color32::from_rgb(0xba, 0x68, 0xc8),
        Color32::from_rgb(0xff, 0xd5, 0x4f),
        Color32::from_rgb(0x4d, 0xb6, 0xac),
        Color32::from_rgb(0x90, 0xa4, 0xae),
    ]
}

/// Get a copy of the current global series color palette.
pub fn global_palette() -> Vec<Color32> {
    GLOBAL_PALETTE.lock().unwrap().clone()
}

/// Replace the global series color palette. Affects plotters constructed
/// afterwards; existing series keep their colors.
pub fn set_global_palette(new: Vec<Color32>) {
    let mut guard = GLOBAL_PALETTE.lock().unwrap();
    if !new.is_empty() {
        *guard = new;
    }
}

/// Color for the series at `index`, cycling through the global palette.
pub fn series_color(index: usize) -> Color32 {
    let palette = GLOBAL_PALETTE.lock().unwrap();
    palette[index % palette.len()]
}

// ─────────────────────────────────────────────────────────────────────────────
// HudStyle
// ─────────────────────────────────────────────────────────────────────────────

/// Visual knobs for the HUD panel. All purely presentational.
#[derive(Clone, Debug, PartialEq)]
pub struct HudStyle {
    /// Vertical spacing between value rows (px).
    pub row_spacing: f32,
    /// Vertical spacing between the row block and the plot (px).
    pub plot_spacing: f32,
    /// Title font size (px).
    pub title_size: f32,
    /// Optional title color override; `None` follows the egui theme.
    pub title_color: Option<Color32>,
    /// Optional row text color override; `None` follows the egui theme.
    pub row_color: Option<Color32>,
}

impl Default for HudStyle {
    fn default() -> Self {
        Self {
            row_spacing: 2.0,
            plot_spacing: 20.0,
            title_size: 18.0,
            title_color: None,
            row_color: None,
        }
    }
}
