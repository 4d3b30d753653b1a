//! LiveHUD crate root: re-exports and module wiring.
//!
//! A heads-up display widget for egui/eframe with customizable data rows and
//! an optional embedded plot for numeric values. The host game loop stores
//! data in `DataTracker`s and calls `refresh` on the `HudPanel` once per tick
//! to reflect the current values; numeric trackers are passed along to the
//! embedded `Plotter`.
//!
//! Modules:
//! - `tracker`: named value sources fed by the host
//! - `config`: panel and plot configuration
//! - `style`: presentation constants and the series color palette
//! - `plotter`: the embedded rolling time-series chart
//! - `panel`: the composite HUD widget
//! - `persistence`: JSON save/load of the mutable display state
//! - `run`: native-window run helper

pub mod config;
pub mod panel;
pub mod persistence;
pub mod plotter;
pub mod run;
pub mod style;
pub mod tracker;

// Public re-exports for a compact external API
pub use config::{HudConfig, PlotConfig};
pub use panel::{panel_with_values, HudPanel};
pub use persistence::{load_state, save_state, HudStateSerde};
pub use plotter::{PlotSeries, Plotter};
pub use run::{run_hud, TickFn};
pub use style::{
    default_palette, global_palette, set_global_palette, HudStyle, HUD_ROW_CLASS,
    HUD_SCROLL_AREA_ID, HUD_TITLE_ID,
};
pub use tracker::{numeric_trackers, DataTracker, TrackerRef, TrackerValue};
