//! State persistence: save and load the HUD's mutable display state as JSON.
//!
//! Only state the host can change after construction is covered (title, plot
//! visibility, plot limits). Tracker membership is fixed at construction and
//! intentionally not persisted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::HudPanel;

/// Serializable mirror of [`HudPanel`]'s mutable display state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HudStateSerde {
    pub title: String,
    pub plots_visible: bool,
    pub time_window_secs: f64,
    pub max_points: usize,
}

impl From<&HudPanel> for HudStateSerde {
    fn from(panel: &HudPanel) -> Self {
        Self {
            title: panel.title().to_string(),
            plots_visible: panel.plots_visible(),
            time_window_secs: panel.plotter().config().time_window_secs,
            max_points: panel.plotter().config().max_points,
        }
    }
}

impl HudStateSerde {
    /// Apply stored state to a panel. Plot limits are left alone here; feed
    /// them into [`crate::PlotConfig`] when reconstructing instead.
    pub fn apply_to(&self, panel: &mut HudPanel) {
        panel.set_title(self.title.clone());
        panel.set_plots_visible(self.plots_visible);
    }
}

/// Save the panel's display state to `path` as pretty-printed JSON.
pub fn save_state<P: AsRef<Path>>(path: P, panel: &HudPanel) -> std::io::Result<()> {
    let state = HudStateSerde::from(panel);
    let json = serde_json::to_string_pretty(&state)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Load display state previously written by [`save_state`].
pub fn load_state<P: AsRef<Path>>(path: P) -> std::io::Result<HudStateSerde> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
