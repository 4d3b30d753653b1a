//! Example: A HUD with no numeric trackers
//!
//! What it demonstrates
//! - Text-only trackers produce rows but an empty plot.
//! - Starting with plots hidden and toggling them on shows an empty chart
//!   without error.
//!
//! How to run
//! ```bash
//! cargo run --example text_only_hud
//! ```

use livehud::{run_hud, DataTracker, HudConfig};

fn main() -> eframe::Result<()> {
    let level = DataTracker::text("Level", "Forest");
    let objective = DataTracker::text("Objective", "Find the key");
    let mode = DataTracker::text("Mode", "Explore");

    let trackers = vec![level.clone(), objective.clone(), mode.clone()];

    run_hud(
        HudConfig::new(280.0, 240.0, "Quest Log", false),
        trackers,
        Box::new(move |t| {
            if t as u64 % 30 > 15 {
                objective.set_text("Open the gate");
                mode.set_text("Combat");
            }
        }),
    )
}
