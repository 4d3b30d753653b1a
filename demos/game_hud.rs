//! Example: Running a standalone HUD window over a simulated game loop
//!
//! What it demonstrates
//! - Creating numeric and text trackers the game loop mutates each tick.
//! - Launching the HUD with `run_hud`, which refreshes the panel every frame.
//!
//! How to run
//! ```bash
//! cargo run --example game_hud
//! ```

use livehud::{run_hud, DataTracker, HudConfig};

fn main() -> eframe::Result<()> {
    let score = DataTracker::numeric("Score", 0.0);
    let hp = DataTracker::numeric("HP", 100.0);
    let level = DataTracker::text("Level", "Forest");

    let trackers = vec![score.clone(), hp.clone(), level.clone()];

    let mut cfg = HudConfig::new(300.0, 420.0, "Game Stats", true);
    cfg.plot.y_unit = Some("pts".to_string());

    run_hud(
        cfg,
        trackers,
        Box::new(move |t| {
            score.set_numeric((t * 12.0).floor());
            hp.set_numeric(50.0 + 50.0 * (t * 0.7).sin());
            level.set_text(if t as u64 % 20 < 10 { "Forest" } else { "Caves" });
        }),
    )
}
