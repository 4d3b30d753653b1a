use livehud::{load_state, save_state, DataTracker, HudConfig, HudPanel, HudStateSerde};

fn tmp_path(name: &str) -> std::path::PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("livehud_test_{}_{}.json", name, std::process::id()));
    p
}

#[test]
fn state_round_trips_through_json_file() {
    let mut panel = HudPanel::new(
        HudConfig::new(260.0, 360.0, "Stats", true),
        vec![DataTracker::numeric("Score", 1.0)],
    );
    panel.set_title("Round 2");
    panel.set_plots_visible(false);

    let path = tmp_path("round_trip");
    save_state(&path, &panel).unwrap();
    let loaded = load_state(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.title, "Round 2");
    assert!(!loaded.plots_visible);
    assert_eq!(loaded.time_window_secs, 10.0);
    assert_eq!(loaded.max_points, 10_000);
}

#[test]
fn apply_to_restores_title_and_visibility() {
    let mut panel = HudPanel::new(
        HudConfig::new(260.0, 360.0, "Fresh", true),
        vec![DataTracker::numeric("Score", 1.0)],
    );
    let state = HudStateSerde {
        title: "Restored".to_string(),
        plots_visible: false,
        time_window_secs: 10.0,
        max_points: 10_000,
    };
    state.apply_to(&mut panel);
    assert_eq!(panel.title(), "Restored");
    assert!(!panel.plots_visible());
}

#[test]
fn load_state_reports_missing_file() {
    let err = load_state(tmp_path("does_not_exist")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
