use livehud::{DataTracker, HudConfig, HudPanel, TrackerRef};

fn mk_panel(trackers: Vec<TrackerRef>, include_plots: bool) -> HudPanel {
    HudPanel::new(HudConfig::new(260.0, 360.0, "Stats", include_plots), trackers)
}

#[test]
fn one_row_per_tracker_in_input_order() {
    let trackers = vec![
        DataTracker::numeric("Score", 0.0),
        DataTracker::text("Level", "Forest"),
        DataTracker::numeric("Lives", 3.0),
    ];
    let panel = mk_panel(trackers, true);
    assert_eq!(panel.rows().len(), 3);
    assert!(panel.rows()[0].starts_with("Score:"));
    assert!(panel.rows()[1].starts_with("Level:"));
    assert!(panel.rows()[2].starts_with("Lives:"));
}

#[test]
fn refresh_formats_name_colon_value() {
    let score = DataTracker::numeric("Score", 0.0);
    let level = DataTracker::text("Level", "Forest");
    let mut panel = mk_panel(vec![score.clone(), level.clone()], false);

    score.set_numeric(42.5);
    level.set_text("Caves");
    panel.refresh();

    assert_eq!(panel.rows()[0], "Score: 42.5");
    assert_eq!(panel.rows()[1], "Level: Caves");
}

#[test]
fn refresh_is_idempotent_for_unchanged_trackers() {
    let score = DataTracker::numeric("Score", 7.0);
    let mut panel = mk_panel(vec![score], false);
    panel.refresh();
    let first: Vec<String> = panel.rows().to_vec();
    panel.refresh();
    assert_eq!(panel.rows(), first.as_slice());
}

#[test]
fn constructor_performs_initial_refresh() {
    let score = DataTracker::numeric("Score", 9.0);
    let panel = mk_panel(vec![score], false);
    // No explicit refresh: rows must already show current values.
    assert_eq!(panel.rows()[0], "Score: 9");
}

#[test]
fn toggle_plots_twice_restores_state() {
    let mut panel = mk_panel(vec![DataTracker::numeric("HP", 100.0)], true);
    assert!(panel.plots_visible());
    panel.toggle_plots();
    assert!(!panel.plots_visible());
    panel.toggle_plots();
    assert!(panel.plots_visible());
}

#[test]
fn set_title_changes_only_the_title() {
    let score = DataTracker::numeric("Score", 1.0);
    let mut panel = mk_panel(vec![score], false);
    let rows_before: Vec<String> = panel.rows().to_vec();

    panel.set_title("X");
    assert_eq!(panel.title(), "X");
    assert_eq!(panel.rows(), rows_before.as_slice());
}

#[test]
fn empty_tracker_sequence_is_valid() {
    let panel = mk_panel(Vec::new(), true);
    assert!(panel.rows().is_empty());
    assert!(panel.plotter().is_empty());
}

#[test]
fn no_numeric_trackers_yields_empty_plot() {
    let trackers = vec![
        DataTracker::text("Level", "Forest"),
        DataTracker::text("Mode", "Easy"),
    ];
    let mut panel = mk_panel(trackers, false);
    assert!(!panel.plots_visible());
    assert_eq!(panel.plotter().series_count(), 0);

    // Turning the empty plot on must not error and stays empty.
    panel.toggle_plots();
    panel.refresh();
    assert!(panel.plots_visible());
    assert!(panel.plotter().is_empty());
}

#[test]
fn plotter_receives_only_the_numeric_subset_in_order() {
    let trackers = vec![
        DataTracker::numeric("Score", 0.0),
        DataTracker::text("Level", "Forest"),
        DataTracker::numeric("Lives", 3.0),
    ];
    let panel = mk_panel(trackers, true);
    assert_eq!(panel.plotter().tracker_names(), vec!["Score", "Lives"]);
}

#[test]
fn refresh_samples_plot_only_while_visible() {
    let hp = DataTracker::numeric("HP", 100.0);
    let mut panel = mk_panel(vec![hp], true);
    let after_construction = panel.plotter().points(0).unwrap().len();

    panel.set_plots_visible(false);
    panel.refresh();
    assert_eq!(panel.plotter().points(0).unwrap().len(), after_construction);

    panel.set_plots_visible(true);
    panel.refresh();
    assert_eq!(
        panel.plotter().points(0).unwrap().len(),
        after_construction + 1
    );
}

#[test]
fn with_trackers_matches_config_constructor() {
    let panel =
        HudPanel::with_trackers(200.0, 300.0, "Run", false, vec![DataTracker::numeric("T", 0.0)]);
    assert_eq!(panel.title(), "Run");
    assert!(!panel.plots_visible());
    assert_eq!(panel.size(), (200.0, 300.0));
}
