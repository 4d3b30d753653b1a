use livehud::{numeric_trackers, DataTracker, TrackerValue};

#[test]
fn numeric_values_use_natural_float_form() {
    assert_eq!(TrackerValue::Numeric(42.5).to_string(), "42.5");
    assert_eq!(TrackerValue::Numeric(3.0).to_string(), "3");
    assert_eq!(TrackerValue::Numeric(-0.25).to_string(), "-0.25");
}

#[test]
fn text_values_display_verbatim() {
    assert_eq!(TrackerValue::Text("Forest".into()).to_string(), "Forest");
    assert_eq!(TrackerValue::Text(String::new()).to_string(), "");
}

#[test]
fn conversions_pick_the_right_tag() {
    assert!(TrackerValue::from(1.5_f64).is_numeric());
    assert!(TrackerValue::from(2_i32).is_numeric());
    assert!(!TrackerValue::from("two").is_numeric());
    assert_eq!(TrackerValue::from(1.5_f32).as_f64(), Some(1.5));
    assert_eq!(TrackerValue::from("two").as_f64(), None);
}

#[test]
fn tracker_reads_reflect_latest_write() {
    let t = DataTracker::numeric("Score", 0.0);
    assert_eq!(t.as_f64(), Some(0.0));
    t.set_numeric(17.0);
    assert_eq!(t.as_f64(), Some(17.0));
    assert_eq!(t.display_text(), "Score: 17");
}

#[test]
fn shared_handles_observe_the_same_value() {
    let t = DataTracker::text("Mode", "Easy");
    let view = t.clone();
    t.set_text("Hard");
    assert_eq!(view.display_text(), "Mode: Hard");
}

#[test]
fn numeric_filter_preserves_order() {
    let trackers = vec![
        DataTracker::numeric("a", 1.0),
        DataTracker::text("b", "x"),
        DataTracker::numeric("c", 2.0),
        DataTracker::text("d", "y"),
    ];
    let numeric = numeric_trackers(&trackers);
    let names: Vec<&str> = numeric.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[test]
fn numeric_filter_of_all_text_is_empty() {
    let trackers = vec![DataTracker::text("b", "x")];
    assert!(numeric_trackers(&trackers).is_empty());
    assert!(numeric_trackers(&[]).is_empty());
}
