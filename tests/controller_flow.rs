// tests/controller_flow.rs
//
// Load → search → select → view, driven through the controller without UI.
//
use std::io;

use district_lookup::controller::{Controller, LoadState};
use district_lookup::loader::{parse_dataset, LoadError};
use district_lookup::series::Reading;

const CSV: &str = "\
clean_name,20242025,20232024,20222023
Lincoln Elementary,8.5,NA,10
Adams County,12,11.5,
Lincoln Middle,NA,NA,NA
,4,4,4
Lincoln High,3,2,1
North Lincoln,7,7,7
Lincolnshire,1,2,3
";

#[test]
fn queries_before_load_are_not_replayed() {
    let mut ctl = Controller::new();
    assert_eq!(*ctl.load_state(), LoadState::Loading);

    ctl.set_query("linc");
    assert!(!ctl.has_suggestions());

    ctl.finish_load(Ok(parse_dataset(CSV)));
    assert_eq!(*ctl.load_state(), LoadState::Ready);
    assert!(!ctl.has_suggestions());
    assert!(ctl.suggestion_names().is_empty());

    // Only the next keystroke matches.
    ctl.set_query("lin");
    assert_eq!(
        ctl.suggestion_names(),
        vec!["Lincoln Elementary", "Lincoln Middle", "Lincoln High", "North Lincoln", "Lincolnshire"]
    );
}

#[test]
fn select_fills_query_and_builds_views() {
    let mut ctl = Controller::with_dataset(parse_dataset(CSV));
    ctl.set_query("LINCOLN E");
    assert_eq!(ctl.suggestion_names(), vec!["Lincoln Elementary"]);

    let sel = ctl.select_suggestion(0).expect("selection");
    assert_eq!(sel.name, "Lincoln Elementary");
    assert_eq!(sel.series.labels(), vec!["2022-2023", "2023-2024", "2024-2025"]);
    assert_eq!(
        sel.series.table_rows(),
        vec![
            ("2024-2025".to_string(), "8.5%".to_string()),
            ("2023-2024".to_string(), "N/A".to_string()),
            ("2022-2023".to_string(), "10%".to_string()),
        ]
    );
    assert_eq!(sel.series.chart_values(), vec![Some(10.0), None, Some(8.5)]);

    assert_eq!(ctl.query(), "Lincoln Elementary");
    assert!(!ctl.has_suggestions());

    let chart = ctl.chart().expect("chart installed");
    assert_eq!(chart.model().y_max, 15.0);
    assert_eq!(chart.model().labels, vec!["2022-2023", "2023-2024", "2024-2025"]);
}

#[test]
fn reselecting_never_leaks_charts() {
    let mut ctl = Controller::with_dataset(parse_dataset(CSV));
    for name in ["Adams County", "Lincoln Middle", "Lincoln High", "Adams County"] {
        assert!(ctl.select_by_name(name).is_some());
        assert_eq!(ctl.live_charts(), 1);
    }
    assert_eq!(ctl.chart().map(|c| c.id()), Some(4));

    ctl.clear_selection();
    assert_eq!(ctl.live_charts(), 0);
    assert!(ctl.selection().is_none());
}

#[test]
fn all_missing_series_uses_fallback_axis() {
    let mut ctl = Controller::with_dataset(parse_dataset(CSV));
    let sel = ctl.select_by_name("lincoln middle").expect("found");
    assert!(sel.series.chronological().iter().all(|p| p.reading == Reading::NotAvailable));
    assert_eq!(ctl.chart().unwrap().model().y_max, 100.0);
}

#[test]
fn select_by_name_prefers_exact_then_first_match() {
    let mut ctl = Controller::with_dataset(parse_dataset(CSV));
    assert_eq!(ctl.select_by_name("lincolnshire").map(|s| s.name.clone()).as_deref(), Some("Lincolnshire"));
    assert_eq!(ctl.select_by_name("coln").map(|s| s.name.clone()).as_deref(), Some("Lincoln Elementary"));
    assert!(ctl.select_by_name("nowhere").is_none());
}

#[test]
fn nameless_rows_are_never_suggested() {
    let mut ctl = Controller::with_dataset(parse_dataset(CSV));
    ctl.set_query("4");
    assert!(!ctl.has_suggestions());
}

#[test]
fn load_failure_is_permanent() {
    let mut ctl = Controller::new();
    ctl.finish_load(Err(LoadError::Read {
        source: "district_data.csv".into(),
        err: io::Error::new(io::ErrorKind::NotFound, "not found"),
    }));
    let msg = ctl.load_error().expect("message").to_string();
    assert!(msg.contains("district_data.csv"));

    // A late success does not revive the session.
    ctl.finish_load(Ok(parse_dataset(CSV)));
    assert_eq!(ctl.load_error(), Some(msg.as_str()));

    ctl.set_query("linc");
    assert!(!ctl.has_suggestions());
    assert!(ctl.rows().is_empty());
}

#[test]
fn empty_query_clears_suggestions() {
    let mut ctl = Controller::with_dataset(parse_dataset(CSV));
    ctl.set_query("adams");
    assert!(ctl.has_suggestions());
    ctl.set_query("");
    assert!(!ctl.has_suggestions());
}

#[test]
fn dismissing_keeps_query_and_selection() {
    let mut ctl = Controller::with_dataset(parse_dataset(CSV));
    ctl.select_by_name("Adams County").expect("found");
    ctl.set_query("lincoln h");
    assert_eq!(ctl.suggestion_names(), vec!["Lincoln High"]);

    ctl.dismiss_suggestions();
    assert!(!ctl.has_suggestions());
    assert_eq!(ctl.query(), "lincoln h");
    assert_eq!(ctl.selection().map(|s| s.name.as_str()), Some("Adams County"));
    assert_eq!(ctl.live_charts(), 1);

    // Typing again reopens the list.
    ctl.set_query("lincoln hi");
    assert_eq!(ctl.suggestion_names(), vec!["Lincoln High"]);
}
