use super::*;
use crate::kernel::ItemValue;
use std::sync::mpsc;

const SMALL: &str = r#"[
  {"score": 0.9, "show": {"id": 66, "name": "The Big Bang Theory"}},
  {"score": 0.8, "show": {"id": 14452, "name": "Big Ang", "genres": ["Reality"]}},
  {"score": 0.7, "show": {"id": 4729, "name": "Test Drive", "premiered": "2019-01-10"}},
  {"score": 0.6, "show": {"id": 32087, "name": "Testing Ground"}}
]"#;

fn names(items: &[SimpleItem]) -> Vec<String> {
    items.iter().map(|item| item.name.to_string()).collect()
}

#[test]
fn test_from_json_reads_show_entries() {
    let catalog = ShowCatalog::from_json(SMALL).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.shows()[1].genres, vec!["Reality".to_string()]);
    assert_eq!(catalog.shows()[2].premiered.as_deref(), Some("2019-01-10"));
    assert_eq!(catalog.shows()[0].premiered, None);
}

#[test]
fn test_from_json_rejects_malformed_document() {
    let err = ShowCatalog::from_json("{\"show\": 1}").unwrap_err();
    assert!(matches!(err, LookupError::Parse(_)));
}

#[test]
fn test_search_filters_out_fuzzy_matches() {
    let catalog = ShowCatalog::from_json(SMALL).unwrap();
    let items = catalog.search("big bang").unwrap();
    assert_eq!(names(&items), vec!["The Big Bang Theory"]);
    assert_eq!(items[0].id, ItemValue::from(66));
}

#[test]
fn test_search_ignores_case_and_keeps_catalog_order() {
    let catalog = ShowCatalog::from_json(SMALL).unwrap();
    let items = catalog.search("TEST").unwrap();
    assert_eq!(names(&items), vec!["Test Drive", "Testing Ground"]);
}

#[test]
fn test_search_without_match_is_empty() {
    let catalog = ShowCatalog::from_json(SMALL).unwrap();
    assert!(catalog.search("zzz").unwrap().is_empty());
}

#[test]
fn test_failure_marker_turns_query_into_error() {
    let catalog = ShowCatalog::from_json(SMALL)
        .unwrap()
        .with_failure_marker("!fail");
    assert!(catalog.search("big !FAIL").is_err());
    assert!(catalog.search("big").is_ok());
}

#[test]
fn test_empty_failure_marker_is_ignored() {
    let catalog = ShowCatalog::from_json(SMALL)
        .unwrap()
        .with_failure_marker("");
    assert!(catalog.search("big").is_ok());
}

#[test]
fn test_embedded_catalog_parses() {
    let catalog = ShowCatalog::embedded().unwrap();
    assert!(!catalog.is_empty());
    assert!(!catalog.search("the").unwrap().is_empty());
}

#[test]
fn test_catalog_runs_as_lookup() {
    use crate::kernel::services::adapters::LookupRuntime;

    let catalog = ShowCatalog::from_json(SMALL)
        .unwrap()
        .with_latency(Duration::from_millis(5));
    let lookup: Arc<dyn Lookup<SimpleItem>> = Arc::new(catalog);
    let (tx, rx) = mpsc::channel();
    let mut runtime = LookupRuntime::new(lookup, tx).unwrap();

    runtime.start(0, "big ang".to_string());
    let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();

    assert_eq!(msg.request_id, 0);
    assert_eq!(names(&msg.outcome.unwrap()), vec!["Big Ang"]);
}
