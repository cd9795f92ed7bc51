//! Integration tests for vitrine-router.
//!
//! Tests are organized by feature area and cover:
//! - Table construction (ordering, duplicate names, malformed patterns)
//! - Resolution (literal paths, named segments, not-found)
//! - Path normalization as seen through resolve
//! - Named-route path generation
//! - History modes and back/forward navigation
//! - Outcome delivery to a view sink

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use vitrine_router::*;

/// The catalog view set used throughout the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Home,
    ProductList,
    ProductCreate,
    ProductUpdate,
    Callback,
}

fn catalog() -> RouteTable<View> {
    RouteTable::builder()
        .route("/", "Home", View::Home)
        .route("/product-list", "ProductList", View::ProductList)
        .route("/product-create", "ProductCreate", View::ProductCreate)
        .route("/product-update/:pk", "ProductUpdate", View::ProductUpdate)
        .route("/callback", "Callback", View::Callback)
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[test]
fn test_every_literal_path_resolves_to_its_entry() {
    let table = catalog();

    let cases = [
        ("/", View::Home, "Home"),
        ("/product-list", View::ProductList, "ProductList"),
        ("/product-create", View::ProductCreate, "ProductCreate"),
        ("/callback", View::Callback, "Callback"),
    ];

    for (path, view, name) in cases {
        let m = table.resolve(path).unwrap();
        assert_eq!(m.view, view);
        assert_eq!(m.name, name);
        assert!(m.params.is_empty());
    }
}

#[test]
fn test_named_segment_binds_parameter() {
    let table = catalog();

    let m = table.resolve("/product-update/42").unwrap();
    assert_eq!(m.view, View::ProductUpdate);
    assert_eq!(m.param("pk"), Some("42"));
    assert_eq!(m.params.len(), 1);
}

#[test]
fn test_named_segment_matches_any_nonempty_value() {
    let table = catalog();

    for pk in ["1", "0", "abc", "a-b_c", "%20"] {
        let m = table
            .resolve(&format!("/product-update/{}", pk))
            .unwrap();
        assert_eq!(m.param("pk"), Some(pk));
    }
}

#[test]
fn test_unknown_path_is_not_found() {
    let table = catalog();
    assert!(table.resolve("/nonexistent").is_none());
    assert!(table.resolve("/product-update").is_none());
    assert!(table.resolve("/product-update/42/extra").is_none());
}

#[test]
fn test_duplicate_root_first_registration_wins() {
    let table = RouteTable::builder()
        .route("/", "Home", View::Home)
        .route("/", "Landing", View::ProductList)
        .build()
        .unwrap();

    // Idempotent across repeated calls.
    for _ in 0..5 {
        let m = table.resolve("/").unwrap();
        assert_eq!(m.view, View::Home);
        assert_eq!(m.name, "Home");
    }
}

#[test]
fn test_overlapping_patterns_resolve_in_declared_order() {
    // A literal declared after an overlapping parameter route is shadowed.
    let table = RouteTable::builder()
        .route("/product/:pk", "Product", View::ProductUpdate)
        .route("/product/new", "ProductNew", View::ProductCreate)
        .build()
        .unwrap();

    let m = table.resolve("/product/new").unwrap();
    assert_eq!(m.name, "Product");
    assert_eq!(m.param("pk"), Some("new"));
}

// ---------------------------------------------------------------------------
// Normalization through resolve
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_tolerates_sloppy_paths() {
    let table = catalog();

    for path in [
        "/product-list/",
        "//product-list",
        "/product-list?page=2",
        "/product-list#top",
        "product-list",
    ] {
        let m = table.resolve(path).unwrap();
        assert_eq!(m.view, View::ProductList, "path {:?}", path);
    }
}

#[test]
fn test_resolve_strips_query_before_binding_params() {
    let table = catalog();

    let m = table.resolve("/product-update/42?tab=price").unwrap();
    assert_eq!(m.param("pk"), Some("42"));
}

// ---------------------------------------------------------------------------
// Table construction
// ---------------------------------------------------------------------------

#[test]
fn test_duplicate_names_fail_construction() {
    let err = RouteTable::builder()
        .route("/", "Home", View::Home)
        .route("/home", "Home", View::Home)
        .build()
        .unwrap_err();

    assert_eq!(err, TableError::DuplicateName("Home".to_string()));
}

#[test]
fn test_malformed_patterns_fail_construction() {
    let err = RouteTable::builder()
        .route("/product-update/:", "ProductUpdate", View::ProductUpdate)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        TableError::InvalidPattern {
            name: "ProductUpdate".to_string(),
            source: PatternError::EmptyParamName("/product-update/:".to_string()),
        }
    );
}

#[test]
fn test_table_preserves_registration_order() {
    let table = catalog();

    let names: Vec<&str> = table.routes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Home",
            "ProductList",
            "ProductCreate",
            "ProductUpdate",
            "Callback"
        ]
    );
}

// ---------------------------------------------------------------------------
// Named-route path generation
// ---------------------------------------------------------------------------

#[test]
fn test_path_for_substitutes_params() {
    let table = catalog();

    assert_eq!(
        table.path_for_pairs("ProductUpdate", &[("pk", "42")]),
        Some("/product-update/42".to_string())
    );
    assert_eq!(
        table.path_for("Home", &HashMap::new()),
        Some("/".to_string())
    );
}

#[test]
fn test_path_for_missing_param_is_none() {
    let table = catalog();
    assert_eq!(table.path_for("ProductUpdate", &HashMap::new()), None);
}

#[test]
fn test_path_for_unknown_name_is_none() {
    let table = catalog();
    assert_eq!(table.path_for_pairs("Nowhere", &[]), None);
}

#[test]
fn test_path_for_round_trips_through_resolve() {
    let table = catalog();

    let path = table
        .path_for_pairs("ProductUpdate", &[("pk", "42")])
        .unwrap();
    let m = table.resolve(&path).unwrap();

    assert_eq!(m.name, "ProductUpdate");
    assert_eq!(m.param("pk"), Some("42"));
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_navigate_then_resolve_is_consistent() {
    let mut nav = Navigator::new(catalog(), HistoryMode::History);

    let outcome = nav.navigate("/product-update/42");
    let again = nav.table().resolve(&nav.current().path).unwrap();

    assert_eq!(outcome, Outcome::Matched(again));
}

#[test]
fn test_navigate_records_raw_and_canonical_location() {
    let mut nav = Navigator::new(catalog(), HistoryMode::History);

    nav.navigate("/product-list/?page=2");
    assert_eq!(nav.current().path, "/product-list");
    assert_eq!(nav.current().raw, "/product-list/?page=2");
}

#[test]
fn test_back_restores_and_re_resolves() {
    let mut nav = Navigator::new(catalog(), HistoryMode::History);

    nav.navigate("/product-list");
    nav.navigate("/product-create");

    let outcome = nav.back().unwrap();
    assert_eq!(outcome.as_match().unwrap().view, View::ProductList);

    let outcome = nav.forward().unwrap();
    assert_eq!(outcome.as_match().unwrap().view, View::ProductCreate);
}

#[test]
fn test_replace_does_not_grow_history() {
    let mut nav = Navigator::new(catalog(), HistoryMode::History);

    nav.navigate("/product-list");
    let depth = nav.history().len();

    let outcome = nav.replace("/product-create");
    assert_eq!(outcome.as_match().unwrap().view, View::ProductCreate);
    assert_eq!(nav.history().len(), depth);
}

#[test]
fn test_navigate_named() {
    let mut nav = Navigator::new(catalog(), HistoryMode::History);

    let mut params = HashMap::new();
    params.insert("pk".to_string(), "7".to_string());

    let outcome = nav.navigate_named("ProductUpdate", &params);
    assert_eq!(outcome.as_match().unwrap().param("pk"), Some("7"));
    assert_eq!(nav.current().path, "/product-update/7");
}

#[test]
fn test_hash_mode_navigation() {
    let mut nav = Navigator::new(catalog(), HistoryMode::Hash);

    let outcome = nav.navigate("/index.html#/product-update/42");
    assert_eq!(outcome.as_match().unwrap().param("pk"), Some("42"));
    assert_eq!(nav.current().path, "/product-update/42");

    // No fragment routes to the root view.
    let outcome = nav.navigate("/index.html");
    assert_eq!(outcome.as_match().unwrap().view, View::Home);
}

// ---------------------------------------------------------------------------
// View sink
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RecordingSink {
    presented: Vec<Outcome<View>>,
}

impl ViewSink<View> for RecordingSink {
    fn present(&mut self, outcome: &Outcome<View>) {
        self.presented.push(outcome.clone());
    }
}

#[test]
fn test_sink_receives_every_outcome() {
    let mut nav = Navigator::new(catalog(), HistoryMode::History);
    let mut sink = RecordingSink::default();

    nav.dispatch_to("/product-list", &mut sink);
    nav.dispatch_to("/nonexistent", &mut sink);

    assert_eq!(sink.presented.len(), 2);
    assert_eq!(
        sink.presented[0].as_match().unwrap().view,
        View::ProductList
    );
    assert_eq!(
        sink.presented[1],
        Outcome::NotFound {
            path: "/nonexistent".to_string()
        }
    );
}
