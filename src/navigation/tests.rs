//! Tests for the navigation module

use super::*;
use crate::error::{Error, PathErrorKind};
use crate::path;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn sample_tree() -> Value {
    json!({
        "tabs": [
            {
                "tabRenderer": {
                    "content": {
                        "title": { "runs": [ { "text": "Morning Mix" } ] }
                    }
                }
            },
            {
                "tabRenderer": { "unselectable": true }
            }
        ],
        "header": {
            "subtitle": null
        },
        "counts": [1, 2, 3]
    })
}

// ============================================================================
// Required navigation
// ============================================================================

#[test]
fn test_navigate_resolves_nested_value() {
    let tree = sample_tree();
    let path = path!["tabs", 0, "tabRenderer", "content", "title", "runs", 0, "text"];

    let found = navigate(&tree, &path).unwrap();
    assert_eq!(found, &json!("Morning Mix"));
}

#[test]
fn test_navigate_identity_round_trip() {
    let tree = sample_tree();
    let path = path!["tabs", 0, "tabRenderer"];

    let found = navigate(&tree, &path).unwrap();
    assert_eq!(found, &tree["tabs"][0]["tabRenderer"]);
}

#[test]
fn test_navigate_empty_path_returns_root() {
    let tree = sample_tree();
    let found = navigate(&tree, &Path::new()).unwrap();
    assert_eq!(found, &tree);
}

#[test_case(0, 1; "first")]
#[test_case(2, 3; "last")]
#[test_case(-1, 3; "negative last")]
#[test_case(-3, 1; "negative first")]
fn test_navigate_sequence_index(index: i64, expected: i64) {
    let tree = sample_tree();
    let path = path!["counts", index];
    assert_eq!(navigate(&tree, &path).unwrap(), &json!(expected));
}

#[test]
fn test_navigate_missing_key_error() {
    let tree = sample_tree();
    let path = path!["tabs", 0, "gridRenderer", "items"];

    let err = navigate(&tree, &path).unwrap_err();
    match err {
        Error::PathNotFound {
            path,
            segment,
            depth,
            kind,
        } => {
            assert_eq!(path, "tabs[0].gridRenderer.items");
            assert_eq!(segment, "gridRenderer");
            assert_eq!(depth, 2);
            assert_eq!(kind, PathErrorKind::MissingKey);
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[test_case(3; "past the end")]
#[test_case(-4; "past the start")]
fn test_navigate_index_out_of_range(index: i64) {
    let tree = sample_tree();
    let path = path!["counts", index];

    let err = navigate(&tree, &path).unwrap_err();
    match err {
        Error::PathNotFound { depth, kind, .. } => {
            assert_eq!(depth, 1);
            assert_eq!(kind, PathErrorKind::IndexOutOfRange);
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[test]
fn test_navigate_type_mismatch_mid_path() {
    let tree = sample_tree();

    // index into a mapping
    let err = navigate(&tree, &path!["header", 0]).unwrap_err();
    match err {
        Error::PathNotFound { kind, .. } => assert_eq!(kind, PathErrorKind::TypeMismatch),
        other => panic!("expected PathNotFound, got {other:?}"),
    }

    // key lookup on a scalar
    let err = navigate(&tree, &path!["counts", 0, "value"]).unwrap_err();
    match err {
        Error::PathNotFound { segment, kind, .. } => {
            assert_eq!(segment, "value");
            assert_eq!(kind, PathErrorKind::TypeMismatch);
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

// ============================================================================
// Optional navigation
// ============================================================================

#[test]
fn test_navigate_optional_absent_is_none() {
    let tree = sample_tree();
    assert_eq!(navigate_optional(&tree, &path!["missing", "entirely"]), None);
    assert_eq!(navigate_optional(&tree, &path!["counts", 99]), None);
}

#[test]
fn test_navigate_optional_collapses_explicit_null() {
    let tree = sample_tree();
    assert_eq!(navigate_optional(&tree, &path!["header", "subtitle"]), None);
}

#[test]
fn test_navigate_nullable_keeps_explicit_null() {
    let tree = sample_tree();

    // present null is a valid result
    assert_eq!(
        navigate_nullable(&tree, &path!["header", "subtitle"]),
        Some(&Value::Null)
    );
    // absent path is still None
    assert_eq!(navigate_nullable(&tree, &path!["header", "badge"]), None);
}

#[test]
fn test_navigate_required_accepts_explicit_null() {
    let tree = sample_tree();
    let found = navigate(&tree, &path!["header", "subtitle"]).unwrap();
    assert_eq!(found, &Value::Null);
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_path_composition_is_associative() {
    let tree = sample_tree();
    let a = path!["tabs", 0, "tabRenderer"];
    let b = path!["content", "title"];
    let c = path!["runs", 0, "text"];

    let left = &(&a + &b) + &c;
    let right = &a + &(&b + &c);
    assert_eq!(left, right);

    // navigate(T, A + B) == navigate(navigate(T, A), B)
    let stepwise = navigate(navigate(&tree, &a).unwrap(), &(&b + &c)).unwrap();
    let direct = navigate(&tree, &left).unwrap();
    assert_eq!(direct, stepwise);
}

#[test]
fn test_path_join_and_push() {
    let mut p = path!["menu", "menuRenderer"];
    p.push("items");
    p.push(-1);
    assert_eq!(p.to_string(), "menu.menuRenderer.items[-1]");

    let joined = paths::MENU.join(&path!["items"]);
    assert_eq!(joined.to_string(), "menu.menuRenderer.items");
    assert_eq!(joined, *paths::MENU_ITEMS);
}

#[test]
fn test_path_display_leading_index() {
    let p = path![0, "musicShelfRenderer"];
    assert_eq!(p.to_string(), "[0].musicShelfRenderer");
}

#[test]
fn test_constant_tables_compose() {
    assert_eq!(
        paths::SINGLE_COLUMN_TAB.to_string(),
        "contents.singleColumnBrowseResultsRenderer.tabs[0].tabRenderer.content"
    );
    assert_eq!(paths::TITLE_TEXT.to_string(), "title.runs[0].text");
    assert_eq!(
        paths::NAVIGATION_BROWSE_ID.to_string(),
        "navigationEndpoint.browseEndpoint.browseId"
    );
}

// ============================================================================
// Typed accessors
// ============================================================================

#[test]
fn test_navigate_str() {
    let tree = sample_tree();
    let path = path!["tabs", 0, "tabRenderer", "content", "title", "runs", 0, "text"];
    assert_eq!(navigate_str(&tree, &path).unwrap(), "Morning Mix");

    // present but not a string
    let err = navigate_str(&tree, &path!["counts", 0]).unwrap_err();
    match err {
        Error::PathNotFound { kind, depth, .. } => {
            assert_eq!(kind, PathErrorKind::TypeMismatch);
            assert_eq!(depth, 1);
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[test]
fn test_navigate_str_optional() {
    let tree = sample_tree();
    assert_eq!(
        navigate_str_optional(&tree, &paths::TITLE_TEXT.join(&path!["missing"])),
        None
    );
    assert_eq!(navigate_str_optional(&tree, &path!["counts", 0]), None);
}

// ============================================================================
// Object-list search
// ============================================================================

#[test]
fn test_find_object_by_key() {
    let items = vec![
        json!({ "menuNavigationItemRenderer": { "icon": "MIX" } }),
        json!({ "toggleMenuServiceItemRenderer": { "defaultIcon": "LIBRARY_ADD" } }),
        json!({ "toggleMenuServiceItemRenderer": { "defaultIcon": "LIBRARY_SAVED" } }),
    ];

    let found = find_object_by_key(&items, paths::TOGGLE_MENU).unwrap();
    assert_eq!(
        found["toggleMenuServiceItemRenderer"]["defaultIcon"],
        json!("LIBRARY_ADD")
    );
    assert!(find_object_by_key(&items, "menuServiceItemRenderer").is_none());
}

#[test]
fn test_find_objects_by_key() {
    let items = vec![
        json!({ "a": 1 }),
        json!({ "b": 2 }),
        json!({ "a": 3 }),
        json!("scalar entry"),
    ];

    let found = find_objects_by_key(&items, "a");
    assert_eq!(found.len(), 2);
    assert_eq!(found[1]["a"], json!(3));
}

#[test]
fn test_has_key() {
    assert!(has_key(&json!({ "menu": {} }), "menu"));
    assert!(!has_key(&json!({ "menu": {} }), "items"));
    assert!(!has_key(&json!([1, 2]), "menu"));
    assert!(!has_key(&json!("menu"), "menu"));
}
