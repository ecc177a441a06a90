//! Verify validation and dispatch against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes a request, the expected status line and,
//! where relevant, the expected body. Bodies are compared as parsed JSON
//! (not raw strings) to avoid false negatives from field ordering.

use category_core::{CategoryStore, Dispatcher, Request, RequestValidator};

/// Decode the `request` field; JSON `null` is the absent request.
fn request_of(case: &serde_json::Value) -> Option<Request> {
    serde_json::from_value(case["request"].clone()).unwrap()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn validation_test_vectors() {
    let raw = include_str!("../../test-vectors/validation.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let validator = RequestValidator::new();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let request = request_of(case);

        let resp = validator.validate(request.as_ref());
        assert_eq!(resp.status, case["expected_status"].as_str().unwrap(), "{name}: status");
        assert!(resp.body.is_none(), "{name}: validator never sets a body");
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn dispatch_test_vectors() {
    let raw = include_str!("../../test-vectors/dispatch.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let dispatcher = Dispatcher::new();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let request = request_of(case);

        // Fresh store per case so vectors stay independent.
        let mut store = CategoryStore::seeded();
        let resp = dispatcher.handle(&mut store, request.as_ref());
        assert_eq!(resp.status, case["expected_status"].as_str().unwrap(), "{name}: status");

        if let Some(expected) = case.get("expected_body") {
            let body: serde_json::Value =
                serde_json::from_str(resp.body.as_deref().unwrap()).unwrap();
            assert_eq!(&body, expected, "{name}: body");
        } else if let Some(expected) = case.get("expected_raw_body") {
            assert_eq!(resp.body.as_deref(), expected.as_str(), "{name}: raw body");
        } else {
            assert!(resp.body.is_none(), "{name}: unexpected body");
        }
    }
}

// ---------------------------------------------------------------------------
// Sequenced lifecycle
// ---------------------------------------------------------------------------

#[test]
fn crud_lifecycle_on_one_store() {
    let dispatcher = Dispatcher::new();
    let mut store = CategoryStore::new();
    let now = "1700000000";

    let create = Request::new("create", "/api/categories", now).with_body(r#"{"id":7,"name":"Snacks"}"#);
    assert_eq!(dispatcher.handle(&mut store, Some(&create)).status, "2 Created");

    let read = Request::new("read", "/api/categories/7", now);
    let resp = dispatcher.handle(&mut store, Some(&read));
    assert_eq!(resp.status, "1 Ok");
    let body: serde_json::Value = serde_json::from_str(resp.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({"id": 7, "name": "Snacks"}));

    let update = Request::new("update", "/api/categories/7", now).with_body(r#"{"description":"Salty"}"#);
    assert_eq!(dispatcher.handle(&mut store, Some(&update)).status, "3 Updated");

    let resp = dispatcher.handle(&mut store, Some(&read));
    let body: serde_json::Value = serde_json::from_str(resp.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["name"], "Snacks");
    assert_eq!(body["description"], "Salty");

    let delete = Request::new("delete", "/api/categories/7", now);
    assert_eq!(dispatcher.handle(&mut store, Some(&delete)).status, "1 Ok");
    assert_eq!(dispatcher.handle(&mut store, Some(&read)).status, "5 Not Found");
    assert_eq!(dispatcher.handle(&mut store, Some(&delete)).status, "5 Not Found");
}
