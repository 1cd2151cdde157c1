// src/tests/router_tests/dashboard_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;

#[test]
fn dashboard_renders_every_section() {
    let (state, _) = test_state();

    let resp = handle(get("/?salary=45000"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.contains("Rental properties in New York City"));
    assert!(body.contains("Insert your yearly salary"));
    assert!(body.contains("show only those properties available to your budget"));
    assert!(body.contains("Show Raw Data"));
    assert!(body.contains("property-map"));
    assert!(body.contains("The elevation of the columns"));
    // 2 of the 3 fixture listings are under $1125 per bed.
    assert!(body.contains("<strong>2</strong> of 3 listings"));
}

#[test]
fn blank_salary_shows_nothing_affordable() {
    let (state, _) = test_state();

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("<strong>0</strong> of 3 listings"));
    assert!(!body.contains(">affordable<"));
}

#[test]
fn checkbox_limits_raw_table_to_affordable_rows() {
    let (state, _) = test_state();

    let body = body_string(handle(get("/?salary=45000&affordable_only=on"), &state).unwrap());

    assert!(body.contains("Grand Central"));
    assert!(body.contains("Fordham Rd"));
    assert!(!body.contains("Bedford Av"));
    assert!(body.contains("checked"));
}

#[test]
fn raw_table_is_capped_by_config() {
    let (mut state, _) = test_state();
    state.config.raw_row_limit = 1;

    let body = body_string(handle(get("/?salary=45000"), &state).unwrap());

    assert!(body.contains("Showing 1 of 3 rows."));
}

#[test]
fn listings_are_fetched_once_across_requests() {
    let (state, source) = test_state();

    for uri in ["/", "/?salary=30000", "/?salary=90000&affordable_only=on", "/deck.json"] {
        let resp = handle(get(uri), &state).unwrap();
        assert_eq!(resp.status(), 200);
    }

    assert_eq!(source.fetch_count(), 1);
}

#[test]
fn deck_json_matches_the_query() {
    let (state, _) = test_state();

    let resp = handle(get("/deck.json?salary=45000&affordable_only=true"), &state).unwrap();
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let deck: Value = serde_json::from_str(&body_string(resp)).unwrap();
    let data = deck["layers"][0]["data"].as_array().unwrap();

    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|row| row["afford"] == "affordable"));
}

#[test]
fn bad_salary_is_a_bad_request() {
    let (state, _) = test_state();

    let err = handle(get("/?salary=plenty"), &state).unwrap_err();

    assert_eq!(err.status(), 400);
    assert!(err.to_string().contains("salary must be a number"));
}

#[test]
fn refresh_invalidates_and_redirects() {
    let (state, source) = test_state();
    handle(get("/"), &state).unwrap();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/refresh")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/");

    handle(get("/"), &state).unwrap();
    assert_eq!(source.fetch_count(), 2);
}

#[test]
fn unknown_route_is_not_found() {
    let (state, _) = test_state();

    let err = handle(get("/nope"), &state).unwrap_err();
    assert_eq!(err.status(), 404);

    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn healthz_does_not_touch_the_data() {
    let (state, source) = test_state();

    let resp = handle(get("/healthz"), &state).unwrap();

    assert_eq!(body_string(resp), "ok");
    assert_eq!(source.fetch_count(), 0);
}
