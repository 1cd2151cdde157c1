use crate::config::Config;
use crate::data::datasets::LISTINGS_URL;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, get, test_state, StaticSource};

#[test]
fn incidents_page_shows_placed_count() {
    let (state, _) = test_state();

    let resp = handle(get("/incidents"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("shootings in NYC"));
    assert!(body.contains("<strong>2</strong> incidents on the map (1 without coordinates)."));
    assert!(body.contains("HexagonLayer"));
    assert!(body.contains("BRONX: <strong>1</strong>"));
}

#[test]
fn trees_page_renders_heatmap() {
    let (state, _) = test_state();

    let body = body_string(handle(get("/trees"), &state).unwrap());

    assert!(body.contains("Tree coverage in the city"));
    assert!(body.contains("HeatmapLayer"));
    assert!(body.contains("2 trees mapped."));
}

#[test]
fn trees_are_only_fetched_when_asked_for() {
    let (state, source) = test_state();

    handle(get("/"), &state).unwrap();
    handle(get("/incidents"), &state).unwrap();
    assert_eq!(source.fetch_count(), 2);

    handle(get("/trees"), &state).unwrap();
    assert_eq!(source.fetch_count(), 3);
}

#[test]
fn mapbox_token_reaches_the_map_widget() {
    let config = Config {
        mapbox_token: Some("pk.test-token".into()),
        ..Config::default()
    };
    let state = AppState::new(config, Box::new(StaticSource::fixtures()));

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("data-token=\"pk.test-token\""));
}

#[test]
fn missing_dataset_maps_to_bad_gateway() {
    let state = AppState::new(Config::default(), Box::new(StaticSource::new(&[])));

    let err = handle(get("/incidents"), &state).unwrap_err();

    assert_eq!(err.status(), 502);
    let body = body_string(crate::responses::error_to_response(err));
    assert!(body.contains("Could not load the map data"));
}

#[test]
fn markup_in_listing_text_never_renders_as_html() {
    let csv = "\
price,price_per_bed,price_per_bed_scale,lat,lon,borough,nearest_station,distance_between
2500,1250,125,40.70,-73.95,Brooklyn,<script>x</script>,0.4
";
    let state = AppState::new(
        Config::default(),
        Box::new(StaticSource::new(&[(LISTINGS_URL, csv)])),
    );

    let body = body_string(handle(get("/?salary=90000"), &state).unwrap());

    assert!(!body.contains("<script>x</script>"));
    // Raw table cell.
    assert!(body.contains("&lt;script&gt;x&lt;/script&gt;"));
    // Embedded chart JSON.
    assert!(body.contains("<script>x<\\/script>"));
    // Tooltip values are escaped in the browser before hitting innerHTML.
    assert!(body.contains("escapeHtml(object[k])"));
}
