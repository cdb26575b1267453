// src/tests/router_tests/search_tests.rs

use crate::tests::utils::{
    assert_pair, body_string, data_map, get, insert_listing, make_bare_db, make_db, make_seeded_db,
};
use serde_json::json;

#[test]
fn search_page_lists_everything_without_filters() {
    let db = make_seeded_db();

    let resp = get(&db, "/search").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<strong>6</strong> places found"));
    assert!(body.contains("Hudson View Loft"));
    assert!(body.contains("href=\"/search/1\""));

    // map is loaded lazily with the same (empty) filters
    assert!(body.contains("hx-get=\"/search/map\""));
    assert!(body.contains("Loading..."));
}

#[test]
fn search_page_applies_and_prefills_filters() {
    let db = make_seeded_db();

    let body = body_string(get(&db, "/search?priceRange=%2C2000&propertyType=any").unwrap());

    // 1850, 1200 and 1600 a month
    assert!(body.contains("<strong>3</strong> places found"));
    assert!(!body.contains("Shore Villa"));

    assert!(body.contains("value=\",2000\""));
    assert!(body.contains("name=\"squareFeet\" placeholder=\"min,max\" value=\"\""));
    assert!(body.contains("hx-get=\"/search/map?priceRange=%2C2000\""));
    // the sentinel never reaches the fragment URL
    assert!(!body.contains("propertyType=any"));
}

#[test]
fn map_fragment_places_markers_in_lat_lng_order() {
    let db = make_seeded_db();

    let body = body_string(get(&db, "/search/map?location=newark").unwrap());
    let view = data_map(&body);

    assert_eq!(view["zoom"], 9);
    assert_eq!(view["center"], json!([40.0, -74.5]));

    let markers = view["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["id"], 4);
    assert_pair(&markers[0]["position"], [40.7357, -74.1724]);
    assert_eq!(markers[0]["detailLink"], "/search/4");
}

#[test]
fn single_listing_end_to_end() {
    let db = make_db();
    insert_listing(&db, 1, "A", 2000.0, "1 Test St", -73.9, 40.7);

    let body = body_string(get(&db, "/search/map").unwrap());
    let view = data_map(&body);

    let markers = view["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["position"], json!([40.7, -73.9]));
    assert_eq!(markers[0]["detailLink"], "/search/1");
    assert_eq!(markers[0]["title"], "A");
    assert_eq!(markers[0]["price"], 2000.0);
}

#[test]
fn coordinate_filter_recenters_the_map() {
    let db = make_seeded_db();

    let body = body_string(get(&db, "/search/map?coordinates=-74.03%2C40.72").unwrap());
    let view = data_map(&body);

    assert_eq!(view["center"], json!([40.72, -74.03]));
}

#[test]
fn malformed_coordinates_fall_back_to_default_center() {
    let db = make_seeded_db();

    let body = body_string(get(&db, "/search/map?coordinates=bad").unwrap());
    let view = data_map(&body);

    assert_eq!(view["center"], json!([40.0, -74.5]));
    assert_eq!(view["markers"].as_array().unwrap().len(), 6);
}

#[test]
fn empty_result_still_renders_a_map() {
    let db = make_seeded_db();

    let body = body_string(get(&db, "/search/map?priceRange=1%2C2").unwrap());
    let view = data_map(&body);

    assert!(view["markers"].as_array().unwrap().is_empty());
}

#[test]
fn query_failure_renders_failed_state() {
    // no schema: the listing query errors out
    let db = make_bare_db();

    let resp = get(&db, "/search/map").unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Failed to fetch properties"));
    assert!(!body.contains("data-map"));

    let body = body_string(get(&db, "/search").unwrap());
    assert!(body.contains("Failed to fetch properties"));
}
