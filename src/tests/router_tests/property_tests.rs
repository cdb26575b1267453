// src/tests/router_tests/property_tests.rs

use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::tests::utils::{
    assert_pair, body_string, data_map, get, insert_listing, make_db, make_seeded_db,
};

#[test]
fn detail_page_shows_location_panel() {
    let db = make_seeded_db();

    let resp = get(&db, "/search/1").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Hudson View Loft"));
    assert!(body.contains("Map and Location"));
    assert!(body.contains("77 Hudson St"));
    assert!(body.contains("https://maps.google.com/?q=77+Hudson+St"));

    let view = data_map(&body);
    assert_eq!(view["zoom"], 14);
    assert_pair(&view["center"], [40.7178, -74.0324]);
    assert_eq!(view["markers"].as_array().unwrap().len(), 1);
}

#[test]
fn detail_page_without_address_uses_placeholder() {
    let db = make_db();
    insert_listing(&db, 9, "Mystery Flat", 1000.0, "", -74.0, 40.0);

    let body = body_string(get(&db, "/search/9").unwrap());
    assert!(body.contains("Address not available"));
}

#[test]
fn unknown_property_is_not_found() {
    let db = make_seeded_db();

    match get(&db, "/search/999") {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|r| r.status())),
    }
    assert_eq!(html_error_response(ServerError::NotFound).status(), 404);
}

#[test]
fn non_numeric_property_id_is_bad_request() {
    let db = make_seeded_db();

    match get(&db, "/search/abc") {
        Err(err @ ServerError::BadRequest(_)) => {
            let resp = html_error_response(err);
            assert_eq!(resp.status(), 400);
            assert!(body_string(resp).contains("Invalid property id"));
        }
        other => panic!("expected BadRequest, got {:?}", other.map(|r| r.status())),
    }
}
