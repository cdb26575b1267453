use crate::db::properties::{get_property, search_properties};
use crate::db::Database;
use crate::domain::filters::{normalize, parse_query, FilterState};
use crate::domain::search::SearchState;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, static_response, ResultResp};
use crate::templates::{components::map_panel, pages};
use astra::Request;
use log::{info, warn};

const MAP_JS: &str = include_str!("../static/map.js");

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");

    info!("{method} {path}");

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/search") => search(db, query),
        ("GET", "/search/map") => search_map_fragment(db, query),
        ("GET", "/api/properties") => api_properties(db, query),
        ("GET", "/static/map.js") => static_response(MAP_JS, "application/javascript"),
        ("GET", p) if p.starts_with("/search/") => property_detail(db, &p["/search/".len()..]),
        _ => Err(ServerError::NotFound),
    }
}

/// Filters for this request, normalized from the URL.
fn filters_from_query(query: &str) -> FilterState {
    normalize(&parse_query(query))
}

fn fetch(db: &Database, filters: &FilterState) -> SearchState {
    let result = search_properties(db, filters);
    if let Err(e) = &result {
        warn!("Listing query failed: {e}");
    }
    SearchState::from(result)
}

fn search(db: &Database, query: &str) -> ResultResp {
    let filters = filters_from_query(query);
    let listings = fetch(db, &filters);
    html_response(pages::search_page(&filters, &listings))
}

fn search_map_fragment(db: &Database, query: &str) -> ResultResp {
    let filters = filters_from_query(query);
    let state = fetch(db, &filters);
    html_response(map_panel(&state, &filters))
}

fn api_properties(db: &Database, query: &str) -> ResultResp {
    let filters = filters_from_query(query);
    let listings = search_properties(db, &filters)?;
    json_response(&listings)
}

fn property_detail(db: &Database, raw_id: &str) -> ResultResp {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid property id '{raw_id}'")))?;
    let listing = get_property(db, id)?.ok_or(ServerError::NotFound)?;
    html_response(pages::property_page(&listing))
}
