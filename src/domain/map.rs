// src/domain/map.rs

use crate::domain::filters::FilterState;
use crate::domain::geo::{RenderPoint, DEFAULT_CENTER};
use crate::domain::listing::PropertyListing;
use serde::Serialize;

pub const SEARCH_ZOOM: u8 = 9;
pub const DETAIL_ZOOM: u8 = 14;

/// Everything the browser-side map needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: RenderPoint,
    pub zoom: u8,
    pub markers: Vec<MarkerDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDescriptor {
    /// Listing id; the map script keys markers by it.
    pub id: i64,
    pub position: RenderPoint,
    pub title: String,
    pub price: f64,
    pub detail_link: String,
}

impl MarkerDescriptor {
    pub fn for_listing(listing: &PropertyListing) -> Self {
        MarkerDescriptor {
            id: listing.id,
            position: listing.location.coordinates.to_domain_point().to_render_order(),
            title: listing.name.clone(),
            price: listing.price_per_month,
            detail_link: listing.detail_link(),
        }
    }
}

/// Map for the search page: centered on the coordinate filter if there is
/// one, otherwise on the default region, with a pin per listing.
pub fn search_map(filters: &FilterState, listings: &[PropertyListing]) -> MapView {
    let center = filters.coordinates.unwrap_or(DEFAULT_CENTER);

    MapView {
        center: center.to_render_order(),
        zoom: SEARCH_ZOOM,
        markers: listings.iter().map(MarkerDescriptor::for_listing).collect(),
    }
}

/// Map for the property detail page, zoomed in on a single pin.
pub fn detail_map(listing: &PropertyListing) -> MapView {
    let marker = MarkerDescriptor::for_listing(listing);

    MapView {
        center: marker.position,
        zoom: DETAIL_ZOOM,
        markers: vec![marker],
    }
}

impl MapView {
    /// JSON payload embedded into the page for the map script.
    pub fn to_json(&self) -> String {
        // Only numbers and strings inside; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}
