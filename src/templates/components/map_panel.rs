use crate::domain::filters::FilterState;
use crate::domain::map::{search_map, MapView};
use crate::domain::search::SearchState;
use maud::{html, Markup};

/// Map container read by `/static/map.js`. The view is embedded as JSON in
/// `data-map`; points in it are already in `[lat, lng]` order.
pub fn map_container(view: &MapView, class: &str) -> Markup {
    html! {
        div class=(class) data-map=(view.to_json()) {}
    }
}

pub fn map_fragment_url(filters: &FilterState) -> String {
    let query = filters.to_query_string();
    if query.is_empty() {
        "/search/map".to_string()
    } else {
        format!("/search/map?{query}")
    }
}

pub fn map_panel(state: &SearchState, filters: &FilterState) -> Markup {
    html! {
        @match state {
            SearchState::Loading => {
                div
                    id="map-panel"
                    class="map-panel"
                    hx-get=(map_fragment_url(filters))
                    hx-trigger="load"
                    hx-swap="outerHTML"
                { "Loading..." }
            }
            SearchState::Failed(_) => {
                div id="map-panel" class="map-panel map-error" { "Failed to fetch properties" }
            }
            SearchState::Ready(listings) => {
                div id="map-panel" class="map-panel" {
                    (map_container(&search_map(filters, listings), "map search-map"))
                }
            }
        }
    }
}
