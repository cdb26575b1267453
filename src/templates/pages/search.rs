// templates/pages/search.rs

use crate::domain::filters::FilterState;
use crate::domain::search::SearchState;
use crate::templates::components::{filters_bar, listing_card, map_panel};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Filter bar on top, map on the left (loaded separately), listings on the right.
pub fn search_page(filters: &FilterState, state: &SearchState) -> Markup {
    desktop_layout(
        "Search",
        html! {
            main class="search-page" {
                div class="filters" { (filters_bar(filters)) }

                div class="search-content flex justify-between gap-3" {
                    div class="search-map" style="height: 70vh;" {
                        (map_panel(&SearchState::Loading, filters))
                    }
                    div class="search-listings" { (listings_panel(state)) }
                }
            }
        },
    )
}

pub fn listings_panel(state: &SearchState) -> Markup {
    html! {
        @match state {
            SearchState::Loading => { p { "Loading..." } }
            SearchState::Failed(_) => { p class="error" { "Failed to fetch properties" } }
            SearchState::Ready(listings) => {
                p class="results-count" {
                    strong { (listings.len()) } " places found"
                }
                @for listing in listings {
                    (listing_card(listing))
                }
            }
        }
    }
}
