use crate::domain::listing::PropertyListing;
use crate::domain::map::detail_map;
use crate::templates::components::map_container;
use maud::{html, Markup};
use url::form_urlencoded;

pub fn directions_link(address: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(address.as_bytes()).collect();
    format!("https://maps.google.com/?q={encoded}")
}

/// "Map and Location" section of the property page.
pub fn location_panel(listing: &PropertyListing) -> Markup {
    html! {
        section class="location-panel py-16" {
            h3 class="text-xl font-semibold" { "Map and Location" }
            div class="flex justify-between items-center text-sm mt-2" {
                div class="flex items-center text-gray-500" {
                    "Property Address:"
                    span class="ml-2 font-semibold text-gray-700" { (listing.display_address()) }
                }
                a
                    href=(directions_link(listing.location.address.trim()))
                    target="_blank"
                    rel="noopener noreferrer"
                    class="directions-link hover:underline"
                { "Get Directions" }
            }
            div class="relative mt-4 rounded-lg overflow-hidden" style="height: 300px;" {
                (map_container(&detail_map(listing), "map detail-map"))
            }
        }
    }
}
