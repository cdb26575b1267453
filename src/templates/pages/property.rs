use crate::domain::listing::PropertyListing;
use crate::templates::components::location_panel;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_page(listing: &PropertyListing) -> Markup {
    desktop_layout(
        &listing.name,
        html! {
            main class="container property-page" {
                p { a href="/search" { "← Back to search" } }
                h1 { (listing.name) }
                p class="listing-price" {
                    strong { "$" (listing.price_per_month) }
                    " / month"
                }
                ul class="property-facts" {
                    li { (listing.beds) " beds" }
                    li { (listing.baths) " baths" }
                    @if let Some(sqft) = listing.square_feet {
                        li { (sqft) " sq ft" }
                    }
                    li { (listing.property_type) }
                    @if let Some(date) = &listing.available_from {
                        li { "Available from " (date) }
                    }
                }
                @if !listing.amenities.is_empty() {
                    h3 { "Amenities" }
                    ul class="amenities" {
                        @for amenity in &listing.amenities {
                            li { (amenity) }
                        }
                    }
                }

                (location_panel(listing))
            }
        },
    )
}
