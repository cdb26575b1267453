use crate::domain::listing::PropertyListing;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn listing_card(listing: &PropertyListing) -> Markup {
    html! {
        article class="card listing-card" id=(format!("listing-{}", listing.id)) {
            h3 {
                a href=(listing.detail_link()) { (listing.name) }
            }
            p class="text-gray-500" { (listing.display_address()) ", " (listing.location.city) }
            p class="listing-price" {
                strong { "$" (listing.price_per_month) }
                span class="text-gray-500" { " / month" }
            }
            p class="text-sm" {
                (listing.beds) " bd · " (listing.baths) " ba"
                @if let Some(sqft) = listing.square_feet {
                    " · " (sqft) " sq ft"
                }
                " · " (listing.property_type)
            }
            @if !listing.amenities.is_empty() {
                ul class="amenities" {
                    @for amenity in &listing.amenities {
                        li { (amenity) }
                    }
                }
            }
        }
    }
}
