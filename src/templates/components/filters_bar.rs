use crate::domain::filters::{
    FilterState, NumericRange, PropertyType, KEY_AMENITIES, KEY_AVAILABLE_FROM, KEY_BATHS,
    KEY_BEDS, KEY_COORDINATES, KEY_LOCATION, KEY_PRICE_RANGE, KEY_PROPERTY_TYPE,
    KEY_SQUARE_FEET, SENTINEL_ANY,
};
use maud::{html, Markup};

const BED_OPTIONS: [&str; 3] = ["1", "2", "3"];
const BATH_OPTIONS: [&str; 3] = ["1", "2", "3"];

fn range_value(range: Option<&NumericRange>) -> String {
    range.map(NumericRange::to_query_value).unwrap_or_default()
}

fn count_select(name: &str, label: &str, options: &[&str], current: Option<&str>) -> Markup {
    html! {
        label for=(name) { (label) }
        select name=(name) id=(name) {
            option value=(SENTINEL_ANY) selected[current.is_none()] { "Any" }
            @for opt in options {
                option value=(opt) selected[current == Some(*opt)] { (opt) "+" }
            }
        }
    }
}

/// GET form whose field names are the query keys the normalizer reads,
/// so submitting it produces a shareable search URL.
pub fn filters_bar(filters: &FilterState) -> Markup {
    let current_type = filters.property_type.as_ref().map(PropertyType::as_str);
    let amenities = filters
        .amenities
        .as_ref()
        .map(|set| set.iter().cloned().collect::<Vec<_>>().join(","))
        .unwrap_or_default();

    html! {
        form class="filters-bar" method="get" action="/search" {
            input
                type="text"
                name=(KEY_LOCATION)
                placeholder="Search location"
                value=(filters.location.as_deref().unwrap_or(""));

            label for=(KEY_PRICE_RANGE) { "Price" }
            input
                type="text"
                id=(KEY_PRICE_RANGE)
                name=(KEY_PRICE_RANGE)
                placeholder="min,max"
                value=(range_value(filters.price_range.as_ref()));

            label for=(KEY_SQUARE_FEET) { "Sq ft" }
            input
                type="text"
                id=(KEY_SQUARE_FEET)
                name=(KEY_SQUARE_FEET)
                placeholder="min,max"
                value=(range_value(filters.square_feet.as_ref()));

            (count_select(KEY_BEDS, "Beds", &BED_OPTIONS, filters.beds.as_deref()))
            (count_select(KEY_BATHS, "Baths", &BATH_OPTIONS, filters.baths.as_deref()))

            label for=(KEY_PROPERTY_TYPE) { "Type" }
            select name=(KEY_PROPERTY_TYPE) id=(KEY_PROPERTY_TYPE) {
                option value=(SENTINEL_ANY) selected[current_type.is_none()] { "Any type" }
                @for kind in &PropertyType::KNOWN {
                    option value=(kind.as_str()) selected[current_type == Some(kind.as_str())] {
                        (kind.as_str())
                    }
                }
                @if let Some(PropertyType::Other(other)) = &filters.property_type {
                    option value=(other) selected { (other) }
                }
            }

            input
                type="text"
                name=(KEY_AMENITIES)
                placeholder="Amenities, comma separated"
                value=(amenities);

            label for=(KEY_AVAILABLE_FROM) { "Available by" }
            input
                type="date"
                id=(KEY_AVAILABLE_FROM)
                name=(KEY_AVAILABLE_FROM)
                value=(filters.available_from.as_deref().unwrap_or(""));

            @if let Some(point) = &filters.coordinates {
                input
                    type="hidden"
                    name=(KEY_COORDINATES)
                    value=(format!("{},{}", point.longitude(), point.latitude()));
            }

            @for (key, value) in &filters.extra {
                input type="hidden" name=(key) value=(value);
            }

            button type="submit" class="primary" { "Search" }

            @if !filters.is_empty() {
                a href="/search" class="clear-filters" {
                    "Clear (" (filters.active_count()) ")"
                }
            }
        }
    }
}
