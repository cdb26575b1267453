// src/domain/filters.rs

use crate::domain::geo::DomainPoint;
use std::collections::{BTreeMap, BTreeSet};
use url::form_urlencoded;

/// Query-string keys mapped to their decoded values. Last occurrence wins.
pub type RawQueryParams = BTreeMap<String, String>;

/// Reserved value meaning "no filter applied". Exact, case-sensitive match.
pub const SENTINEL_ANY: &str = "any";

/// Separator for ranges, coordinate pairs and amenity lists.
pub const LIST_DELIMITER: char = ',';

pub const KEY_LOCATION: &str = "location";
pub const KEY_PRICE_RANGE: &str = "priceRange";
pub const KEY_SQUARE_FEET: &str = "squareFeet";
pub const KEY_PROPERTY_TYPE: &str = "propertyType";
pub const KEY_AMENITIES: &str = "amenities";
pub const KEY_COORDINATES: &str = "coordinates";
pub const KEY_BEDS: &str = "beds";
pub const KEY_BATHS: &str = "baths";
pub const KEY_AVAILABLE_FROM: &str = "availableFrom";

/// A pair of optional bounds. `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// `min,max` as written in the URL; an absent bound is an empty string.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", format_bound(self.min), format_bound(self.max))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyType {
    Rooms,
    Tinyhouse,
    Apartment,
    Villa,
    Townhouse,
    Cottage,
    /// Values we don't know about are kept as given.
    Other(String),
}

impl PropertyType {
    pub const KNOWN: [PropertyType; 6] = [
        PropertyType::Rooms,
        PropertyType::Tinyhouse,
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Townhouse,
        PropertyType::Cottage,
    ];

    pub fn from_query(value: &str) -> Self {
        match value {
            "Rooms" => PropertyType::Rooms,
            "Tinyhouse" => PropertyType::Tinyhouse,
            "Apartment" => PropertyType::Apartment,
            "Villa" => PropertyType::Villa,
            "Townhouse" => PropertyType::Townhouse,
            "Cottage" => PropertyType::Cottage,
            other => PropertyType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Rooms => "Rooms",
            PropertyType::Tinyhouse => "Tinyhouse",
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Cottage => "Cottage",
            PropertyType::Other(s) => s,
        }
    }
}

/// The active search filters.
///
/// Built from the URL by [`normalize`]; after that it is passed by reference
/// to the listing query and the map builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub location: Option<String>,
    pub price_range: Option<NumericRange>,
    pub square_feet: Option<NumericRange>,
    pub property_type: Option<PropertyType>,
    pub amenities: Option<BTreeSet<String>>,
    /// Always in `[longitude, latitude]` order.
    pub coordinates: Option<DomainPoint>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub available_from: Option<String>,
    /// Keys we don't recognise, passed through untouched.
    pub extra: BTreeMap<String, String>,
}

/// Decode a raw query string (`a=1&b=2`) into a key/value map.
pub fn parse_query(query: &str) -> RawQueryParams {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Turn URL parameters into the cleaned filter state. Never fails:
/// malformed values just leave their field unset.
pub fn normalize(raw: &RawQueryParams) -> FilterState {
    resolve(raw).clean()
}

/// Per-key parsing without the cleaning pass.
pub fn resolve(raw: &RawQueryParams) -> FilterState {
    let mut state = FilterState::default();

    for (key, value) in raw {
        match key.as_str() {
            KEY_PRICE_RANGE => state.price_range = Some(parse_range(value)),
            KEY_SQUARE_FEET => state.square_feet = Some(parse_range(value)),
            KEY_COORDINATES => state.coordinates = parse_point(value),
            KEY_AMENITIES => state.amenities = scalar(value).map(|v| parse_set(&v)),
            KEY_LOCATION => state.location = scalar(value),
            KEY_PROPERTY_TYPE => {
                state.property_type = scalar(value).map(|v| PropertyType::from_query(&v))
            }
            KEY_BEDS => state.beds = scalar(value),
            KEY_BATHS => state.baths = scalar(value),
            KEY_AVAILABLE_FROM => state.available_from = scalar(value),
            _ => {
                if let Some(v) = scalar(value) {
                    state.extra.insert(key.clone(), v);
                }
            }
        }
    }

    state
}

fn scalar(value: &str) -> Option<String> {
    if value == SENTINEL_ANY {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_number(part: &str) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() {
        return None;
    }
    part.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_range(value: &str) -> NumericRange {
    let parts: Vec<&str> = value.split(LIST_DELIMITER).collect();
    match parts.as_slice() {
        [min, max] => NumericRange::new(parse_number(min), parse_number(max)),
        _ => NumericRange::default(),
    }
}

fn parse_point(value: &str) -> Option<DomainPoint> {
    let parts: Vec<&str> = value.split(LIST_DELIMITER).collect();
    match parts.as_slice() {
        [lng, lat] => Some(DomainPoint::new(parse_number(lng)?, parse_number(lat)?)),
        _ => None,
    }
}

fn parse_set(value: &str) -> BTreeSet<String> {
    value
        .split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != SENTINEL_ANY)
        .map(str::to_string)
        .collect()
}

fn format_bound(bound: Option<f64>) -> String {
    bound.map(|n| n.to_string()).unwrap_or_default()
}

impl FilterState {
    /// Drop every entry that is unset, an empty string, an empty collection,
    /// or a range with no bounds. Idempotent.
    pub fn clean(self) -> Self {
        FilterState {
            location: self.location.filter(|s| !s.is_empty()),
            price_range: self.price_range.filter(|r| !r.is_unbounded()),
            square_feet: self.square_feet.filter(|r| !r.is_unbounded()),
            property_type: self.property_type.filter(|t| !t.as_str().is_empty()),
            amenities: self.amenities.filter(|a| !a.is_empty()),
            coordinates: self.coordinates,
            beds: self.beds.filter(|s| !s.is_empty()),
            baths: self.baths.filter(|s| !s.is_empty()),
            available_from: self.available_from.filter(|s| !s.is_empty()),
            extra: self
                .extra
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of filters currently narrowing the search.
    pub fn active_count(&self) -> usize {
        [
            self.location.is_some(),
            self.price_range.is_some(),
            self.square_feet.is_some(),
            self.property_type.is_some(),
            self.amenities.is_some(),
            self.coordinates.is_some(),
            self.beds.is_some(),
            self.baths.is_some(),
            self.available_from.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
            + self.extra.len()
    }

    /// Encode back into a shareable query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let Some(location) = &self.location {
            out.append_pair(KEY_LOCATION, location);
        }
        if let Some(range) = &self.price_range {
            out.append_pair(
                KEY_PRICE_RANGE,
                &range.to_query_value(),
            );
        }
        if let Some(range) = &self.square_feet {
            out.append_pair(
                KEY_SQUARE_FEET,
                &range.to_query_value(),
            );
        }
        if let Some(kind) = &self.property_type {
            out.append_pair(KEY_PROPERTY_TYPE, kind.as_str());
        }
        if let Some(amenities) = &self.amenities {
            let joined: Vec<&str> = amenities.iter().map(String::as_str).collect();
            out.append_pair(KEY_AMENITIES, &joined.join(","));
        }
        if let Some(point) = &self.coordinates {
            out.append_pair(
                KEY_COORDINATES,
                &format!("{},{}", point.longitude(), point.latitude()),
            );
        }
        if let Some(beds) = &self.beds {
            out.append_pair(KEY_BEDS, beds);
        }
        if let Some(baths) = &self.baths {
            out.append_pair(KEY_BATHS, baths);
        }
        if let Some(date) = &self.available_from {
            out.append_pair(KEY_AVAILABLE_FROM, date);
        }
        for (key, value) in &self.extra {
            out.append_pair(key, value);
        }

        out.finish()
    }
}
