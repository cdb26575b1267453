use crate::domain::geo::DomainPoint;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: i64,
    pub name: String,
    pub price_per_month: f64,
    pub square_feet: Option<i64>,
    pub beds: i64,
    pub baths: f64,
    pub property_type: String,
    pub amenities: Vec<String>,
    pub available_from: Option<String>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn to_domain_point(self) -> DomainPoint {
        DomainPoint::new(self.longitude, self.latitude)
    }
}

impl PropertyListing {
    pub fn detail_link(&self) -> String {
        format!("/search/{}", self.id)
    }

    /// Address for display, with the placeholder used when none is on file.
    pub fn display_address(&self) -> &str {
        let address = self.location.address.trim();
        if address.is_empty() {
            "Address not available"
        } else {
            address
        }
    }
}
