use crate::db::connection::Database;
use crate::domain::filters::{FilterState, NumericRange};
use crate::domain::listing::{Coordinates, Location, PropertyListing};
use crate::errors::ServerError;
use chrono::NaiveDate;
use log::{debug, warn};
use rusqlite::{params_from_iter, OptionalExtension, Row, ToSql};

/// Half-width of the box searched around a coordinate filter, in degrees.
pub const SEARCH_RADIUS_DEGREES: f64 = 1.0;

const SELECT_LISTING: &str = r#"
    SELECT id, name, price_per_month, square_feet, beds, baths, property_type,
           amenities, available_from, address, city, longitude, latitude
    FROM properties
"#;

fn row_to_listing(row: &Row<'_>) -> rusqlite::Result<PropertyListing> {
    let amenities: String = row.get(7)?;

    Ok(PropertyListing {
        id: row.get(0)?,
        name: row.get(1)?,
        price_per_month: row.get(2)?,
        square_feet: row.get(3)?,
        beds: row.get(4)?,
        baths: row.get(5)?,
        property_type: row.get(6)?,
        amenities: amenities
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        available_from: row.get(8)?,
        location: Location {
            address: row.get(9)?,
            city: row.get(10)?,
            coordinates: Coordinates {
                longitude: row.get(11)?,
                latitude: row.get(12)?,
            },
        },
    })
}

/// WHERE clauses plus their bound values, built up one filter at a time.
#[derive(Default)]
struct Conditions {
    clauses: Vec<String>,
    values: Vec<Box<dyn ToSql>>,
}

impl Conditions {
    fn push(&mut self, clause: &str, value: impl ToSql + 'static) {
        self.clauses.push(clause.to_string());
        self.values.push(Box::new(value));
    }

    fn push_range(&mut self, column: &str, range: &NumericRange) {
        if let Some(min) = range.min {
            self.push(&format!("{column} >= ?"), min);
        }
        if let Some(max) = range.max {
            self.push(&format!("{column} <= ?"), max);
        }
    }

    fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }
}

fn build_conditions(filters: &FilterState) -> Conditions {
    let mut cond = Conditions::default();

    if let Some(range) = &filters.price_range {
        cond.push_range("price_per_month", range);
    }
    if let Some(range) = &filters.square_feet {
        cond.push_range("square_feet", range);
    }
    if let Some(kind) = &filters.property_type {
        cond.push("property_type = ?", kind.as_str().to_string());
    }

    if let Some(beds) = &filters.beds {
        match beds.trim().parse::<i64>() {
            Ok(n) => cond.push("beds >= ?", n),
            Err(_) => warn!("Ignoring beds filter '{beds}': not an integer"),
        }
    }
    if let Some(baths) = &filters.baths {
        match baths.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => cond.push("baths >= ?", n),
            _ => warn!("Ignoring baths filter '{baths}': not a number"),
        }
    }

    if let Some(location) = &filters.location {
        // SQLite's lower() only folds ASCII, so fold the needle the same way.
        let needle = location.trim().to_ascii_lowercase();
        if !needle.is_empty() {
            cond.clauses.push(
                "(instr(lower(address), ?) > 0 OR instr(lower(city), ?) > 0)".to_string(),
            );
            cond.values.push(Box::new(needle.clone()));
            cond.values.push(Box::new(needle));
        }
    }

    if let Some(amenities) = &filters.amenities {
        for amenity in amenities {
            // Spaces are ignored on both sides, matching the trim on read.
            cond.push(
                "instr(replace(',' || amenities || ',', ' ', ''), ?) > 0",
                format!(",{},", amenity.replace(' ', "")),
            );
        }
    }

    if let Some(date) = &filters.available_from {
        match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            Ok(d) => cond.push("(available_from IS NULL OR available_from <= ?)", d),
            Err(e) => warn!("Ignoring availableFrom filter '{date}': {e}"),
        }
    }

    if let Some(point) = &filters.coordinates {
        cond.push("abs(longitude - ?) <= ?", point.longitude());
        cond.values.push(Box::new(SEARCH_RADIUS_DEGREES));
        cond.push("abs(latitude - ?) <= ?", point.latitude());
        cond.values.push(Box::new(SEARCH_RADIUS_DEGREES));
    }

    for key in filters.extra.keys() {
        debug!("Filter '{key}' has no column; not applied to the query");
    }

    cond
}

/// All listings matching the filters, ordered by id.
pub fn search_properties(
    db: &Database,
    filters: &FilterState,
) -> Result<Vec<PropertyListing>, ServerError> {
    let cond = build_conditions(filters);
    let sql = format!("{SELECT_LISTING} {} ORDER BY id", cond.where_sql());

    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

        let rows = stmt
            .query_map(params_from_iter(cond.values.iter()), row_to_listing)
            .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

pub fn get_property(db: &Database, id: i64) -> Result<Option<PropertyListing>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            &format!("{SELECT_LISTING} WHERE id = ?1"),
            [id],
            row_to_listing,
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("Property lookup failed: {e}")))
    })
}
