// src/domain/geo.rs

use serde::Serialize;

/// A point in storage/filter order: `[longitude, latitude]`.
///
/// This is the order listings are stored in and the order the
/// `coordinates` query parameter is written in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainPoint([f64; 2]);

/// A point in map order: `[latitude, longitude]`.
///
/// Fields are private and there is no public constructor: the only way to get
/// one is [`DomainPoint::to_render_order`], so anything handed to the map has
/// gone through the swap exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderPoint([f64; 2]);

/// Fallback map center when no coordinate filter is active (New Jersey area).
pub const DEFAULT_CENTER: DomainPoint = DomainPoint([-74.5, 40.0]);

/// Reverse a coordinate pair. Self-inverse: `swap(swap(p)) == p`.
pub fn swap(p: [f64; 2]) -> [f64; 2] {
    [p[1], p[0]]
}

impl DomainPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        DomainPoint([longitude, latitude])
    }

    pub fn longitude(&self) -> f64 {
        self.0[0]
    }

    pub fn latitude(&self) -> f64 {
        self.0[1]
    }

    pub fn as_array(&self) -> [f64; 2] {
        self.0
    }

    /// `[lng, lat] -> [lat, lng]`. No unit conversion and no range checks.
    pub fn to_render_order(self) -> RenderPoint {
        RenderPoint(swap(self.0))
    }
}

impl RenderPoint {
    pub fn latitude(&self) -> f64 {
        self.0[0]
    }

    pub fn longitude(&self) -> f64 {
        self.0[1]
    }

    pub fn as_array(&self) -> [f64; 2] {
        self.0
    }

    /// The inverse of [`DomainPoint::to_render_order`]; the same swap.
    pub fn to_domain_order(self) -> DomainPoint {
        DomainPoint(swap(self.0))
    }
}
