pub mod filters;
pub mod geo;
pub mod listing;
pub mod map;
pub mod search;
