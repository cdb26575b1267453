pub mod card;
pub mod error;
pub mod filters_bar;
pub mod location_panel;
pub mod map_panel;

pub use card::{card, listing_card};
pub use error::error_page;
pub use filters_bar::filters_bar;
pub use location_panel::location_panel;
pub use map_panel::{map_container, map_panel};
