pub mod home;
pub mod property;
pub mod search;

pub use home::home_page;
pub use property::property_page;
pub use search::search_page;
