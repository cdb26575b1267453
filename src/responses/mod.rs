pub mod errors;
pub mod html;
pub mod json;

pub use errors::html_error_response;
pub use crate::errors::ResultResp;

pub use html::{html_response, static_response};
pub use json::json_response;
