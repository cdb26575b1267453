pub mod connection;
pub mod properties;

pub use connection::{apply_sql_file, init_db, Database};
