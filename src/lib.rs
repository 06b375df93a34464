pub mod config;
pub mod db;
pub mod routes;
pub mod types;
pub mod utils;

/// Path prefix every resource is mounted under, also used when deriving
/// Location headers and resource uris.
pub const API_VERSION: &str = "v2.1";
