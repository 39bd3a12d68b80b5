pub mod catalog;
pub mod error;
pub mod flight;
pub mod query;
pub mod seed;

pub use catalog::FlightCatalog;
pub use error::CatalogError;
pub use flight::{Flight, FlightUpdate};
pub use query::FlightQuery;
