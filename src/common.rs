pub mod coerce;
pub mod dates;
pub mod error;

pub use error::AppError;
