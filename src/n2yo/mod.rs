mod client;
mod error;
mod types;

pub use client::{N2yoClient, DEFAULT_BASE_URL};
pub use error::N2yoError;
pub use types::PositionSample;
