pub mod client;
pub mod models;

pub use client::{BackendClient, RecordSource};
pub use models::ApiError;
