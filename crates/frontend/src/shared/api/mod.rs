//! HTTP access to the AgroMarEC REST API.
//!
//! A single [`ApiClient`] is provided through context; every verb returns
//! `Result<T, ApiError>` so failures arrive as values instead of panics.

mod client;
mod error;
mod transport;

#[cfg(test)]
pub mod testing;

pub use client::{use_api, ApiClient};
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, GlooTransport, HttpTransport, Method};
