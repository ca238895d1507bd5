//! HTTP client construction and single-request execution.
mod client;
mod executor;


pub use client::{ClientSettings, build_client};
pub use executor::{HttpExecutor, execute};
