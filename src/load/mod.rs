//! Concurrent fan-out of virtual users against one endpoint.
mod config;
mod generator;


pub use config::RunConfig;
pub use generator::{Executor, LoadGenerator, LoadOutcome};
