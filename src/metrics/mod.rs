//! Per-request samples and run-level aggregation.
mod aggregate;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::aggregate;
pub use types::{RunResult, Sample, SampleOutcome};
