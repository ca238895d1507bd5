//! Runs the selected endpoints one after another and reports each result.
mod suite;


pub use suite::{run_once, run_suite};
