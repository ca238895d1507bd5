//! Core library for the `vubench` CLI.
//!
//! A run fans out one GET per virtual user against a single endpoint,
//! gathers one [`metrics::Sample`] per virtual user, and aggregates them into
//! a [`metrics::RunResult`]. The suite runner repeats that for each selected
//! endpoint of the sync/async demo server.
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod load;
pub mod metrics;
pub mod report;
