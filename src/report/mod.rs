//! Human-readable and JSON renderings of a run result.
mod format;


pub use format::{format_json, format_text, render};
