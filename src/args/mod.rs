//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::TesterArgs;
pub use types::{Endpoint, OutputFormat, PositiveUsize};

pub(crate) use defaults::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, DEFAULT_VIRTUAL_USERS};
pub(crate) use parsers::parse_duration_value;
