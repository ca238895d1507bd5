pub(crate) const DEFAULT_USER_AGENT: &str = concat!("vubench/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:5131";

pub(crate) const DEFAULT_VIRTUAL_USERS: usize = 1000;
