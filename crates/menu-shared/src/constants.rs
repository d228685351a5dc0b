//! Application-wide constants

/// Parent id carried by top-level menus.
pub const ROOT_PARENT_ID: &str = "";

pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 3;
