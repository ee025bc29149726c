/// Base currency assumed when the caller does not pass one
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// How long a fetched rate table stays fresh, in seconds
pub const DEFAULT_CACHE_TIMEOUT_SECS: u64 = 3600;
