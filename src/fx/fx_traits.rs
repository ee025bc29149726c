use crate::errors::Result;
use crate::fx::fx_model::RateTable;

/// Trait defining the contract for exchange-rate sources.
///
/// Implementations return a full table of rates expressed relative to the
/// requested base. The engine does not retry or fall back; every failure
/// propagates to the caller as-is.
pub trait RateProvider: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Fetches the current rates for `base`. Blocking; callers that need a
    /// timeout must wrap the engine.
    fn rates_for(&self, base: &str) -> Result<RateTable>;
}
