use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::constants::{DEFAULT_BASE_CURRENCY, DEFAULT_CACHE_TIMEOUT_SECS};
use crate::currencies;
use crate::errors::{Error, Result};
use crate::fx::fx_model::RateTable;
use crate::fx::fx_traits::RateProvider;
use crate::fx::providers::StaticRateProvider;

struct CacheEntry {
    table: RateTable,
    fetched_at: DateTime<Utc>,
}

/// The conversion engine: caches rate tables per base currency and converts
/// amounts with cross-rate math and currency-specific rounding.
///
/// Every service owns its cache; construct one per composition root rather
/// than sharing a global instance.
pub struct FxService {
    provider: Arc<dyn RateProvider>,
    cache_timeout_secs: u64,
    cache: RwLock<HashMap<String, CacheEntry>>,
}

impl FxService {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self::with_cache_timeout(provider, DEFAULT_CACHE_TIMEOUT_SECS)
    }

    pub fn with_cache_timeout(provider: Arc<dyn RateProvider>, cache_timeout_secs: u64) -> Self {
        FxService {
            provider,
            cache_timeout_secs,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached table for `base` while it is still fresh.
    fn cached_rates(&self, base: &str) -> Result<Option<RateTable>> {
        let cache = self.cache.read().map_err(|e| Error::Cache(e.to_string()))?;

        let entry = match cache.get(base) {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let age = Utc::now() - entry.fetched_at;
        if age < Duration::seconds(self.cache_timeout_secs as i64) {
            Ok(Some(entry.table.clone()))
        } else {
            Ok(None)
        }
    }

    /// Returns the rate table for `base_currency`, fetching from the provider
    /// when no fresh cached table exists. Provider failures propagate
    /// unchanged; stale entries are overwritten on refetch.
    pub fn get_exchange_rates(&self, base_currency: &str) -> Result<RateTable> {
        let base = currencies::normalize(base_currency);
        if !currencies::is_valid(&base) {
            return Err(Error::CurrencyNotFound(base));
        }

        if let Some(table) = self.cached_rates(&base)? {
            return Ok(table);
        }

        log::debug!("Fetching {} rates from {}", base, self.provider.name());
        let table = self.provider.rates_for(&base)?;

        let mut cache = self.cache.write().map_err(|e| Error::Cache(e.to_string()))?;
        cache.insert(
            base,
            CacheEntry {
                table: table.clone(),
                fetched_at: Utc::now(),
            },
        );

        Ok(table)
    }

    /// Converts `amount` between two currencies, routing through USD rates.
    pub fn convert(&self, amount: &str, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        self.convert_with_base(amount, from_currency, to_currency, DEFAULT_BASE_CURRENCY)
    }

    /// Converts `amount`, routing the cross-rate through `base_currency`.
    ///
    /// The amount is parsed exactly; a representation the decimal type cannot
    /// hold without loss is rejected rather than silently rounded.
    pub fn convert_with_base(
        &self,
        amount: &str,
        from_currency: &str,
        to_currency: &str,
        base_currency: &str,
    ) -> Result<Decimal> {
        let from = currencies::normalize(from_currency);
        let to = currencies::normalize(to_currency);

        // Invalid codes take precedence over an unparseable amount
        if !currencies::is_valid(&from) {
            return Err(Error::CurrencyNotFound(from));
        }
        if !currencies::is_valid(&to) {
            return Err(Error::CurrencyNotFound(to));
        }

        let amount = parse_amount(amount)?;
        self.convert_amount(amount, &from, &to, base_currency)
    }

    /// Like [`FxService::convert_with_base`], for callers that already hold a
    /// [`Decimal`].
    pub fn convert_amount(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
        base_currency: &str,
    ) -> Result<Decimal> {
        let from = currencies::normalize(from_currency);
        let to = currencies::normalize(to_currency);
        let base = currencies::normalize(base_currency);

        if !currencies::is_valid(&from) {
            return Err(Error::CurrencyNotFound(from));
        }
        if !currencies::is_valid(&to) {
            return Err(Error::CurrencyNotFound(to));
        }

        if amount < Decimal::ZERO {
            return Err(Error::InvalidAmount(
                "Amount cannot be negative".to_string(),
            ));
        }

        if from == to {
            return Ok(amount);
        }

        let rates = self.get_exchange_rates(&base)?;

        // The rate table may price only a subset of the registered
        // currencies; membership here is the second validation layer.
        let amount_in_base = if from == base {
            amount
        } else {
            let from_rate = rates
                .rate(&from)
                .ok_or_else(|| Error::CurrencyNotFound(from.clone()))?;
            amount / from_rate
        };

        let to_rate = rates
            .rate(&to)
            .ok_or_else(|| Error::CurrencyNotFound(to.clone()))?;
        let converted = amount_in_base * to_rate;

        match currencies::decimal_places(&to) {
            Some(dp) => {
                Ok(converted.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
            }
            None => Ok(converted),
        }
    }
}

impl Default for FxService {
    fn default() -> Self {
        FxService::new(Arc::new(StaticRateProvider))
    }
}

fn parse_amount(raw: &str) -> Result<Decimal> {
    Decimal::from_str_exact(raw.trim())
        .map_err(|_| Error::InvalidAmount(format!("Cannot parse amount '{}'", raw)))
}
