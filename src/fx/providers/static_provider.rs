use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::errors::{Error, Result};
use crate::fx::fx_model::RateTable;
use crate::fx::fx_traits::RateProvider;

static REFERENCE_RATES: OnceLock<HashMap<&'static str, Decimal>> = OnceLock::new();

/// Reference rates, expressed relative to USD.
fn reference_rates() -> &'static HashMap<&'static str, Decimal> {
    REFERENCE_RATES.get_or_init(|| {
        let mut map = HashMap::new();

        map.insert("USD", dec!(1.0));
        map.insert("EUR", dec!(0.93));
        map.insert("GBP", dec!(0.80));
        map.insert("JPY", dec!(148.0));
        map.insert("RUB", dec!(92.0));
        map.insert("UAH", dec!(38.5));
        map.insert("KZT", dec!(450.0));

        map
    })
}

/// Offline provider backed by a fixed table of USD-referenced rates.
///
/// Requests for other bases are served by rebasing the reference table, so
/// the returned rates are always relative to the base that was actually
/// asked for. Bases the reference table has no rate for are refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRateProvider;

impl RateProvider for StaticRateProvider {
    fn name(&self) -> &'static str {
        "STATIC"
    }

    fn rates_for(&self, base: &str) -> Result<RateTable> {
        let reference = reference_rates();
        let base_rate = reference
            .get(base)
            .copied()
            .ok_or_else(|| Error::CurrencyNotFound(base.to_string()))?;

        let rates = reference
            .iter()
            .map(|(code, rate)| ((*code).to_string(), *rate / base_rate))
            .collect();

        Ok(RateTable::new(base, rates))
    }
}
