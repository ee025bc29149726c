use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A snapshot of exchange rates, all expressed relative to one base currency.
///
/// Tables are immutable once built; the cache hands out clones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    base: String,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Builds a table for `base`. Non-positive rates are dropped so that
    /// conversion never divides by zero, and the base currency's own rate is
    /// pinned at exactly 1.
    pub fn new(base: impl Into<String>, rates: HashMap<String, Decimal>) -> Self {
        let base = base.into();
        let mut clean: HashMap<String, Decimal> = HashMap::with_capacity(rates.len() + 1);

        for (code, rate) in rates {
            if rate <= Decimal::ZERO {
                log::warn!("Dropping non-positive rate {} for {}", rate, code);
                continue;
            }
            clean.insert(code, rate);
        }
        clean.insert(base.clone(), Decimal::ONE);

        RateTable { base, rates: clean }
    }

    /// The currency every rate in this table is expressed relative to.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The rate for `code` relative to the base currency.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Codes priced in this table, in no particular order.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn table() -> RateTable {
        let mut rates = HashMap::new();
        rates.insert("EUR".to_string(), dec!(0.93));
        rates.insert("JPY".to_string(), dec!(148.0));
        RateTable::new("USD", rates)
    }

    #[test]
    fn test_base_rate_is_pinned_at_one() {
        let table = table();
        assert_eq!(table.rate("USD"), Some(Decimal::ONE));

        // Even when the input tries to claim otherwise
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), dec!(0.5));
        let table = RateTable::new("USD", rates);
        assert_eq!(table.rate("USD"), Some(Decimal::ONE));
    }

    #[test]
    fn test_non_positive_rates_are_dropped() {
        let mut rates = HashMap::new();
        rates.insert("EUR".to_string(), dec!(0.93));
        rates.insert("GBP".to_string(), Decimal::ZERO);
        rates.insert("JPY".to_string(), dec!(-1));
        let table = RateTable::new("USD", rates);

        assert!(table.contains("EUR"));
        assert!(!table.contains("GBP"));
        assert!(!table.contains("JPY"));
    }

    #[test]
    fn test_rate_lookup() {
        let table = table();
        assert_eq!(table.rate("EUR"), Some(dec!(0.93)));
        assert_eq!(table.rate("XXX"), None);
        assert_eq!(table.len(), 3);
        assert_eq!(table.base(), "USD");
    }
}
