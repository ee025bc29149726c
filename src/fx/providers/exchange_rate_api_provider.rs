use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::errors::{Error, Result};
use crate::fx::fx_model::RateTable;
use crate::fx::fx_traits::RateProvider;

#[derive(Deserialize, Debug)]
struct ExchangeRateApiResponse {
    result: String,
    base_code: String,
    conversion_rates: HashMap<String, f64>,
}

/// Live provider backed by the exchangerate-api.com v6 REST endpoint.
pub struct ExchangeRateApiProvider {
    api_key: String,
}

impl ExchangeRateApiProvider {
    pub fn new(api_key: String) -> Self {
        ExchangeRateApiProvider { api_key }
    }

    fn table_from_response(response: ExchangeRateApiResponse) -> RateTable {
        let mut rates = HashMap::with_capacity(response.conversion_rates.len());
        for (code, rate) in response.conversion_rates {
            match Decimal::from_f64(rate) {
                Some(decimal) => {
                    rates.insert(code, decimal);
                }
                None => log::warn!("Skipping unrepresentable rate {} for {}", rate, code),
            }
        }
        RateTable::new(response.base_code, rates)
    }
}

impl RateProvider for ExchangeRateApiProvider {
    fn name(&self) -> &'static str {
        "EXCHANGE_RATE_API"
    }

    fn rates_for(&self, base: &str) -> Result<RateTable> {
        let url = format!(
            "https://v6.exchangerate-api.com/v6/{}/latest/{}",
            self.api_key, base
        );

        let response = reqwest::blocking::get(&url)?.json::<ExchangeRateApiResponse>()?;

        if response.result != "success" {
            return Err(Error::Api(format!(
                "Rate request for {} failed: {}",
                base, response.result
            )));
        }

        Ok(Self::table_from_response(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_response_maps_to_rate_table() {
        let payload = r#"{
            "result": "success",
            "base_code": "USD",
            "conversion_rates": {
                "USD": 1.0,
                "EUR": 0.93,
                "JPY": 148.0
            }
        }"#;

        let response: ExchangeRateApiResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.result, "success");

        let table = ExchangeRateApiProvider::table_from_response(response);
        assert_eq!(table.base(), "USD");
        assert_eq!(table.rate("USD"), Some(Decimal::ONE));
        assert_eq!(table.rate("EUR"), Some(dec!(0.93)));
        assert_eq!(table.rate("JPY"), Some(dec!(148.0)));
    }

    #[test]
    fn test_response_drops_unusable_rates() {
        let payload = r#"{
            "result": "success",
            "base_code": "USD",
            "conversion_rates": {
                "EUR": 0.93,
                "XAU": 0.0
            }
        }"#;

        let response: ExchangeRateApiResponse = serde_json::from_str(payload).unwrap();
        let table = ExchangeRateApiProvider::table_from_response(response);
        assert!(table.contains("EUR"));
        assert!(!table.contains("XAU"));
    }
}
