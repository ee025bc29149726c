use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::Error;

/// The closed set of currencies the registry knows about.
///
/// Codes are case-insensitive on input and canonically uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CNY,
    RUB,
    INR,
    BRL,
    CAD,
    AUD,
    CHF,
    SEK,
    NOK,
    DKK,
    PLN,
    TRY,
    UAH,
    KZT,
}

impl Currency {
    /// Every registered currency, in declaration order.
    pub const ALL: [Currency; 18] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CNY,
        Currency::RUB,
        Currency::INR,
        Currency::BRL,
        Currency::CAD,
        Currency::AUD,
        Currency::CHF,
        Currency::SEK,
        Currency::NOK,
        Currency::DKK,
        Currency::PLN,
        Currency::TRY,
        Currency::UAH,
        Currency::KZT,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CNY => "CNY",
            Currency::RUB => "RUB",
            Currency::INR => "INR",
            Currency::BRL => "BRL",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::PLN => "PLN",
            Currency::TRY => "TRY",
            Currency::UAH => "UAH",
            Currency::KZT => "KZT",
        }
    }

    /// Case-insensitive lookup of a canonical code.
    pub fn from_code(code: &str) -> Option<Currency> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CNY" => Some(Currency::CNY),
            "RUB" => Some(Currency::RUB),
            "INR" => Some(Currency::INR),
            "BRL" => Some(Currency::BRL),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "CHF" => Some(Currency::CHF),
            "SEK" => Some(Currency::SEK),
            "NOK" => Some(Currency::NOK),
            "DKK" => Some(Currency::DKK),
            "PLN" => Some(Currency::PLN),
            "TRY" => Some(Currency::TRY),
            "UAH" => Some(Currency::UAH),
            "KZT" => Some(Currency::KZT),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| Error::CurrencyNotFound(normalize(s)))
    }
}

/// Static metadata for a registered currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimal_places: u32,
}

static CURRENCIES: OnceLock<HashMap<Currency, CurrencyInfo>> = OnceLock::new();

fn currencies() -> &'static HashMap<Currency, CurrencyInfo> {
    CURRENCIES.get_or_init(|| {
        let mut map = HashMap::new();

        map.insert(
            Currency::USD,
            CurrencyInfo {
                code: "USD",
                name: "US Dollar",
                symbol: "$",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::EUR,
            CurrencyInfo {
                code: "EUR",
                name: "Euro",
                symbol: "€",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::GBP,
            CurrencyInfo {
                code: "GBP",
                name: "British Pound",
                symbol: "£",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::JPY,
            CurrencyInfo {
                code: "JPY",
                name: "Japanese Yen",
                symbol: "¥",
                decimal_places: 0,
            },
        );
        map.insert(
            Currency::CNY,
            CurrencyInfo {
                code: "CNY",
                name: "Chinese Yuan",
                symbol: "¥",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::RUB,
            CurrencyInfo {
                code: "RUB",
                name: "Russian Ruble",
                symbol: "₽",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::INR,
            CurrencyInfo {
                code: "INR",
                name: "Indian Rupee",
                symbol: "₹",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::BRL,
            CurrencyInfo {
                code: "BRL",
                name: "Brazilian Real",
                symbol: "R$",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::CAD,
            CurrencyInfo {
                code: "CAD",
                name: "Canadian Dollar",
                symbol: "C$",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::AUD,
            CurrencyInfo {
                code: "AUD",
                name: "Australian Dollar",
                symbol: "A$",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::CHF,
            CurrencyInfo {
                code: "CHF",
                name: "Swiss Franc",
                symbol: "Fr",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::SEK,
            CurrencyInfo {
                code: "SEK",
                name: "Swedish Krona",
                symbol: "kr",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::NOK,
            CurrencyInfo {
                code: "NOK",
                name: "Norwegian Krone",
                symbol: "kr",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::DKK,
            CurrencyInfo {
                code: "DKK",
                name: "Danish Krone",
                symbol: "kr",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::PLN,
            CurrencyInfo {
                code: "PLN",
                name: "Polish Zloty",
                symbol: "zł",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::TRY,
            CurrencyInfo {
                code: "TRY",
                name: "Turkish Lira",
                symbol: "₺",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::UAH,
            CurrencyInfo {
                code: "UAH",
                name: "Ukrainian Hryvnia",
                symbol: "₴",
                decimal_places: 2,
            },
        );
        map.insert(
            Currency::KZT,
            CurrencyInfo {
                code: "KZT",
                name: "Kazakhstani Tenge",
                symbol: "₸",
                decimal_places: 2,
            },
        );

        map
    })
}

/// Returns the static metadata for a currency, if any is registered.
pub fn currency_info(currency: Currency) -> Option<&'static CurrencyInfo> {
    currencies().get(&currency)
}

/// Uppercases a code without checking it against the registry. Never fails;
/// unknown codes pass through for later validation.
pub fn normalize(code: impl AsRef<str>) -> String {
    code.as_ref().to_uppercase()
}

/// Returns true when the normalized code names a registered currency.
pub fn is_valid(code: impl AsRef<str>) -> bool {
    Currency::from_code(code.as_ref()).is_some()
}

/// Rounding precision for a code, when its metadata is registered.
pub fn decimal_places(code: &str) -> Option<u32> {
    Currency::from_code(code)
        .and_then(currency_info)
        .map(|info| info.decimal_places)
}

/// All canonical codes, in declaration order.
pub fn supported_codes() -> Vec<&'static str> {
    Currency::ALL.iter().map(|currency| currency.code()).collect()
}
