pub mod currency_model;

pub use currency_model::{
    currency_info, decimal_places, is_valid, normalize, supported_codes, Currency, CurrencyInfo,
};
