pub mod exchange_rate_api_provider;
pub mod static_provider;

pub use exchange_rate_api_provider::ExchangeRateApiProvider;
pub use static_provider::StaticRateProvider;
