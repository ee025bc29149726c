pub mod fx_model;
pub mod fx_service;
pub mod fx_traits;
pub mod providers;

pub use fx_model::RateTable;
pub use fx_service::FxService;
pub use fx_traits::RateProvider;
pub use providers::{ExchangeRateApiProvider, StaticRateProvider};
