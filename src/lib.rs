pub mod constants;
pub mod currencies;
pub mod errors;
pub mod fx;

pub use currencies::{Currency, CurrencyInfo};
pub use errors::{Error, Result};
pub use fx::{FxService, RateProvider, RateTable};
