use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the conversion library
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency '{0}' not found")]
    CurrencyNotFound(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Rate provider error: {0}")]
    Api(String),

    #[error("Cache error: {0}")]
    Cache(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(err.to_string())
    }
}
