use chrono::NaiveDate;
use reqwest::StatusCode;
use thiserror::Error;

/// Startup configuration problems. All of them are fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("invalid chat id {0:?}, expected a numeric id or an @username")]
    InvalidChatId(String),
    #[error(transparent)]
    UnsupportedLocale(#[from] crate::locale::UnsupportedLocale),
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("http request error")]
    Reqwest(#[from] reqwest::Error),
    #[error("price feed responded with status {0}")]
    Status(StatusCode),
    #[error("price feed response could not be decoded")]
    Json(#[from] serde_json::Error),
    #[error("prices not yet available")]
    NoPrices,
    #[error("price feed entry {index} has an invalid price {price}")]
    InvalidPrice { index: usize, price: f64 },
    #[error("price feed has an invalid average {0}")]
    InvalidAverage(f64),
    #[error("no local midnight in Europe/Amsterdam on {0}")]
    TimeZone(NaiveDate),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("cannot report on an empty set of readings")]
    NoReadings,
}

#[derive(Error, Debug)]
pub enum TelegramError {
    /// The request never got a response.
    #[error("telegram request failed")]
    Transport(#[from] reqwest::Error),
    /// Telegram answered, but did not accept the request.
    #[error("telegram responded with {status}: {description}")]
    Api {
        status: StatusCode,
        description: String,
    },
}
