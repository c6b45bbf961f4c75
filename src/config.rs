use std::fmt;

use crate::error::ConfigError;
use crate::feed::EnergyZeroClient;
use crate::locale::Locale;
use crate::telegram::{ChatId, TelegramClient};

/// Runtime configuration, read from the environment.
///
/// | variable           | required | default                    |
/// |--------------------|----------|----------------------------|
/// | `TOKEN`            | yes      |                            |
/// | `CHAT_ID`          | yes      |                            |
/// | `REPORT_LOCALE`    | no       | `nl`                       |
/// | `ENERGYZERO_URL`   | no       | the public EnergyZero API  |
/// | `TELEGRAM_API_URL` | no       | `https://api.telegram.org` |
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub chat_id: ChatId,
    pub locale: Locale,
    pub energyzero_url: String,
    pub telegram_api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("locale", &self.locale)
            .field("energyzero_url", &self.energyzero_url)
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}

impl Config {
    /// Reads the process environment, after loading a `.env` file if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Values are trimmed; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let token = require("TOKEN")?;
        let chat_id = require("CHAT_ID")?.parse::<ChatId>()?;
        let locale = match get("REPORT_LOCALE") {
            Some(locale) => locale.parse::<Locale>()?,
            None => Locale::default(),
        };

        Ok(Self {
            token,
            chat_id,
            locale,
            energyzero_url: get("ENERGYZERO_URL")
                .unwrap_or_else(|| EnergyZeroClient::DEFAULT_BASE_URL.to_owned()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| TelegramClient::DEFAULT_BASE_URL.to_owned()),
        })
    }
}
