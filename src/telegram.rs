use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ConfigError, TelegramError};

/// Destination of a message: a numeric chat id or a public `@username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl FromStr for ChatId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<i64>() {
            return Ok(ChatId::Id(id));
        }

        if s.len() >= 2 && s.starts_with('@') {
            return Ok(ChatId::Username(s.to_owned()));
        }

        Err(ConfigError::InvalidChatId(s.to_owned()))
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{id}"),
            ChatId::Username(username) => f.write_str(username),
        }
    }
}

/// Markup dialect Telegram uses to interpret message text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[default]
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" => Ok(ParseMode::Markdown),
            "markdownv2" | "markdown-v2" => Ok(ParseMode::MarkdownV2),
            "html" => Ok(ParseMode::Html),
            _ => Err(format!(
                "unknown parse mode {s:?}, expected markdown, markdown-v2 or html"
            )),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseMode::Markdown => "markdown",
            ParseMode::MarkdownV2 => "markdown-v2",
            ParseMode::Html => "html",
        })
    }
}

/// Escapes every character that has a meaning in MarkdownV2 text.
pub fn escape_markdown_v2(text: &str) -> String {
    escape_with(text, |c| "\\_*[]()~`>#+-=|{}.!".contains(c))
}

/// Inside `pre` and `code` entities only the backtick and the backslash are special.
pub(crate) fn escape_markdown_v2_code(text: &str) -> String {
    escape_with(text, |c| c == '`' || c == '\\')
}

fn escape_with(text: &str, special: impl Fn(char) -> bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if special(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A message as returned by the Bot API. Only the fields we use are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    pub message_id: i64,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a ChatId,
    text: &'a str,
    parse_mode: ParseMode,
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    description: Option<String>,
    result: Option<T>,
}

/// Minimal Telegram Bot API client.
pub struct TelegramClient {
    http_client: reqwest::Client,
    token: String,
    base_url: String,
}

impl TelegramClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.telegram.org";

    pub fn new(token: String) -> Self {
        Self::with_base_url(token, Self::DEFAULT_BASE_URL.to_owned())
    }

    /// Client talking to another Bot API server, e.g. a local one or a mock.
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            token,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Sends `text` to `chat_id`. The request is attempted once.
    pub async fn send_message(
        &self,
        chat_id: &ChatId,
        text: &str,
        parse_mode: ParseMode,
    ) -> Result<Message, TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let response = self
            .http_client
            .post(url)
            .json(&SendMessage {
                chat_id,
                text,
                parse_mode,
            })
            .send()
            .await?;

        // from here on Telegram has answered, so failures are not transport errors
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| TelegramError::Api {
                status,
                description: format!("reading response body: {err}"),
            })?;

        let api_response = match serde_json::from_str::<ApiResponse<Message>>(&body) {
            Ok(api_response) => api_response,
            Err(_) => {
                warn!(%status, "telegram responded with an unexpected body");
                return Err(TelegramError::Api {
                    status,
                    description: body,
                });
            }
        };

        match api_response {
            ApiResponse {
                ok: true,
                result: Some(message),
                ..
            } if status.is_success() => {
                info!(%chat_id, message_id = message.message_id, "message sent");
                Ok(message)
            }
            ApiResponse { description, .. } => {
                let description = description.unwrap_or_else(|| "no description".to_owned());
                warn!(%status, %description, "telegram rejected the message");
                Err(TelegramError::Api {
                    status,
                    description,
                })
            }
        }
    }
}
