//! Daily energy price report.
//!
//! Fetches tomorrow's hourly prices from the EnergyZero API, turns them into a
//! short report (average, highest and lowest prices with the hours they occur,
//! and a per-hour breakdown) and posts it to a Telegram chat.
//!
//! The report itself is built from pure functions and can be used without any
//! of the I/O:
//!
//! ```
//! use chrono::NaiveDate;
//! use energy_price_report::{generate_report, Locale, ParseMode, PriceSet, Reading, TimeOfDay};
//!
//! let readings = (0..24)
//!     .map(|hour| Reading { hour, price: if hour == 3 { 0.18 } else { 0.27 } })
//!     .collect();
//! let date = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();
//! let prices = PriceSet::new(readings, 0.26, date);
//!
//! let report =
//!     generate_report(&prices, TimeOfDay::Afternoon, Locale::Dutch, ParseMode::Markdown).unwrap();
//! assert!(report.contains("Laag: €\u{a0}0,18 per kWh van 03:00 tot 03:59."));
//! ```

mod charges;
mod classify;
mod config;
mod error;
mod extrema;
mod feed;
mod format;
mod locale;
mod model;
mod ranges;
mod report;
mod telegram;

pub use charges::{add_charges, ENERGY_TAX, PURCHASE_COST};
pub use classify::PriceStatus;
pub use config::Config;
pub use error::{ConfigError, FeedError, ReportError, TelegramError};
pub use extrema::{find_extreme, Extreme, Extremum};
pub use feed::{parse_feed, query_parameters, EnergyZeroClient};
pub use format::{conjunction_list, format_currency, format_hour};
pub use locale::{Locale, UnsupportedLocale};
pub use model::{PriceSet, Reading};
pub use ranges::{collapse_and_format, format_ranges, group_into_ranges, HourRange};
pub use report::{generate_report, Report, TimeOfDay};
pub use telegram::{escape_markdown_v2, ChatId, Message, ParseMode, TelegramClient};
