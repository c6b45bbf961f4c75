use chrono::{Timelike, Utc};
use chrono_tz::Europe::Amsterdam;

use crate::classify::PriceStatus;
use crate::error::ReportError;
use crate::extrema::{Extreme, Extremum};
use crate::format::{format_currency, format_hour, round_cents};
use crate::locale::Locale;
use crate::model::{PriceSet, Reading};
use crate::ranges::collapse_and_format;
use crate::telegram::{escape_html, escape_markdown_v2, escape_markdown_v2_code, ParseMode};

/// Picks the greeting and the closing remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 18 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }

    /// Based on the current time in Amsterdam.
    pub fn now() -> Self {
        Self::from_hour(Utc::now().with_timezone(&Amsterdam).hour())
    }

    fn greeting(self, locale: Locale) -> (&'static str, &'static str) {
        match self {
            TimeOfDay::Afternoon => locale.afternoon_greeting(),
            TimeOfDay::Evening => locale.evening_greeting(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct HourlyLine {
    status: PriceStatus,
    hour: i32,
    price: String,
}

/// Everything that goes into the daily message, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    locale: Locale,
    hello: &'static str,
    goodbye: &'static str,
    date: String,
    average: String,
    high: String,
    high_hours: String,
    low: String,
    low_hours: String,
    hourly: Vec<HourlyLine>,
}

impl Report {
    pub fn new(
        prices: &PriceSet,
        time_of_day: TimeOfDay,
        locale: Locale,
    ) -> Result<Self, ReportError> {
        if prices.is_empty() {
            return Err(ReportError::NoReadings);
        }

        // compare what is shown: two prices that print the same are the same
        let readings = prices
            .readings
            .iter()
            .map(|reading| Reading {
                price: round_cents(reading.price),
                ..*reading
            })
            .collect::<Vec<_>>();
        let average = round_cents(prices.average);

        let highest = Extremum::of(&readings, Extreme::Highest)?;
        let lowest = Extremum::of(&readings, Extreme::Lowest)?;
        let (hello, goodbye) = time_of_day.greeting(locale);

        let hourly = readings
            .iter()
            .map(|reading| HourlyLine {
                status: PriceStatus::classify(reading.price, average),
                hour: reading.hour,
                price: format_currency(reading.price, locale),
            })
            .collect();

        Ok(Self {
            locale,
            hello,
            goodbye,
            date: locale.format_date(prices.date),
            average: format_currency(average, locale),
            high: format_currency(highest.price, locale),
            high_hours: collapse_and_format(&highest.hours, locale),
            low: format_currency(lowest.price, locale),
            low_hours: collapse_and_format(&lowest.hours, locale),
            hourly,
        })
    }

    /// Renders the message for the given Telegram parse mode.
    pub fn render(&self, parse_mode: ParseMode) -> String {
        let text = |s: &str| match parse_mode {
            ParseMode::Markdown => s.to_owned(),
            ParseMode::MarkdownV2 => escape_markdown_v2(s),
            ParseMode::Html => escape_html(s),
        };
        let code = |s: &str| match parse_mode {
            ParseMode::Markdown => s.to_owned(),
            ParseMode::MarkdownV2 => escape_markdown_v2_code(s),
            ParseMode::Html => escape_html(s),
        };
        let (open, close) = match parse_mode {
            ParseMode::Markdown | ParseMode::MarkdownV2 => ("```", "```"),
            ParseMode::Html => ("<pre>", "</pre>"),
        };

        let locale = self.locale;
        let mut lines = vec![
            text(&format!("{} {}", self.hello, locale.announcement(&self.date))),
            String::new(),
            text(&format!("{}: {} per kWh", locale.average_label(), self.average)),
            text(&format!(
                "{}: {} per kWh {}.",
                locale.high_label(),
                self.high,
                self.high_hours
            )),
            text(&format!(
                "{}: {} per kWh {}.",
                locale.low_label(),
                self.low,
                self.low_hours
            )),
            String::new(),
            text(locale.hourly_heading()),
            String::new(),
            open.to_owned(),
        ];

        lines.extend(self.hourly.iter().map(|line| {
            let hour = format_hour(line.hour);
            code(&format!(
                "{} {hour}:00 – {hour}:59: {} per kWh",
                line.status.emoji(),
                line.price
            ))
        }));

        lines.extend([
            close.to_owned(),
            String::new(),
            text(self.goodbye),
        ]);

        lines.join("\n")
    }
}

/// Builds and renders the report in one go.
pub fn generate_report(
    prices: &PriceSet,
    time_of_day: TimeOfDay,
    locale: Locale,
    parse_mode: ParseMode,
) -> Result<String, ReportError> {
    Ok(Report::new(prices, time_of_day, locale)?.render(parse_mode))
}
