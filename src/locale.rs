use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

/// Language the report is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Dutch,
    English,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported locale {0:?}, expected \"nl\" or \"en\"")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nl" | "nl-nl" | "nl_nl" | "dutch" => Ok(Locale::Dutch),
            "en" | "en-gb" | "en_gb" | "en-us" | "en_us" | "english" => Ok(Locale::English),
            _ => Err(UnsupportedLocale(s.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::Dutch => "nl",
            Locale::English => "en",
        })
    }
}

impl Locale {
    /// Word placed between the last two items of a list.
    pub const fn conjunction(self) -> &'static str {
        match self {
            Locale::Dutch => "en",
            Locale::English => "and",
        }
    }

    /// Phrase for a stretch of time, e.g. "van 01:00 tot 03:59".
    pub fn time_span(self, start: &str, end: &str) -> String {
        match self {
            Locale::Dutch => format!("van {start} tot {end}"),
            Locale::English => format!("from {start} to {end}"),
        }
    }

    pub const fn afternoon_greeting(self) -> (&'static str, &'static str) {
        match self {
            Locale::Dutch => ("Goedemiddag! ☀️", "Fijne dag verder!"),
            Locale::English => ("Good afternoon! ☀️", "Have a nice day!"),
        }
    }

    pub const fn evening_greeting(self) -> (&'static str, &'static str) {
        match self {
            Locale::Dutch => ("Goedenavond! 🌙", "Geniet van je avond!"),
            Locale::English => ("Good evening! 🌙", "Enjoy your evening!"),
        }
    }

    pub fn announcement(self, date: &str) -> String {
        match self {
            Locale::Dutch => format!("De energieprijzen van morgen {date} zijn bekend."),
            Locale::English => format!("The energy prices for tomorrow, {date}, are in."),
        }
    }

    pub const fn average_label(self) -> &'static str {
        match self {
            Locale::Dutch => "Gemiddeld",
            Locale::English => "Average",
        }
    }

    pub const fn high_label(self) -> &'static str {
        match self {
            Locale::Dutch => "Hoog",
            Locale::English => "High",
        }
    }

    pub const fn low_label(self) -> &'static str {
        match self {
            Locale::Dutch => "Laag",
            Locale::English => "Low",
        }
    }

    pub const fn hourly_heading(self) -> &'static str {
        match self {
            Locale::Dutch => "Alle prijzen van morgen per uur:",
            Locale::English => "All of tomorrow's prices per hour:",
        }
    }

    /// Long date, e.g. "dinsdag 18 maart 2025".
    pub fn format_date(self, date: NaiveDate) -> String {
        format!(
            "{} {} {} {}",
            self.weekday_name(date.weekday()),
            date.day(),
            self.month_name(date.month()),
            date.year()
        )
    }

    fn weekday_name(self, weekday: Weekday) -> &'static str {
        const DUTCH: [&str; 7] = [
            "maandag",
            "dinsdag",
            "woensdag",
            "donderdag",
            "vrijdag",
            "zaterdag",
            "zondag",
        ];
        const ENGLISH: [&str; 7] = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];

        let index = weekday.num_days_from_monday() as usize;
        match self {
            Locale::Dutch => DUTCH[index],
            Locale::English => ENGLISH[index],
        }
    }

    fn month_name(self, month: u32) -> &'static str {
        const DUTCH: [&str; 12] = [
            "januari",
            "februari",
            "maart",
            "april",
            "mei",
            "juni",
            "juli",
            "augustus",
            "september",
            "oktober",
            "november",
            "december",
        ];
        const ENGLISH: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];

        // chrono months are 1-based and always within 1..=12
        let index = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::Dutch => DUTCH[index],
            Locale::English => ENGLISH[index],
        }
    }
}
