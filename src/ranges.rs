use crate::format::{conjunction_list, format_hour};
use crate::locale::Locale;

/// A maximal run of consecutive hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourRange {
    Single(i32),
    /// Closed interval, `start < end`.
    Span(i32, i32),
}

impl HourRange {
    fn from_run(start: i32, end: i32) -> Self {
        if start == end {
            HourRange::Single(start)
        } else {
            HourRange::Span(start, end)
        }
    }

    pub const fn start(&self) -> i32 {
        match *self {
            HourRange::Single(hour) | HourRange::Span(hour, _) => hour,
        }
    }

    pub const fn end(&self) -> i32 {
        match *self {
            HourRange::Single(hour) | HourRange::Span(_, hour) => hour,
        }
    }

    /// From the top of the first hour up to the last minute of the final hour.
    pub fn phrase(&self, locale: Locale) -> String {
        let start = format!("{}:00", format_hour(self.start()));
        let end = format!("{}:59", format_hour(self.end()));

        locale.time_span(&start, &end)
    }
}

/// Sorts `hours` and collapses consecutive values into ranges.
///
/// Duplicates are ignored, so `[1, 2, 2, 3]` becomes a single `1..=3` span.
pub fn group_into_ranges(hours: &[i32]) -> Vec<HourRange> {
    let mut sorted = hours.to_vec();
    sorted.sort_unstable();

    let mut values = sorted.into_iter();
    let Some(first) = values.next() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let (mut start, mut end) = (first, first);

    for value in values {
        if value == end {
            continue;
        }

        if value == end + 1 {
            end = value;
        } else {
            ranges.push(HourRange::from_run(start, end));
            start = value;
            end = value;
        }
    }

    ranges.push(HourRange::from_run(start, end));
    ranges
}

/// Renders ranges as a sentence fragment, e.g. "van 01:00 tot 03:59 en van 05:00 tot 05:59".
pub fn format_ranges(ranges: &[HourRange], locale: Locale) -> String {
    let phrases = ranges
        .iter()
        .map(|range| range.phrase(locale))
        .collect::<Vec<_>>();

    conjunction_list(&phrases, locale)
}

pub fn collapse_and_format(hours: &[i32], locale: Locale) -> String {
    format_ranges(&group_into_ranges(hours), locale)
}
