use crate::locale::Locale;

/// Joins items the way a sentence would: "a", "a en b", "a, b en c".
///
/// There is never a comma in front of the conjunction.
pub fn conjunction_list<S: AsRef<str>>(items: &[S], locale: Locale) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [init @ .., last] => {
            let init = init
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");

            format!("{init} {} {}", locale.conjunction(), last.as_ref())
        }
    }
}

/// Zero-padded two-digit hour. A negative hour keeps its sign in front of the digits.
pub fn format_hour(hour: i32) -> String {
    if hour < 0 {
        format!("-{:02}", hour.unsigned_abs())
    } else {
        format!("{hour:02}")
    }
}

/// Rounds to whole cents. Negative zero comes out as zero.
pub fn round_cents(value: f64) -> f64 {
    let cents = (value * 100.0).round() / 100.0;
    if cents == 0.0 {
        // drops the sign of negative zero
        0.0
    } else {
        cents
    }
}

/// Formats a price in Euros with cent precision.
///
/// Dutch: `€ 0,25` and `€ -0,25`, with a non-breaking space after the sign.
/// English: `€0.25` and `-€0.25`.
pub fn format_currency(value: f64, locale: Locale) -> String {
    let cents = round_cents(value);

    match locale {
        Locale::Dutch => format!("€\u{a0}{cents:.2}").replacen('.', ",", 1),
        Locale::English if cents < 0.0 => format!("-€{:.2}", -cents),
        Locale::English => format!("€{cents:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conjunction_list_empty() {
        let items: [&str; 0] = [];

        assert_eq!(conjunction_list(&items, Locale::Dutch), "");
    }

    #[test]
    fn test_conjunction_list_single() {
        assert_eq!(conjunction_list(&["a"], Locale::Dutch), "a");
    }

    #[test]
    fn test_conjunction_list_two() {
        assert_eq!(conjunction_list(&["a", "b"], Locale::Dutch), "a en b");
        assert_eq!(conjunction_list(&["a", "b"], Locale::English), "a and b");
    }

    #[test]
    fn test_conjunction_list_many() {
        assert_eq!(
            conjunction_list(&["a", "b", "c", "d"], Locale::Dutch),
            "a, b, c en d"
        );
        assert_eq!(
            conjunction_list(&["a", "b", "c"], Locale::English),
            "a, b and c"
        );
    }

    #[test]
    fn test_conjunction_list_items_with_commas() {
        assert_eq!(
            conjunction_list(&["x, y", "z"], Locale::Dutch),
            "x, y en z"
        );
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(0.4712), 0.47);
        assert_eq!(round_cents(0.4709), 0.47);
        assert_eq!(round_cents(0.125), 0.13);
        assert!(round_cents(-0.002).is_sign_positive());
        assert_eq!(round_cents(-0.006), -0.01);
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(0), "00");
        assert_eq!(format_hour(7), "07");
        assert_eq!(format_hour(23), "23");
        assert_eq!(format_hour(-3), "-03");
    }

    #[test]
    fn test_format_currency_dutch() {
        assert_eq!(format_currency(0.0, Locale::Dutch), "€\u{a0}0,00");
        assert_eq!(format_currency(-0.0, Locale::Dutch), "€\u{a0}0,00");
        assert_eq!(format_currency(1.0, Locale::Dutch), "€\u{a0}1,00");
        assert_eq!(format_currency(-1.0, Locale::Dutch), "€\u{a0}-1,00");
        assert_eq!(format_currency(0.2712, Locale::Dutch), "€\u{a0}0,27");
    }

    #[test]
    fn test_format_currency_rounds_tiny_negatives_to_zero() {
        assert_eq!(format_currency(-0.001, Locale::Dutch), "€\u{a0}0,00");
        assert_eq!(format_currency(-0.001, Locale::English), "€0.00");
    }

    #[test]
    fn test_format_currency_english() {
        assert_eq!(format_currency(0.0, Locale::English), "€0.00");
        assert_eq!(format_currency(1.0, Locale::English), "€1.00");
        assert_eq!(format_currency(-1.0, Locale::English), "-€1.00");
        assert_eq!(format_currency(0.4712, Locale::English), "€0.47");
    }
}
