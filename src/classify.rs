/// How an hour's price compares to the rest of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceStatus {
    /// You get paid to use energy.
    Negative,
    Free,
    BelowAverage,
    AboveAverage,
}

impl PriceStatus {
    /// Negative beats zero, zero beats the comparison with `average`.
    /// A price equal to the average counts as above it.
    pub fn classify(price: f64, average: f64) -> Self {
        if price < 0.0 {
            PriceStatus::Negative
        } else if price == 0.0 {
            PriceStatus::Free
        } else if price < average {
            PriceStatus::BelowAverage
        } else {
            PriceStatus::AboveAverage
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            PriceStatus::Negative => "💶",
            PriceStatus::Free => "🆓",
            PriceStatus::BelowAverage => "✅",
            PriceStatus::AboveAverage => "❌",
        }
    }
}
