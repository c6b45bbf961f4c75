use chrono::NaiveDate;

/// Price for a single hour of the priced day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Hour of the day, counted from local midnight.
    pub hour: i32,
    /// Price in Euros per kWh.
    pub price: f64,
}

/// All readings for one day.
///
/// There are usually 24 readings, but days on which daylight saving time
/// starts or ends have 23 or 25. `PriceSet` doesn't enforce a count.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSet {
    pub readings: Vec<Reading>,
    /// Average as supplied by the price feed. It is not recomputed from `readings`.
    pub average: f64,
    /// The day these prices apply to.
    pub date: NaiveDate,
}

impl PriceSet {
    pub fn new(readings: Vec<Reading>, average: f64, date: NaiveDate) -> Self {
        Self {
            readings,
            average,
            date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
