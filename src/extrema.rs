use crate::error::ReportError;
use crate::model::Reading;

/// Which end of the price scale to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Lowest,
    Highest,
}

impl Extreme {
    fn pick(self, a: f64, b: f64) -> f64 {
        match self {
            Extreme::Lowest => a.min(b),
            Extreme::Highest => a.max(b),
        }
    }
}

/// Returns every reading at the extreme price, in input order.
///
/// The extreme value is determined first and then all readings sharing it are
/// kept, so hours that tie for the lowest or highest price are all reported.
pub fn find_extreme(readings: &[Reading], extreme: Extreme) -> Result<Vec<&Reading>, ReportError> {
    let target = readings
        .iter()
        .map(|reading| reading.price)
        .reduce(|a, b| extreme.pick(a, b))
        .ok_or(ReportError::NoReadings)?;

    Ok(readings
        .iter()
        .filter(|reading| reading.price == target)
        .collect())
}

/// The extreme price of a day together with the hours it occurs in.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum {
    pub price: f64,
    pub hours: Vec<i32>,
}

impl Extremum {
    pub fn of(readings: &[Reading], extreme: Extreme) -> Result<Self, ReportError> {
        let matches = find_extreme(readings, extreme)?;
        let price = matches
            .first()
            .map(|reading| reading.price)
            .ok_or(ReportError::NoReadings)?;

        Ok(Self {
            price,
            hours: matches.iter().map(|reading| reading.hour).collect(),
        })
    }
}
