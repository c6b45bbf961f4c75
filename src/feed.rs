use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use chrono_tz::Europe::Amsterdam;
use serde::Deserialize;
use tracing::{debug, info};

use crate::charges::add_charges;
use crate::error::FeedError;
use crate::model::{PriceSet, Reading};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnergyZeroPrice {
    price: f64,
    reading_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnergyZeroResponse {
    #[serde(rename = "Prices")]
    prices: Vec<EnergyZeroPrice>,
    average: f64,
    till_date: DateTime<Utc>,
}

impl TryFrom<EnergyZeroResponse> for PriceSet {
    type Error = FeedError;

    /// Validates the response and adds charges to every price and to the average.
    ///
    /// Hours are numbered by position after sorting on `readingDate`, so the
    /// first reading of the day is hour 0 regardless of the UTC offset.
    fn try_from(response: EnergyZeroResponse) -> Result<Self, Self::Error> {
        if response.prices.is_empty() {
            return Err(FeedError::NoPrices);
        }

        if let Some((index, item)) = response
            .prices
            .iter()
            .enumerate()
            .find(|(_, item)| !item.price.is_finite())
        {
            return Err(FeedError::InvalidPrice {
                index,
                price: item.price,
            });
        }

        if !response.average.is_finite() {
            return Err(FeedError::InvalidAverage(response.average));
        }

        let mut items = response.prices;
        items.sort_by_key(|item| item.reading_date);

        let readings = items
            .iter()
            .zip(0..)
            .map(|(item, hour)| Reading {
                hour,
                price: add_charges(item.price),
            })
            .collect();

        Ok(PriceSet::new(
            readings,
            add_charges(response.average),
            response.till_date.with_timezone(&Amsterdam).date_naive(),
        ))
    }
}

/// Decodes an EnergyZero response body into a charge-inclusive [`PriceSet`].
pub fn parse_feed(body: &str) -> Result<PriceSet, FeedError> {
    let response: EnergyZeroResponse = serde_json::from_str(body)?;

    PriceSet::try_from(response)
}

fn local_midnight(date: NaiveDate) -> Result<DateTime<Utc>, FeedError> {
    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| Amsterdam.from_local_datetime(&midnight).earliest())
        .map(|midnight| midnight.with_timezone(&Utc))
        .ok_or(FeedError::TimeZone(date))
}

/// Query parameters selecting all of tomorrow's hourly prices, VAT included.
///
/// "Tomorrow" is the calendar day after `now` in Amsterdam. The window runs
/// from local midnight to the last millisecond before the next local midnight,
/// which makes it 23 or 25 hours long when daylight saving time changes.
pub fn query_parameters(now: DateTime<Utc>) -> Result<Vec<(&'static str, String)>, FeedError> {
    let today = now.with_timezone(&Amsterdam).date_naive();
    let tomorrow = today.succ_opt().ok_or(FeedError::TimeZone(today))?;
    let day_after = tomorrow.succ_opt().ok_or(FeedError::TimeZone(tomorrow))?;

    let from = local_midnight(tomorrow)?;
    let till = local_midnight(day_after)? - Duration::milliseconds(1);

    Ok(vec![
        ("fromDate", from.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ("tillDate", till.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ("interval", "4".to_owned()),
        ("usageType", "1".to_owned()),
        ("inclBtw", "true".to_owned()),
    ])
}

/// Client for the EnergyZero day-ahead price API.
pub struct EnergyZeroClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl Default for EnergyZeroClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EnergyZeroClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.energyzero.nl/v1/energyprices";

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_owned())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetches the prices for the day after `now`.
    pub async fn fetch_prices(&self, now: DateTime<Utc>) -> Result<PriceSet, FeedError> {
        let query_params = query_parameters(now)?;
        debug!(?query_params, "querying energy prices");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&query_params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let prices = PriceSet::try_from(response.json::<EnergyZeroResponse>().await?)?;
        info!(
            date = %prices.date,
            readings = prices.readings.len(),
            "got energy prices"
        );

        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    fn amsterdam_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Amsterdam
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> &'a str {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
            .unwrap()
    }

    #[test]
    fn test_query_parameters_standard_day() {
        let params = query_parameters(amsterdam_noon(2025, 3, 28)).unwrap();

        assert_eq!(param(&params, "fromDate"), "2025-03-28T23:00:00.000Z");
        assert_eq!(param(&params, "tillDate"), "2025-03-29T22:59:59.999Z");
        assert_eq!(param(&params, "interval"), "4");
        assert_eq!(param(&params, "usageType"), "1");
        assert_eq!(param(&params, "inclBtw"), "true");
    }

    #[test]
    fn test_query_parameters_dst_start() {
        let params = query_parameters(amsterdam_noon(2025, 3, 29)).unwrap();

        assert_eq!(param(&params, "fromDate"), "2025-03-29T23:00:00.000Z");
        assert_eq!(param(&params, "tillDate"), "2025-03-30T21:59:59.999Z");
    }

    #[test]
    fn test_query_parameters_full_dst_day() {
        let params = query_parameters(amsterdam_noon(2025, 3, 30)).unwrap();

        assert_eq!(param(&params, "fromDate"), "2025-03-30T22:00:00.000Z");
        assert_eq!(param(&params, "tillDate"), "2025-03-31T21:59:59.999Z");
    }

    #[test]
    fn test_query_parameters_late_evening_utc() {
        // 23:30 UTC on the 28th is already the 29th in Amsterdam
        let now = Utc.with_ymd_and_hms(2025, 3, 28, 23, 30, 0).unwrap();

        let params = query_parameters(now).unwrap();

        assert_eq!(param(&params, "fromDate"), "2025-03-29T23:00:00.000Z");
    }

    #[test]
    fn test_parse_feed_sorts_and_adds_charges_once() {
        let body = json!({
            "Prices": [
                { "price": 0.2, "readingDate": "2025-03-18T00:00:00Z" },
                { "price": 0.1, "readingDate": "2025-03-17T23:00:00Z" },
                { "price": -0.05, "readingDate": "2025-03-18T01:00:00Z" }
            ],
            "intervalType": 4,
            "average": 0.0833,
            "fromDate": "2025-03-17T23:00:00Z",
            "tillDate": "2025-03-18T22:59:59.999Z"
        })
        .to_string();

        let prices = parse_feed(&body).unwrap();

        assert_eq!(prices.date, NaiveDate::from_ymd_opt(2025, 3, 18).unwrap());
        assert_eq!(
            prices.readings.iter().map(|r| r.hour).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_close(prices.readings[0].price, 0.2712);
        assert_close(prices.readings[1].price, 0.3712);
        assert_close(prices.readings[2].price, 0.1212);
        assert_close(prices.average, 0.2545);
    }

    #[test]
    fn test_parse_feed_empty() {
        let body = json!({
            "Prices": [],
            "average": 0,
            "tillDate": "2025-03-18T22:59:59.999Z"
        })
        .to_string();

        assert!(matches!(parse_feed(&body), Err(FeedError::NoPrices)));
    }

    #[test]
    fn test_parse_feed_missing_field() {
        let body = json!({
            "Prices": [{ "price": 0.1 }],
            "average": 0.1,
            "tillDate": "2025-03-18T22:59:59.999Z"
        })
        .to_string();

        assert!(matches!(parse_feed(&body), Err(FeedError::Json(_))));
    }

    #[test]
    fn test_parse_feed_wrong_type() {
        let body = json!({
            "Prices": [{ "price": "cheap", "readingDate": "2025-03-17T23:00:00Z" }],
            "average": 0.1,
            "tillDate": "2025-03-18T22:59:59.999Z"
        })
        .to_string();

        assert!(matches!(parse_feed(&body), Err(FeedError::Json(_))));
    }

    #[test]
    fn test_try_from_rejects_non_finite_price() {
        let response = EnergyZeroResponse {
            prices: vec![
                EnergyZeroPrice {
                    price: 0.1,
                    reading_date: Utc.with_ymd_and_hms(2025, 3, 17, 23, 0, 0).unwrap(),
                },
                EnergyZeroPrice {
                    price: f64::NAN,
                    reading_date: Utc.with_ymd_and_hms(2025, 3, 18, 0, 0, 0).unwrap(),
                },
            ],
            average: 0.1,
            till_date: Utc.with_ymd_and_hms(2025, 3, 18, 22, 59, 59).unwrap(),
        };

        assert!(matches!(
            PriceSet::try_from(response),
            Err(FeedError::InvalidPrice { index: 1, .. })
        ));
    }

    #[test]
    fn test_try_from_rejects_non_finite_average() {
        let response = EnergyZeroResponse {
            prices: vec![EnergyZeroPrice {
                price: 0.1,
                reading_date: Utc.with_ymd_and_hms(2025, 3, 17, 23, 0, 0).unwrap(),
            }],
            average: f64::INFINITY,
            till_date: Utc.with_ymd_and_hms(2025, 3, 18, 22, 59, 59).unwrap(),
        };

        assert!(matches!(
            PriceSet::try_from(response),
            Err(FeedError::InvalidAverage(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_prices() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/energyprices")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("fromDate".into(), "2025-03-28T23:00:00.000Z".into()),
                Matcher::UrlEncoded("tillDate".into(), "2025-03-29T22:59:59.999Z".into()),
                Matcher::UrlEncoded("inclBtw".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "Prices": [
                        { "price": 0.1, "readingDate": "2025-03-28T23:00:00Z" },
                        { "price": 0.2, "readingDate": "2025-03-29T00:00:00Z" }
                    ],
                    "intervalType": 4,
                    "average": 0.15,
                    "fromDate": "2025-03-28T23:00:00Z",
                    "tillDate": "2025-03-29T22:59:59.999Z"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = EnergyZeroClient::with_base_url(format!("{}/v1/energyprices", server.url()));
        let prices = client
            .fetch_prices(amsterdam_noon(2025, 3, 28))
            .await
            .unwrap();

        assert_eq!(prices.readings.len(), 2);
        assert_eq!(prices.date, NaiveDate::from_ymd_opt(2025, 3, 29).unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_prices_bad_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/energyprices")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = EnergyZeroClient::with_base_url(format!("{}/v1/energyprices", server.url()));
        let result = client.fetch_prices(amsterdam_noon(2025, 3, 28)).await;

        assert!(matches!(
            result,
            Err(FeedError::Status(status)) if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        ));
        mock.assert_async().await;
    }
}
