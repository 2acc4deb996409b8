use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// One OHLC sample of the candlestick series.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Candle {
    pub dated: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// Flatten a chart response into candle cells, skipping incomplete rows.
///
/// Yahoo emits `null` samples for halted or not-yet-traded intervals; a row
/// missing any OHLC field is dropped rather than zero-filled.
pub fn candles(response: &PriceHistory, ticker: &str) -> Vec<Candle> {
    match response.chart.result.as_deref().and_then(|r| r.first()) {
        Some(base) => {
            let price = &base.indicators.quote[0];
            price
                .open
                .iter()
                .zip(price.high.iter())
                .zip(price.low.iter())
                .zip(price.close.iter())
                .zip(price.volume.iter())
                .zip(base.dates.iter())
                .filter_map(|(((((open, high), low), close), volume), date)| {
                    Some(Candle {
                        dated: date.clone(),
                        open: (*open)?,
                        high: (*high)?,
                        low: (*low)?,
                        close: (*close)?,
                        volume: volume.unwrap_or(0),
                    })
                })
                .collect::<Vec<_>>()
        }

        None => {
            log::warn!("[{ticker}] failed to extract candle data; filling with an empty array instead");
            vec![] // return an empty vec in the absence of an actual dataset
        }
    }
}

// `chart` schema
#[derive(Deserialize, Debug)]
pub struct PriceHistory {
    pub chart: PriceResponse,
}

#[derive(Deserialize, Debug)]
pub struct PriceResponse {
    pub result: Option<Vec<PriceCategories>>,
    pub error: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct PriceCategories {
    pub meta: ChartMeta,
    #[serde(rename = "timestamp", deserialize_with = "de_timestamps", default)]
    pub dates: Vec<String>,
    pub indicators: Indicators,
}

/// Summary fields Yahoo attaches to every chart window; the quote path reads
/// the live price and the previous session close from here regardless of the
/// requested range.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    pub regular_market_price: Option<f64>,
    pub chart_previous_close: Option<f64>,
}

pub fn de_timestamps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let timestamps: Vec<i64> = Deserialize::deserialize(deserializer)?;
    let dates = timestamps
        .into_iter()
        .map(|timestamp| {
            DateTime::from_timestamp(timestamp, 0)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default()
        })
        .collect();
    Ok(dates)
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    pub quote: Vec<QuoteBlock>,
}

#[derive(Deserialize, Debug)]
pub struct QuoteBlock {
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART_FIXTURE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {
                    "currency": "USD",
                    "symbol": "AAPL",
                    "regularMarketPrice": 150.1234,
                    "chartPreviousClose": 148.0
                },
                "timestamp": [1700000000, 1700000060, 1700000120],
                "indicators": {
                    "quote": [{
                        "open":   [150.0, null, 150.2],
                        "high":   [150.5, null, 150.6],
                        "low":    [149.9, null, 150.0],
                        "close":  [150.1, null, 150.4],
                        "volume": [1000, null, 1200]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn deserializes_meta() {
        let response: PriceHistory = serde_json::from_str(CHART_FIXTURE).unwrap();
        let result = response.chart.result.unwrap();
        let base = &result[0];
        assert_eq!(base.meta.symbol, "AAPL");
        assert_eq!(base.meta.regular_market_price, Some(150.1234));
        assert_eq!(base.meta.chart_previous_close, Some(148.0));
    }

    #[test]
    fn timestamps_become_dates() {
        let response: PriceHistory = serde_json::from_str(CHART_FIXTURE).unwrap();
        let result = response.chart.result.unwrap();
        let base = &result[0];
        assert_eq!(base.dates[0], "2023-11-14 22:13:20");
    }

    #[test]
    fn null_rows_are_skipped() {
        let response: PriceHistory = serde_json::from_str(CHART_FIXTURE).unwrap();
        let cells = candles(&response, "AAPL");
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].close, 150.1);
        assert_eq!(cells[1].close, 150.4);
        assert_eq!(cells[1].volume, 1200);
    }

    #[test]
    fn missing_result_yields_empty() {
        let response: PriceHistory =
            serde_json::from_str(r#"{"chart":{"result":null,"error":{"code":"Not Found"}}}"#)
                .unwrap();
        assert!(candles(&response, "NOPE").is_empty());
    }
}
