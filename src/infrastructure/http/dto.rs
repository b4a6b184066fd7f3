use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::errors::{ChartError, ChartResult};
use crate::domain::market_data::{RawCandleRecord, RawIndicatorRecord, RawSignalRecord};

/// Top-level ATR analysis payload.
///
/// `klines` entries are positional arrays whose numeric fields are textual;
/// `atr` is a single scalar for the whole fetched window (an upstream
/// simplification the core reproduces faithfully, see [`Self::into_raw_series`]).
#[derive(Debug, Deserialize)]
pub struct AtrAnalysisResponse {
    pub klines: Vec<Value>,
    pub atr: f64,
    #[serde(default)]
    pub signals: Vec<SignalDto>,
}

/// Signal entry as emitted by the analytics endpoint
#[derive(Debug, Deserialize)]
pub struct SignalDto {
    pub time: Value,
    #[serde(rename = "type")]
    pub kind: Value,
    pub price: Value,
}

impl AtrAnalysisResponse {
    /// Parse the response body. A missing or non-sequence `klines` (or any
    /// other top-level shape violation) fails the whole cycle with
    /// [`ChartError::InvalidPayload`].
    pub fn from_json(body: &str) -> ChartResult<Self> {
        serde_json::from_str(body).map_err(|err| ChartError::InvalidPayload(err.to_string()))
    }

    /// Split the payload into the three loosely-typed series the
    /// reconciler consumes.
    ///
    /// The single `atr` scalar fans out to one indicator record per kline
    /// timestamp. Individual kline entries that are not arrays, or are too
    /// short, come through with null fields and get dropped record-by-record
    /// downstream; only the top-level shape is judged here.
    pub fn into_raw_series(
        self,
    ) -> (
        Vec<RawCandleRecord>,
        Vec<RawIndicatorRecord>,
        Vec<RawSignalRecord>,
    ) {
        let atr = json!(self.atr);

        let mut candles = Vec::with_capacity(self.klines.len());
        let mut indicator = Vec::with_capacity(self.klines.len());
        for kline in &self.klines {
            let field = |index: usize| -> Value {
                kline
                    .as_array()
                    .and_then(|entry| entry.get(index))
                    .cloned()
                    .unwrap_or(Value::Null)
            };
            candles.push(RawCandleRecord {
                time: field(0),
                open: field(1),
                high: field(2),
                low: field(3),
                close: field(4),
            });
            indicator.push(RawIndicatorRecord {
                time: field(0),
                value: atr.clone(),
            });
        }

        let signals = self
            .signals
            .into_iter()
            .map(|signal| RawSignalRecord {
                time: signal.time,
                kind: signal.kind,
                price: signal.price,
            })
            .collect();

        (candles, indicator, signals)
    }
}
