use serde_json::Value;
use std::str::FromStr;

use super::entities::{Candle, IndicatorPoint, Ohlc, SignalEvent};
use super::normalizer::normalize_timestamp;
use super::value_objects::{Price, SignalDirection, Timestamp};
use crate::domain::errors::{ChartError, ChartResult};
use crate::domain::logging::{LogComponent, get_logger};

/// Loosely-typed candle record as it crosses the payload boundary.
/// Price fields arrive as textual numbers in the kline arrays.
#[derive(Debug, Clone)]
pub struct RawCandleRecord {
    pub time: Value,
    pub open: Value,
    pub high: Value,
    pub low: Value,
    pub close: Value,
}

/// Loosely-typed indicator record
#[derive(Debug, Clone)]
pub struct RawIndicatorRecord {
    pub time: Value,
    pub value: Value,
}

/// Loosely-typed signal record (`kind` carries the endpoint's "buy"/"sell")
#[derive(Debug, Clone)]
pub struct RawSignalRecord {
    pub time: Value,
    pub kind: Value,
    pub price: Value,
}

/// The three canonical series after reconciliation. Candles and indicator
/// points are strictly increasing by timestamp; signals are non-decreasing,
/// since distinct signals may legitimately share a bar.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSeries {
    pub candles: Vec<Candle>,
    pub indicator: Vec<IndicatorPoint>,
    pub signals: Vec<SignalEvent>,
}

/// Domain service aligning the three raw series onto the canonical time base.
///
/// Malformed records are dropped with a warning so partial data still
/// renders; only an empty candle series after filtering is a hard stop.
pub struct SeriesReconciler;

impl SeriesReconciler {
    pub fn new() -> Self {
        Self
    }

    pub fn reconcile(
        &self,
        candles: Vec<RawCandleRecord>,
        indicator: Vec<RawIndicatorRecord>,
        signals: Vec<RawSignalRecord>,
    ) -> ChartResult<CanonicalSeries> {
        let candles = self.collect_series(candles, "candle", Self::parse_candle);
        if candles.is_empty() {
            return Err(ChartError::NoRenderableData);
        }
        let indicator = self.collect_series(indicator, "indicator", Self::parse_indicator_point);
        let signals = self.collect_series(signals, "signal", Self::parse_signal);

        Ok(CanonicalSeries {
            candles: sort_last_write_wins(candles, |c: &Candle| c.timestamp),
            indicator: sort_last_write_wins(indicator, |p: &IndicatorPoint| p.timestamp),
            signals: sort_by_timestamp(signals),
        })
    }

    fn collect_series<R, T>(
        &self,
        records: Vec<R>,
        series_name: &'static str,
        parse: impl Fn(&R) -> ChartResult<T>,
    ) -> Vec<T> {
        let total = records.len();
        let parsed: Vec<T> = records
            .iter()
            .filter_map(|record| match parse(record) {
                Ok(value) => Some(value),
                Err(err) => {
                    get_logger().warn(
                        LogComponent::Domain("Reconciler"),
                        &format!("⚠️ Dropping {} record: {}", series_name, err),
                    );
                    None
                }
            })
            .collect();
        if parsed.len() < total {
            get_logger().warn(
                LogComponent::Domain("Reconciler"),
                &format!(
                    "⚠️ {} series: kept {} of {} records",
                    series_name,
                    parsed.len(),
                    total
                ),
            );
        }
        parsed
    }

    fn parse_candle(record: &RawCandleRecord) -> ChartResult<Candle> {
        let timestamp = normalize_timestamp(&record.time)?;
        let open = numeric_field(&record.open, "open")?;
        let high = numeric_field(&record.high, "high")?;
        let low = numeric_field(&record.low, "low")?;
        let close = numeric_field(&record.close, "close")?;

        let ohlc = Ohlc::new(
            Price::from(open),
            Price::from(high),
            Price::from(low),
            Price::from(close),
        );
        // Blame the bound that breaks: high must cap the bucket, low must floor it.
        if high < open.max(close).max(low) {
            return Err(ChartError::MalformedRecord("high"));
        }
        if low > open.min(close).min(high) {
            return Err(ChartError::MalformedRecord("low"));
        }
        debug_assert!(ohlc.is_valid());

        Ok(Candle::new(timestamp, ohlc))
    }

    fn parse_indicator_point(record: &RawIndicatorRecord) -> ChartResult<IndicatorPoint> {
        let timestamp = normalize_timestamp(&record.time)?;
        let value = numeric_field(&record.value, "value")?;
        if value < 0.0 {
            return Err(ChartError::MalformedRecord("value"));
        }
        Ok(IndicatorPoint::new(timestamp, Price::from(value)))
    }

    fn parse_signal(record: &RawSignalRecord) -> ChartResult<SignalEvent> {
        let timestamp = normalize_timestamp(&record.time)?;
        let direction = record
            .kind
            .as_str()
            .and_then(|kind| SignalDirection::from_str(kind).ok())
            .ok_or(ChartError::MalformedRecord("type"))?;
        let price = numeric_field(&record.price, "price")?;
        Ok(SignalEvent::new(timestamp, direction, Price::from(price)))
    }
}

impl Default for SeriesReconciler {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a numeric field that may arrive as a JSON number or a textual
/// number (klines carry prices as strings). Must be finite.
fn numeric_field(value: &Value, field: &'static str) -> ChartResult<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(ChartError::MalformedRecord(field)),
    }
}

/// Stable-sort ascending by timestamp without collapsing collisions.
/// Same-timestamp signals are distinct events and every one of them gets
/// a marker.
fn sort_by_timestamp(mut signals: Vec<SignalEvent>) -> Vec<SignalEvent> {
    signals.sort_by_key(|signal| signal.timestamp);
    signals
}

/// Stable-sort ascending by timestamp, then collapse exact collisions so
/// the later record in original input order wins.
fn sort_last_write_wins<T>(mut items: Vec<T>, key: impl Fn(&T) -> Timestamp) -> Vec<T> {
    items.sort_by_key(|item| key(item));
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        match out.last_mut() {
            Some(last) if key(last) == key(&item) => *last = item,
            _ => out.push(item),
        }
    }
    out
}
