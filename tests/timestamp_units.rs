use atr_chart_wasm::domain::market_data::{RawCandleRecord, SeriesReconciler};
use serde_json::json;

fn candle_with_time(time: serde_json::Value) -> RawCandleRecord {
    RawCandleRecord {
        time,
        open: json!("100.0"),
        high: json!("110.0"),
        low: json!("90.0"),
        close: json!("105.0"),
    }
}

#[test]
fn mixed_time_units_land_on_one_canonical_axis() {
    // The same instant expressed as epoch seconds, epoch millis, and ISO-8601
    let candles = vec![
        candle_with_time(json!(1_700_000_000u64)),
        candle_with_time(json!(1_700_000_000_000u64)),
        candle_with_time(json!("2023-11-14T22:13:20Z")),
    ];

    let series = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap();

    // All three collapse onto one canonical timestamp
    assert_eq!(series.candles.len(), 1);
    assert_eq!(series.candles[0].timestamp.value(), 1_700_000_000);
}

#[test]
fn naive_datetime_strings_are_read_as_utc() {
    let candles = vec![
        candle_with_time(json!("2023-11-14 22:13:20")),
        candle_with_time(json!(1_700_003_600u64)),
    ];

    let series = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap();

    assert_eq!(series.candles[0].timestamp.value(), 1_700_000_000);
    assert_eq!(series.candles[1].timestamp.value(), 1_700_003_600);
}
