use atr_chart_wasm::domain::market_data::{
    RawCandleRecord, RawIndicatorRecord, RawSignalRecord, SeriesReconciler,
};
use quickcheck_macros::quickcheck;
use serde_json::json;

fn candle_record(time: u64, close: f64) -> RawCandleRecord {
    RawCandleRecord {
        time: json!(time),
        open: json!("100.0"),
        high: json!("110.0"),
        low: json!("90.0"),
        close: json!(close.to_string()),
    }
}

#[test]
fn sorts_out_of_order_input_strictly_ascending() {
    let candles = vec![
        candle_record(3000, 103.0),
        candle_record(1000, 101.0),
        candle_record(2000, 102.0),
    ];

    let series = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap();

    let times: Vec<u64> = series.candles.iter().map(|c| c.timestamp.value()).collect();
    assert_eq!(times, vec![1000, 2000, 3000]);
}

#[test]
fn duplicate_timestamp_last_write_wins() {
    let candles = vec![
        candle_record(1000, 101.0),
        candle_record(2000, 102.0),
        candle_record(2000, 105.0),
    ];

    let series = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap();

    assert_eq!(series.candles.len(), 2);
    assert_eq!(series.candles[1].timestamp.value(), 2000);
    assert_eq!(series.candles[1].ohlc.close.value(), 105.0);
}

#[test]
fn duplicate_survives_even_when_earlier_in_input_order() {
    // The later record in input order wins regardless of where sorting
    // places its neighbors.
    let candles = vec![
        candle_record(2000, 102.0),
        candle_record(1000, 101.0),
        candle_record(2000, 107.0),
    ];

    let series = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap();

    assert_eq!(series.candles.len(), 2);
    assert_eq!(series.candles[1].ohlc.close.value(), 107.0);
}

#[test]
fn same_timestamp_signals_are_not_collapsed() {
    // Dedup is for candles and indicator points only; two signals on the
    // same bar are distinct events and both must come through.
    let signals = vec![
        RawSignalRecord {
            time: json!(2000),
            kind: json!("buy"),
            price: json!(101.0),
        },
        RawSignalRecord {
            time: json!(2000),
            kind: json!("sell"),
            price: json!(103.0),
        },
        RawSignalRecord {
            time: json!(1000),
            kind: json!("buy"),
            price: json!(99.0),
        },
    ];

    let series = SeriesReconciler::new()
        .reconcile(vec![candle_record(1000, 101.0)], vec![], signals)
        .unwrap();

    let times: Vec<u64> = series.signals.iter().map(|s| s.timestamp.value()).collect();
    assert_eq!(times, vec![1000, 2000, 2000]);
    // Input order preserved within the shared timestamp
    assert_eq!(series.signals[1].price.value(), 101.0);
    assert_eq!(series.signals[2].price.value(), 103.0);
}

#[test]
fn reconcile_is_idempotent_on_canonical_input() {
    let candles = vec![
        candle_record(1000, 101.0),
        candle_record(2000, 102.0),
        candle_record(3000, 103.0),
    ];
    let indicator = vec![
        RawIndicatorRecord {
            time: json!(1000),
            value: json!(2.5),
        },
        RawIndicatorRecord {
            time: json!(2000),
            value: json!(2.5),
        },
    ];
    let signals = vec![RawSignalRecord {
        time: json!(2000),
        kind: json!("buy"),
        price: json!(102.0),
    }];

    let first = SeriesReconciler::new()
        .reconcile(candles.clone(), indicator.clone(), signals.clone())
        .unwrap();
    let second = SeriesReconciler::new()
        .reconcile(candles, indicator, signals)
        .unwrap();

    assert_eq!(first, second);
}

#[quickcheck]
fn output_is_always_strictly_ascending(raw_times: Vec<u32>) -> bool {
    let candles: Vec<RawCandleRecord> = raw_times
        .iter()
        .map(|&t| candle_record(u64::from(t), 100.0))
        .collect();

    match SeriesReconciler::new().reconcile(candles, vec![], vec![]) {
        Ok(series) => series
            .candles
            .windows(2)
            .all(|pair| pair[0].timestamp < pair[1].timestamp),
        // Only an empty input may fail, and then only with no candles
        Err(_) => raw_times.is_empty(),
    }
}
