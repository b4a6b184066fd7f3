use atr_chart_wasm::domain::errors::ChartError;
use atr_chart_wasm::domain::market_data::{
    RawCandleRecord, RawIndicatorRecord, RawSignalRecord, SeriesReconciler,
};
use serde_json::json;

fn candle_record(time: u64) -> RawCandleRecord {
    RawCandleRecord {
        time: json!(time),
        open: json!("100.0"),
        high: json!("110.0"),
        low: json!("90.0"),
        close: json!("105.0"),
    }
}

#[test]
fn one_malformed_record_drops_only_itself() {
    let mut candles = vec![candle_record(1000), candle_record(2000), candle_record(3000)];
    candles[1].close = json!("not-a-number");

    let series = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap();

    let times: Vec<u64> = series.candles.iter().map(|c| c.timestamp.value()).collect();
    assert_eq!(times, vec![1000, 3000]);
}

#[test]
fn high_below_close_is_malformed() {
    let mut candles = vec![candle_record(1000), candle_record(2000)];
    candles[0].high = json!("101.0");

    let series = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap();

    assert_eq!(series.candles.len(), 1);
    assert_eq!(series.candles[0].timestamp.value(), 2000);
}

#[test]
fn low_above_open_is_malformed() {
    let mut candles = vec![candle_record(1000), candle_record(2000)];
    candles[1].low = json!("104.0");

    let series = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap();

    assert_eq!(series.candles.len(), 1);
    assert_eq!(series.candles[0].timestamp.value(), 1000);
}

#[test]
fn all_candles_malformed_is_no_renderable_data() {
    let mut candles = vec![candle_record(1000)];
    candles[0].time = json!("garbage");

    let err = SeriesReconciler::new()
        .reconcile(candles, vec![], vec![])
        .unwrap_err();

    assert!(matches!(err, ChartError::NoRenderableData));
}

#[test]
fn empty_candle_input_is_no_renderable_data() {
    let err = SeriesReconciler::new()
        .reconcile(vec![], vec![], vec![])
        .unwrap_err();

    assert!(matches!(err, ChartError::NoRenderableData));
}

#[test]
fn negative_indicator_value_is_dropped_not_fatal() {
    let indicator = vec![
        RawIndicatorRecord {
            time: json!(1000),
            value: json!(-1.0),
        },
        RawIndicatorRecord {
            time: json!(2000),
            value: json!(3.0),
        },
    ];

    let series = SeriesReconciler::new()
        .reconcile(vec![candle_record(1000)], indicator, vec![])
        .unwrap();

    assert_eq!(series.indicator.len(), 1);
    assert_eq!(series.indicator[0].timestamp.value(), 2000);
}

#[test]
fn unknown_signal_kind_is_dropped() {
    let signals = vec![
        RawSignalRecord {
            time: json!(1000),
            kind: json!("hold"),
            price: json!(100.0),
        },
        RawSignalRecord {
            time: json!(2000),
            kind: json!("sell"),
            price: json!(100.0),
        },
    ];

    let series = SeriesReconciler::new()
        .reconcile(vec![candle_record(1000)], vec![], signals)
        .unwrap();

    assert_eq!(series.signals.len(), 1);
    assert_eq!(series.signals[0].timestamp.value(), 2000);
}

#[test]
fn error_levels_distinguish_record_from_cycle() {
    assert!(ChartError::MalformedRecord("open").is_record_level());
    assert!(ChartError::InvalidTimestamp("nope".into()).is_record_level());
    assert!(!ChartError::NoRenderableData.is_record_level());
    assert!(!ChartError::InvalidPayload("bad".into()).is_record_level());
}

#[test]
fn empty_indicator_and_signals_are_tolerated() {
    let series = SeriesReconciler::new()
        .reconcile(vec![candle_record(1000)], vec![], vec![])
        .unwrap();

    assert_eq!(series.candles.len(), 1);
    assert!(series.indicator.is_empty());
    assert!(series.signals.is_empty());
}
