use atr_chart_wasm::domain::chart::{OverlayComposer, VerticalPlacement};
use atr_chart_wasm::domain::market_data::{RawCandleRecord, RawSignalRecord, SeriesReconciler};
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

fn signal_record(time: u64, kind: &str) -> RawSignalRecord {
    RawSignalRecord {
        time: json!(time),
        kind: json!(kind),
        price: json!(100.0),
    }
}

#[test]
fn long_signal_becomes_buy_marker_below_bar() {
    let series = SeriesReconciler::new()
        .reconcile(
            vec![candle_record(1000)],
            vec![],
            vec![signal_record(1000, "buy")],
        )
        .unwrap();

    let overlay = OverlayComposer::new().compose(series);

    assert_eq!(overlay.candles().len(), 1);
    assert_eq!(overlay.markers().len(), 1);
    let marker = &overlay.markers()[0];
    assert_eq!(marker.timestamp.value(), 1000);
    assert_eq!(marker.placement, VerticalPlacement::Below);
    assert_eq!(marker.label, "BUY");
}

#[test]
fn short_signal_becomes_sell_marker_above_bar() {
    let series = SeriesReconciler::new()
        .reconcile(
            vec![candle_record(1000)],
            vec![],
            vec![signal_record(1000, "sell")],
        )
        .unwrap();

    let overlay = OverlayComposer::new().compose(series);

    let marker = &overlay.markers()[0];
    assert_eq!(marker.placement, VerticalPlacement::Above);
    assert_eq!(marker.label, "SELL");
}

#[test]
fn opposite_signals_at_same_timestamp_both_survive() {
    let series = SeriesReconciler::new()
        .reconcile(
            vec![candle_record(2000)],
            vec![],
            vec![signal_record(2000, "buy"), signal_record(2000, "sell")],
        )
        .unwrap();

    let overlay = OverlayComposer::new().compose(series);

    assert_eq!(overlay.markers().len(), 2);
    let below = overlay
        .markers()
        .iter()
        .filter(|m| m.placement == VerticalPlacement::Below)
        .count();
    let above = overlay
        .markers()
        .iter()
        .filter(|m| m.placement == VerticalPlacement::Above)
        .count();
    assert_eq!(below, 1);
    assert_eq!(above, 1);
    assert!(overlay.markers().iter().all(|m| m.timestamp.value() == 2000));
}

#[test]
fn no_signals_means_no_markers() {
    let series = SeriesReconciler::new()
        .reconcile(vec![candle_record(1000)], vec![], vec![])
        .unwrap();

    let overlay = OverlayComposer::new().compose(series);

    assert!(overlay.markers().is_empty());
    assert_eq!(overlay.candles().len(), 1);
}
