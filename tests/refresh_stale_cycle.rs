use atr_chart_wasm::application::refresh::{FetchPhase, RefreshController};
use atr_chart_wasm::domain::chart::{OverlayComposer, RenderableOverlay};
use atr_chart_wasm::domain::market_data::{RawCandleRecord, SeriesReconciler};
use serde_json::json;

fn overlay_with_close(close: f64) -> RenderableOverlay {
    // High and low bracket open and close so the candle passes validation
    // for any close value the test picks.
    let candle = RawCandleRecord {
        time: json!(1000),
        open: json!("100.0"),
        high: json!((close.max(100.0) + 5.0).to_string()),
        low: json!((close.min(100.0) - 5.0).to_string()),
        close: json!(close.to_string()),
    };
    let series = SeriesReconciler::new()
        .reconcile(vec![candle], vec![], vec![])
        .unwrap();
    OverlayComposer::new().compose(series)
}

#[test]
fn stale_cycle_outcome_is_discarded() {
    let mut controller = RefreshController::new();

    // First cycle goes in flight, then the symbol switches and a second
    // cycle starts before the first one lands.
    let stale_token = controller.begin_cycle();
    let current_token = controller.begin_cycle();

    let applied = controller.complete_cycle(stale_token, Ok(overlay_with_close(101.0)));
    assert!(!applied);
    assert!(controller.overlay().is_none());
    assert_eq!(controller.phase(), FetchPhase::Fetching);

    let applied = controller.complete_cycle(current_token, Ok(overlay_with_close(202.0)));
    assert!(applied);
    assert_eq!(controller.phase(), FetchPhase::Ready);
    let published = controller.overlay().unwrap();
    assert_eq!(published.candles()[0].ohlc.close.value(), 202.0);
}

#[test]
fn stale_completion_after_newer_success_changes_nothing() {
    let mut controller = RefreshController::new();

    let stale_token = controller.begin_cycle();
    let current_token = controller.begin_cycle();
    assert!(controller.complete_cycle(current_token, Ok(overlay_with_close(202.0))));

    let before = controller.overlay().cloned();
    assert!(!controller.complete_cycle(stale_token, Ok(overlay_with_close(101.0))));
    assert_eq!(controller.overlay().cloned(), before);
    assert_eq!(controller.phase(), FetchPhase::Ready);
}

#[test]
fn each_cycle_gets_a_fresh_token() {
    let mut controller = RefreshController::new();
    let first = controller.begin_cycle();
    let second = controller.begin_cycle();
    assert_ne!(first, second);
    assert_eq!(controller.generation(), second);
}
