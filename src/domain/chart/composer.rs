use super::overlay::{Marker, MarkerCategory, RenderableOverlay, VerticalPlacement};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{CanonicalSeries, SignalDirection, SignalEvent};

/// Domain service mapping canonical series into the render-ready overlay.
///
/// Long and short signals get asymmetric placement on purpose, so the two
/// directions stay distinguishable without relying on color alone.
pub struct OverlayComposer;

impl OverlayComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, series: CanonicalSeries) -> RenderableOverlay {
        // One marker per signal event. Same-timestamp signals all survive;
        // stacking them is the drawing surface's job.
        let markers = series.signals.iter().map(marker_for).collect::<Vec<_>>();

        get_logger().info(
            LogComponent::Domain("Composer"),
            &format!(
                "🧩 Composed overlay: {} candles, {} indicator points, {} markers",
                series.candles.len(),
                series.indicator.len(),
                markers.len()
            ),
        );

        RenderableOverlay::new(series.candles, series.indicator, markers)
    }
}

impl Default for OverlayComposer {
    fn default() -> Self {
        Self::new()
    }
}

fn marker_for(signal: &SignalEvent) -> Marker {
    let (placement, category, label) = match signal.direction {
        SignalDirection::Long => (VerticalPlacement::Below, MarkerCategory::Entry, "BUY"),
        SignalDirection::Short => (VerticalPlacement::Above, MarkerCategory::Exit, "SELL"),
    };
    Marker {
        timestamp: signal.timestamp,
        placement,
        category,
        label: label.to_string(),
        price: signal.price,
    }
}
