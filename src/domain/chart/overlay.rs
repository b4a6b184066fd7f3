use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

use crate::domain::market_data::{Candle, IndicatorPoint, Price, Timestamp};

/// Where a marker sits relative to its bar. Serialized names follow the
/// usual charting-library convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, Serialize, Deserialize)]
pub enum VerticalPlacement {
    #[strum(serialize = "aboveBar")]
    #[serde(rename = "aboveBar")]
    Above,

    #[strum(serialize = "belowBar")]
    #[serde(rename = "belowBar")]
    Below,
}

/// Visual category of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, Serialize, Deserialize)]
pub enum MarkerCategory {
    #[strum(serialize = "entry")]
    #[serde(rename = "entry")]
    Entry,

    #[strum(serialize = "exit")]
    #[serde(rename = "exit")]
    Exit,
}

/// Renderable marker descriptor for one trade signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub timestamp: Timestamp,
    pub placement: VerticalPlacement,
    pub category: MarkerCategory,
    pub label: String,
    pub price: Price,
}

/// The combined render-ready bundle for one refresh cycle.
///
/// Immutable once composed: the drawing surface only ever sees a fully
/// built overlay, and each cycle replaces it wholesale rather than
/// patching series in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableOverlay {
    candles: Vec<Candle>,
    indicator: Vec<IndicatorPoint>,
    markers: Vec<Marker>,
}

impl RenderableOverlay {
    pub(crate) fn new(
        candles: Vec<Candle>,
        indicator: Vec<IndicatorPoint>,
        markers: Vec<Marker>,
    ) -> Self {
        Self {
            candles,
            indicator,
            markers,
        }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn indicator(&self) -> &[IndicatorPoint] {
        &self.indicator
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Time span of the candle series (first, last)
    pub fn time_range(&self) -> Option<(Timestamp, Timestamp)> {
        match (self.candles.first(), self.candles.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }

    /// Price span covered by the candle series
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let mut candles = self.candles.iter();
        let first = candles.next()?;
        let mut min = first.ohlc.low;
        let mut max = first.ohlc.high;
        for candle in candles {
            if candle.ohlc.low < min {
                min = candle.ohlc.low;
            }
            if candle.ohlc.high > max {
                max = candle.ohlc.high;
            }
        }
        Some((min, max))
    }
}
