pub use super::value_objects::{Price, SignalDirection, Timestamp};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Value Object - OHLC price group for one time bucket
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Ohlc {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl Ohlc {
    /// High must bound the bucket from above, low from below.
    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
    }
}

/// Domain entity - Candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlc: Ohlc,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlc: Ohlc) -> Self {
        Self { timestamp, ohlc }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlc.close > self.ohlc.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlc.close < self.ohlc.open
    }
}

/// Domain entity - one point of the volatility indicator line.
///
/// ATR is non-negative by definition; the reconciler enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub timestamp: Timestamp,
    pub value: Price,
}

impl IndicatorPoint {
    pub fn new(timestamp: Timestamp, value: Price) -> Self {
        Self { timestamp, value }
    }
}

/// Domain entity - discrete trade signal event.
///
/// Not required to align with a candle timestamp; nearest-bar association
/// is left to the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    pub timestamp: Timestamp,
    pub direction: SignalDirection,
    pub price: Price,
}

impl SignalEvent {
    pub fn new(timestamp: Timestamp, direction: SignalDirection, price: Price) -> Self {
        Self {
            timestamp,
            direction,
            price,
        }
    }
}
