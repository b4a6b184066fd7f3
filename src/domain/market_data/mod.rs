//! Market data aggregate: canonical series types and the reconciliation
//! services that produce them from loosely-typed payloads.

pub mod entities;
pub mod normalizer;
pub mod reconciler;
pub mod value_objects;

pub use entities::*;
pub use normalizer::normalize_timestamp;
pub use reconciler::{
    CanonicalSeries, RawCandleRecord, RawIndicatorRecord, RawSignalRecord, SeriesReconciler,
};
pub use value_objects::*;
