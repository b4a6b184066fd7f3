pub mod dto;

#[cfg(target_arch = "wasm32")]
pub mod analysis_client;

pub use dto::{AtrAnalysisResponse, SignalDto};

#[cfg(target_arch = "wasm32")]
pub use analysis_client::AtrAnalysisClient;
