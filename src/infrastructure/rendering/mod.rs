#[cfg(target_arch = "wasm32")]
pub mod canvas_renderer;

#[cfg(target_arch = "wasm32")]
pub use canvas_renderer::{CHART_HEIGHT, CanvasSurface};
