//! Chart aggregate: the render-ready overlay, its composer, and the
//! drawing-surface boundary.

pub mod composer;
pub mod overlay;
pub mod surface;
pub mod theme;

pub use composer::OverlayComposer;
pub use overlay::{Marker, MarkerCategory, RenderableOverlay, VerticalPlacement};
pub use surface::DrawingSurface;
pub use theme::ChartTheme;
