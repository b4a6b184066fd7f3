use super::overlay::RenderableOverlay;

/// Boundary to the opaque painting engine.
///
/// The core publishes one overlay per refresh cycle and a width-only
/// resize request; everything else about painting stays behind this trait.
pub trait DrawingSurface {
    /// Paint the given overlay. Called with a fully composed overlay only.
    fn draw(&mut self, overlay: &RenderableOverlay);

    /// Apply a new surface width. Does not repaint by itself; the caller
    /// follows up with [`DrawingSurface::draw`] using the current overlay.
    fn resize(&mut self, width: u32);
}
