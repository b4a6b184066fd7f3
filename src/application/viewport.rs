use crate::domain::logging::{LogComponent, get_logger};

/// Tracks the drawing surface's width across container resize events.
///
/// Resize is purely a layout concern: it never touches data state, it only
/// decides whether the current overlay needs a redraw at a new width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportAdapter {
    width: u32,
}

impl ViewportAdapter {
    pub fn new(initial_width: u32) -> Self {
        Self {
            width: initial_width,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Apply a measured container width. Returns true when the width
    /// actually changed and a redraw is due; unchanged sizes must not
    /// fire redundant redraws.
    pub fn apply_width(&mut self, width: u32) -> bool {
        if width == self.width {
            return false;
        }
        get_logger().debug(
            LogComponent::Application("Viewport"),
            &format!("Surface width {} -> {}", self.width, width),
        );
        self.width = width;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportAdapter;

    #[test]
    fn redraw_only_on_changed_width() {
        let mut viewport = ViewportAdapter::new(800);
        assert!(!viewport.apply_width(800));
        assert!(viewport.apply_width(640));
        assert_eq!(viewport.width(), 640);
        assert!(!viewport.apply_width(640));
    }
}
