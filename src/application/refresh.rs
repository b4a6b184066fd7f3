use derive_more::Display;

use crate::domain::chart::RenderableOverlay;
use crate::domain::errors::ChartError;
use crate::domain::logging::{LogComponent, get_logger};

/// Fixed polling period between fetch-and-reconcile cycles.
pub const REFRESH_INTERVAL_SECS: u64 = 5 * 60;

/// Lifecycle phase of the refresh controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FetchPhase {
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "fetching")]
    Fetching,
    #[display(fmt = "ready")]
    Ready,
    #[display(fmt = "failed")]
    Failed,
}

/// Owns the polling lifecycle state: which cycle is current, what overlay
/// is published, and whether the UI should show a loading state.
///
/// Each cycle carries a generation token. A completing cycle is applied
/// only while its token still matches the current generation, so a stale
/// in-flight response for an old symbol becomes a no-op instead of
/// clobbering a newer fetch - last request wins.
#[derive(Debug)]
pub struct RefreshController {
    phase: FetchPhase,
    generation: u64,
    overlay: Option<RenderableOverlay>,
    last_error: Option<ChartError>,
}

impl RefreshController {
    pub fn new() -> Self {
        Self {
            phase: FetchPhase::Idle,
            generation: 0,
            overlay: None,
            last_error: None,
        }
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The currently published overlay, if any cycle ever succeeded.
    pub fn overlay(&self) -> Option<&RenderableOverlay> {
        self.overlay.as_ref()
    }

    pub fn last_error(&self) -> Option<&ChartError> {
        self.last_error.as_ref()
    }

    /// Loading indicator contract: visible only while fetching with no
    /// prior good overlay to keep on screen.
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Fetching && self.overlay.is_none()
    }

    /// Enter Fetching and hand out the token identifying this cycle.
    /// Any previously issued token becomes stale immediately.
    pub fn begin_cycle(&mut self) -> u64 {
        self.generation += 1;
        self.phase = FetchPhase::Fetching;
        get_logger().debug(
            LogComponent::Application("Refresh"),
            &format!("Cycle {} started", self.generation),
        );
        self.generation
    }

    /// Apply the outcome of a cycle. Returns whether it was applied;
    /// stale tokens are discarded without touching published state.
    ///
    /// Success replaces the overlay wholesale. Failure keeps the previous
    /// Ready overlay (stale-but-valid beats blanking the screen).
    pub fn complete_cycle(
        &mut self,
        token: u64,
        result: Result<RenderableOverlay, ChartError>,
    ) -> bool {
        if token != self.generation {
            get_logger().warn(
                LogComponent::Application("Refresh"),
                &format!(
                    "Discarding stale cycle {} (current is {})",
                    token, self.generation
                ),
            );
            return false;
        }

        match result {
            Ok(overlay) => {
                get_logger().info(
                    LogComponent::Application("Refresh"),
                    &format!(
                        "✅ Cycle {} ready: {} candles, {} markers",
                        token,
                        overlay.candles().len(),
                        overlay.markers().len()
                    ),
                );
                self.overlay = Some(overlay);
                self.last_error = None;
                self.phase = FetchPhase::Ready;
            }
            Err(err) => {
                get_logger().warn(
                    LogComponent::Application("Refresh"),
                    &format!("⚠️ Cycle {} failed: {} (keeping previous overlay)", token, err),
                );
                self.last_error = Some(err);
                self.phase = FetchPhase::Failed;
            }
        }
        true
    }
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new()
    }
}
