use std::collections::HashMap;

use futures::future::AbortHandle;
use leptos::*;
use once_cell::sync::OnceCell;

use crate::application::refresh::FetchPhase;
use crate::domain::chart::RenderableOverlay;
use crate::domain::market_data::Symbol;

pub struct Globals {
    pub current_symbol: RwSignal<Symbol>,
    /// The published overlay, replaced wholesale each refresh cycle.
    pub overlay: RwSignal<Option<RenderableOverlay>>,
    pub fetch_phase: RwSignal<FetchPhase>,
    pub refresh_abort_handles: RwSignal<HashMap<Symbol, AbortHandle>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        current_symbol: create_rw_signal(Symbol::from("BTCUSDT")),
        overlay: create_rw_signal(None),
        fetch_phase: create_rw_signal(FetchPhase::Idle),
        refresh_abort_handles: create_rw_signal(HashMap::new()),
    })
}

/// Abort every symbol's polling loop except the one being kept.
pub fn abort_other_refresh_loops(keep: &Symbol) {
    globals().refresh_abort_handles.update(|handles| {
        handles.retain(|symbol, handle| {
            if symbol == keep {
                true
            } else {
                handle.abort();
                false
            }
        });
    });
}

/// Teardown path: abort all polling loops and forget their handles.
pub fn abort_all_refresh_loops() {
    globals().refresh_abort_handles.update(|handles| {
        for (_, handle) in handles.drain() {
            handle.abort();
        }
    });
}
