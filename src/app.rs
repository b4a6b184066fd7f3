use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use gloo::events::EventListener;
use gloo_timers::future::sleep;
use leptos::html::Canvas;
use leptos::*;

use crate::application::refresh::{FetchPhase, REFRESH_INTERVAL_SECS, RefreshController};
use crate::application::viewport::ViewportAdapter;
use crate::domain::chart::{DrawingSurface, OverlayComposer};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{SeriesReconciler, Symbol, TimeInterval};
use crate::global_state::{abort_all_refresh_loops, abort_other_refresh_loops, globals};
use crate::infrastructure::http::AtrAnalysisClient;
use crate::infrastructure::rendering::{CHART_HEIGHT, CanvasSurface};

pub const SUPPORTED_SYMBOLS: [&str; 3] = ["BTCUSDT", "ETHUSDT", "SOLUSDT"];

const CHART_CANVAS_ID: &str = "atr-chart-canvas";
const CHART_WRAPPER_ID: &str = "atr-chart-wrapper";
const CHART_INTERVAL: TimeInterval = TimeInterval::OneHour;
const INITIAL_WIDTH: u32 = 800;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            "body { margin: 0; background: #1B1B1F; color: #DDD; font-family: monospace; }
             .dashboard { max-width: 1200px; margin: 0 auto; padding: 16px; }
             .header { display: flex; align-items: center; justify-content: space-between; }
             .header h1 { font-size: 18px; }
             .header select { background: #2B2B3F; color: #DDD; border: 1px solid #444; padding: 4px 8px; }
             .chart-wrapper { position: relative; width: 100%; }
             .chart-wrapper canvas { display: block; width: 100%; }
             .loading { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }"
        </style>
        <div class="dashboard">
            <Header/>
            <ChartContainer/>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let current_symbol = globals().current_symbol;

    view! {
        <div class="header">
            <h1>"ATR Analysis"</h1>
            <select on:change=move |ev| {
                let selected = Symbol::from(event_target_value(&ev).as_str());
                get_logger().info(
                    LogComponent::Presentation("Header"),
                    &format!("🔄 Switching to {}", selected.value()),
                );
                current_symbol.set(selected);
            }>
                {SUPPORTED_SYMBOLS
                    .iter()
                    .map(|symbol| {
                        view! {
                            <option
                                value=*symbol
                                selected=move || current_symbol.get().value() == *symbol
                            >
                                {*symbol}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn ChartContainer() -> impl IntoView {
    let overlay = globals().overlay;
    let fetch_phase = globals().fetch_phase;

    let canvas_ref = create_node_ref::<Canvas>();
    let surface: Rc<RefCell<Option<CanvasSurface>>> = Rc::new(RefCell::new(None));
    let controller = Rc::new(RefCell::new(RefreshController::new()));

    // Create the drawing surface once the canvas is in the DOM
    {
        let surface = Rc::clone(&surface);
        create_effect(move |_| {
            if canvas_ref.get().is_none() || surface.borrow().is_some() {
                return;
            }
            let width = measure_container_width().unwrap_or(INITIAL_WIDTH);
            match CanvasSurface::new(CHART_CANVAS_ID, width) {
                Ok(new_surface) => *surface.borrow_mut() = Some(new_surface),
                Err(err) => get_logger().error(
                    LogComponent::Presentation("ChartContainer"),
                    &format!("Canvas init failed: {:?}", err),
                ),
            }
        });
    }

    // Repaint whenever a new overlay is published
    {
        let surface = Rc::clone(&surface);
        create_effect(move |_| {
            overlay.with(|published| {
                if let (Some(overlay), Some(surface)) =
                    (published.as_ref(), surface.borrow_mut().as_mut())
                {
                    surface.draw(overlay);
                }
            });
        });
    }

    // One polling loop per selected symbol; switching aborts the old loop
    {
        let controller = Rc::clone(&controller);
        create_effect(move |_| {
            let symbol = globals().current_symbol.get();
            abort_other_refresh_loops(&symbol);
            start_refresh_loop(symbol, Rc::clone(&controller));
        });
    }

    // Resize handling goes through the viewport adapter, which dedupes
    // unchanged widths so resizes never touch data state.
    let resize_listener = {
        let surface = Rc::clone(&surface);
        let viewport = RefCell::new(ViewportAdapter::new(INITIAL_WIDTH));
        web_sys::window().map(|window| {
            EventListener::new(&window, "resize", move |_| {
                let Some(width) = measure_container_width() else {
                    return;
                };
                if !viewport.borrow_mut().apply_width(width) {
                    return;
                }
                if let Some(surface) = surface.borrow_mut().as_mut() {
                    surface.resize(width);
                    overlay.with_untracked(|published| {
                        if let Some(overlay) = published.as_ref() {
                            surface.draw(overlay);
                        }
                    });
                }
            })
        })
    };

    on_cleanup(move || {
        drop(resize_listener);
        abort_all_refresh_loops();
    });

    let show_loading =
        move || fetch_phase.get() == FetchPhase::Fetching && overlay.with(|o| o.is_none());

    view! {
        <div class="chart-wrapper" id=CHART_WRAPPER_ID>
            <canvas
                id=CHART_CANVAS_ID
                node_ref=canvas_ref
                width=INITIAL_WIDTH
                height=CHART_HEIGHT
            ></canvas>
            <Show when=show_loading>
                <div class="loading">"Loading chart data..."</div>
            </Show>
        </div>
    }
}

fn measure_container_width() -> Option<u32> {
    let wrapper = web_sys::window()?
        .document()?
        .get_element_by_id(CHART_WRAPPER_ID)?;
    let width = wrapper.client_width();
    (width > 0).then_some(width as u32)
}

fn start_refresh_loop(symbol: Symbol, controller: Rc<RefCell<RefreshController>>) {
    let (abort_handle, abort_registration) = AbortHandle::new_pair();
    globals().refresh_abort_handles.update(|handles| {
        handles.insert(symbol.clone(), abort_handle);
    });

    let loop_symbol = symbol.clone();
    spawn_local(async move {
        let client = AtrAnalysisClient::new();
        let polling = async {
            loop {
                run_refresh_cycle(&client, &loop_symbol, &controller).await;
                sleep(Duration::from_secs(REFRESH_INTERVAL_SECS)).await;
            }
        };
        if Abortable::new(polling, abort_registration).await.is_err() {
            get_logger().debug(
                LogComponent::Presentation("App"),
                &format!("Refresh loop for {} aborted", symbol.value()),
            );
        }
    });
}

/// One fetch-reconcile-compose-publish cycle.
///
/// The controller decides whether the outcome still applies; a cycle that
/// went stale mid-flight (symbol switched) publishes nothing.
async fn run_refresh_cycle(
    client: &AtrAnalysisClient,
    symbol: &Symbol,
    controller: &Rc<RefCell<RefreshController>>,
) {
    let token = controller.borrow_mut().begin_cycle();
    globals().fetch_phase.set(FetchPhase::Fetching);

    let outcome = match client.fetch_analysis(symbol, CHART_INTERVAL).await {
        Ok(payload) => {
            let (candles, indicator, signals) = payload.into_raw_series();
            SeriesReconciler::new()
                .reconcile(candles, indicator, signals)
                .map(|series| OverlayComposer::new().compose(series))
        }
        Err(err) => Err(err),
    };

    let mut controller = controller.borrow_mut();
    if controller.complete_cycle(token, outcome) {
        globals().fetch_phase.set(controller.phase());
        globals().overlay.set(controller.overlay().cloned());
    }
}
