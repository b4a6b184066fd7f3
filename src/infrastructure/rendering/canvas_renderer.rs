use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::chart::{
    ChartTheme, DrawingSurface, Marker, MarkerCategory, RenderableOverlay, VerticalPlacement,
};
use crate::domain::logging::{LogComponent, get_logger};
use crate::time_utils::format_time_label;

/// Chart height is fixed; only the width follows the container.
pub const CHART_HEIGHT: u32 = 500;

const GRID_ROWS: usize = 5;
const GRID_COLS: usize = 6;

/// Scale parameters computed once per draw
#[derive(Debug, Clone, Copy)]
struct ScaleParams {
    plot_left: f64,
    plot_top: f64,
    plot_width: f64,
    plot_height: f64,
    start_time: f64,
    time_span: f64,
    min_price: f64,
    price_range: f64,
}

impl ScaleParams {
    fn x_for(&self, timestamp: f64) -> f64 {
        if self.time_span <= 0.0 {
            return self.plot_left + self.plot_width / 2.0;
        }
        self.plot_left + ((timestamp - self.start_time) / self.time_span) * self.plot_width
    }

    fn y_for(&self, price: f64) -> f64 {
        self.plot_top + ((self.min_price + self.price_range - price) / self.price_range) * self.plot_height
    }
}

/// Canvas 2D implementation of the drawing-surface boundary.
///
/// Deliberately thin: it paints whatever overlay it is handed and never
/// reaches back into data state.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    theme: ChartTheme,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas_id: &str, width: u32) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("document not available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;

        canvas.set_width(width);
        canvas.set_height(CHART_HEIGHT);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast 2D context"))?;

        Ok(Self {
            canvas,
            context,
            theme: ChartTheme::DEFAULT,
            width,
            height: CHART_HEIGHT,
        })
    }

    fn scale_params(&self, overlay: &RenderableOverlay) -> Option<ScaleParams> {
        let (start, end) = overlay.time_range()?;
        let (min_price, max_price) = overlay.price_range()?;

        // 5% vertical padding so wicks don't touch the frame
        let raw_range = (max_price.value() - min_price.value()).max(f64::EPSILON);
        let padding = raw_range * 0.05;

        Some(ScaleParams {
            plot_left: 10.0,
            plot_top: 10.0,
            plot_width: self.width as f64 - 10.0 - 70.0,
            plot_height: self.height as f64 - 10.0 - 34.0,
            start_time: start.as_f64(),
            time_span: end.as_f64() - start.as_f64(),
            min_price: min_price.value() - padding,
            price_range: raw_range + padding * 2.0,
        })
    }

    fn render_background(&self) {
        let context = &self.context;
        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(self.theme.background));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn render_grid(&self, params: &ScaleParams) {
        let context = &self.context;
        context.set_stroke_style(&JsValue::from(self.theme.grid));
        context.set_fill_style(&JsValue::from(self.theme.text));
        context.set_line_width(1.0);
        context.set_font("11px monospace");

        for row in 0..=GRID_ROWS {
            let y = params.plot_top + (row as f64 / GRID_ROWS as f64) * params.plot_height;
            context.begin_path();
            context.move_to(params.plot_left, y);
            context.line_to(params.plot_left + params.plot_width, y);
            context.stroke();

            let price = params.min_price + params.price_range * (1.0 - row as f64 / GRID_ROWS as f64);
            let _ = context.fill_text(
                &format!("{:.2}", price),
                params.plot_left + params.plot_width + 6.0,
                y + 4.0,
            );
        }

        let span_secs = params.time_span.max(0.0) as u64;
        for col in 0..=GRID_COLS {
            let x = params.plot_left + (col as f64 / GRID_COLS as f64) * params.plot_width;
            context.begin_path();
            context.move_to(x, params.plot_top);
            context.line_to(x, params.plot_top + params.plot_height);
            context.stroke();

            let timestamp = params.start_time + params.time_span * (col as f64 / GRID_COLS as f64);
            let label = format_time_label((timestamp as u64).into(), span_secs);
            let _ = context.fill_text(&label, x - 14.0, self.height as f64 - 10.0);
        }
    }

    fn render_candles(&self, overlay: &RenderableOverlay, params: &ScaleParams) {
        let context = &self.context;
        let slot_width = params.plot_width / overlay.candles().len().max(1) as f64;
        let body_width = (slot_width * 0.7).max(1.0);

        for candle in overlay.candles() {
            let color = if candle.is_bearish() {
                self.theme.down_candle
            } else {
                self.theme.up_candle
            };
            let x = params.x_for(candle.timestamp.as_f64());

            // Wick
            context.set_stroke_style(&JsValue::from(color));
            context.set_line_width(1.0);
            context.begin_path();
            context.move_to(x, params.y_for(candle.ohlc.high.value()));
            context.line_to(x, params.y_for(candle.ohlc.low.value()));
            context.stroke();

            // Body
            let open_y = params.y_for(candle.ohlc.open.value());
            let close_y = params.y_for(candle.ohlc.close.value());
            let body_top = open_y.min(close_y);
            let body_height = (open_y - close_y).abs().max(1.0);
            context.set_fill_style(&JsValue::from(color));
            context.fill_rect(x - body_width / 2.0, body_top, body_width, body_height);
        }
    }

    fn render_indicator(&self, overlay: &RenderableOverlay, params: &ScaleParams) {
        if overlay.indicator().is_empty() {
            return;
        }
        let context = &self.context;
        context.set_stroke_style(&JsValue::from(self.theme.indicator_line));
        context.set_line_width(2.0);
        context.begin_path();
        let mut started = false;
        for point in overlay.indicator() {
            let x = params.x_for(point.timestamp.as_f64());
            let y = params.y_for(point.value.value());
            if started {
                context.line_to(x, y);
            } else {
                context.move_to(x, y);
                started = true;
            }
        }
        context.stroke();
    }

    fn render_markers(&self, overlay: &RenderableOverlay, params: &ScaleParams) {
        let context = &self.context;
        context.set_font("10px monospace");

        let mut previous_at: Option<(f64, usize)> = None;
        for marker in overlay.markers() {
            let x = params.x_for(marker.timestamp.as_f64());
            // Stack same-timestamp markers instead of overpainting them
            let stack_index = match previous_at {
                Some((prev_x, count)) if prev_x == x => count + 1,
                _ => 0,
            };
            previous_at = Some((x, stack_index));
            self.render_marker(marker, x, stack_index as f64, params);
        }
    }

    fn render_marker(&self, marker: &Marker, x: f64, stack: f64, params: &ScaleParams) {
        let context = &self.context;
        let color = match marker.category {
            MarkerCategory::Entry => self.theme.marker_long,
            MarkerCategory::Exit => self.theme.marker_short,
        };
        context.set_fill_style(&JsValue::from(color));

        let anchor_y = params.y_for(marker.price.value());
        let offset = 10.0 + stack * 22.0;
        context.begin_path();
        match marker.placement {
            VerticalPlacement::Below => {
                let tip = anchor_y + offset;
                context.move_to(x, tip);
                context.line_to(x - 5.0, tip + 8.0);
                context.line_to(x + 5.0, tip + 8.0);
                context.close_path();
                context.fill();
                let _ = context.fill_text(&marker.label, x - 10.0, tip + 20.0);
            }
            VerticalPlacement::Above => {
                let tip = anchor_y - offset;
                context.move_to(x, tip);
                context.line_to(x - 5.0, tip - 8.0);
                context.line_to(x + 5.0, tip - 8.0);
                context.close_path();
                context.fill();
                let _ = context.fill_text(&marker.label, x - 10.0, tip - 12.0);
            }
        }
    }
}

impl DrawingSurface for CanvasSurface {
    fn draw(&mut self, overlay: &RenderableOverlay) {
        self.render_background();
        let Some(params) = self.scale_params(overlay) else {
            return;
        };
        self.render_grid(&params);
        self.render_candles(overlay, &params);
        self.render_indicator(overlay, &params);
        self.render_markers(overlay, &params);

        get_logger().debug(
            LogComponent::Infrastructure("CanvasSurface"),
            &format!(
                "Painted {} candles / {} markers at {}px",
                overlay.candles().len(),
                overlay.markers().len(),
                self.width
            ),
        );
    }

    fn resize(&mut self, width: u32) {
        self.width = width;
        self.canvas.set_width(width);
    }
}
