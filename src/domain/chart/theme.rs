/// Fixed theme constants handed to the drawing surface.
/// Not user-configurable at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    pub background: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
    pub up_candle: &'static str,
    pub down_candle: &'static str,
    pub indicator_line: &'static str,
    pub marker_long: &'static str,
    pub marker_short: &'static str,
}

impl ChartTheme {
    pub const DEFAULT: ChartTheme = ChartTheme {
        background: "#1B1B1F",
        text: "#DDD",
        grid: "#2B2B3F",
        up_candle: "#26a69a",
        down_candle: "#ef5350",
        indicator_line: "#9B59B6",
        marker_long: "#26a69a",
        marker_short: "#ef5350",
    };
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
