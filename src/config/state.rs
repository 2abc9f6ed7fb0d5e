// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Width of the stats table next to the chart
    pub table_width: f32,

    /// Minimum chart height; the chart grows with the window
    pub chart_min_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 960.0,
            window_h: 640.0,
            table_width: 220.0,
            chart_min_h: 260.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
