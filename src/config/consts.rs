// src/config/consts.rs

// Dataset shape
pub const NAME_FIELD: &str = "clean_name";
pub const NA_TOKEN: &str = "NA";
pub const PERIOD_KEY_LEN: usize = 8;

// Default source
pub const DEFAULT_DATA_FILE: &str = "district_data.csv";
pub const DATA_SEP: char = ',';

// Search
pub const MAX_SUGGESTIONS: usize = 5;

// Chart
pub const AXIS_HEADROOM: f64 = 5.0;
pub const FALLBACK_AXIS_MAX: f64 = 100.0; // all values missing
pub const SERIES_LABEL: &str = "Chronic Absenteeism Rate (%)";
pub const X_AXIS_TITLE: &str = "School Year";
pub const Y_AXIS_TITLE: &str = "Percent Absent";

// Display
pub const NA_DISPLAY: &str = "N/A";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "district_lookup/0.2";

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
