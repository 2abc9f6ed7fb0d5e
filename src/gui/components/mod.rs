// src/gui/components/mod.rs
pub mod chart_view;
pub mod detail;
pub mod search_box;
pub mod stats_table;
