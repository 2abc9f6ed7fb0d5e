// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod csv;
pub mod data;
pub mod loader;
pub mod progress;

pub mod chart;
pub mod controller;
pub mod search;
pub mod series;

pub mod cli;
pub mod gui;
