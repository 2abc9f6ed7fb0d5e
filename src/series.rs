// src/series.rs
//
// Reshapes one wide district row (one column per school year) into an
// ordered series of labeled readings.
//
// Chronological order is the only sort performed. The newest-first table is
// the same sequence walked backwards.

use std::fmt;

use crate::config::consts::{AXIS_HEADROOM, FALLBACK_AXIS_MAX, NAME_FIELD, NA_DISPLAY, NA_TOKEN, PERIOD_KEY_LEN};
use crate::data::{Row, Value};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reading {
    Available(f64),
    NotAvailable,
}

impl Reading {
    pub fn from_value(v: &Value) -> Self {
        match v {
            Value::Number(n) => Reading::Available(*n),
            Value::Text(t) if t.trim() == NA_TOKEN => Reading::NotAvailable,
            Value::Text(t) => {
                logd!("Series: non-numeric value {:?} shown as {}", t, NA_DISPLAY);
                Reading::NotAvailable
            }
            Value::Empty => Reading::NotAvailable,
        }
    }

    /// Chart value; `None` is a gap.
    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Available(n) => Some(*n),
            Reading::NotAvailable => None,
        }
    }
}

/// Table text: `8.5%`, `12%`, or `N/A`.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Available(n) => write!(f, "{n}%"),
            Reading::NotAvailable => f.write_str(NA_DISPLAY),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub reading: Reading,
}

/// Points in chronological order (oldest first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn chronological(&self) -> &[SeriesPoint] { &self.points }

    /// Table order: the chronological sequence reversed.
    pub fn newest_first(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().rev()
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// `(label, display text)` pairs, newest first.
    pub fn table_rows(&self) -> Vec<(String, String)> {
        self.newest_first()
            .map(|p| (p.label.clone(), p.reading.to_string()))
            .collect()
    }

    /// Chart x labels, oldest first.
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    /// Chart y values, oldest first; missing readings are gaps.
    pub fn chart_values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.reading.value()).collect()
    }

    pub fn axis_max(&self) -> f64 {
        axis_upper_bound(&self.chart_values())
    }
}

/// Build the series for one district row. The row is only read.
pub fn extract(row: &Row) -> Series {
    let mut periods: Vec<(&str, &Value)> = row.fields().filter(|(k, _)| *k != NAME_FIELD).collect();

    // Stable: keys without a leading integer keep their native order, after the rest.
    periods.sort_by_key(|(k, _)| match period_number(k) {
        Some(n) => (false, n),
        None => (true, 0),
    });

    let points = periods
        .into_iter()
        .map(|(k, v)| SeriesPoint { label: format_period_label(k), reading: Reading::from_value(v) })
        .collect();

    Series { points }
}

/// Integer value of the key's leading digits (`"20242025"` → 20242025).
pub fn period_number(key: &str) -> Option<u64> {
    let t = key.trim();
    let end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
    t[..end].parse().ok()
}

/// `"20242025"` → `"2024-2025"`. Keys that are not 8 characters pass through.
pub fn format_period_label(key: &str) -> String {
    if key.chars().count() != PERIOD_KEY_LEN {
        if !key.is_empty() {
            logd!("Series: period key {:?} left unformatted", key);
        }
        return s!(key);
    }
    let mid = key
        .char_indices()
        .nth(PERIOD_KEY_LEN / 2)
        .map(|(i, _)| i)
        .unwrap_or(key.len());
    join!(&key[..mid], "-", &key[mid..])
}

/// Suggested y-axis maximum: largest present value plus headroom, or the
/// fixed fallback when nothing is present.
pub fn axis_upper_bound(values: &[Option<f64>]) -> f64 {
    values
        .iter()
        .flatten()
        .copied()
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .map(|m| m + AXIS_HEADROOM)
        .unwrap_or(FALLBACK_AXIS_MAX)
}
