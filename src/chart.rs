// src/chart.rs
//
// The line chart as a held resource. `ChartSlot` owns at most one live
// `ChartHandle`; installing a new one releases the old one first, so
// re-selecting districts never leaves stale chart state behind.

use crate::config::consts::SERIES_LABEL;
use crate::series::Series;

/// Everything the renderer needs, oldest period first.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartModel {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub y_max: f64,
}

impl ChartModel {
    pub fn from_series(series: &Series) -> Self {
        Self {
            title: s!(SERIES_LABEL),
            labels: series.labels().into_iter().map(String::from).collect(),
            values: series.chart_values(),
            y_max: series.axis_max(),
        }
    }

    /// Runs of consecutive present points; a gap ends a run.
    pub fn segments(&self) -> Vec<Vec<(usize, f64)>> {
        let mut out = Vec::new();
        let mut run = Vec::new();
        for (i, v) in self.values.iter().enumerate() {
            match v {
                Some(y) => run.push((i, *y)),
                None if !run.is_empty() => out.push(std::mem::take(&mut run)),
                None => {}
            }
        }
        if !run.is_empty() {
            out.push(run);
        }
        out
    }

    /// Tooltip text for a point, `None` over a gap.
    pub fn tooltip(&self, ix: usize) -> Option<String> {
        let y = (*self.values.get(ix)?)?;
        Some(format!("{}: {}%", self.title, y))
    }
}

/// A live chart. Only `ChartSlot` creates or releases these.
#[derive(Debug)]
pub struct ChartHandle {
    id: u64,
    model: ChartModel,
}

impl ChartHandle {
    pub fn id(&self) -> u64 { self.id }
    pub fn model(&self) -> &ChartModel { &self.model }
}

#[derive(Debug, Default)]
pub struct ChartSlot {
    active: Option<ChartHandle>,
    acquired: u64,
    released: u64,
}

impl ChartSlot {
    /// Release the current chart (if any), then acquire one for `model`.
    pub fn install(&mut self, model: ChartModel) -> &ChartHandle {
        self.clear();
        self.acquired += 1;
        let handle = ChartHandle { id: self.acquired, model };
        logd!("Chart: acquired #{} ({} points)", handle.id, handle.model.values.len());
        self.active.insert(handle)
    }

    /// Release the current chart, if any.
    pub fn clear(&mut self) {
        if let Some(old) = self.active.take() {
            self.release(old);
        }
    }

    fn release(&mut self, handle: ChartHandle) {
        self.released += 1;
        logd!("Chart: released #{}", handle.id);
        drop(handle);
    }

    pub fn active(&self) -> Option<&ChartHandle> { self.active.as_ref() }

    /// Handles acquired and not yet released (0 or 1).
    pub fn live(&self) -> u64 { self.acquired - self.released }
}
