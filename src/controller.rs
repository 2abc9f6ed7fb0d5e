// src/controller.rs
//
// Application state for the lookup widget, owned by whichever frontend
// drives it (GUI `App` or the CLI).
//
// - rows:        the district collection; written once when the load lands.
// - query:       current search text; suggestions are recomputed on change.
// - selection:   the chosen district and its freshly extracted series.
// - chart:       the single live chart resource.

use crate::chart::{ChartHandle, ChartModel, ChartSlot};
use crate::data::{Dataset, Row};
use crate::loader::{LoadError, LoadResult};
use crate::search;
use crate::series::{self, Series};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Permanent for the session; the message is shown once, inline.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub name: String,
    pub series: Series,
}

#[derive(Debug)]
pub struct Controller {
    rows: Vec<Row>,
    load: LoadState,
    query: String,
    suggestions: Vec<usize>,
    selection: Option<Selection>,
    chart: ChartSlot,
}

impl Default for Controller {
    fn default() -> Self { Self::new() }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            load: LoadState::Loading,
            query: s!(),
            suggestions: Vec::new(),
            selection: None,
            chart: ChartSlot::default(),
        }
    }

    /// Controller over an already-loaded dataset.
    pub fn with_dataset(ds: Dataset) -> Self {
        let mut c = Self::new();
        c.finish_load(Ok(ds));
        c
    }

    /// Apply the load result. Only the first call has any effect.
    pub fn finish_load(&mut self, res: LoadResult) {
        if self.load != LoadState::Loading {
            logw!("Controller: ignoring second load result (state={:?})", self.load);
            return;
        }
        match res {
            Ok(ds) => {
                logf!("Controller: {} rows ready", ds.row_count());
                self.rows = ds.rows;
                self.load = LoadState::Ready;
                // Text typed while loading is not re-matched; the next keystroke is.
                self.suggestions.clear();
            }
            Err(e) => self.fail_load(&e),
        }
    }

    fn fail_load(&mut self, e: &LoadError) {
        loge!("Controller: load failed: {}", e);
        self.load = LoadState::Failed(format!("Error loading district data: {e}"));
    }

    pub fn load_state(&self) -> &LoadState { &self.load }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn rows(&self) -> &[Row] { &self.rows }

    pub fn query(&self) -> &str { &self.query }

    /// New search text (one keystroke).
    pub fn set_query(&mut self, text: &str) {
        if self.query == text {
            return;
        }
        self.query = s!(text);
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = search::matching_indices(&self.rows, &self.query);
    }

    /// Current suggestion rows, in display order.
    pub fn suggestions(&self) -> impl Iterator<Item = &Row> {
        self.suggestions.iter().filter_map(|&i| self.rows.get(i))
    }

    pub fn suggestion_names(&self) -> Vec<&str> {
        self.suggestions().filter_map(Row::name).collect()
    }

    pub fn has_suggestions(&self) -> bool { !self.suggestions.is_empty() }

    /// Close the list without selecting (click outside).
    pub fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
    }

    /// Pick the `n`th suggestion: the name goes into the search box, the
    /// suggestions close, and the detail view and chart are rebuilt.
    pub fn select_suggestion(&mut self, n: usize) -> Option<&Selection> {
        let ix = *self.suggestions.get(n)?;
        self.select_row(ix)
    }

    /// Select by row position in the collection.
    pub fn select_row(&mut self, ix: usize) -> Option<&Selection> {
        let row = self.rows.get(ix)?;
        let name = s!(row.name()?);
        let series = series::extract(row);

        logf!("Controller: selected {:?} ({} periods)", name, series.len());

        self.chart.install(ChartModel::from_series(&series));
        self.query = name.clone();
        self.suggestions.clear();
        self.selection = Some(Selection { name, series });
        self.selection.as_ref()
    }

    /// Case-insensitive exact name lookup, falling back to the first match.
    pub fn select_by_name(&mut self, name: &str) -> Option<&Selection> {
        let wanted = name.trim().to_lowercase();
        let exact = self.rows.iter().position(|r| {
            r.name().map(|n| n.trim().to_lowercase() == wanted).unwrap_or(false)
        });
        let ix = exact.or_else(|| search::matching_indices(&self.rows, name).first().copied())?;
        self.select_row(ix)
    }

    pub fn selection(&self) -> Option<&Selection> { self.selection.as_ref() }

    pub fn chart(&self) -> Option<&ChartHandle> { self.chart.active() }

    pub fn live_charts(&self) -> u64 { self.chart.live() }

    /// Drop the detail view and release its chart.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.chart.clear();
    }
}
