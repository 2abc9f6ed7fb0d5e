// src/loader.rs
//
// One-shot dataset load: fetch text (file or HTTP), parse CSV, coerce cells.
// `spawn_load` runs the same thing on a worker thread and hands the result
// back over a channel so the UI never blocks.

use std::{error::Error, fmt, fs, io, sync::mpsc, thread};

use crate::config::consts::{DATA_SEP, NAME_FIELD};
use crate::config::options::DataSource;
use crate::core::net;
use crate::csv::{parse_rows, split_header};
use crate::data::Dataset;
use crate::progress::{NullProgress, Progress};

#[derive(Debug)]
pub enum LoadError {
    Read { source: String, err: io::Error },
    Fetch { source: String, msg: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { source, err } => write!(f, "could not read {source}: {err}"),
            LoadError::Fetch { source, msg } => write!(f, "could not fetch {source}: {msg}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Read { err, .. } => Some(err),
            LoadError::Fetch { .. } => None,
        }
    }
}

pub type LoadResult = Result<Dataset, LoadError>;

/// Fetch the raw text of the source.
pub fn fetch_text(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => fs::read_to_string(path)
            .map_err(|err| LoadError::Read { source: source.to_string(), err }),
        DataSource::Http { host, port, path } => net::http_get(host, *port, path)
            .map_err(|e| LoadError::Fetch { source: source.to_string(), msg: e.to_string() }),
    }
}

/// Parse CSV text (first line = headers) into a dataset.
pub fn parse_dataset(text: &str) -> Dataset {
    let (headers, table) = split_header(parse_rows(text, DATA_SEP));
    let ds = Dataset::from_table(headers, table);

    if ds.header_count() > 0 && !ds.has_name_column() {
        logw!("Load: no {:?} column; no district will match", NAME_FIELD);
    }
    ds
}

pub fn load(source: &DataSource, progress: Option<&mut dyn Progress>) -> LoadResult {
    match progress {
        Some(p) => load_with(source, p),
        None => load_with(source, &mut NullProgress),
    }
}

fn load_with(source: &DataSource, prog: &mut dyn Progress) -> LoadResult {
    let what = source.to_string();
    prog.begin(&what);
    logf!("Load: Begin source={}", what);

    let text = match fetch_text(source) {
        Ok(t) => t,
        Err(e) => {
            loge!("Load: {}", e);
            prog.finish(false);
            return Err(e);
        }
    };
    prog.log(&format!("Parsing {} bytes", text.len()));

    let ds = parse_dataset(&text);
    logf!(
        "Load: OK rows={} headers={} named={}",
        ds.row_count(),
        ds.header_count(),
        ds.named_count()
    );
    prog.log(&format!("Loaded {} districts", ds.named_count()));
    prog.finish(true);
    Ok(ds)
}

/// Load on a worker thread. `notify` runs after the result is sent
/// (e.g. to wake the UI).
pub fn spawn_load<P, N>(source: DataSource, mut progress: P, notify: N) -> mpsc::Receiver<LoadResult>
where
    P: Progress + Send + 'static,
    N: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let res = load(&source, Some(&mut progress));
        if tx.send(res).is_err() {
            logd!("Load: receiver dropped before result arrived");
        }
        notify();
    });
    rx
}
