// src/cli.rs
use std::{env, error::Error, io::{self, Write}};

use crate::config::consts::SERIES_LABEL;
use crate::config::options::{AppOptions, DataSource, ExportFormat};
use crate::controller::{Controller, Selection};
use crate::csv::rows_to_string;
use crate::loader;
use crate::progress::Progress;

const BAR_WIDTH: usize = 40;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub options: AppOptions,
    pub search: Option<String>,
    pub show: Option<String>,
    pub list: bool,
    pub chart: bool,
    pub help: bool,
}

/// Load status on stderr so stdout stays clean for piping.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, what: &str) { eprintln!("Loading {what}…"); }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    let stdout = io::stdout();
    execute(&params, &mut stdout.lock())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--data" => {
                let v = args.next().ok_or("Missing value for --data")?;
                params.options.source = DataSource::parse(&v)?; }
            "-s" | "--search" => params.search = Some(args.next().ok_or("Missing search query")?),
            "--show" => params.show = Some(args.next().ok_or("Missing district name")?),
            "-l" | "--list" => params.list = true,
            "--chart" => params.chart = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.options.export.include_headers = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !params.help && !params.list && params.search.is_none() && params.show.is_none() {
        return Err("Nothing to do: give --search, --show or --list (see --help)".into());
    }
    Ok(params)
}

pub fn execute<W: Write>(params: &Params, out: &mut W) -> Result<(), Box<dyn Error>> {
    let ds = loader::load(&params.options.source, Some(&mut StderrProgress))?;
    let mut ctl = Controller::with_dataset(ds);

    if params.list {
        for name in ctl.rows().iter().filter_map(|r| r.name()) {
            writeln!(out, "{name}")?;
        }
    }

    if let Some(q) = &params.search {
        ctl.set_query(q);
        let names = ctl.suggestion_names();
        if names.is_empty() {
            eprintln!("No districts match {q:?}");
        }
        for name in names {
            writeln!(out, "{name}")?;
        }
    }

    if let Some(name) = &params.show {
        let sel = ctl
            .select_by_name(name)
            .ok_or_else(|| format!("No district matches {name:?}"))?;
        write_selection(params, sel, out)?;
    }

    out.flush()?;
    Ok(())
}

fn write_selection<W: Write>(params: &Params, sel: &Selection, out: &mut W) -> Result<(), Box<dyn Error>> {
    let export = &params.options.export;
    let headers = ["School Year", "Rate"];
    let rows: Vec<Vec<String>> = sel
        .series
        .table_rows()
        .into_iter()
        .map(|(label, text)| vec![label, text])
        .collect();
    let header_line: Vec<String> = headers.iter().map(|h| s!(*h)).collect();

    writeln!(out, "# {}", sel.name)?;
    write!(
        out,
        "{}",
        rows_to_string(export.include_headers.then_some(&header_line[..]), &rows, export.format.delim())
    )?;

    if params.chart {
        writeln!(out)?;
        write!(out, "{}", chart_text(sel))?;
    }
    Ok(())
}

/// Oldest-first bar rendering of the chart series; gaps print as blanks.
pub fn chart_text(sel: &Selection) -> String {
    let y_max = sel.series.axis_max().max(1.0);
    let mut s = format!("{} (0–{}%)\n", SERIES_LABEL, y_max);
    for p in sel.series.chronological() {
        let line = match p.reading.value() {
            Some(v) => {
                let len = ((v / y_max).clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
                format!("{:>10} |{:<w$} {}\n", p.label, "#".repeat(len), p.reading, w = BAR_WIDTH)
            }
            None => format!("{:>10} |{:<w$} {}\n", p.label, "", p.reading, w = BAR_WIDTH),
        };
        s.push_str(&line);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> { v.iter().map(|s| s!(*s)).collect() }

    #[test]
    fn parses_show_with_format_and_source() {
        let p = parse_args(args(&["--data", "x.csv", "--show", "Lincoln", "--format", "tsv", "--include-headers", "--chart"])).unwrap();
        assert_eq!(p.options.source, DataSource::File("x.csv".into()));
        assert_eq!(p.show.as_deref(), Some("Lincoln"));
        assert_eq!(p.options.export.format, ExportFormat::Tsv);
        assert!(p.options.export.include_headers);
        assert!(p.chart);
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["--format", "json", "--list"])).is_err());
        assert!(parse_args(args(&["--search"])).is_err());
        assert!(parse_args(args(&["--help"])).unwrap().help);
    }
}
