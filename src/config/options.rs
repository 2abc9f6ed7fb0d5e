// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: DataSource,
    pub export: ExportOptions,
}

/// Where the district table comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http { host: String, port: u16, path: String },
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

impl DataSource {
    /// Parse a user-supplied location. `http://host[:port]/path` becomes an
    /// HTTP source; anything else is treated as a local path.
    pub fn parse(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let s = text.trim();
        if s.is_empty() {
            return Err("Empty data source".into());
        }
        if has_scheme(s, "https://") {
            return Err(format!("HTTPS is not supported: {s}").into());
        }
        if has_scheme(s, "http://") {
            let rest = &s["http://".len()..];
            let (authority, path) = match rest.find('/') {
                Some(i) => (&rest[..i], &rest[i..]),
                None => (rest, "/"),
            };
            let (host, port) = match authority.rsplit_once(':') {
                Some((h, p)) => (h, p.parse::<u16>().map_err(|_| format!("Invalid port: {p}"))?),
                None => (authority, 80),
            };
            if host.is_empty() {
                return Err(format!("Missing host: {s}").into());
            }
            return Ok(DataSource::Http { host: s!(host), port, path: s!(path) });
        }
        Ok(DataSource::File(PathBuf::from(s)))
    }
}

fn has_scheme(s: &str, scheme: &str) -> bool {
    s.get(..scheme.len()).is_some_and(|p| p.eq_ignore_ascii_case(scheme))
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(p) => write!(f, "{}", p.display()),
            DataSource::Http { host, port: 80, path } => write!(f, "http://{host}{path}"),
            DataSource::Http { host, port, path } => write!(f, "http://{host}:{port}{path}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => DATA_SEP, ExportFormat::Tsv => '\t' }
    }
}

/// How the CLI prints a district's table.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_is_file_source() {
        let src = DataSource::parse("data/district_data.csv").unwrap();
        assert_eq!(src, DataSource::File(PathBuf::from("data/district_data.csv")));
    }

    #[test]
    fn http_url_splits_host_port_path() {
        let src = DataSource::parse("http://example.org:8080/d/district_data.csv").unwrap();
        assert_eq!(
            src,
            DataSource::Http { host: s!("example.org"), port: 8080, path: s!("/d/district_data.csv") }
        );
        assert_eq!(src.to_string(), "http://example.org:8080/d/district_data.csv");
    }

    #[test]
    fn http_url_defaults_port_and_path() {
        let src = DataSource::parse("HTTP://example.org").unwrap();
        assert_eq!(src, DataSource::Http { host: s!("example.org"), port: 80, path: s!("/") });
        assert_eq!(src.to_string(), "http://example.org/");
    }

    #[test]
    fn https_and_bad_ports_are_rejected() {
        assert!(DataSource::parse("https://example.org/x.csv").is_err());
        assert!(DataSource::parse("http://example.org:99999/x.csv").is_err());
        assert!(DataSource::parse("   ").is_err());
    }
}
