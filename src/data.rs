// src/data.rs
//
// Canonical in-memory district data.
//
// - Value:   one coerced cell (numeric-looking text becomes a number).
// - Row:     ordered (column, value) pairs for one district; read-only once built.
// - Dataset: headers + rows, loaded once and never mutated afterwards.

use std::fmt;

use crate::config::consts::NAME_FIELD;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Empty,
}

impl Value {
    /// Type coercion applied to every parsed cell.
    pub fn coerce(cell: &str) -> Self {
        let t = cell.trim();
        if t.is_empty() {
            return Value::Empty;
        }
        if looks_numeric(t) {
            if let Ok(n) = t.parse::<f64>() {
                if n.is_finite() {
                    return Value::Number(n);
                }
            }
        }
        Value::Text(s!(cell))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self { Value::Text(s) => Some(s), _ => None }
    }
}

/// Digits with an optional sign, decimal point and exponent. Rejects the
/// words `f64::from_str` also accepts ("inf", "NaN").
fn looks_numeric(t: &str) -> bool {
    t.bytes().any(|b| b.is_ascii_digit())
        && t.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Empty => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new(fields: Vec<(String, Value)>) -> Self { Self { fields } }

    /// Build from parallel header/cell slices. Cells past the header are
    /// dropped; columns past the end of a short row are `Empty`.
    pub fn from_cells(headers: &[String], cells: &[String]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let v = cells.get(i).map(|c| Value::coerce(c)).unwrap_or(Value::Empty);
                (h.clone(), v)
            })
            .collect();
        Self { fields }
    }

    /// The district name, if the row has a usable (non-empty text) one.
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_FIELD)
            .and_then(Value::as_text)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Fields in native column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn from_table(headers: Vec<String>, table: Vec<Vec<String>>) -> Self {
        let rows = table.iter().map(|cells| Row::from_cells(&headers, cells)).collect();
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }

    pub fn has_name_column(&self) -> bool {
        self.headers.iter().any(|h| h == NAME_FIELD)
    }

    /// Rows the matcher can ever return.
    pub fn named_count(&self) -> usize {
        self.rows.iter().filter(|r| r.name().is_some()).count()
    }
}
