// src/search.rs
//
// Name matcher behind the suggestion list. Pure: reads the row snapshot,
// never touches UI state.

use crate::config::consts::MAX_SUGGESTIONS;
use crate::data::Row;

/// Positions (into `rows`) of the first `MAX_SUGGESTIONS` rows whose name
/// contains `query`, ignoring case. Original row order is kept.
/// A blank query matches nothing.
pub fn matching_indices(rows: &[Row], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    rows.iter()
        .enumerate()
        .filter(|(_, r)| {
            r.name()
                .map(|n| n.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .map(|(i, _)| i)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Matching rows themselves.
pub fn match_rows<'a>(rows: &'a [Row], query: &str) -> Vec<&'a Row> {
    matching_indices(rows, query).into_iter().map(|i| &rows[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;

    fn row(name: &str) -> Row {
        Row::new(vec![
            (s!("clean_name"), Value::Text(s!(name))),
            (s!("20242025"), Value::Number(1.0)),
        ])
    }

    fn names<'a>(rows: &[&'a Row]) -> Vec<&'a str> {
        rows.iter().filter_map(|r| r.name()).collect()
    }

    #[test]
    fn empty_or_blank_query_matches_nothing() {
        let rows = vec![row("Lincoln"), row("Adams")];
        assert!(match_rows(&rows, "").is_empty());
        assert!(match_rows(&rows, "   ").is_empty());
    }

    #[test]
    fn case_insensitive_substring() {
        let rows = vec![row("Lincoln Elementary"), row("Adams"), row("Old LINCOLN Road")];
        let got = match_rows(&rows, "LiNc");
        assert_eq!(names(&got), vec!["Lincoln Elementary", "Old LINCOLN Road"]);
        for r in &got {
            assert!(r.name().unwrap().to_lowercase().contains("linc"));
        }
    }

    #[test]
    fn capped_at_five_in_original_order() {
        let rows = vec![
            row("Lincoln Elementary"),
            row("Adams"),
            row("Lincoln Middle"),
            row("Lincoln High"),
            row("North Lincoln"),
            row("Lincolnshire"),
            row("Lincoln County"),
        ];
        let got = match_rows(&rows, "linc");
        assert_eq!(got.len(), 5);
        assert_eq!(
            names(&got),
            vec!["Lincoln Elementary", "Lincoln Middle", "Lincoln High", "North Lincoln", "Lincolnshire"]
        );
        assert_eq!(matching_indices(&rows, "linc"), vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn rows_without_usable_name_never_match() {
        let rows = vec![
            Row::new(vec![(s!("20242025"), Value::Number(3.0))]),
            Row::new(vec![(s!("clean_name"), Value::Number(42.0))]),
            Row::new(vec![(s!("clean_name"), Value::Empty)]),
            row("42nd Street"),
        ];
        assert_eq!(matching_indices(&rows, "4"), vec![3]);
        assert_eq!(matching_indices(&rows, "2"), vec![3]);
    }

    #[test]
    fn query_is_trimmed() {
        let rows = vec![row("Adams")];
        assert_eq!(matching_indices(&rows, "  ada "), vec![0]);
    }

    #[test]
    fn no_match_is_empty() {
        let rows = vec![row("Adams")];
        assert!(matching_indices(&rows, "zzz").is_empty());
    }
}
