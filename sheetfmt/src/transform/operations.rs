//! Row transformation stages.
//!
//! Each stage is a no-op when its option is not configured. Column indices
//! are 0-based and come from a validated [`crate::validation::TransformPlan`].

use std::collections::HashSet;

use crate::config::DISTINCT_PLACEHOLDER;

/// One row of string cells
pub type Row = Vec<String>;

/// Keep the first row of every group sharing the same values on `key_columns`.
///
/// Order of the retained rows is preserved. An empty key disables the stage.
pub fn dedup_rows(rows: Vec<Row>, key_columns: &[usize]) -> Vec<Row> {
    if key_columns.is_empty() {
        return rows;
    }

    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| {
            let key = key_columns.iter().map(|&c| row[c].clone()).collect();
            seen.insert(key)
        })
        .collect()
}

/// Force `value` into `column` of every row, pairs applied in order.
pub fn overwrite_columns(rows: &mut [Row], overwrites: &[(usize, String)]) {
    if overwrites.is_empty() {
        return;
    }

    for row in rows.iter_mut() {
        for (column, value) in overwrites {
            row[*column] = value.clone();
        }
    }
}

/// Distinct values of `column` in first-seen order.
pub fn distinct_values(rows: &[Row], column: usize) -> Vec<String> {
    let mut seen: HashSet<&String> = HashSet::new();
    rows.iter()
        .map(|row| &row[column])
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

/// Cut `rows` into consecutive segments of `size` rows.
///
/// Tables that fit in one segment, and a `size` of 0, stay whole.
pub fn split_rows(rows: Vec<Row>, size: usize) -> Vec<Vec<Row>> {
    if size == 0 || rows.len() <= size {
        return vec![rows];
    }

    let mut segments = Vec::with_capacity(rows.len().div_ceil(size));
    let mut rest = rows;
    while rest.len() > size {
        let tail = rest.split_off(size);
        segments.push(rest);
        rest = tail;
    }
    segments.push(rest);
    segments
}

/// Substitute the distinct values, one per line, for every placeholder.
pub fn render_message(template: &str, aggregate: &[String]) -> String {
    let values = format!("\n{}\n", aggregate.join("\n"));
    template.replace(DISTINCT_PLACEHOLDER, &values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn products() -> Vec<Row> {
        vec![
            row(&["1", "p1", "20"]),
            row(&["2", "p3", "40"]),
            row(&["3", "p3", "80"]),
            row(&["4", "p3", "80"]),
        ]
    }

    #[test]
    fn test_dedup_multi_column_key() {
        let result = dedup_rows(products(), &[1, 2]);
        assert_eq!(
            result,
            vec![row(&["1", "p1", "20"]), row(&["2", "p3", "40"]), row(&["3", "p3", "80"])]
        );
    }

    #[test]
    fn test_dedup_single_column_keeps_earliest() {
        let result = dedup_rows(products(), &[1]);
        assert_eq!(result, vec![row(&["1", "p1", "20"]), row(&["2", "p3", "40"])]);
    }

    #[test]
    fn test_dedup_empty_key_is_noop() {
        assert_eq!(dedup_rows(products(), &[]), products());
    }

    #[test]
    fn test_dedup_key_does_not_join_cells() {
        // "a"+"bc" and "ab"+"c" concatenate alike but are different keys
        let rows = vec![row(&["a", "bc"]), row(&["ab", "c"])];
        assert_eq!(dedup_rows(rows.clone(), &[0, 1]), rows);
    }

    #[test]
    fn test_dedup_repeated_key_column() {
        let result = dedup_rows(products(), &[1, 1]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_overwrite() {
        let mut rows = products();
        overwrite_columns(&mut rows, &[(1, "computer".into()), (2, "9999".into())]);
        for (i, r) in rows.iter().enumerate() {
            assert_eq!(r[0], (i + 1).to_string());
            assert_eq!(r[1], "computer");
            assert_eq!(r[2], "9999");
        }
    }

    #[test]
    fn test_overwrite_last_pair_wins() {
        let mut rows = products();
        overwrite_columns(&mut rows, &[(0, "first".into()), (0, "second".into())]);
        assert!(rows.iter().all(|r| r[0] == "second"));
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let rows = vec![row(&["b"]), row(&["a"]), row(&["b"]), row(&["c"]), row(&["a"])];
        assert_eq!(distinct_values(&rows, 0), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_distinct_values_exact_match() {
        let rows = vec![row(&["A"]), row(&["a"]), row(&["a "])];
        assert_eq!(distinct_values(&rows, 0).len(), 3);
        assert!(distinct_values(&[], 0).is_empty());
    }

    #[test]
    fn test_split_disabled() {
        assert_eq!(split_rows(products(), 0), vec![products()]);
    }

    #[test]
    fn test_split_not_needed() {
        assert_eq!(split_rows(products(), 4), vec![products()]);
        assert_eq!(split_rows(products(), 5), vec![products()]);
    }

    #[test]
    fn test_split_exact_multiple() {
        let segments = split_rows(products(), 2);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], products()[..2].to_vec());
        assert_eq!(segments[1], products()[2..].to_vec());
    }

    #[test]
    fn test_split_with_remainder() {
        let segments = split_rows(products(), 3);
        assert_eq!(segments.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 1]);

        let segments = split_rows(products(), 1);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments.concat(), products());
    }

    #[test]
    fn test_split_empty_table() {
        let segments = split_rows(Vec::new(), 2);
        assert_eq!(segments, vec![Vec::<Row>::new()]);
    }

    #[test]
    fn test_message_with_placeholder() {
        let message = render_message(
            "output {$distinct_column} outputs.",
            &["p1".to_string(), "p3".to_string()],
        );
        assert_eq!(message, "output \np1\np3\n outputs.");
    }

    #[test]
    fn test_message_without_placeholder() {
        assert_eq!(render_message("output message", &["a".to_string()]), "output message");
    }

    #[test]
    fn test_message_every_placeholder_replaced() {
        let message = render_message("{$distinct_column}|{$distinct_column}", &["a".into(), "b".into()]);
        assert_eq!(message, "\na\nb\n|\na\nb\n");
    }

    #[test]
    fn test_message_empty_aggregate() {
        assert_eq!(render_message("[{$distinct_column}]", &[]), "[\n\n]");
    }
}
