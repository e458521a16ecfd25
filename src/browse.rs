//! Paging through raw rows of a trip table.

use crate::errors::Result;
use itertools::Itertools;
use polars::prelude::*;

/// Rows revealed per request.
pub const PAGE_SIZE: usize = 5;

/// Number of windows needed to reveal a table of `height` rows.
pub fn window_count(height: usize) -> usize {
    height.div_ceil(PAGE_SIZE)
}

/// The `index`-th window of the table, in original row and column order.
/// The final window may hold fewer than [PAGE_SIZE] rows; past the end
/// the result is `None`.
pub fn window(df: &DataFrame, index: usize) -> Option<DataFrame> {
    let offset = index * PAGE_SIZE;
    if offset >= df.height() {
        return None;
    }
    Some(df.slice(offset as i64, PAGE_SIZE))
}

/// Render a window as an aligned plain-text table with a header row.
pub fn render_window(df: &DataFrame) -> Result<String> {
    let columns = df.get_column_names_str();
    let series = columns
        .iter()
        .map(|name| df.column(name).map(|c| c.as_materialized_series()))
        .collect::<PolarsResult<Vec<_>>>()?;
    let mut widths = columns.iter().map(|name| name.len()).collect_vec();
    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let mut cells = Vec::with_capacity(series.len());
        for (j, s) in series.iter().enumerate() {
            let cell = cell_text(s.get(i)?);
            widths[j] = widths[j].max(cell.len());
            cells.push(cell);
        }
        rows.push(cells);
    }
    let mut out = pad_row(&columns, &widths);
    for cells in &rows {
        out.push('\n');
        out.push_str(&pad_row(cells, &widths));
    }
    Ok(out)
}

fn cell_text(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_owned(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => format!("{other}"),
    }
}

fn pad_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .join("  ");
    line.trim_end().to_owned()
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_frame(height: usize) -> DataFrame {
        let ids = (0..height as i64).collect_vec();
        let stations = (0..height).map(|i| format!("Station {i}")).collect_vec();
        df!("Id" => &ids, "Start Station" => &stations).unwrap()
    }

    #[test]
    fn window_counts() {
        assert_eq!(window_count(0), 0);
        assert_eq!(window_count(1), 1);
        assert_eq!(window_count(5), 1);
        assert_eq!(window_count(6), 2);
        assert_eq!(window_count(12), 3);
    }

    #[test]
    fn windows_cover_the_table_in_order() {
        let df = sample_frame(12);
        let w0 = window(&df, 0).unwrap();
        let w1 = window(&df, 1).unwrap();
        let w2 = window(&df, 2).unwrap();
        assert_eq!(w0.height(), 5);
        assert_eq!(w1.height(), 5);
        assert_eq!(w2.height(), 2);
        let first = w1
            .column("Id")
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .next()
            .unwrap();
        assert_eq!(first, 5);
    }

    #[test]
    fn window_past_the_end_is_none() {
        let df = sample_frame(12);
        assert!(window(&df, 3).is_none());
        assert!(window(&df, 100).is_none());
        let empty = sample_frame(0);
        assert!(window(&empty, 0).is_none());
    }

    #[test]
    fn rendering_aligns_columns() {
        let df = sample_frame(2);
        let text = render_window(&df).unwrap();
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Id  Start Station");
        assert_eq!(lines[1], "0   Station 0");
        assert_eq!(lines[2], "1   Station 1");
    }

    #[test]
    fn rendering_blanks_missing_values() {
        let df = df!(
            "Gender" => &[Some("Male"), None],
            "Birth Year" => &[Some(1989.0), None],
        )
        .unwrap();
        let text = render_window(&df).unwrap();
        // the all-blank row trims to an empty line
        let lines = text.split('\n').collect_vec();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Gender  Birth Year");
        assert!(lines[1].starts_with("Male"));
        assert_eq!(lines[2], "");
    }
}
