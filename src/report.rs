//! The flag report table.
//!
//! A report is built from [`ReportRow`]s with the full five-column header,
//! then post-processed by [`Report::drop_column_if_empty`] before rendering.

use std::fmt;

use comfy_table::{presets, CellAlignment, ContentArrangement, Table, TableComponent};

/// Column titles, in order.
pub const HEADER: [&str; 5] = [
    "Flag",
    "Environment Var",
    "Default Value",
    "Current Value",
    "Description",
];

/// Position of the "Default Value" column in a full report.
pub const DEFAULT_VALUE_COLUMN: usize = 2;

/// One flag's line in the report. Values are stored as displayed, so
/// wrapped cells already contain their line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub flag: String,
    pub env_var: String,
    pub default: String,
    pub current: String,
    pub usage: String,
}

impl From<ReportRow> for Vec<String> {
    fn from(row: ReportRow) -> Self {
        vec![row.flag, row.env_var, row.default, row.current, row.usage]
    }
}

/// A header plus rows, every row as wide as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Report {
    /// Builds a full report with the [`HEADER`] columns.
    pub fn from_rows(rows: impl IntoIterator<Item = ReportRow>) -> Self {
        Self {
            header: HEADER.iter().map(|h| h.to_string()).collect(),
            rows: rows.into_iter().map(Vec::from).collect(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Removes column `index` from the header and every row when `predicate`
    /// holds for that cell in every row. A report without rows always
    /// drops the column. Out-of-range indexes leave the report unchanged.
    pub fn drop_column_if(mut self, index: usize, predicate: impl Fn(&str) -> bool) -> Self {
        if index >= self.width() || !self.rows.iter().all(|row| predicate(row[index].as_str())) {
            return self;
        }

        self.header.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        self
    }

    /// Drops column `index` when it is empty in every row.
    pub fn drop_column_if_empty(self, index: usize) -> Self {
        self.drop_column_if(index, str::is_empty)
    }

    /// Renders the table left-aligned and without outer borders.
    ///
    /// Columns are separated by `|` with a `-` rule under the header. Cells
    /// may span several lines; a row is as tall as its tallest cell.
    /// Trailing whitespace is trimmed and the last line has no newline.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_style(TableComponent::VerticalLines, '|')
            .set_style(TableComponent::HeaderLines, '-')
            .set_style(TableComponent::MiddleHeaderIntersections, '+')
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(self.header.clone());

        for row in &self.rows {
            table.add_row(row.clone());
        }
        for column in table.column_iter_mut() {
            column.set_cell_alignment(CellAlignment::Left);
        }
        table.trim_fmt()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(flag: &str, env_var: &str, default: &str, current: &str, usage: &str) -> ReportRow {
        ReportRow {
            flag: flag.into(),
            env_var: env_var.into(),
            default: default.into(),
            current: current.into(),
            usage: usage.into(),
        }
    }

    #[test]
    fn test_from_rows_has_full_header() {
        let report = Report::from_rows([row("port", "PORT", "80", "80", "listen port")]);

        assert_eq!(report.header(), HEADER);
        assert_eq!(report.rows()[0], ["port", "PORT", "80", "80", "listen port"]);
    }

    #[test]
    fn test_drop_empty_default_column() {
        let report = Report::from_rows([
            row("host", "HOST", "", "db", "host"),
            row("user", "USER", "", "", "user"),
        ])
        .drop_column_if_empty(DEFAULT_VALUE_COLUMN);

        assert_eq!(report.width(), 4);
        assert_eq!(
            report.header(),
            ["Flag", "Environment Var", "Current Value", "Description"]
        );
        assert_eq!(report.rows()[0], ["host", "HOST", "db", "host"]);
        assert!(report.rows().iter().all(|r| r.len() == report.width()));
    }

    #[test]
    fn test_keep_default_column_when_any_set() {
        let report = Report::from_rows([
            row("host", "HOST", "", "db", "host"),
            row("port", "PORT", "5432", "5432", "port"),
        ])
        .drop_column_if_empty(DEFAULT_VALUE_COLUMN);

        assert_eq!(report.width(), 5);
        assert_eq!(report.header()[DEFAULT_VALUE_COLUMN], "Default Value");
    }

    #[test]
    fn test_drop_column_without_rows() {
        let report = Report::from_rows([]).drop_column_if_empty(DEFAULT_VALUE_COLUMN);
        assert_eq!(report.width(), 4);
    }

    #[test]
    fn test_drop_column_out_of_range_is_noop() {
        let report = Report::from_rows([row("a", "A", "", "", "")]).drop_column_if_empty(9);
        assert_eq!(report.width(), 5);
    }

    #[test]
    fn test_drop_column_custom_predicate() {
        let report = Report::from_rows([
            row("a", "A", "", "", "n/a"),
            row("b", "B", "", "", "n/a"),
        ])
        .drop_column_if(4, |cell| cell == "n/a");

        assert_eq!(report.header().last().unwrap(), "Current Value");
    }

    fn lines(rendered: &str) -> Vec<&str> {
        rendered.lines().collect()
    }

    #[test]
    fn test_render_left_aligned_without_border() {
        let report = Report::from_rows([
            row("port", "PORT", "8080", "9090", "listen port"),
            row("db-host", "DB_HOST", "", "", "database host"),
        ]);
        let rendered = report.render();
        let lines = lines(&rendered);

        assert_eq!(lines.len(), 4);

        let header: Vec<&str> = lines[0].split('|').map(str::trim).collect();
        assert_eq!(header, HEADER);

        assert!(lines[1].chars().all(|c| c == '-' || c == '+'));
        assert_eq!(lines[1].matches('+').count(), 4);

        let port: Vec<&str> = lines[2].split('|').map(str::trim).collect();
        assert_eq!(port, ["port", "PORT", "8080", "9090", "listen port"]);

        // Left alignment: every cell of a column starts at the same offset.
        let column = |line: &str| line.find("Default").or_else(|| line.find("8080"));
        assert_eq!(column(lines[0]), column(lines[2]));
        assert!(lines.iter().all(|l| !l.starts_with('|') && !l.ends_with('|')));
    }

    #[test]
    fn test_render_trims_trailing_whitespace() {
        let report = Report::from_rows([row("a", "A", "", "", "")]);
        assert!(report.render().lines().all(|l| l == l.trim_end()));
    }

    #[test]
    fn test_render_multiline_cell() {
        let report = Report::from_rows([row("key", "KEY", "", "abc\nde", "secret")])
            .drop_column_if_empty(DEFAULT_VALUE_COLUMN);
        let rendered = report.render();
        let lines = lines(&rendered);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].matches('|').count(), 3);

        let first: Vec<&str> = lines[2].split('|').map(str::trim).collect();
        let second: Vec<&str> = lines[3].split('|').map(str::trim).collect();
        assert_eq!(first, ["key", "KEY", "abc", "secret"]);
        assert_eq!(second[..3], ["", "", "de"]);
        assert_eq!(lines[2].find("abc"), lines[3].find("de"));
    }

    #[test]
    fn test_display_matches_render() {
        let report = Report::from_rows([row("a", "A", "1", "2", "x")]);
        assert_eq!(report.to_string(), report.render());
    }
}
