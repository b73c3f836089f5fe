//
//  postman-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table rendering for list views.
//!
//! Tables use comfy-table's `UTF8_FULL` preset and shrink to the terminal
//! width. Cell helpers ([`opt`], [`format_time`], [`format_status`],
//! [`truncate`]) keep column contents consistent across commands.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Placeholder for absent values.
pub const NONE: &str = "-";

/// Builds a table with optional colored headers.
///
/// ```rust
/// use postman_client::output::TableBuilder;
///
/// let rendered = TableBuilder::new()
///     .color(false)
///     .headers(["ID", "NAME"])
///     .row(vec!["c1".to_string(), "Petstore".to_string()])
///     .render();
/// assert!(rendered.contains("Petstore"));
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        Self {
            table,
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let color = self.color;
        let cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| {
                let cell = Cell::new(h.into());
                if color {
                    cell.fg(Color::Cyan)
                } else {
                    cell
                }
            })
            .collect();
        self.table.set_header(cells);
        self
    }

    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.table.add_row(cells);
        self
    }

    pub fn rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        for row in rows {
            self.table.add_row(row);
        }
        self
    }

    pub fn render(&self) -> String {
        self.table.to_string()
    }

    pub fn print(self) {
        println!("{}", self.table);
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The value, or [`NONE`].
pub fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NONE.to_string(), |v| v.to_string())
}

/// `YYYY-MM-DD HH:MM` in UTC, or [`NONE`].
pub fn format_time(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(|| NONE.to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

/// Colors a run or warning status.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    use console::style;
    match status.to_lowercase().as_str() {
        "success" | "passed" | "low" => style(status).green().to_string(),
        "failed" | "error" | "high" | "critical" => style(status).red().to_string(),
        "medium" | "running" | "pending" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...`.
pub fn truncate(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_cells() {
        let rendered = TableBuilder::new()
            .color(false)
            .headers(["ID", "NAME"])
            .rows(vec![
                vec!["c1".to_string(), "Petstore".to_string()],
                vec!["c2".to_string(), "Billing".to_string()],
            ])
            .render();
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("Petstore"));
        assert!(rendered.contains("Billing"));
    }

    #[test]
    fn test_opt_and_time() {
        assert_eq!(opt(Some("x")), "x");
        assert_eq!(opt::<String>(None), NONE);
        let t: DateTime<Utc> = "2022-06-17T18:39:52Z".parse().unwrap();
        assert_eq!(format_time(Some(&t)), "2022-06-17 18:39");
        assert_eq!(format_time(None), NONE);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 10), "a longe...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_status_without_color() {
        assert_eq!(format_status("failed", false), "failed");
    }
}
