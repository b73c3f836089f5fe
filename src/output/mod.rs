//
//  postman-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Every `pm` command prints either a human-readable view or, with `--json`,
//! the API record serialized as pretty JSON. Status lines go to stderr in
//! JSON mode so that stdout stays machine-readable.
//!
//! | Format | List | Single record |
//! |--------|------|---------------|
//! | Table | one row per record | `key: value` lines |
//! | JSON | JSON array | JSON object |

mod table;

pub use table::*;

use serde::Serialize;

/// Output format selected by the global `--json` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Human-readable rendering of an API record.
pub trait TableOutput {
    /// Column headers for list views.
    fn headers() -> Vec<&'static str>
    where
        Self: Sized;

    /// One row for list views, in header order.
    fn row(&self) -> Vec<String>;

    /// Field lines for single-record views.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Writes command results in the selected format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// JSON when `json` is set, table otherwise.
    pub fn from_flag(json: bool) -> Self {
        Self::new(if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Prints one record.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(value),
            OutputFormat::Table => {
                for (key, value) in value.fields() {
                    print_field(key, &value, self.color);
                }
                Ok(())
            }
        }
    }

    /// Prints a list of records, or `empty_message` when there are none.
    pub fn write_list<T: Serialize + TableOutput>(
        &self,
        values: &[T],
        empty_message: &str,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&values),
            OutputFormat::Table => {
                if values.is_empty() {
                    self.write_info(empty_message);
                } else {
                    TableBuilder::new()
                        .color(self.color)
                        .headers(T::headers())
                        .rows(values.iter().map(T::row))
                        .print();
                }
                Ok(())
            }
        }
    }

    pub fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Informational line; stderr in JSON mode.
    pub fn write_info(&self, msg: &str) {
        if self.is_json() {
            eprintln!("{}", msg);
        } else {
            println!("{}", msg);
        }
    }

    /// Success line; stderr in JSON mode.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        let line = if self.color {
            format!("{} {}", style("✓").green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        };
        if self.is_json() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
