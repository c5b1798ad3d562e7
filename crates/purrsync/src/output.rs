//! Output formatting: table, JSON, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use purrsync_core::Item;

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// The favourite marker shown in tables.
pub fn heart(is_favourite: bool, color: bool) -> String {
    match (is_favourite, color) {
        (false, _) => String::new(),
        (true, false) => "♥".into(),
        (true, true) => "♥".red().bold().to_string(),
    }
}

// ── Table row ────────────────────────────────────────────────────────

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Fav")]
    favourite: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl ItemRow {
    fn new(item: &Item, color: bool) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            favourite: heart(item.is_favourite, color),
            url: item.image_url.clone(),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render items in the chosen format.
pub fn render_items(format: OutputFormat, items: &[Item], color: bool) -> Result<String, CliError> {
    render_list(
        format,
        items,
        |item| ItemRow::new(item, color),
        |item| item.id.clone(),
    )
}

/// Render a list of serde-serializable + tabled items in the chosen format.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) -> Result<(), CliError> {
    write_output(&mut io::stdout().lock(), output, quiet)
}

fn write_output(out: &mut impl Write, output: &str, quiet: bool) -> Result<(), CliError> {
    if quiet || output.is_empty() {
        return Ok(());
    }
    writeln!(out, "{output}")?;
    out.flush()?;
    Ok(())
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    if rows.is_empty() {
        return "No images.".into();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}
