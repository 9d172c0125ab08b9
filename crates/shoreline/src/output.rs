//! Output rendering for the `shoreline` binary.
//!
//! A [`Renderer`] is built once from the global flags and handed to the
//! command handlers, which describe each view as either a list (table
//! rows + plain-mode identifiers) or a single detail block. Structured
//! formats always serialize the original data, not the table rows, so
//! scripting against `-o json` sees full entities.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

/// Whether color escape codes should be emitted for the given mode.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Format-aware printer carrying the global output flags.
pub struct Renderer {
    format: OutputFormat,
    quiet: bool,
}

impl Renderer {
    pub fn new(global: &GlobalOpts) -> Self {
        Self {
            format: global.output.clone(),
            quiet: global.quiet,
        }
    }

    /// Print a collection. `to_row` shapes the table view, `id_of`
    /// yields the one-per-line value for plain mode; json/yaml
    /// serialize `items` itself.
    pub fn list<T, R>(&self, items: &[T], to_row: impl Fn(&T) -> R, id_of: impl Fn(&T) -> String)
    where
        T: serde::Serialize,
        R: Tabled,
    {
        let rendered = match self.format {
            OutputFormat::Table => {
                let rows: Vec<R> = items.iter().map(to_row).collect();
                Table::new(&rows).with(Style::rounded()).to_string()
            }
            OutputFormat::Json => to_json(items, false),
            OutputFormat::JsonCompact => to_json(items, true),
            OutputFormat::Yaml => to_yaml(items),
            OutputFormat::Plain => items.iter().map(id_of).collect::<Vec<_>>().join("\n"),
        };
        self.emit(&rendered);
    }

    /// Print one entity. Detail views are pre-formatted strings rather
    /// than `Tabled` rows, so `detail` builds the table-mode text.
    pub fn single<T>(&self, item: &T, detail: impl Fn(&T) -> String, id_of: impl Fn(&T) -> String)
    where
        T: serde::Serialize,
    {
        let rendered = match self.format {
            OutputFormat::Table => detail(item),
            OutputFormat::Json => to_json(item, false),
            OutputFormat::JsonCompact => to_json(item, true),
            OutputFormat::Yaml => to_yaml(item),
            OutputFormat::Plain => id_of(item),
        };
        self.emit(&rendered);
    }

    /// Status message on stderr, suppressed by `--quiet`. Keeps stdout
    /// clean for the rendered data.
    pub fn note(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    fn emit(&self, rendered: &str) {
        if self.quiet || rendered.is_empty() {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{rendered}");
    }
}

fn to_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let result = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    result.unwrap_or_else(|e| format!("<serialization error: {e}>"))
}

fn to_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|e| format!("<serialization error: {e}>"))
}
