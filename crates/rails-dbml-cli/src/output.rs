use std::path::Path;

use console::{Style, Term};
use rails_dbml_dsl::{Conversion, ConversionWarning};

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostic;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

/// How conversion results reach the terminal.
///
/// Every `render_*` method is pure; the matching `print_*`/`report_*`
/// method picks the stream. Summaries in json and plain mode go to stdout,
/// everything else to stderr.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let mode = match global.format.as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        };

        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode,
            quiet: global.quiet,
            use_color,
        }
    }

    fn label(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// The stderr line for a soft diagnostic. JSON mode carries warnings in
    /// the report instead.
    pub fn render_warning(&self, warning: &ConversionWarning) -> Option<String> {
        if self.quiet {
            return None;
        }
        match self.mode {
            OutputMode::Human => Some(format!(
                "{} {warning}",
                self.label("warning:", Style::new().yellow().bold())
            )),
            OutputMode::Plain => Some(format!("warning\t{}\t{}", warning.line, warning.kind)),
            OutputMode::Json => None,
        }
    }

    pub fn report_warnings(&self, conversion: &Conversion) {
        for warning in &conversion.warnings {
            if let Some(line) = self.render_warning(warning) {
                eprintln!("{line}");
            }
        }
    }

    /// The summary of a finished conversion.
    pub fn render_summary(&self, source: &Path, target: &Path, conversion: &Conversion) -> Option<String> {
        match self.mode {
            OutputMode::Human if self.quiet => None,
            OutputMode::Human => Some(format!(
                "{} wrote {} DBML lines to {} ({} warnings)",
                self.label("ok", Style::new().green().bold()),
                conversion.lines_emitted,
                target.display(),
                conversion.warnings.len()
            )),
            OutputMode::Json => {
                let report = serde_json::json!({
                    "source": source.display().to_string(),
                    "target": target.display().to_string(),
                    "lines_read": conversion.lines_read,
                    "lines_emitted": conversion.lines_emitted,
                    "warnings": conversion.warnings,
                });
                serde_json::to_string_pretty(&report).ok()
            }
            OutputMode::Plain => Some(format!(
                "{}\t{}\t{}\t{}",
                target.display(),
                conversion.lines_read,
                conversion.lines_emitted,
                conversion.warnings.len()
            )),
        }
    }

    pub fn report_summary(&self, source: &Path, target: &Path, conversion: &Conversion) {
        let Some(summary) = self.render_summary(source, target, conversion) else {
            return;
        };
        match self.mode {
            OutputMode::Human => eprintln!("{summary}"),
            OutputMode::Json | OutputMode::Plain => println!("{summary}"),
        }
    }

    /// Parse errors get a source snippet in human mode.
    pub fn render_error(&self, err: &CliError) -> String {
        match self.mode {
            OutputMode::Human => match err {
                CliError::Parse {
                    error,
                    source_text,
                    file,
                } => {
                    let report = render_diagnostic(error, source_text, &file.display().to_string());
                    format!("{report:?}")
                }
                _ => format!("{} {err}", self.label("error:", Style::new().red().bold())),
            },
            OutputMode::Json => err.to_json().to_string(),
            OutputMode::Plain => format!("error\t{err}"),
        }
    }

    pub fn print_error(&self, err: &CliError) {
        eprintln!("{}", self.render_error(err));
    }
}
