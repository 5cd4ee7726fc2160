use miette::{Diagnostic, NamedSource, SourceSpan};
use rails_dbml_dsl::DslError;

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `DslError` into a miette `SchemaDiagnostic`.
///
/// The error span must be relative to `source`.
pub fn dsl_error_to_diagnostic(error: &DslError, source: &str, filename: &str) -> SchemaDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());

    match error {
        DslError::MalformedParameter {
            line,
            name,
            found,
            span,
        } => SchemaDiagnostic {
            src: named_src,
            span: (span.start, span.len()).into(),
            message: format!("malformed parameter '{name}' on line {line}"),
            label: format!("expected ':' before '{found}'"),
            suggestion: Some(format!("Write the parameter as `{name}: <value>`.")),
        },
        _ => SchemaDiagnostic {
            src: named_src,
            span: (error.span().start, error.span().len()).into(),
            message: error.to_string(),
            label: "here".to_string(),
            suggestion: None,
        },
    }
}

/// Render a `DslError` as a miette report ready for `{:?}` printing.
pub fn render_diagnostic(error: &DslError, source: &str, filename: &str) -> miette::Report {
    miette::Report::new(dsl_error_to_diagnostic(error, source, filename))
}
