use std::path::Path;

use crate::error::CliError;
use crate::output::OutputContext;

/// Convert `source` to DBML and write it to `target`.
///
/// Nothing is written when the source cannot be read or fails to parse.
pub fn run(source: &Path, target: &Path, output: &OutputContext) -> Result<(), CliError> {
    tracing::debug!(path = %source.display(), "reading source");
    let bytes = std::fs::read(source).map_err(|e| CliError::Io {
        path: source.to_path_buf(),
        source: e,
    })?;
    // Invalid UTF-8 (e.g. a Latin-1 comment) becomes U+FFFD.
    let source_text = String::from_utf8_lossy(&bytes).into_owned();

    let conversion = match rails_dbml_dsl::convert(&source_text) {
        Ok(conversion) => conversion,
        Err(error) => {
            return Err(CliError::Parse {
                error,
                source_text,
                file: source.to_path_buf(),
            })
        }
    };

    output.report_warnings(&conversion);

    tracing::debug!(path = %target.display(), bytes = conversion.dbml.len(), "writing target");
    std::fs::write(target, &conversion.dbml).map_err(|e| CliError::Io {
        path: target.to_path_buf(),
        source: e,
    })?;

    output.report_summary(source, target, &conversion);
    Ok(())
}
