use rails_dbml_core::types::ConversionWarning;

use crate::emitter::emit;
use crate::error::DslError;
use crate::parser::parse_line;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Result of converting a whole migration source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// The DBML text; every emitted line ends with `\n`.
    pub dbml: String,
    /// Physical lines in the source.
    pub lines_read: usize,
    /// Lines written to `dbml`.
    pub lines_emitted: usize,
    /// Soft diagnostics in source order.
    pub warnings: Vec<ConversionWarning>,
}

/// Converts migration DSL source into DBML.
///
/// Lines are numbered from 1 and every physical line counts, including
/// blank and comment lines. A trailing `\r` is not part of the line text
/// quoted in diagnostics, and a leading byte order mark is skipped.
///
/// # Errors
///
/// Stops at the first malformed parameter. The error span is relative to
/// `source`.
pub fn convert(source: &str) -> Result<Conversion, DslError> {
    let mut conversion = Conversion {
        lines_read: source.lines().count(),
        ..Conversion::default()
    };

    let (body, mut offset) = match source.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => (rest, BYTE_ORDER_MARK.len_utf8()),
        None => (source, 0),
    };

    for (index, physical) in body.split('\n').enumerate() {
        let line_number = index + 1;
        let raw = physical.strip_suffix('\r').unwrap_or(physical);

        let line = parse_line(raw, line_number).map_err(|e| e.shifted(offset))?;
        tracing::debug!(
            line = line_number,
            statement = %line.statement(),
            params = line.params.len(),
            "classified line"
        );

        let emitted = emit(&line, raw, line_number);
        for warning in &emitted.warnings {
            tracing::warn!(line = warning.line, "{}", warning.kind);
        }

        for text in emitted.lines {
            conversion.dbml.push_str(&text);
            conversion.dbml.push('\n');
            conversion.lines_emitted += 1;
        }
        conversion.warnings.extend(emitted.warnings);

        offset += physical.len() + 1;
    }

    tracing::info!(
        lines_read = conversion.lines_read,
        lines_emitted = conversion.lines_emitted,
        warnings = conversion.warnings.len(),
        "conversion finished"
    );

    Ok(conversion)
}
