use rails_dbml_core::types::{ColumnType, ConversionWarning, Line, ParamMap, Statement, WarningKind};

/// DBML produced for a single source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emitted {
    /// Output lines, without trailing newlines.
    pub lines: Vec<String>,
    pub warnings: Vec<ConversionWarning>,
}

impl Emitted {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Emit DBML for one parsed line.
///
/// `source_line` and `line_number` are only used in the inline comments of
/// best-effort output. Lines with an unrecognized head produce nothing.
pub fn emit(line: &Line, source_line: &str, line_number: usize) -> Emitted {
    let mut emitted = Emitted::default();
    let statement = line.statement();
    match statement {
        Statement::CreateTable => emit_table(line, source_line, line_number, &mut emitted),
        Statement::End => emitted.lines.push("}".to_string()),
        Statement::Column(keyword) => emit_column(
            line,
            keyword,
            statement.column_type(),
            source_line,
            line_number,
            &mut emitted,
        ),
        Statement::Unrecognized => {}
    }
    emitted
}

fn emit_table(line: &Line, source_line: &str, line_number: usize, emitted: &mut Emitted) {
    emitted.lines.push(format!("Table \"{}\" {{", line.name));

    let Some(id) = line.params.get("id") else {
        return;
    };

    if id.first().map(String::as_str) == Some(":integer") {
        emitted.lines.push("  id unsigned [pk, increment]".to_string());
    } else if id.len() > 1 {
        emitted.lines.push(format!(
            "  id varchar(40) [pk] // Unsupported feature.{}",
            source_reference(source_line, line_number)
        ));
        emitted.warnings.push(ConversionWarning::new(
            line_number,
            WarningKind::UnsupportedIdFeature,
            source_line,
        ));
    }
}

fn emit_column(
    line: &Line,
    keyword: &str,
    column_type: Option<ColumnType>,
    source_line: &str,
    line_number: usize,
    emitted: &mut Emitted,
) {
    let Some(column_type) = column_type else {
        emitted.lines.push(format!(
            "  {} undefined // Unsupported type <{keyword}>.{}",
            line.name,
            source_reference(source_line, line_number)
        ));
        emitted.warnings.push(ConversionWarning::new(
            line_number,
            WarningKind::UnsupportedType {
                keyword: keyword.to_string(),
            },
            source_line,
        ));
        return;
    };

    let mut output = format!("  {} {column_type}", line.name);
    if let Some(limit) = line.params.first("limit") {
        output.push_str(&format!("({limit})"));
    }

    let modifiers = build_modifiers(&line.params, column_type);
    if !modifiers.is_empty() {
        output.push_str(" [");
        output.push_str(&modifiers.join(", "));
        output.push(']');
    }

    emitted.lines.push(output);
}

/// Column settings in DBML order: note, not null, default.
fn build_modifiers(params: &ParamMap, column_type: ColumnType) -> Vec<String> {
    let mut modifiers = Vec::new();

    if let Some(comment) = params.first("comment") {
        modifiers.push(format!("note: {}", quote(comment)));
    }

    if params.first("null") == Some("false") {
        modifiers.push("not null".to_string());
    }

    if let Some(default) = default_value(params, column_type) {
        modifiers.push(format!("default: {default}"));
    }

    modifiers
}

/// `-> { "expr" }` becomes a backtick expression; string columns get a
/// quoted literal; everything else is copied verbatim.
fn default_value(params: &ParamMap, column_type: ColumnType) -> Option<String> {
    // `default:` with no values counts as absent rather than printing
    // `undefined`; same for `limit:` and `comment:`.
    let values = params.get("default")?;
    let first = values.first()?;

    if values.len() > 1 && first == "->" {
        // `-> x` has no expression slot; it falls through to a plain default
        // instead of `` `undefined` ``.
        if let Some(expression) = values.get(2) {
            return Some(format!("`{expression}`"));
        }
    }

    if column_type.quotes_defaults() {
        Some(quote(first))
    } else {
        Some(first.clone())
    }
}

fn source_reference(source_line: &str, line_number: usize) -> String {
    format!(" Please check the original source: [{line_number}] {source_line}")
}

/// Single-quote a DBML string, escaping embedded single quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "\\'"))
}
