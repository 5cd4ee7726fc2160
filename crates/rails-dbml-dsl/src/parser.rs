use rails_dbml_core::types::Line;

use crate::error::{DslError, Span};
use crate::lexer::tokenize;

/// Head token and name read from the first segment of a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstSegment {
    pub head: String,
    pub name: String,
}

/// A `name: value value "quoted value"` parameter segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSegment {
    pub name: String,
    pub values: Vec<String>,
}

/// Parses the text before the first comma of a line.
///
/// The head is the first run of non-whitespace. The name is the next value,
/// either bare (up to whitespace) or quoted (up to the next `"`, backslashes
/// dropped). Anything after the name is ignored, and a value cut off by the
/// end of the segment is kept as-is.
pub fn parse_first_segment(segment: &str) -> FirstSegment {
    let rest = segment.trim_start();
    let head_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (head, tail) = rest.split_at(head_end);

    let name = tokenize(tail)
        .first()
        .map(|token| token.value())
        .unwrap_or_default();

    FirstSegment {
        head: head.to_string(),
        name,
    }
}

/// Parses one parameter segment.
///
/// The first non-whitespace character always starts the name, which then
/// runs up to whitespace or `:`. Once whitespace has ended the name, only
/// whitespace or `:` may follow. A segment that ends before its colon yields
/// the name with no values.
///
/// # Errors
///
/// Returns `DslError::MalformedParameter` when a character other than `:` or
/// whitespace follows the name. The span is relative to `segment`.
pub fn parse_param_segment(segment: &str, line: usize) -> Result<ParamSegment, DslError> {
    let start = segment.len() - segment.trim_start().len();
    let mut chars = segment[start..].char_indices();

    let Some((_, first)) = chars.next() else {
        return Ok(ParamSegment::default());
    };

    let mut name = String::from(first);
    let mut awaiting_colon = false;
    let mut values_start = None;

    for (i, c) in chars {
        let at = start + i;
        if c == ':' {
            values_start = Some(at + 1);
            break;
        }
        if awaiting_colon {
            if !c.is_whitespace() {
                return Err(DslError::MalformedParameter {
                    line,
                    name,
                    found: c,
                    span: Span::new(at, at + c.len_utf8()),
                });
            }
        } else if c.is_whitespace() {
            awaiting_colon = true;
        } else {
            name.push(c);
        }
    }

    let values = match values_start {
        Some(offset) => tokenize(&segment[offset..])
            .into_iter()
            .filter(|token| token.is_terminated() || !token.value().is_empty())
            .map(|token| token.value())
            .collect(),
        None => Vec::new(),
    };

    Ok(ParamSegment { name, values })
}

/// Parses one raw source line into a [`Line`].
///
/// The line is split on every `,`, including commas inside quotes. The first
/// segment gives the head and name; every later segment is a parameter, and
/// a repeated parameter name replaces the earlier values.
///
/// # Errors
///
/// Returns the first `DslError::MalformedParameter` found. Its span is
/// relative to `raw`.
pub fn parse_line(raw: &str, line_number: usize) -> Result<Line, DslError> {
    let mut segments = raw.split(',');
    let first = parse_first_segment(segments.next().unwrap_or_default());
    let mut line = Line::new(first.head, first.name);

    let mut offset = line_head_len(raw);
    for segment in segments {
        let param = parse_param_segment(segment, line_number).map_err(|e| e.shifted(offset))?;
        line.params.insert(param.name, param.values);
        offset += segment.len() + 1;
    }

    Ok(line)
}

/// Byte offset of the second segment: the first segment plus its comma.
fn line_head_len(raw: &str) -> usize {
    raw.find(',').map_or(raw.len(), |i| i + 1)
}
