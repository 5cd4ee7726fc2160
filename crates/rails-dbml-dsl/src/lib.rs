//! # rails-dbml-dsl
//!
//! Line parser and DBML emitter for Rails-style migration schemas.
//!
//! This crate provides:
//! - A value lexer for bare and quoted parameter values
//! - Tokenizers for the first segment and parameter segments of a line
//! - A line parser producing [`rails_dbml_core::types::Line`] values
//! - An emitter that maps each line to DBML
//! - [`convert`], which runs both over a whole source text
//!
//! # Example
//!
//! ```
//! use rails_dbml_dsl::convert;
//!
//! let source = r#"
//! create_table "users", id: :integer do |t|
//!   t.string "email", limit: 255, null: false
//!   t.datetime "created_at", default: -> { "CURRENT_TIMESTAMP" }
//! end
//! "#;
//!
//! let conversion = convert(source).expect("convert failed");
//! assert!(conversion.dbml.contains("Table \"users\" {"));
//! assert!(conversion.dbml.contains("  email varchar(255) [not null]"));
//! assert!(conversion.dbml.contains("[default: `CURRENT_TIMESTAMP`]"));
//! ```

pub mod convert;
pub mod emitter;
pub mod error;
mod lexer;
pub mod parser;
pub mod token;

pub use convert::{convert, Conversion};
pub use emitter::{emit, Emitted};
pub use error::{DslError, Span};
pub use rails_dbml_core::types::{ConversionWarning, WarningKind};
pub use parser::{parse_first_segment, parse_line, parse_param_segment, FirstSegment, ParamSegment};
