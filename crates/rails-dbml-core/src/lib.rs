//! # rails-dbml-core
//!
//! Domain types shared by the rails-dbml parser, emitter and CLI.
//!
//! - [`types::Line`]: one parsed source line (head, name, parameters)
//! - [`types::ParamMap`]: ordered, last-write-wins parameter map
//! - [`types::Statement`]: the statement kind a line's head resolves to
//! - [`types::ColumnType`]: the fixed column type dictionary
//! - [`types::ConversionWarning`]: soft diagnostics raised while emitting

pub mod types;
