use std::path::PathBuf;

use rails_dbml_dsl::DslError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error (usage, unreadable source, unwritable target)
/// - 2: invalid arguments rejected by the argument parser
/// - 3: parse error in the source schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by the conversion command.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Source or target path missing.
    #[error("missing arguments\n\nUsage: rails-dbml <SRC_FILE> <TGT_FILE>")]
    Usage,

    /// Malformed source line.
    #[error("parse error in {file}: {error}")]
    Parse {
        error: DslError,
        source_text: String,
        file: PathBuf,
    },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } => ExitCode::ParseError,
            Self::Usage | Self::Io { .. } => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Usage => serde_json::json!({
                "error": "usage_error",
                "message": self.to_string(),
            }),
            Self::Parse { error, file, .. } => serde_json::json!({
                "error": "parse_error",
                "file": file.display().to_string(),
                "line": error.line(),
                "message": error.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
        }
    }
}
