use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser};

use crate::error::CliError;

/// Convert a Rails migration schema into DBML.
///
/// Reads `create_table` blocks and `t.<type>` column declarations from the
/// source file and writes the equivalent DBML tables to the target file.
/// Everything else in the source is skipped.
#[derive(Parser)]
#[command(
    name = "rails-dbml",
    version,
    about = "Convert a Rails migration schema into DBML",
    after_help = "Example: rails-dbml db/schema.rb schema.dbml",
    override_usage = "rails-dbml [OPTIONS] <SRC_FILE> <TGT_FILE>"
)]
pub struct Cli {
    /// Migration schema to read, e.g. db/schema.rb
    #[arg(value_name = "SRC_FILE")]
    pub source: Option<PathBuf>,

    /// DBML file to write
    #[arg(value_name = "TGT_FILE")]
    pub target: Option<PathBuf>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

impl Cli {
    /// Returns `(source, target)`, or a usage error when either is missing.
    pub fn paths(&self) -> Result<(&Path, &Path), CliError> {
        match (&self.source, &self.target) {
            (Some(source), Some(target)) => Ok((source.as_path(), target.as_path())),
            _ => Err(CliError::Usage),
        }
    }
}

/// Options controlling how progress and errors are reported.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Output format: human (default), json, plain
    #[arg(
        long,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", env = "NO_COLOR")]
    pub no_color: bool,
}
