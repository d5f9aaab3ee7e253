//! Command-line front end for `oxide-ddl-core`.
//!
//! Reads a SQL file, converts each `CREATE TABLE` statement into a Go
//! struct and writes the result next to the SQL file (or into `--target`).
//!
//! # CLI Usage
//!
//! ```bash
//! # Append structs to ./schema/generator.go
//! oxide-ddl schema/tables.sql
//!
//! # Strip a table prefix and replace the output file
//! oxide-ddl tables.sql --table-prefix t_ --mode overwrite
//!
//! # Inspect the extracted schemas
//! oxide-ddl tables.sql --format json --dry-run
//! ```

pub mod cli;
pub mod error;
pub mod output;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use oxide_ddl_core::{create_statements, Generator};
use tracing::{debug, info};

pub use cli::{Cli, OutputFormat};
pub use error::{CliError, Result};
pub use output::{OutputTarget, DEFAULT_FILE_NAME};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output was written to this file.
    Written(PathBuf),
    /// Output was printed (dry run).
    Printed,
}

/// Runs the tool for parsed arguments.
///
/// Dry runs print to `out`; otherwise the output file is written.
///
/// # Errors
///
/// Returns an error if the SQL file is missing or unreadable, if the
/// configuration is invalid, if extraction fails, or if the output cannot
/// be written.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Outcome> {
    if !cli.path.is_file() {
        return Err(CliError::SourceNotFound(cli.path.clone()));
    }

    let sql = fs::read_to_string(&cli.path)?;
    let statements = create_statements(&sql);
    debug!(
        path = %cli.path.display(),
        statements = statements.len(),
        "read SQL file"
    );

    let generator = Generator::new(cli.config())?;
    let content = match cli.format {
        OutputFormat::Go => generator.generate(&statements)?,
        OutputFormat::Json => {
            let schemas = generator.extract_all(&statements)?;
            let mut json = serde_json::to_string_pretty(&schemas)?;
            json.push('\n');
            json
        }
    };

    if cli.dry_run {
        info!("Dry run mode - output will be printed but not written.");
        out.write_all(content.as_bytes())?;
        out.flush()?;
        return Ok(Outcome::Printed);
    }

    let target = cli.output_target();
    target.write(&content)?;
    info!("Output: {}", target.path().display());
    Ok(Outcome::Written(target.path().to_path_buf()))
}
