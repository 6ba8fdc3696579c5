//! relpath CLI

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use relpath_core::lines::ListSource;
use relpath_core::output::{relativize_lists, OutputFormat};
use relpath_core::relativize::Relativizer;

/// Environment variable holding a tracing filter that overrides `-v`/`-q`.
///
/// An unparsable value falls back to the flags and is reported with `warn!`.
pub const LOG_ENV: &str = "RELPATH_LOG";

/// CLI entrypoint for relpath.
#[derive(Debug, Parser)]
#[command(
    name = "relpath",
    version,
    about = "Rewrite newline-delimited path lists relative to a target directory"
)]
pub struct Cli {
    /// Directory the emitted paths are made relative to
    #[arg(value_hint = ValueHint::DirPath)]
    target_dir: PathBuf,

    /// Files listing one path per line ("-" reads STDIN)
    #[arg(value_hint = ValueHint::FilePath)]
    lists: Vec<PathBuf>,

    /// Emit newline-delimited JSON records instead of bare paths
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Log more to stderr (repeat for more detail)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Log only errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.ndjson {
            OutputFormat::Ndjson
        } else {
            OutputFormat::Plain
        }
    }

    fn sources(&self) -> Vec<ListSource> {
        self.lists.iter().map(|p| ListSource::from_arg(p)).collect()
    }

    fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parse CLI args and relativize the given lists onto stdout.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let relativizer = Relativizer::from_current_dir(&cli.target_dir)
        .context("cannot determine the current directory")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&cli, &relativizer, &mut stdin.lock(), stdout.lock())
}

fn execute(
    cli: &Cli,
    relativizer: &Relativizer,
    stdin: &mut impl BufRead,
    out: impl Write,
) -> Result<()> {
    let sources = cli.sources();
    debug!(
        target_dir = %relativizer.target().display(),
        cwd = %relativizer.cwd().display(),
        lists = sources.len(),
        "relativizing"
    );

    let emitted = relativize_lists(relativizer, &sources, stdin, cli.output_format(), out)?;

    debug!(lines = emitted, "done");
    Ok(())
}

/// Filter from `RELPATH_LOG` when it parses, else from the verbosity flags.
///
/// The second value describes a rejected `RELPATH_LOG` directive.
fn log_filter(cli: &Cli, env_directive: Option<String>) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::new(cli.log_directive());

    match env_directive.filter(|raw| !raw.trim().is_empty()) {
        None => (fallback(), None),
        Some(raw) => match EnvFilter::try_new(&raw) {
            Ok(filter) => (filter, None),
            Err(err) => (fallback(), Some(format!("ignoring {LOG_ENV}={raw:?}: {err}"))),
        },
    }
}

fn init_logging(cli: &Cli) {
    let (filter, rejected) = log_filter(cli, std::env::var(LOG_ENV).ok());

    // try_init: a global subscriber may already be set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    if let Some(reason) = rejected {
        warn!("{reason}");
    }
}

#[cfg(test)]
mod tests;
