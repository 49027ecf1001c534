use anyhow::{Context, Result};
use clap::Parser;
use project_dump::{DumperBuilder, FileList};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Print project files to stdout, each under a `===== path =====` header
#[derive(Parser, Debug)]
#[command(name = "project-dump", version, about)]
struct Cli {
    /// Files to dump, in order (overrides --manifest and the built-in list)
    paths: Vec<String>,

    /// JSON manifest of the form {"files": [...]}
    #[arg(short, long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Resolve paths against this directory instead of the current one
    #[arg(short = 'C', long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Print the built-in file list as a manifest and exit
    #[arg(long)]
    print_defaults: bool,

    /// Log per-file progress to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn file_list(&self) -> Result<FileList> {
        let positional = FileList::from_paths(self.paths.iter().cloned());
        if !positional.is_empty() {
            return Ok(positional);
        }
        match &self.manifest {
            Some(path) => FileList::load(path),
            None => Ok(FileList::default()),
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("project-dump error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    execute(&cli, &mut out)
}

/// Run the parsed command against `out`.
///
/// Missing files are not errors; only a bad manifest or a failed write is.
fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.print_defaults {
        writeln!(out, "{}", FileList::default().to_manifest()?)
            .context("Failed to write to stdout")?;
        out.flush().context("Failed to write to stdout")?;
        return Ok(());
    }

    let mut builder = DumperBuilder::new().files(cli.file_list()?);
    if let Some(root) = &cli.root {
        builder = builder.root(root);
    }
    let dumper = builder.build();

    tracing::debug!(count = dumper.files().len(), "starting dump");
    dumper.dump(out)?;

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PROJECT_DUMP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
