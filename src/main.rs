use std::path::PathBuf;

use clap::Parser;

use flatbundle::{run, FlattenOptions};

/// Flatten an archive or directory tree into a single output directory.
///
/// Every file is renamed with a directory-ordinal prefix so names stay
/// unique and the original layout stays readable; the prefix table is
/// written to `.path_mappings.txt` in the output directory.
#[derive(Debug, Parser)]
#[command(name = "flatbundle", version)]
struct Cli {
    /// Source directory or archive file (zip, tar[.gz|.bz2|.xz], gz, 7z, rar)
    #[arg(short, long, value_name = "SRC")]
    source: PathBuf,

    /// Output directory for flattened files (must be empty)
    #[arg(short, long, value_name = "OUT")]
    output: PathBuf,

    /// Consolidate each directory's .log and .previous.log files
    #[arg(short, long)]
    consolidate: bool,

    /// Verbose output (per-file progress)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let mut options = FlattenOptions::new(&cli.source, &cli.output);
    options.consolidate = cli.consolidate;

    match run(&options) {
        Ok(summary) => {
            log::info!("Files processed: {}", summary.files_written);
            log::info!("Files skipped: {}", summary.skipped_total());
            if summary.logs_consolidated > 0 {
                log::info!("Files consolidated: {}", summary.logs_consolidated);
            }
            log::info!("Output directory: {}", cli.output.display());
        }
        Err(err) => {
            log::error!("{err}");
            if let Some(cause) = std::error::Error::source(&err) {
                log::error!("  caused by: {cause}");
            }
            std::process::exit(err.exit_code());
        }
    }
}
