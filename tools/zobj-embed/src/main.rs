//! zobj-embed - player model info embedder
//!
//! Writes a PLAYERMODELINFO record, built from a json descriptor, into the
//! ModLoader64 region of a zobj. The zobj is patched in place.
//!
//! # Usage
//!
//! ```bash
//! # Paths may be given in either order
//! zobj-embed model.zobj model.json
//!
//! # Validate everything without touching the zobj
//! zobj-embed --dry-run model.json model.zobj
//! ```
//!
//! # Descriptor
//!
//! ```json
//! {
//!     "embed_version": 1,
//!     "internal_name": "adult_link",   // required, <= 63 bytes
//!     "display_name": "Adult Link",    // optional, <= 31 bytes
//!     "author": "Someone",             // optional, <= 63 bytes
//! }
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use zobj_embed::{ReturnCode, RunOptions, run};

#[derive(Parser)]
#[command(name = "zobj-embed")]
#[command(about = "Embed player model info from a json descriptor into a ModLoader64 zobj")]
#[command(version)]
struct Cli {
    /// Path to the zobj and path to the json descriptor, in either order
    paths: Vec<PathBuf>,

    /// Validate and build the record without writing the zobj
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    match run(&cli.paths, &options) {
        Ok(summary) => {
            if summary.written {
                tracing::info!("Wrote {:?} from {:?}", summary.zobj, summary.descriptor);
            } else {
                tracing::info!("{:?} is valid for {:?}", summary.descriptor, summary.zobj);
            }
            std::process::exit(ReturnCode::Ok.code());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.return_code().code());
        }
    }
}
