use anyhow::{Context, Result};
use clap::Parser;
use file_shred::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "file-shred")]
#[command(about = "Securely overwrite and delete files using standard multi-pass methods")]
#[command(version = "1.0.0")]
struct Cli {
    /// Files to shred
    #[arg(required_unless_present = "list_methods")]
    paths: Vec<PathBuf>,

    /// Wipe method (zero-fill, one-fill, random, nist, dod, dod-ece, gutmann, cryptographic-erase)
    #[arg(short, long, default_value = "dod", env = "FILE_SHRED_METHOD")]
    method: String,

    /// Read back fixed-pattern passes after each sync
    #[arg(long)]
    verify: bool,

    /// Maximum bytes per write
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Print one JSON outcome per path
    #[arg(long)]
    json: bool,

    /// Print the supported methods and exit
    #[arg(long)]
    list_methods: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.list_methods {
        list_methods();
        return ExitCode::SUCCESS;
    }

    let orchestrator = WipeOrchestrator::new(build_wipe_config(&cli));
    let mut failures = 0usize;

    for path in &cli.paths {
        match shred_one(&orchestrator, path, &cli.method, cli.json) {
            Ok(()) => {}
            Err(e) => {
                failures += 1;
                eprintln!("❌ {:#}", e);
            }
        }
    }

    if failures > 0 {
        eprintln!("{} of {} path(s) failed", failures, cli.paths.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(platform = file_shred::io::platform_name(), "logging initialized");
}

fn build_wipe_config(cli: &Cli) -> WipeConfig {
    WipeConfig {
        chunk_size: cli.chunk_size,
        verify: cli.verify,
    }
}

fn list_methods() {
    println!("{:<22} {:<8} DESCRIPTION", "METHOD", "DELETES");
    for method in Method::ALL {
        println!(
            "{:<22} {:<8} {}",
            method.name(),
            if method.delete_after() { "yes" } else { "no" },
            method.description()
        );
    }
}

fn shred_one(orchestrator: &WipeOrchestrator, path: &Path, method: &str, json: bool) -> Result<()> {
    let outcome = orchestrator.secure_delete(path, method).with_context(|| {
        format!("Failed to shred {} with method '{}'", path.display(), method)
    })?;

    if json {
        let line = serde_json::to_string(&outcome).context("Failed to serialize outcome")?;
        println!("{}", line);
    } else if outcome.removed {
        println!(
            "✅ {} shredded with {} ({})",
            outcome.path.display(),
            outcome.method,
            outcome.report
        );
    } else {
        println!(
            "⚠️  {} overwritten with {} but kept in place ({})",
            outcome.path.display(),
            outcome.method,
            outcome.report
        );
    }
    Ok(())
}
