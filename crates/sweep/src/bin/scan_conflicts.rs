use clap::Parser;
use std::path::Path;
use sweep_config::telemetry;
use sweep_conflicts::{ConflictScanner, ScanMode};

/// Find and optionally delete OneDrive/sync conflict files.
#[derive(Parser, Debug)]
#[command(name = "scan-conflicts")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "By default this runs in dry run mode and deletes nothing. Use --delete to enable deletion."
)]
struct Cli {
    /// Enable deletion mode. Without this flag, only report what would be done.
    #[arg(long)]
    delete: bool,
}

impl Cli {
    fn mode(&self) -> ScanMode {
        if self.delete {
            ScanMode::Delete
        } else {
            ScanMode::DryRun
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init();

    ConflictScanner::new(cli.mode()).scan(Path::new("."));

    Ok(())
}
