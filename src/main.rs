use anyhow::Result;
use clap::Parser;
use roster_seed::{build_roster, cli::Args, telemetry::init_tracing};
use tracing::Level;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(Level::WARN);

    let summary = build_roster(&args.source_dir, &args.output)?;
    println!(
        "Wrote {} rows ({} late) to {}",
        summary.rows,
        summary.late,
        summary.output_path.display()
    );
    Ok(())
}
