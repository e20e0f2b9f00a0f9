use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::MeasurementsProcessor;
use crate::readers::SourcingStrategy;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;
use std::io::{self, Write};
use tracing::Level;

pub fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let sourcing = SourcingStrategy::from_name(&cli.sourcing)?;
    let workers = cli.workers.max(1);
    let processor = MeasurementsProcessor::new(workers)
        .with_sourcing(sourcing)
        .with_verify_keys(!cli.skip_key_verification);

    // Progress goes to stderr; the report owns stdout.
    let progress = ProgressReporter::new(workers as u64, "Aggregating measurements...", false);
    let table = processor.process_file(&cli.input_file, Some(&progress))?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    ReportWriter::new().write_report(&table, &mut out)?;
    out.flush()?;

    Ok(())
}
