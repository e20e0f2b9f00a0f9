use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "measurements-processor")]
#[command(about = "High-performance per-station min/mean/max temperature aggregator")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Input measurements file (<station>;<temperature> per line)")]
    pub input_file: PathBuf,

    #[arg(
        long,
        default_value_t = num_cpus::get(),
        help = "Number of worker threads, one partition each"
    )]
    pub workers: usize,

    #[arg(
        long,
        default_value = "mmap",
        help = "Input sourcing strategy: 'mmap' or 'read'"
    )]
    pub sourcing: String,

    #[arg(
        long,
        default_value = "false",
        help = "Skip bytewise key comparison on hash hits; only safe for a small known station vocabulary"
    )]
    pub skip_key_verification: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
