use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "benchgraph",
    version,
    about = "Render comparison charts and a CSV export from a load-test report",
    long_about = "benchgraph reads a plaintext benchmark report containing per-configuration HTTP GET/POST throughput and WebSocket message rates, then writes three PNG comparison charts and a flat CSV next to the report file.\n\nA report is a sequence of `=== <Configuration> Benchmark ===` section headers, `Method: <GET|POST|WebSocket>` markers, and `Requests/second:` / `messages/second:` measurement lines.",
    after_help = "Examples:\n  benchgraph results/benchmark_report.txt\n  benchgraph benchmark_report.txt"
)]
pub struct Cli {
    /// Path to the benchmark report file; outputs are written next to it
    pub report: PathBuf,
}
