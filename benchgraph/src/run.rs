use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use benchgraph_core::parse::ReportParser;
use benchgraph_core::report::{Method, Report};
use benchgraph_core::{charts, export};

use crate::cli::Cli;

pub const HTTP_COMPARISON_FILE: &str = "http_comparison.png";
pub const WEBSOCKET_FILE: &str = "websocket_performance.png";
pub const TIMELINE_FILE: &str = "performance_timeline.png";
pub const CSV_FILE: &str = "benchmark_data.csv";

pub fn run(cli: &Cli) -> Result<()> {
    let text = fs::read_to_string(&cli.report)
        .with_context(|| format!("read report {}", cli.report.display()))?;

    let parser = ReportParser::new().context("compile report patterns")?;
    let report = parser
        .parse(&text)
        .with_context(|| format!("parse report {}", cli.report.display()))?;

    print_sample_summary(&report);

    let out_dir = output_dir(&cli.report);

    let path = out_dir.join(HTTP_COMPARISON_FILE);
    charts::save_png(
        &charts::http_comparison(&report),
        charts::HTTP_COMPARISON_SIZE,
        &path,
    )
    .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());

    match charts::websocket_performance(&report) {
        Some(chart) => {
            let path = out_dir.join(WEBSOCKET_FILE);
            charts::save_png(&chart, charts::WEBSOCKET_SIZE, &path)
                .with_context(|| format!("write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("INFO: no WebSocket samples, skipping {WEBSOCKET_FILE}"),
    }

    let path = out_dir.join(TIMELINE_FILE);
    charts::save_png(
        &charts::performance_timeline(&report),
        charts::TIMELINE_SIZE,
        &path,
    )
    .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());

    let path = out_dir.join(CSV_FILE);
    export::write_csv(&report, &path).with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());

    Ok(())
}

fn print_sample_summary(report: &Report) {
    for method in Method::ALL {
        let series = report.series(method);
        match series.mean() {
            Some(mean) => println!("{method}: {} sample(s), mean {mean:.3}", series.len()),
            None => println!("{method}: no samples"),
        }
    }
}

/// Outputs land next to the input; a bare filename means the current
/// directory.
fn output_dir(report: &Path) -> PathBuf {
    match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
