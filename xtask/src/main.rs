use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "undigraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark the graph with and without the `tracing` feature
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "graph_benchmark";

/// Feature configurations compared in the report, as `(baseline, cargo feature args)`.
const CONFIGS: &[(&str, &[&str])] = &[
    ("tracing", &[]),
    ("no-tracing", &["--no-default-features"]),
];

const REPORT_PATH: &str = "benchmark_results/report.md";

/// The subset of criterion's `estimates.json` the report needs.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Mean iterations per second, keyed by workload then baseline.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    for &(baseline, features) in CONFIGS {
        println!(">>> Benchmarking `{baseline}`");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.args(["bench", "--bench", BENCH]).args(features);

        // Criterion's own arguments go after `--`.
        cmd.args(["--", "--save-baseline", baseline]);
        if quick {
            cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to launch cargo bench for `{baseline}`"))?;
        if !status.success() {
            anyhow::bail!("cargo bench failed for `{baseline}` ({status})");
        }
        println!("Finished `{baseline}` in {:.2?}", start.elapsed());
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    for path in find_estimates(criterion_dir)? {
        if let Some((workload, baseline, ops)) = read_estimate(&path)? {
            results.entry(workload).or_default().insert(baseline, ops);
        }
    }

    let report = render_report(&results)?;
    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(report_path, report)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Recursively collects every `estimates.json` under `dir`.
fn find_estimates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            found.extend(find_estimates(&path)?);
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            found.push(path);
        }
    }
    Ok(found)
}

/// Reads `<workload>/<baseline>/estimates.json`, skipping criterion's own
/// `new`/`base`/`change` directories and anything not in [`CONFIGS`].
fn read_estimate(path: &Path) -> Result<Option<(String, String, f64)>> {
    let name = |p: Option<&Path>| {
        p.and_then(Path::file_name)
            .and_then(|s| s.to_str())
            .map(str::to_owned)
    };
    let baseline_dir = path.parent();
    let (Some(baseline), Some(workload)) = (name(baseline_dir), name(baseline_dir.and_then(Path::parent))) else {
        return Ok(None);
    };
    if !CONFIGS.iter().any(|&(b, _)| b == baseline) {
        return Ok(None);
    }

    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let estimates: Estimates =
        serde_json::from_str(&content).with_context(|| format!("malformed {}", path.display()))?;

    let time_ns = estimates.mean.point_estimate;
    if time_ns <= 0.0 {
        return Ok(None);
    }
    Ok(Some((workload, baseline, 1e9 / time_ns)))
}

fn render_report(results: &Results) -> Result<String> {
    let reference = CONFIGS[0].0;
    let mut out = String::new();

    writeln!(out, "# Graph Benchmark Report")?;
    writeln!(out)?;

    write!(out, "| Workload |")?;
    for &(baseline, _) in CONFIGS {
        write!(out, " {baseline} (Ops/s) | vs {reference} |")?;
    }
    writeln!(out)?;

    write!(out, "|---|")?;
    for _ in CONFIGS {
        write!(out, "---|---|")?;
    }
    writeln!(out)?;

    for (workload, by_baseline) in results {
        write!(out, "| {workload} |")?;
        let reference_ops = by_baseline.get(reference).copied().unwrap_or(0.0);

        for &(baseline, _) in CONFIGS {
            match by_baseline.get(baseline) {
                Some(&ops) => {
                    let rel = if reference_ops > 0.0 { ops / reference_ops } else { 0.0 };
                    write!(out, " {} | **{rel:.2}x** |", format_ops(ops))?;
                }
                None => write!(out, " N/A | - |")?,
            }
        }
        writeln!(out)?;
    }

    Ok(out)
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}
