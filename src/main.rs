mod catalogue;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::catalogue::ConfigError;
use crate::catalogue::loader::{load_groups, load_region};
use crate::pipeline::stage4_report::{ReportFormat, write_report};
use crate::pipeline::{PipelineError, run_pipeline};
use crate::report::ReportError;
use crate::report::json::ToolMeta;
use crate::stats::{StatsError, sigma_from_pvalue, symmetrize, total_error};

/// Summarise systematic uncertainties from SysTable LaTeX tables.
#[derive(Parser, Debug)]
#[command(name = "systabler", version, about, long_about = None)]
struct Cli {
    /// Print per-systematic values and intermediate totals
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the per-group systematics summary for a region
    Table(TableArgs),
    /// Convert p-values to one-sided Gaussian significances
    Significance(SignificanceArgs),
    /// Combine a statistical error with a symmetrized up/down variation
    TotalError(TotalErrorArgs),
}

#[derive(Args, Debug, Clone)]
struct TableArgs {
    /// Directory containing the .tex SysTables
    #[arg(short = 'd', long, value_name = "DIR")]
    texdir: PathBuf,

    /// Base region (e.g. Super1a)
    #[arg(short, long)]
    region: String,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// JSON file replacing the built-in systematic groups
    #[arg(long, value_name = "FILE")]
    taxonomy: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct SignificanceArgs {
    #[arg(required = true, value_name = "PVALUE")]
    pvalues: Vec<f64>,
}

#[derive(Args, Debug, Clone)]
struct TotalErrorArgs {
    #[arg(long)]
    stat: f64,

    /// Up variation (varied - nominal)
    #[arg(long, allow_hyphen_values = true)]
    up: f64,

    /// Down variation (nominal - varied)
    #[arg(long, allow_hyphen_values = true)]
    down: f64,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Table(args) => run_table(&args),
        Command::Significance(args) => {
            for line in significance_lines(&args.pvalues)? {
                println!("{line}");
            }
            Ok(())
        }
        Command::TotalError(args) => {
            println!("{}", total_error_line(&args));
            Ok(())
        }
    }
}

fn run_table(args: &TableArgs) -> Result<(), AppError> {
    let mut region = load_region(&args.region)?;
    region.groups = load_groups(args.taxonomy.as_deref())?;
    let ids: Vec<&str> = region.sub_region_ids().collect();
    info!("region {} -> {}", region.name, ids.join(", "));

    let region = run_pipeline(region, &args.texdir)?;

    let tool = ToolMeta {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: read_git_hash(Path::new(".")),
    };
    write_report(&region, args.format, &tool, args.out.as_deref())?;
    Ok(())
}

fn significance_lines(pvalues: &[f64]) -> Result<Vec<String>, StatsError> {
    let mut lines = Vec::with_capacity(pvalues.len());
    for &p in pvalues {
        let sigma = sigma_from_pvalue(p)?;
        lines.push(format!("{p:e} -> {sigma:.4} sigma"));
    }
    Ok(lines)
}

fn total_error_line(args: &TotalErrorArgs) -> String {
    format!(
        "sym: {:.2}  total: {:.2}",
        symmetrize(args.up, args.down),
        total_error(args.stat, args.up, args.down)
    )
}

fn read_git_hash(repo_root: &Path) -> Option<String> {
    let head = repo_root.join(".git/HEAD");
    let content = std::fs::read_to_string(head).ok()?;
    if let Some(ref_line) = content.strip_prefix("ref: ") {
        let ref_path = repo_root.join(".git").join(ref_line.trim());
        return std::fs::read_to_string(ref_path)
            .ok()
            .map(|s| s.trim().to_string());
    }
    Some(content.trim().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
