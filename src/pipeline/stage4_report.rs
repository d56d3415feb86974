use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::model::Region;
use crate::report::json::{ToolMeta, render_summary_json};
use crate::report::text::render_summary_text;
use crate::report::{ReportError, build_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn render_report(
    region: &Region,
    format: ReportFormat,
    tool: &ToolMeta,
) -> Result<String, ReportError> {
    let summary = build_summary(region)?;
    match format {
        ReportFormat::Text => Ok(render_summary_text(&summary)),
        ReportFormat::Json => render_summary_json(&summary, tool),
    }
}

/// Writes the rendered report to `out`, or to stdout when no path is given.
pub fn write_report(
    region: &Region,
    format: ReportFormat,
    tool: &ToolMeta,
    out: Option<&Path>,
) -> Result<(), ReportError> {
    let rendered = render_report(region, format, tool)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            info!("report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(rendered.as_bytes())?;
            lock.flush()?;
        }
    }
    Ok(())
}
