use serde::Serialize;

use crate::report::{ReportError, SummaryTable};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub git_hash: Option<String>,
}

#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    tool: &'a ToolMeta,
    #[serde(flatten)]
    table: &'a SummaryTable,
}

pub fn render_summary_json(table: &SummaryTable, tool: &ToolMeta) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(&SummaryDocument { tool, table })?;
    out.push('\n');
    Ok(out)
}
