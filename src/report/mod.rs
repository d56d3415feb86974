use serde::Serialize;

use crate::catalogue::Flavor;
use crate::model::Region;
use crate::pipeline::stage3_aggregate::group_quadrature_total;

pub mod json;
pub mod text;

pub const MC_STAT_LABEL: &str = "MC statistics";
pub const TOTAL_LABEL: &str = "Total";
pub const YIELD_LABEL: &str = "Yields (#evt)";
pub const GROUP_QUADRATURE_LABEL: &str = "Groups (quadrature)";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("no {what} for {sub_region}")]
    MissingValue { what: String, sub_region: String },
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryColumn {
    pub sub_region: String,
    pub flavor: Flavor,
    pub heading: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub values: Vec<f64>,
}

/// Aggregated figures of one region laid out in report column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub region: String,
    pub columns: Vec<SummaryColumn>,
    pub groups: Vec<SummaryRow>,
    pub mc_stat: SummaryRow,
    pub total: SummaryRow,
    pub yields: SummaryRow,
    pub group_quadrature: SummaryRow,
}

pub fn column_heading(sub_region: &str) -> String {
    format!("{sub_region} (+/- #evt)")
}

fn missing(what: &str, sub_region: &str) -> ReportError {
    ReportError::MissingValue {
        what: what.to_string(),
        sub_region: sub_region.to_string(),
    }
}

pub fn build_summary(region: &Region) -> Result<SummaryTable, ReportError> {
    let columns = region.report_columns();

    let mut groups = Vec::with_capacity(region.groups.len());
    for group in &region.groups {
        let mut values = Vec::with_capacity(columns.len());
        for col in &columns {
            let v = group
                .combined
                .get(&col.id)
                .copied()
                .ok_or_else(|| missing(&group.name, &col.id))?;
            values.push(v);
        }
        groups.push(SummaryRow {
            label: group.name.clone(),
            values,
        });
    }

    let mut mc_stat = Vec::with_capacity(columns.len());
    let mut total = Vec::with_capacity(columns.len());
    let mut yields = Vec::with_capacity(columns.len());
    let mut from_groups = Vec::with_capacity(columns.len());
    for col in &columns {
        let totals = region
            .totals
            .get(&col.id)
            .ok_or_else(|| missing("region totals", &col.id))?;
        mc_stat.push(totals.stat_error);
        total.push(totals.sys_error);
        yields.push(totals.background_yield);
        from_groups.push(
            group_quadrature_total(&region.groups, &col.id)
                .ok_or_else(|| missing("group total", &col.id))?,
        );
    }

    Ok(SummaryTable {
        region: region.name.clone(),
        columns: columns
            .iter()
            .map(|c| SummaryColumn {
                sub_region: c.id.clone(),
                flavor: c.flavor,
                heading: column_heading(&c.id),
            })
            .collect(),
        groups,
        mc_stat: row(MC_STAT_LABEL, mc_stat),
        total: row(TOTAL_LABEL, total),
        yields: row(YIELD_LABEL, yields),
        group_quadrature: row(GROUP_QUADRATURE_LABEL, from_groups),
    })
}

fn row(label: &str, values: Vec<f64>) -> SummaryRow {
    SummaryRow {
        label: label.to_string(),
        values,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
