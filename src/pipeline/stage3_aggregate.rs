use std::collections::BTreeMap;

use tracing::debug;

use crate::input::TableText;
use crate::model::{Group, Region, RegionTotals};
use crate::pipeline::AggregateError;
use crate::pipeline::stage2_parse::{
    find_named_row, total_background_yield, total_stat_error, total_sys_error,
};
use crate::stats::quadrature;

/// Quadrature sum of the group's variations in one sub-region.
pub fn combine_group(group: &Group, sub_region: &str) -> Result<f64, AggregateError> {
    let mut values = Vec::with_capacity(group.systematics.len());
    for sys in &group.systematics {
        let v = sys.variation.get(sub_region).copied().ok_or_else(|| {
            AggregateError::MissingVariation {
                group: group.name.clone(),
                systematic: sys.name.clone(),
                sub_region: sub_region.to_string(),
            }
        })?;
        values.push(v);
    }
    Ok(quadrature(values))
}

pub fn fill_systematics(
    groups: &mut [Group],
    sub_region: &str,
    table: &TableText,
) -> Result<(), AggregateError> {
    for group in groups.iter_mut() {
        for sys in group.systematics.iter_mut() {
            let v = find_named_row(table, &sys.name).map_err(|source| AggregateError::Parse {
                sub_region: sub_region.to_string(),
                source,
            })?;
            debug!("{} {}: {}", sub_region, sys.name, v);
            sys.variation.insert(sub_region.to_string(), v);
        }
    }
    Ok(())
}

pub fn combine_systematics(groups: &mut [Group], sub_region: &str) -> Result<(), AggregateError> {
    for group in groups.iter_mut() {
        let combined = combine_group(group, sub_region)?;
        debug!("{} {} --> combined: {:.2}", sub_region, group.name, combined);
        group.combined.insert(sub_region.to_string(), combined);
    }
    Ok(())
}

pub fn collect_region_totals(
    sub_region: &str,
    table: &TableText,
) -> Result<RegionTotals, AggregateError> {
    let wrap = |source| AggregateError::Parse {
        sub_region: sub_region.to_string(),
        source,
    };
    let totals = RegionTotals {
        background_yield: total_background_yield(table).map_err(wrap)?,
        stat_error: total_stat_error(table).map_err(wrap)?,
        sys_error: total_sys_error(table).map_err(wrap)?,
    };
    debug!(
        "{} yield: {:.2}    stat: {:.2}     sys: {:.2}",
        sub_region, totals.background_yield, totals.stat_error, totals.sys_error
    );
    Ok(totals)
}

/// Quadrature sum over every group's combined value. Reported next to the
/// table's own total and never reconciled with it.
pub fn group_quadrature_total(groups: &[Group], sub_region: &str) -> Option<f64> {
    let mut values = Vec::with_capacity(groups.len());
    for group in groups {
        values.push(*group.combined.get(sub_region)?);
    }
    Some(quadrature(values))
}

fn aggregate_sub_region(
    region: &mut Region,
    sub_region: &str,
    table: &TableText,
) -> Result<(), AggregateError> {
    fill_systematics(&mut region.groups, sub_region, table)?;
    combine_systematics(&mut region.groups, sub_region)?;
    let totals = collect_region_totals(sub_region, table)?;
    if let Some(from_groups) = group_quadrature_total(&region.groups, sub_region) {
        debug!(
            "{} sys from table: {:.2}, from groups: {:.2}",
            sub_region, totals.sys_error, from_groups
        );
    }
    region.totals.insert(sub_region.to_string(), totals);
    Ok(())
}

/// Aggregates every sub-region that has a table. Failures are returned per
/// sub-region; a failed sub-region keeps no totals.
pub fn run_stage3(
    region: &mut Region,
    tables: &BTreeMap<String, TableText>,
) -> Vec<AggregateError> {
    let ids: Vec<String> = region.sub_region_ids().map(str::to_string).collect();
    let mut failures = Vec::new();
    for id in &ids {
        let Some(table) = tables.get(id) else {
            continue;
        };
        if let Err(err) = aggregate_sub_region(region, id, table) {
            failures.push(err);
        }
    }
    failures
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
