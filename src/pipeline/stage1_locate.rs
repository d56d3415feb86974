use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::input::{TableText, locate_table};
use crate::model::Region;
use crate::pipeline::AggregateError;

#[derive(Debug)]
pub struct Stage1Output {
    pub tables: BTreeMap<String, TableText>,
    pub failures: Vec<AggregateError>,
}

pub fn load_sub_region_table(
    texdir: &Path,
    sub_region: &str,
) -> Result<TableText, AggregateError> {
    let path = locate_table(texdir, sub_region).map_err(|source| AggregateError::Input {
        sub_region: sub_region.to_string(),
        source,
    })?;
    info!("table for {} at {}", sub_region, path.display());
    TableText::read(&path).map_err(|source| AggregateError::Input {
        sub_region: sub_region.to_string(),
        source,
    })
}

/// Locates and reads one table per sub-region. A sub-region whose table
/// cannot be found or read is recorded as a failure; the others still load.
pub fn run_stage1(region: &Region, texdir: &Path) -> Stage1Output {
    let mut tables = BTreeMap::new();
    let mut failures = Vec::new();
    for sub_region in region.sub_region_ids() {
        match load_sub_region_table(texdir, sub_region) {
            Ok(table) => {
                tables.insert(sub_region.to_string(), table);
            }
            Err(err) => failures.push(err),
        }
    }
    Stage1Output { tables, failures }
}
