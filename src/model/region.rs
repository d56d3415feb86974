use std::collections::BTreeMap;

use crate::catalogue::defs::Flavor;
use crate::model::Group;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRegion {
    pub id: String,
    pub flavor: Flavor,
}

/// Figures read directly from one sub-region's table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionTotals {
    pub background_yield: f64,
    pub stat_error: f64,
    pub sys_error: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub sub_regions: Vec<SubRegion>,
    pub groups: Vec<Group>,
    pub totals: BTreeMap<String, RegionTotals>,
}

impl Region {
    pub fn new(name: impl Into<String>, sub_regions: Vec<SubRegion>, groups: Vec<Group>) -> Self {
        Self {
            name: name.into(),
            sub_regions,
            groups,
            totals: BTreeMap::new(),
        }
    }

    pub fn sub_region_ids(&self) -> impl Iterator<Item = &str> {
        self.sub_regions.iter().map(|s| s.id.as_str())
    }

    /// Sub-regions in report column order: same-flavour before
    /// different-flavour, catalogue order within a channel.
    pub fn report_columns(&self) -> Vec<&SubRegion> {
        let mut cols: Vec<&SubRegion> = self.sub_regions.iter().collect();
        cols.sort_by_key(|s| s.flavor);
        cols
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/region.rs"]
mod tests;
