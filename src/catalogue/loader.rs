use std::path::Path;

use serde::Deserialize;

use crate::catalogue::ConfigError;
use crate::catalogue::defs::{GroupDef, builtin_groups, builtin_regions, find_region};
use crate::model::{Group, Region, SubRegion};

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyFile {
    pub groups: Vec<TaxonomyGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyGroup {
    pub name: String,
    pub systematics: Vec<String>,
}

/// Builds a region with no groups from the catalogue. Unknown names fail
/// here, before any table or taxonomy file is touched.
pub fn load_region(name: &str) -> Result<Region, ConfigError> {
    let def = find_region(name).ok_or_else(|| ConfigError::UnsupportedRegion {
        name: name.to_string(),
        supported: supported_regions().join(", "),
    })?;
    let sub_regions = def
        .sub_regions
        .iter()
        .map(|s| SubRegion {
            id: s.id.to_string(),
            flavor: s.flavor,
        })
        .collect();
    Ok(Region::new(def.name, sub_regions, Vec::new()))
}

pub fn supported_regions() -> Vec<&'static str> {
    builtin_regions().iter().map(|r| r.name).collect()
}

pub fn load_groups(taxonomy: Option<&Path>) -> Result<Vec<Group>, ConfigError> {
    match taxonomy {
        Some(path) => load_taxonomy_file(path),
        None => Ok(builtin_groups().iter().map(group_from_def).collect()),
    }
}

fn group_from_def(def: &GroupDef) -> Group {
    Group::new(def.name, def.systematics)
}

pub fn load_taxonomy_file(path: &Path) -> Result<Vec<Group>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::TaxonomyIo {
        path: path.to_path_buf(),
        source,
    })?;
    let file: TaxonomyFile =
        serde_json::from_str(&raw).map_err(|source| ConfigError::TaxonomyFormat {
            path: path.to_path_buf(),
            source,
        })?;
    groups_from_taxonomy(file)
}

pub fn groups_from_taxonomy(file: TaxonomyFile) -> Result<Vec<Group>, ConfigError> {
    if file.groups.is_empty() {
        return Err(ConfigError::InvalidTaxonomy(
            "taxonomy defines no groups".to_string(),
        ));
    }
    let mut groups = Vec::with_capacity(file.groups.len());
    for g in file.groups {
        if g.systematics.is_empty() {
            return Err(ConfigError::InvalidTaxonomy(format!(
                "group '{}' has no systematics",
                g.name
            )));
        }
        if groups.iter().any(|existing: &Group| existing.name == g.name) {
            return Err(ConfigError::InvalidTaxonomy(format!(
                "group '{}' is defined twice",
                g.name
            )));
        }
        groups.push(Group::new(g.name, &g.systematics));
    }
    Ok(groups)
}
