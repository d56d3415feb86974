pub mod defs;
pub mod loader;

use std::path::PathBuf;

pub use defs::Flavor;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("region '{name}' is not supported (use one of: {supported})")]
    UnsupportedRegion { name: String, supported: String },
    #[error("failed to read taxonomy {}: {source}", .path.display())]
    TaxonomyIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid taxonomy {}: {source}", .path.display())]
    TaxonomyFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid taxonomy: {0}")]
    InvalidTaxonomy(String),
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalogue/tests.rs"]
mod tests;
