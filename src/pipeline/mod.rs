use std::path::Path;

use tracing::error;

use crate::input::InputError;
use crate::model::Region;
use crate::pipeline::stage2_parse::ParseError;

pub mod stage1_locate;
pub mod stage2_parse;
pub mod stage3_aggregate;
pub mod stage4_report;

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("{sub_region}: {source}")]
    Input {
        sub_region: String,
        #[source]
        source: InputError,
    },
    #[error("{sub_region}: {source}")]
    Parse {
        sub_region: String,
        #[source]
        source: ParseError,
    },
    #[error("{sub_region}: no value for '{systematic}' in group '{group}'")]
    MissingVariation {
        group: String,
        systematic: String,
        sub_region: String,
    },
}

impl AggregateError {
    pub fn sub_region(&self) -> &str {
        match self {
            AggregateError::Input { sub_region, .. }
            | AggregateError::Parse { sub_region, .. }
            | AggregateError::MissingVariation { sub_region, .. } => sub_region,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{} sub-region(s) failed: {}", .0.len(), failed_sub_regions(.0))]
pub struct PipelineError(pub Vec<AggregateError>);

fn failed_sub_regions(failures: &[AggregateError]) -> String {
    failures
        .iter()
        .map(AggregateError::sub_region)
        .collect::<Vec<_>>()
        .join(", ")
}

/// locate -> parse -> aggregate for every sub-region of `region`. Each
/// failing sub-region is logged; any failure fails the whole run.
pub fn run_pipeline(mut region: Region, texdir: &Path) -> Result<Region, PipelineError> {
    let stage1 = stage1_locate::run_stage1(&region, texdir);
    let mut failures = stage1.failures;
    failures.extend(stage3_aggregate::run_stage3(&mut region, &stage1.tables));

    if failures.is_empty() {
        return Ok(region);
    }
    for err in &failures {
        error!("{err}");
    }
    Err(PipelineError(failures))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
