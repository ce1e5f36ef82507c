//! Validating many touch records at once.
//!
//! Touches are independent of each other, so a batch can be spread over a
//! rayon pool. Results always come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalogue::MethodCatalogue;
use crate::error::{ErrorReport, RingingError};
use crate::touch::{Touch, TouchRecord};

/// What to do when a record fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Stop at the first invalid record.
    #[default]
    Abort,
    /// Leave invalid records out and report them alongside the valid ones.
    Skip,
}

/// A record that failed validation, with its index in the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("record {index}: {error}")]
pub struct RejectedTouch {
    pub index: usize,
    pub record: TouchRecord,
    #[source]
    pub error: RingingError,
}

impl RejectedTouch {
    pub fn to_report(&self) -> RejectedReport {
        RejectedReport {
            index: self.index,
            record: self.record.clone(),
            error: self.error.to_report(),
        }
    }
}

/// Serializable view of a [`RejectedTouch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedReport {
    pub index: usize,
    pub record: TouchRecord,
    pub error: ErrorReport,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub touches: Vec<Touch>,
    /// Always empty under [`BatchPolicy::Abort`].
    pub rejected: Vec<RejectedTouch>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub policy: BatchPolicy,
    pub parallel: bool,
}

pub fn validate_batch(
    records: &[TouchRecord],
    catalogue: &MethodCatalogue,
    options: BatchOptions,
) -> Result<BatchOutcome, RejectedTouch> {
    let results: Vec<Result<Touch, RingingError>> = if options.parallel {
        records
            .par_iter()
            .map(|record| Touch::new(record, catalogue))
            .collect()
    } else if options.policy == BatchPolicy::Abort {
        let mut results = Vec::with_capacity(records.len());
        for record in records {
            let result = Touch::new(record, catalogue);
            let failed = result.is_err();
            results.push(result);
            if failed {
                break;
            }
        }
        results
    } else {
        records
            .iter()
            .map(|record| Touch::new(record, catalogue))
            .collect()
    };

    let mut outcome = BatchOutcome::default();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(touch) => outcome.touches.push(touch),
            Err(error) => {
                let rejected = RejectedTouch {
                    index,
                    record: records[index].clone(),
                    error,
                };
                match options.policy {
                    BatchPolicy::Abort => return Err(rejected),
                    BatchPolicy::Skip => {
                        tracing::warn!(index, error = %rejected.error, "skipping invalid touch");
                        outcome.rejected.push(rejected);
                    }
                }
            }
        }
    }

    tracing::debug!(
        valid = outcome.touches.len(),
        rejected = outcome.rejected.len(),
        "validated batch"
    );
    Ok(outcome)
}
