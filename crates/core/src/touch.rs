//! Validated, scored touches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::{self, CallRecord};
use crate::catalogue::MethodCatalogue;
use crate::compose::{self, Termination};
use crate::error::RingingError;
use crate::row::Row;

/// A touch as supplied by the host, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchRecord {
    pub length: usize,
    pub call_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TouchRecord {
    pub fn new(length: usize, call_string: &str, notes: Option<&str>) -> Self {
        TouchRecord {
            length,
            call_string: call_string.to_owned(),
            notes: notes.map(str::to_owned),
        }
    }
}

/// A touch that comes round and whose declared length is correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Touch {
    pub length: usize,
    pub call_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Compact calling positions, e.g. `"sVsBsWsFH"`.
    pub calling_positions: String,
    pub calls: Vec<CallRecord>,
    pub runs: usize,
    /// Leads of each method rung, keyed by shorthand.
    pub method_counts: BTreeMap<char, usize>,
    pub termination: Termination,
    #[serde(skip)]
    rows: Vec<Row>,
}

impl Touch {
    /// Compose, check and score one record.
    pub fn new(record: &TouchRecord, catalogue: &MethodCatalogue) -> Result<Self, RingingError> {
        let composition = compose::compose(catalogue, &record.call_string)?;

        if record.length != composition.rows.len() {
            return Err(RingingError::LengthMismatch {
                call_string: record.call_string.clone(),
                declared: record.length,
                actual: composition.rows.len(),
            });
        }

        let method_counts = analysis::method_counts(
            &composition.leads,
            composition.last_lead_len,
            catalogue,
        );

        Ok(Touch {
            length: record.length,
            call_string: record.call_string.clone(),
            notes: record.notes.clone(),
            calling_positions: analysis::calling_position_string(&composition.calls),
            runs: analysis::count_runs(&composition.rows),
            calls: composition.calls,
            method_counts,
            termination: composition.termination,
            rows: composition.rows,
        })
    }

    /// Every row rung, starting from rounds and stopping before the final
    /// rounds.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_snap_finish(&self) -> bool {
        matches!(self.termination, Termination::Truncated { .. })
    }
}
