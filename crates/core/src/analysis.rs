//! Read-only scoring of a composed touch: calling positions, method lead
//! counts and runs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::call_string::{Call, Lead};
use crate::catalogue::{CallConfig, MethodCatalogue};
use crate::row::Row;
use crate::stage::Stage;

/// Length of a run of consecutive bells that counts as music.
pub const RUN_LENGTH: usize = 4;

/// A call and the calling position it was made at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallRecord {
    pub call: Call,
    pub position: char,
}

/// Name the calling position of a call from where the tenor sits in the
/// lead head reached by it.
///
/// Positions past the end of the configured alphabet are written as the
/// tenor's place in bell symbols.
pub fn calling_position(lead_head: &Row, call: Call, calls: &CallConfig) -> char {
    let alphabet = match call {
        Call::Bob => &calls.bob_positions,
        Call::Single => &calls.single_positions,
    };
    let tenor = lead_head.stage().tenor();
    let pos = lead_head.position_of(tenor).unwrap_or(tenor as usize);
    alphabet
        .chars()
        .nth(pos)
        .unwrap_or_else(|| Stage::symbol(pos as u8))
}

/// Compact a call list for conductors.
///
/// Consecutive calls at the same position form a group. A group of bobs is
/// written as just the position (`H`), or with a count when there is more
/// than one (`3H`). A group containing a single spells out every call
/// (`-` or `s`) before the position (`s-W`).
pub fn calling_position_string(calls: &[CallRecord]) -> String {
    let mut out = String::new();
    for group in calls.chunk_by(|a, b| a.position == b.position) {
        if group.iter().all(|c| c.call == Call::Bob) {
            if group.len() > 1 {
                out.push_str(&group.len().to_string());
            }
        } else {
            out.extend(group.iter().map(|c| c.call.calling_symbol()));
        }
        out.push(group[0].position);
    }
    out
}

/// Count leads of each method rung in a touch.
///
/// Every lead counts once, except that a final lead cut short before its
/// half-way point is not counted again for a method already rung. A method
/// that only appears in that short lead still gets a count of 1.
pub fn method_counts(
    leads: &[Lead],
    last_lead_len: usize,
    catalogue: &MethodCatalogue,
) -> BTreeMap<char, usize> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for lead in leads {
        *counts.entry(lead.method).or_insert(0) += 1;
    }
    if let Some(last) = leads.last() {
        if let Some(method) = catalogue.get(last.method) {
            discount_short_last_lead(&mut counts, last.method, last_lead_len, method.lead_len());
        }
    }
    counts
}

/// Apply the half-lead rule to the last lead's method.
///
/// A last lead shorter than half a full lead is dropped from its method's
/// count, but the count never goes below 1.
pub fn discount_short_last_lead(
    counts: &mut BTreeMap<char, usize>,
    method: char,
    rung: usize,
    full_lead_len: usize,
) {
    if rung * 2 < full_lead_len {
        if let Some(count) = counts.get_mut(&method) {
            *count = count.saturating_sub(1).max(1);
        }
    }
}

/// Whether four bells are consecutive, going up or down.
fn is_run(bells: &[u8]) -> bool {
    let up = bells.windows(2).all(|w| w[1] == w[0] + 1);
    let down = bells.windows(2).all(|w| w[0] == w[1] + 1);
    up || down
}

/// Runs in one row: 0, 1 or 2 (front and back are checked separately).
pub fn row_runs(row: &Row) -> usize {
    let bells = row.bells();
    if bells.len() < RUN_LENGTH {
        return 0;
    }
    let front = is_run(&bells[..RUN_LENGTH]) as usize;
    let back = is_run(&bells[bells.len() - RUN_LENGTH..]) as usize;
    front + back
}

pub fn count_runs(rows: &[Row]) -> usize {
    rows.iter().map(row_runs).sum()
}
