//! Touch composition: replay a call-string against the catalogue from
//! rounds and decide how the touch ends.
//!
//! Composition ends in one of three ways:
//! - rounds turns up part-way through the rows (a snap or early finish):
//!   the rows are cut just before it and the touch is [`Termination::Truncated`];
//! - the last lead head is rounds: [`Termination::ComeRound`];
//! - neither: [`RingingError::DoesNotComeRound`].

use serde::Serialize;

use crate::analysis::{self, CallRecord};
use crate::call_string::{self, Lead};
use crate::catalogue::MethodCatalogue;
use crate::error::RingingError;
use crate::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Termination {
    /// The final lead head is rounds.
    ComeRound,
    /// Rounds was reached at row `at`, before the end of the last lead.
    Truncated { at: usize },
}

/// The rows and calls of a touch, before any scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub leads: Vec<Lead>,
    pub rows: Vec<Row>,
    pub calls: Vec<CallRecord>,
    /// Rows of the last lead actually rung once any truncation is applied.
    pub last_lead_len: usize,
    pub termination: Termination,
}

pub fn compose(catalogue: &MethodCatalogue, call_string: &str) -> Result<Composition, RingingError> {
    let leads = call_string::tokenize(call_string);
    if leads.is_empty() {
        return Err(RingingError::EmptyCallString {
            call_string: call_string.to_owned(),
        });
    }

    let stage = catalogue.stage();
    let rounds = Row::rounds(stage);
    let mut lead_head = rounds;
    let mut rows: Vec<Row> = Vec::new();
    let mut calls: Vec<CallRecord> = Vec::new();
    let mut last_lead_len = 0;

    for lead in &leads {
        let method = catalogue
            .get(lead.method)
            .ok_or_else(|| RingingError::UnknownMethod {
                call_string: call_string.to_owned(),
                shorthand: lead.method,
            })?;

        rows.extend(method.lead_rows().iter().map(|r| lead_head.compose(r)));
        lead_head = lead_head.compose(method.lead_head(lead.call));
        if let Some(call) = lead.call {
            calls.push(CallRecord {
                call,
                position: analysis::calling_position(&lead_head, call, catalogue.calls()),
            });
        }
        last_lead_len = method.lead_len();
    }

    // Row 0 is always rounds, so only look for a repeat after it.
    let termination = match rows.iter().skip(1).position(Row::is_rounds) {
        Some(offset) => {
            let at = offset + 1;
            last_lead_len = last_lead_len.saturating_sub(rows.len() - at);
            rows.truncate(at);
            Termination::Truncated { at }
        }
        None if lead_head == rounds => Termination::ComeRound,
        None => {
            tracing::debug!(call_string, %lead_head, "touch does not come round");
            return Err(RingingError::DoesNotComeRound {
                call_string: call_string.to_owned(),
                lead_head: lead_head.to_string(),
            });
        }
    };

    tracing::debug!(
        call_string,
        rows = rows.len(),
        ?termination,
        "composed touch"
    );

    Ok(Composition {
        leads,
        rows,
        calls,
        last_lead_len,
        termination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_string::Call;
    use crate::catalogue::{CallConfig, MethodDef};
    use crate::stage::Stage;

    fn catalogue() -> MethodCatalogue {
        let defs = vec![
            MethodDef::new("C", "Cambridge", "-38-14-1258-36-14-58-16-78,12"),
            MethodDef::new("B", "Bristol", "-58-14.58-58.36.14-14.58-14-18,18"),
            MethodDef::new("E", "Lessness", "-38-14-56-16-12-58-14-58,12"),
            MethodDef::new("L", "London", "38-38.14-12-38.14-14.58.16-16.58,12"),
            MethodDef::new("W", "Cornwall", "-56-14-56-38-14-58-14-58,18"),
        ];
        MethodCatalogue::new(Stage::MAJOR, CallConfig::default(), &defs).unwrap()
    }

    #[test]
    fn plain_course_comes_round() {
        let comp = compose(&catalogue(), "CCCCCCC").unwrap();
        assert_eq!(comp.rows.len(), 224);
        assert_eq!(comp.termination, Termination::ComeRound);
        assert_eq!(comp.last_lead_len, 32);
        assert!(comp.calls.is_empty());
        assert!(comp.rows[0].is_rounds());
    }

    #[test]
    fn short_plain_touch_does_not_come_round() {
        let err = compose(&catalogue(), "CCCCCC").unwrap_err();
        assert_eq!(
            err,
            RingingError::DoesNotComeRound {
                call_string: "CCCCCC".to_string(),
                lead_head: "16482735".to_string(),
            }
        );
    }

    #[test]
    fn snap_finish_truncates_rows_and_last_lead() {
        let comp = compose(&catalogue(), "E*B.L").unwrap();
        assert_eq!(comp.rows.len(), 66);
        assert_eq!(comp.termination, Termination::Truncated { at: 66 });
        assert_eq!(comp.last_lead_len, 2);
        let calls: Vec<(Call, char)> = comp.calls.iter().map(|c| (c.call, c.position)).collect();
        assert_eq!(calls, vec![(Call::Single, 'M'), (Call::Bob, 'M')]);
    }

    #[test]
    fn rounds_in_an_earlier_lead_zeroes_last_lead() {
        // Rounds comes up after two leads; the bobbed London lead is never rung.
        let comp = compose(&catalogue(), "WCL.").unwrap();
        assert_eq!(comp.rows.len(), 64);
        assert_eq!(comp.last_lead_len, 0);
        assert_eq!(comp.calls.len(), 1);
    }

    #[test]
    fn unknown_method_is_reported() {
        let err = compose(&catalogue(), "CQ").unwrap_err();
        assert_eq!(
            err,
            RingingError::UnknownMethod {
                call_string: "CQ".to_string(),
                shorthand: 'Q',
            }
        );
    }

    #[test]
    fn empty_call_string_is_rejected() {
        assert!(matches!(
            compose(&catalogue(), ">"),
            Err(RingingError::EmptyCallString { .. })
        ));
    }

    #[test]
    fn composition_is_deterministic() {
        let cat = catalogue();
        let a = compose(&cat, "C*C*CC*C*C.").unwrap();
        let b = compose(&cat, "C*C*CC*C*C.").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rows.len(), 192);
    }
}
