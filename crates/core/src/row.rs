//! Rows: permutations of the bells, and the two ways of moving between them.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::RingingError;
use crate::place_notation::PlaceSet;
use crate::stage::{Stage, MAX_STAGE};

/// One permutation of the bells at a given stage.
///
/// Bells are stored as 0-based indices. Positions past the stage are always
/// zero so that derived equality and hashing only see the real bells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row {
    stage: Stage,
    bells: [u8; MAX_STAGE],
}

impl Row {
    /// The identity row: every bell in its own place.
    pub fn rounds(stage: Stage) -> Self {
        let mut bells = [0u8; MAX_STAGE];
        for (i, b) in bells.iter_mut().take(stage.bells()).enumerate() {
            *b = i as u8;
        }
        Row { stage, bells }
    }

    /// Build a row from 0-based bell indices, checking it is a permutation.
    pub fn from_bells(stage: Stage, bells: &[u8]) -> Result<Self, RingingError> {
        let invalid = |reason: String| RingingError::InvalidRow {
            row: bells.iter().map(|&b| symbol_or_placeholder(b)).collect(),
            stage: stage.bells(),
            reason,
        };
        if bells.len() != stage.bells() {
            return Err(invalid(format!(
                "expected {} bells, found {}",
                stage.bells(),
                bells.len()
            )));
        }
        let mut seen: u16 = 0;
        let mut out = [0u8; MAX_STAGE];
        for (i, &b) in bells.iter().enumerate() {
            if b as usize >= stage.bells() {
                return Err(invalid(format!("bell {} is out of range", b as usize + 1)));
            }
            let bit = 1u16 << b;
            if seen & bit != 0 {
                return Err(invalid(format!("bell {} appears twice", Stage::symbol(b))));
            }
            seen |= bit;
            out[i] = b;
        }
        Ok(Row { stage, bells: out })
    }

    /// Parse a row written in bell symbols, e.g. `"15738264"`.
    pub fn parse(stage: Stage, s: &str) -> Result<Self, RingingError> {
        let bells = s
            .chars()
            .map(|c| stage.parse_bell(c, s))
            .collect::<Result<Vec<u8>, _>>()?;
        Row::from_bells(stage, &bells)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn bells(&self) -> &[u8] {
        &self.bells[..self.stage.bells()]
    }

    pub fn is_rounds(&self) -> bool {
        self.bells().iter().enumerate().all(|(i, &b)| b as usize == i)
    }

    /// 0-based position of `bell` in this row.
    pub fn position_of(&self, bell: u8) -> Option<usize> {
        self.bells().iter().position(|&b| b == bell)
    }

    /// Permute `self` by `transform`: output position `i` holds the bell at
    /// position `transform[i]` of `self`.
    ///
    /// This is how lead rows are placed on top of a lead head and how lead
    /// heads are chained from one lead to the next. It is associative but
    /// not commutative.
    pub fn compose(&self, transform: &Row) -> Row {
        debug_assert_eq!(self.stage, transform.stage, "composing rows of different stages");
        let mut bells = [0u8; MAX_STAGE];
        for (out, &from) in bells.iter_mut().zip(transform.bells()) {
            *out = self.bells[from as usize];
        }
        Row {
            stage: self.stage,
            bells,
        }
    }

    /// Ring one change: bells in `places` stay put, every other bell swaps
    /// with its neighbour in disjoint pairs from the front.
    ///
    /// Fails when a non-place position has no free partner to swap with,
    /// which only happens for notation that does not fit this stage.
    pub fn apply_places(&self, places: &PlaceSet) -> Result<Row, RingingError> {
        let n = self.stage.bells();
        let mut bells = self.bells;
        let mut pos = 0;
        while pos < n {
            if places.contains(pos) {
                pos += 1;
                continue;
            }
            if pos + 1 >= n || places.contains(pos + 1) {
                return Err(RingingError::MalformedPlaceNotation {
                    notation: places.to_string(),
                    reason: format!(
                        "position {} has no partner to swap with at stage {}",
                        pos + 1,
                        n
                    ),
                });
            }
            bells.swap(pos, pos + 1);
            pos += 2;
        }
        Ok(Row {
            stage: self.stage,
            bells,
        })
    }
}

fn symbol_or_placeholder(bell: u8) -> char {
    if (bell as usize) < MAX_STAGE {
        Stage::symbol(bell)
    } else {
        '?'
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bells() {
            write!(f, "{}", Stage::symbol(b))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({})", self)
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
