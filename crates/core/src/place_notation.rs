//! Place notation parsing.
//!
//! A place notation string describes one lead as a sequence of changes.
//! Changes are separated by `.`, except that a cross (`-` or `x`) separates
//! itself from its neighbours. A string may be split into blocks with `,`;
//! inside a `,`-joined string every block is mirrored unless it starts with
//! `+`. A string without `,` is only mirrored if it starts with `&`.
//!
//! Mirroring appends the block reversed without its last change, so
//! `&-38-14-78` expands to `-38-14-78-14-38-`.

use std::fmt;

use crate::error::RingingError;
use crate::stage::Stage;

/// The positions that stay fixed during one change, as a bitmask of 0-based
/// positions. An empty set is a cross: every pair of bells swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlaceSet(u16);

impl PlaceSet {
    pub fn cross() -> Self {
        PlaceSet(0)
    }

    /// Build a place-set from 0-based positions.
    pub fn from_places(places: &[usize]) -> Self {
        let mut set = PlaceSet::cross();
        for &p in places {
            set.insert(p);
        }
        set
    }

    pub fn insert(&mut self, pos: usize) {
        self.0 |= 1 << pos;
    }

    pub fn contains(&self, pos: usize) -> bool {
        pos < 16 && self.0 & (1 << pos) != 0
    }

    pub fn is_cross(&self) -> bool {
        self.0 == 0
    }

    /// The fixed positions, 1-based, in ascending order.
    pub fn places(&self) -> Vec<usize> {
        (0..16).filter(|&p| self.contains(p)).map(|p| p + 1).collect()
    }
}

impl fmt::Display for PlaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cross() {
            return write!(f, "-");
        }
        for p in self.places() {
            write!(f, "{}", Stage::symbol((p - 1) as u8))?;
        }
        Ok(())
    }
}

/// Parse a full place notation string into one place-set per change of the
/// lead.
pub fn parse(stage: Stage, notation: &str) -> Result<Vec<PlaceSet>, RingingError> {
    if notation.contains(',') {
        let mut changes = Vec::new();
        for block in notation.split(',') {
            changes.extend(parse_block(stage, block, true, notation)?);
        }
        return Ok(changes);
    }
    parse_block(stage, notation, false, notation)
}

/// Parse notation that must describe exactly one change, such as a call.
pub fn parse_change(stage: Stage, notation: &str) -> Result<PlaceSet, RingingError> {
    let changes = parse_block(stage, notation, false, notation)?;
    match changes.as_slice() {
        [single] => Ok(*single),
        _ => Err(RingingError::MalformedPlaceNotation {
            notation: notation.to_owned(),
            reason: format!("expected exactly one change, found {}", changes.len()),
        }),
    }
}

fn parse_block(
    stage: Stage,
    block: &str,
    in_multi_block: bool,
    notation: &str,
) -> Result<Vec<PlaceSet>, RingingError> {
    let block = block.trim();
    let symmetric = if in_multi_block {
        !block.starts_with('+')
    } else {
        block.starts_with('&')
    };
    let body = block.trim_matches(|c: char| matches!(c, '.' | '&' | '+' | ' '));

    let mut changes = Vec::new();
    let mut current: Option<PlaceSet> = None;
    for c in body.chars() {
        match c {
            '.' => changes.extend(current.take()),
            '-' | 'x' | 'X' => {
                changes.extend(current.take());
                changes.push(PlaceSet::cross());
            }
            _ => {
                let bell = stage.parse_bell(c, notation)?;
                current
                    .get_or_insert_with(PlaceSet::cross)
                    .insert(bell as usize);
            }
        }
    }
    changes.extend(current.take());

    if changes.is_empty() {
        return Err(RingingError::MalformedPlaceNotation {
            notation: notation.to_owned(),
            reason: "block contains no changes".to_owned(),
        });
    }

    if symmetric {
        let mirrored: Vec<PlaceSet> = changes[..changes.len() - 1].iter().rev().copied().collect();
        changes.extend(mirrored);
    }
    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places(stage: Stage, notation: &str) -> Vec<Vec<usize>> {
        parse(stage, notation)
            .unwrap()
            .iter()
            .map(PlaceSet::places)
            .collect()
    }

    #[test]
    fn comma_blocks_are_symmetric_by_default() {
        let parsed = places(Stage::MAJOR, "&-38-14-78,12");
        let expected: Vec<Vec<usize>> = vec![
            vec![],
            vec![3, 8],
            vec![],
            vec![1, 4],
            vec![],
            vec![7, 8],
            vec![],
            vec![1, 4],
            vec![],
            vec![3, 8],
            vec![],
            vec![1, 2],
        ];
        assert_eq!(parsed, expected);
    }

    #[test]
    fn first_block_is_a_palindrome() {
        let parsed = parse(Stage::MAJOR, "&-38-14-78,12").unwrap();
        let half = &parsed[..11];
        let reversed: Vec<PlaceSet> = half.iter().rev().copied().collect();
        assert_eq!(half, reversed.as_slice());
    }

    #[test]
    fn plain_string_is_not_mirrored() {
        assert_eq!(
            places(Stage::MAJOR, "x38x14"),
            vec![vec![], vec![3, 8], vec![], vec![1, 4]]
        );
        assert_eq!(places(Stage::MAJOR, "&x38x14").len(), 7);
    }

    #[test]
    fn plus_marks_asymmetric_block() {
        assert_eq!(
            places(Stage::MAJOR, "+x38x14,12"),
            vec![vec![], vec![3, 8], vec![], vec![1, 4], vec![1, 2]]
        );
    }

    #[test]
    fn full_lead_lengths() {
        assert_eq!(places(Stage::MAJOR, "-38-14-1258-36-14-58-16-78,12").len(), 32);
        assert_eq!(
            places(Stage::MAJOR, "38-38.14-12-38.14-14.58.16-16.58,12").len(),
            32
        );
        assert_eq!(places(Stage::MAJOR, "-58-14.58-58.36.14-14.58-14-18,18").len(), 32);
        assert_eq!(places(Stage::MAJOR, "-14-36-58-18,18").len(), 16);
    }

    #[test]
    fn dots_and_crosses_collapse() {
        assert_eq!(
            places(Stage::MAJOR, "-.14..-.58"),
            vec![vec![], vec![1, 4], vec![], vec![5, 8]]
        );
        assert_eq!(places(Stage::MAJOR, "--"), vec![Vec::<usize>::new(), Vec::<usize>::new()]);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = parse(Stage::MAJOR, "-39-14,12").unwrap_err();
        assert!(matches!(
            err,
            RingingError::InvalidBellSymbol { symbol: '9', stage: 8, .. }
        ));
        assert!(parse(Stage::MAJOR, "-3?-14").is_err());
    }

    #[test]
    fn empty_block_is_malformed() {
        assert!(matches!(
            parse(Stage::MAJOR, "-38-14,"),
            Err(RingingError::MalformedPlaceNotation { .. })
        ));
    }

    #[test]
    fn parse_change_requires_one_change() {
        assert_eq!(
            parse_change(Stage::MAJOR, "14").unwrap(),
            PlaceSet::from_places(&[0, 3])
        );
        assert!(parse_change(Stage::MAJOR, "14.58").is_err());
    }

    #[test]
    fn display_round_trips_symbols() {
        assert_eq!(PlaceSet::from_places(&[0, 1, 4, 7]).to_string(), "1258");
        assert_eq!(PlaceSet::cross().to_string(), "-");
    }
}
