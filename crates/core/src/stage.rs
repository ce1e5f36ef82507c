//! Stage: the number of bells and the symbols used to write them.

use std::fmt;

use crate::error::RingingError;

/// Bell symbols in order. The symbol at index 0 is bell 1.
pub const BELL_NAMES: &str = "1234567890ETABCD";

/// Smallest supported stage.
pub const MIN_STAGE: usize = 4;
/// Largest supported stage (one bell per symbol in [`BELL_NAMES`]).
pub const MAX_STAGE: usize = 16;

/// A validated bell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stage(usize);

impl Stage {
    pub const MAJOR: Stage = Stage(8);

    pub fn new(bells: usize) -> Result<Self, RingingError> {
        if (MIN_STAGE..=MAX_STAGE).contains(&bells) {
            Ok(Stage(bells))
        } else {
            Err(RingingError::InvalidStage {
                stage: bells,
                min: MIN_STAGE,
                max: MAX_STAGE,
            })
        }
    }

    pub fn bells(self) -> usize {
        self.0
    }

    /// The heaviest bell, as a 0-based index.
    pub fn tenor(self) -> u8 {
        (self.0 - 1) as u8
    }

    /// Symbol for a 0-based bell index.
    pub fn symbol(bell: u8) -> char {
        BELL_NAMES.as_bytes()[bell as usize] as char
    }

    /// Parse one bell symbol into a 0-based bell index, rejecting bells
    /// beyond this stage. `context` is echoed in the error.
    pub fn parse_bell(self, symbol: char, context: &str) -> Result<u8, RingingError> {
        BELL_NAMES
            .chars()
            .take(self.0)
            .position(|c| c == symbol)
            .map(|idx| idx as u8)
            .ok_or_else(|| RingingError::InvalidBellSymbol {
                symbol,
                stage: self.0,
                context: context.to_owned(),
            })
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::MAJOR
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_bounds() {
        assert!(Stage::new(3).is_err());
        assert!(Stage::new(17).is_err());
        assert_eq!(Stage::new(8).unwrap(), Stage::MAJOR);
        assert_eq!(Stage::new(16).unwrap().bells(), 16);
    }

    #[test]
    fn parse_bell_respects_stage() {
        let major = Stage::MAJOR;
        assert_eq!(major.parse_bell('1', "x").unwrap(), 0);
        assert_eq!(major.parse_bell('8', "x").unwrap(), 7);
        let err = major.parse_bell('9', "-38-19").unwrap_err();
        assert_eq!(
            err,
            RingingError::InvalidBellSymbol {
                symbol: '9',
                stage: 8,
                context: "-38-19".to_string(),
            }
        );
        assert_eq!(Stage::new(12).unwrap().parse_bell('T', "").unwrap(), 11);
    }

    #[test]
    fn tenor_and_symbols() {
        assert_eq!(Stage::MAJOR.tenor(), 7);
        assert_eq!(Stage::symbol(9), '0');
        assert_eq!(Stage::symbol(10), 'E');
    }
}
