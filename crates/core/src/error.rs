/// All errors raised while building a method catalogue or validating a touch.
///
/// Catalogue errors (`InvalidStage`, `InvalidBellSymbol`,
/// `MalformedPlaceNotation`, `InvalidShorthand`, `DuplicateMethod`) mean the
/// method table itself is broken. Touch errors carry the offending call-string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingingError {
    /// The requested number of bells is outside the supported range.
    #[error("stage {stage} is not supported (expected {min}..={max} bells)")]
    InvalidStage { stage: usize, min: usize, max: usize },

    /// A character that is not a bell symbol at the active stage.
    #[error("'{symbol}' is not a known bell symbol at stage {stage} in '{context}'")]
    InvalidBellSymbol {
        symbol: char,
        stage: usize,
        context: String,
    },

    /// A place-set that cannot be applied to a row of this stage.
    #[error("malformed place notation '{notation}': {reason}")]
    MalformedPlaceNotation { notation: String, reason: String },

    /// A row literal that is not a permutation of the stage's bells.
    #[error("'{row}' is not a row at stage {stage}: {reason}")]
    InvalidRow {
        row: String,
        stage: usize,
        reason: String,
    },

    /// Method shorthands must be a single ASCII letter.
    #[error("method shorthand '{shorthand}' for '{name}' must be a single ASCII letter")]
    InvalidShorthand { shorthand: String, name: String },

    /// Two catalogue entries share a shorthand.
    #[error("method shorthand '{shorthand}' is defined more than once")]
    DuplicateMethod { shorthand: char },

    /// A call-string that names no leads at all.
    #[error("call-string '{call_string}' contains no leads")]
    EmptyCallString { call_string: String },

    /// A call-string letter with no catalogue entry.
    #[error("{call_string}: method '{shorthand}' is not in the catalogue")]
    UnknownMethod { call_string: String, shorthand: char },

    /// The touch never returns to rounds.
    #[error("{call_string} doesn't come round (finishes at {lead_head})")]
    DoesNotComeRound {
        call_string: String,
        lead_head: String,
    },

    /// The declared length disagrees with the composed row count.
    #[error("{call_string} is given len {declared} but has {actual} rows")]
    LengthMismatch {
        call_string: String,
        declared: usize,
        actual: usize,
    },
}

impl RingingError {
    /// The call-string a touch-level error refers to, if any.
    pub fn call_string(&self) -> Option<&str> {
        match self {
            RingingError::EmptyCallString { call_string }
            | RingingError::UnknownMethod { call_string, .. }
            | RingingError::DoesNotComeRound { call_string, .. }
            | RingingError::LengthMismatch { call_string, .. } => Some(call_string),
            _ => None,
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RingingError::InvalidStage { .. } => "invalid_stage",
            RingingError::InvalidBellSymbol { .. } => "invalid_bell_symbol",
            RingingError::MalformedPlaceNotation { .. } => "malformed_place_notation",
            RingingError::InvalidRow { .. } => "invalid_row",
            RingingError::InvalidShorthand { .. } => "invalid_shorthand",
            RingingError::DuplicateMethod { .. } => "duplicate_method",
            RingingError::EmptyCallString { .. } => "empty_call_string",
            RingingError::UnknownMethod { .. } => "unknown_method",
            RingingError::DoesNotComeRound { .. } => "does_not_come_round",
            RingingError::LengthMismatch { .. } => "length_mismatch",
        }
    }

    /// Serialize to a flat JSON-friendly value for CLI reporting.
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind().to_owned(),
            call_string: self.call_string().map(str::to_owned),
            message: self.to_string(),
        }
    }
}

/// Flat, serializable view of a [`RingingError`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorReport {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_string: Option<String>,
    pub message: String,
}
