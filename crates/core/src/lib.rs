//! touchcheck-core: change ringing touch composition and validation.
//!
//! Builds a method catalogue from place notation, replays call-strings
//! against it from rounds, and checks that each touch comes round at its
//! declared length. Valid touches are scored for calling positions, method
//! leads and runs.
//!
//! # Public API
//!
//! - [`MethodCatalogue`] -- methods keyed by shorthand letter, built from a
//!   [`CatalogueConfig`]
//! - [`compose()`] -- rows, calls and termination of one call-string
//! - [`Touch`] -- a validated, scored touch built from a [`TouchRecord`]
//! - [`validate_batch()`] -- many records at once, optionally in parallel
//! - [`RingingError`] -- every failure the engine reports

pub mod analysis;
pub mod batch;
pub mod call_string;
pub mod catalogue;
pub mod compose;
pub mod error;
pub mod method;
pub mod place_notation;
pub mod row;
pub mod stage;
pub mod touch;

// ── Convenience re-exports: key types ────────────────────────────────

pub use analysis::CallRecord;
pub use batch::{BatchOptions, BatchOutcome, BatchPolicy, RejectedReport, RejectedTouch};
pub use call_string::{Call, Lead};
pub use catalogue::{CallConfig, CatalogueConfig, MethodCatalogue, MethodDef};
pub use compose::{Composition, Termination};
pub use error::{ErrorReport, RingingError};
pub use method::Method;
pub use place_notation::PlaceSet;
pub use row::Row;
pub use stage::{Stage, BELL_NAMES, MAX_STAGE, MIN_STAGE};
pub use touch::{Touch, TouchRecord};

// ── Convenience re-exports: entry points ─────────────────────────────

pub use batch::validate_batch;
pub use call_string::tokenize;
pub use compose::compose;
