//! The method catalogue: every method a touch may use, built once and only
//! read afterwards.
//!
//! A catalogue is described by a [`CatalogueConfig`] (usually deserialized
//! from TOML by the host) and built all-or-nothing: any broken entry fails
//! the whole build, so a partially built catalogue is never observable.

use serde::{Deserialize, Serialize};

use crate::error::RingingError;
use crate::method::Method;
use crate::place_notation::{self, PlaceSet};
use crate::stage::Stage;

/// One catalogue entry as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Single letter used for the method in call-strings.
    pub shorthand: String,
    pub name: String,
    pub place_notation: String,
}

impl MethodDef {
    pub fn new(shorthand: &str, name: &str, place_notation: &str) -> Self {
        MethodDef {
            shorthand: shorthand.to_owned(),
            name: name.to_owned(),
            place_notation: place_notation.to_owned(),
        }
    }
}

/// How calls are rung and named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallConfig {
    /// Place notation of the change a bob substitutes for the lead end.
    pub bob: String,
    /// Place notation of the change a single substitutes for the lead end.
    pub single: String,
    /// Calling position names for bobs, indexed by the tenor's position.
    pub bob_positions: String,
    /// Calling position names for singles, indexed by the tenor's position.
    pub single_positions: String,
}

impl Default for CallConfig {
    fn default() -> Self {
        CallConfig {
            bob: "14".to_owned(),
            single: "1234".to_owned(),
            bob_positions: "LIBFVMWH".to_owned(),
            single_positions: "LBTFVMWH".to_owned(),
        }
    }
}

/// Top-level catalogue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    #[serde(default = "default_stage")]
    pub stage: usize,
    #[serde(default)]
    pub calls: CallConfig,
    pub methods: Vec<MethodDef>,
}

fn default_stage() -> usize {
    Stage::MAJOR.bells()
}

#[derive(Debug, Clone)]
pub struct MethodCatalogue {
    stage: Stage,
    calls: CallConfig,
    methods: Vec<Method>,
}

impl MethodCatalogue {
    pub fn from_config(config: &CatalogueConfig) -> Result<Self, RingingError> {
        let stage = Stage::new(config.stage)?;
        MethodCatalogue::new(stage, config.calls.clone(), &config.methods)
    }

    pub fn new(stage: Stage, calls: CallConfig, defs: &[MethodDef]) -> Result<Self, RingingError> {
        let bob: PlaceSet = place_notation::parse_change(stage, &calls.bob)?;
        let single: PlaceSet = place_notation::parse_change(stage, &calls.single)?;

        let mut methods: Vec<Method> = Vec::with_capacity(defs.len());
        for def in defs {
            let shorthand = parse_shorthand(def)?;
            if methods.iter().any(|m| m.shorthand() == shorthand) {
                return Err(RingingError::DuplicateMethod { shorthand });
            }
            methods.push(Method::new(
                stage,
                shorthand,
                &def.name,
                &def.place_notation,
                &bob,
                &single,
            )?);
        }

        tracing::debug!(stage = %stage, methods = methods.len(), "built method catalogue");
        Ok(MethodCatalogue {
            stage,
            calls,
            methods,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn calls(&self) -> &CallConfig {
        &self.calls
    }

    pub fn get(&self, shorthand: char) -> Option<&Method> {
        self.methods.iter().find(|m| m.shorthand() == shorthand)
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

fn parse_shorthand(def: &MethodDef) -> Result<char, RingingError> {
    let mut chars = def.shorthand.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c),
        _ => Err(RingingError::InvalidShorthand {
            shorthand: def.shorthand.clone(),
            name: def.name.clone(),
        }),
    }
}
