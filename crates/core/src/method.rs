//! A method: one lead of rows generated from place notation, plus the lead
//! heads reached by ending that lead plain, with a bob or with a single.

use crate::call_string::Call;
use crate::error::RingingError;
use crate::place_notation::{self, PlaceSet};
use crate::row::Row;
use crate::stage::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    shorthand: char,
    name: String,
    place_notation: String,
    changes: Vec<PlaceSet>,
    lead_rows: Vec<Row>,
    lead_head_plain: Row,
    lead_head_bob: Row,
    lead_head_single: Row,
}

impl Method {
    /// Generate the first lead of a method from rounds.
    ///
    /// `bob` and `single` replace the last change of the lead; they are
    /// applied to the last lead row, not to the plain lead head.
    pub fn new(
        stage: Stage,
        shorthand: char,
        name: &str,
        notation: &str,
        bob: &PlaceSet,
        single: &PlaceSet,
    ) -> Result<Self, RingingError> {
        let changes = place_notation::parse(stage, notation)?;

        let mut current = Row::rounds(stage);
        let mut lead_rows = Vec::with_capacity(changes.len());
        for places in &changes {
            lead_rows.push(current);
            current = current.apply_places(places)?;
        }
        // `parse` never yields an empty lead, so there is always a last row.
        let last = lead_rows.last().copied().unwrap_or(current);
        let lead_head_bob = last.apply_places(bob)?;
        let lead_head_single = last.apply_places(single)?;

        tracing::debug!(
            method = name,
            %shorthand,
            lead_length = lead_rows.len(),
            lead_head = %current,
            "built method"
        );

        Ok(Method {
            shorthand,
            name: name.to_owned(),
            place_notation: notation.to_owned(),
            changes,
            lead_rows,
            lead_head_plain: current,
            lead_head_bob,
            lead_head_single,
        })
    }

    pub fn shorthand(&self) -> char {
        self.shorthand
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn place_notation(&self) -> &str {
        &self.place_notation
    }

    /// One place-set per change, in the order they are rung.
    pub fn changes(&self) -> &[PlaceSet] {
        &self.changes
    }

    /// The rows of the first lead, starting with rounds.
    pub fn lead_rows(&self) -> &[Row] {
        &self.lead_rows
    }

    pub fn lead_len(&self) -> usize {
        self.lead_rows.len()
    }

    pub fn lead_head_plain(&self) -> &Row {
        &self.lead_head_plain
    }

    pub fn lead_head_bob(&self) -> &Row {
        &self.lead_head_bob
    }

    pub fn lead_head_single(&self) -> &Row {
        &self.lead_head_single
    }

    /// The lead head reached at the end of a lead with the given call.
    pub fn lead_head(&self, call: Option<Call>) -> &Row {
        match call {
            None => &self.lead_head_plain,
            Some(Call::Bob) => &self.lead_head_bob,
            Some(Call::Single) => &self.lead_head_single,
        }
    }

    /// Number of plain leads needed to return to rounds.
    pub fn plain_course_leads(&self) -> usize {
        let mut head = self.lead_head_plain;
        let mut leads = 1;
        while !head.is_rounds() {
            head = head.compose(&self.lead_head_plain);
            leads += 1;
        }
        leads
    }
}
