//! Call-string tokenizer.
//!
//! A call-string is a run of leads, each written as a method letter
//! optionally followed by `.` (bob) or `*` (single): `"C*C*CC*C*C."`.
//! Characters that do not start a lead are skipped, so annotations such as
//! a trailing `>` are harmless.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Call {
    Bob,
    Single,
}

impl Call {
    /// Symbol used for this call in a call-string.
    pub fn call_string_symbol(self) -> char {
        match self {
            Call::Bob => '.',
            Call::Single => '*',
        }
    }

    /// Symbol used for this call in a calling-position string.
    pub fn calling_symbol(self) -> char {
        match self {
            Call::Bob => '-',
            Call::Single => 's',
        }
    }

    fn from_call_string_symbol(c: char) -> Option<Call> {
        match c {
            '.' => Some(Call::Bob),
            '*' => Some(Call::Single),
            _ => None,
        }
    }
}

/// One lead of a touch: which method, and how the lead ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lead {
    pub method: char,
    pub call: Option<Call>,
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.method)?;
        if let Some(call) = self.call {
            write!(f, "{}", call.call_string_symbol())?;
        }
        Ok(())
    }
}

pub fn tokenize(call_string: &str) -> Vec<Lead> {
    let mut leads = Vec::new();
    let mut chars = call_string.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        let call = chars
            .peek()
            .copied()
            .and_then(Call::from_call_string_symbol);
        if call.is_some() {
            chars.next();
        }
        leads.push(Lead { method: c, call });
    }
    leads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_leads_and_calls() {
        let leads = tokenize("C*Y.S");
        assert_eq!(
            leads,
            vec![
                Lead { method: 'C', call: Some(Call::Single) },
                Lead { method: 'Y', call: Some(Call::Bob) },
                Lead { method: 'S', call: None },
            ]
        );
    }

    #[test]
    fn skips_unrecognised_characters() {
        let leads = tokenize("WS*LCE.BYY>");
        assert_eq!(leads.len(), 8);
        assert_eq!(leads[4], Lead { method: 'E', call: Some(Call::Bob) });
        assert_eq!(leads[7], Lead { method: 'Y', call: None });
        assert!(tokenize("..**>").is_empty());
    }

    #[test]
    fn only_one_call_per_lead() {
        // The second `.` has no method letter in front of it.
        let leads = tokenize("C..B");
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].call, Some(Call::Bob));
        assert_eq!(leads[1].call, None);
    }

    #[test]
    fn display_reproduces_token() {
        let rendered: String = tokenize("C*C*CC*C*C.").iter().map(Lead::to_string).collect();
        assert_eq!(rendered, "C*C*CC*C*C.");
    }
}
