use std::path::Path;
use std::process;

use serde::Serialize;
use touchcheck_core::Method;

use crate::config::load_catalogue;
use crate::{report_error, OutputFormat};

#[derive(Serialize)]
struct MethodSummary<'a> {
    shorthand: char,
    name: &'a str,
    place_notation: &'a str,
    lead_length: usize,
    lead_head_plain: String,
    lead_head_bob: String,
    lead_head_single: String,
}

impl<'a> From<&'a Method> for MethodSummary<'a> {
    fn from(m: &'a Method) -> Self {
        MethodSummary {
            shorthand: m.shorthand(),
            name: m.name(),
            place_notation: m.place_notation(),
            lead_length: m.lead_len(),
            lead_head_plain: m.lead_head_plain().to_string(),
            lead_head_bob: m.lead_head_bob().to_string(),
            lead_head_single: m.lead_head_single().to_string(),
        }
    }
}

pub(crate) fn cmd_methods(methods: Option<&Path>, output: OutputFormat, quiet: bool) {
    let catalogue = match load_catalogue(methods) {
        Ok(c) => c,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };
    if quiet {
        return;
    }

    let summaries: Vec<MethodSummary<'_>> =
        catalogue.methods().iter().map(MethodSummary::from).collect();

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summaries)
                .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
            println!("{}", json);
        }
        OutputFormat::Text => {
            let name_width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
            println!("Stage {} ({} methods)", catalogue.stage(), summaries.len());
            for s in &summaries {
                println!(
                    "  {}  {:<name_width$}  {:>3}  plain {}  bob {}  single {}",
                    s.shorthand,
                    s.name,
                    s.lead_length,
                    s.lead_head_plain,
                    s.lead_head_bob,
                    s.lead_head_single,
                );
            }
        }
    }
}
