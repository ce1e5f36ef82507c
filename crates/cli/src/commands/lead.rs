use std::path::Path;
use std::process;

use touchcheck_core::Method;

use crate::config::load_catalogue;
use crate::error::CliError;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_lead(shorthand: &str, methods: Option<&Path>, output: OutputFormat, quiet: bool) {
    let catalogue = match load_catalogue(methods) {
        Ok(c) => c,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };

    let mut chars = shorthand.chars();
    let method = match (chars.next(), chars.next()) {
        (Some(c), None) => catalogue.get(c),
        _ => None,
    };
    let Some(method) = method else {
        let err = CliError::NoSuchMethod(shorthand.to_owned());
        report_error(&err.to_string(), output, quiet);
        process::exit(1);
    };

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&lead_json(method))
                .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", lead_text(method)),
    }
}

fn lead_json(method: &Method) -> serde_json::Value {
    serde_json::json!({
        "shorthand": method.shorthand().to_string(),
        "name": method.name(),
        "place_notation": method.place_notation(),
        "rows": method.lead_rows(),
        "lead_heads": {
            "plain": method.lead_head_plain(),
            "bob": method.lead_head_bob(),
            "single": method.lead_head_single(),
        },
    })
}

fn lead_text(method: &Method) -> String {
    let mut out = format!(
        "{} ({}): {}\n",
        method.name(),
        method.shorthand(),
        method.place_notation()
    );
    for (row, places) in method.lead_rows().iter().zip(method.changes()) {
        out.push_str(&format!("  {}  {}\n", row, places));
    }
    out.push_str(&format!("  {}  plain\n", method.lead_head_plain()));
    out.push_str(&format!("  {}  bob\n", method.lead_head_bob()));
    out.push_str(&format!("  {}  single\n", method.lead_head_single()));
    out
}
