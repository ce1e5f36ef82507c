use std::path::Path;
use std::process;

use touchcheck_core::{validate_batch, BatchOptions, BatchPolicy, TouchRecord};

use crate::config::load_catalogue;
use crate::error::CliError;
use crate::render::{self, CheckReport, RejectedLine};
use crate::touch_file::read_touch_file;
use crate::{report_error, OutputFormat};

pub(crate) struct CheckOptions<'a> {
    pub touches: &'a Path,
    pub methods: Option<&'a Path>,
    pub skip_invalid: bool,
    pub parallel: bool,
    pub output: OutputFormat,
    pub quiet: bool,
}

pub(crate) fn cmd_check(opts: CheckOptions<'_>) {
    let catalogue = match load_catalogue(opts.methods) {
        Ok(c) => c,
        Err(e) => {
            report_error(&e.to_string(), opts.output, opts.quiet);
            process::exit(1);
        }
    };

    let numbered = match read_touch_file(opts.touches) {
        Ok(r) => r,
        Err(e) => {
            report_error(&e.to_string(), opts.output, opts.quiet);
            process::exit(1);
        }
    };
    let records: Vec<TouchRecord> = numbered.iter().map(|n| n.record.clone()).collect();

    let policy = if opts.skip_invalid {
        BatchPolicy::Skip
    } else {
        BatchPolicy::Abort
    };
    let options = BatchOptions {
        policy,
        parallel: opts.parallel,
    };

    let outcome = match validate_batch(&records, &catalogue, options) {
        Ok(o) => o,
        Err(rejected) => {
            let err = CliError::Touch {
                path: opts.touches.to_path_buf(),
                line: numbered[rejected.index].line,
                source: rejected.error,
            };
            report_error(&err.to_string(), opts.output, opts.quiet);
            process::exit(1);
        }
    };

    let mut touches = outcome.touches;
    render::sort_touches(&mut touches);
    let rejected: Vec<RejectedLine> = outcome
        .rejected
        .into_iter()
        .map(|r| RejectedLine {
            line: numbered[r.index].line,
            error: r.error.to_report(),
            record: r.record,
        })
        .collect();

    if opts.quiet {
        return;
    }
    let report = CheckReport {
        touches: &touches,
        rejected: &rejected,
    };
    match opts.output {
        OutputFormat::Json => println!("{}", render::render_json(&report)),
        OutputFormat::Text => print!("{}", render::render_table(&catalogue, &report)),
    }
}
