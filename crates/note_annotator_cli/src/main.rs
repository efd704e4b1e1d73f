//! Demonstration entry point.
//!
//! # Responsibility
//! - Annotate the built-in example batch and print the report to stdout.
//! - Report failures on stderr with a non-zero exit code.

mod demo;

use log::{error, info};
use note_annotator_core::{
    core_version, default_log_dir, default_log_level, init_logging, AnnotateService,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logging is best effort; the report still prints without it.
    if let Err(err) = init_logging(default_log_level(), &default_log_dir()) {
        eprintln!("note_annotator: logging disabled: {err}");
    }
    info!(
        "event=demo_start module=cli status=ok version={}",
        core_version()
    );

    let report = match demo::render_report(&AnnotateService::new(), &demo::example_input()) {
        Ok(report) => report,
        Err(err) => {
            error!(
                "event=demo_run module=cli status=error reason={}",
                err.reason()
            );
            eprintln!("note_annotator: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = demo::write_report(&mut std::io::stdout().lock(), &report) {
        error!("event=demo_run module=cli status=error reason=stdout");
        eprintln!("note_annotator: failed to write report: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
