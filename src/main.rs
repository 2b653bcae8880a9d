//! Binary entrypoint that runs the built-in radiology samples.

use std::process::ExitCode;

use rad_report_explainer::start_explainer;

/// Translate the sample impressions and print the results.
fn main() -> ExitCode {
    start_explainer::run()
}
