//! Console rendering of sample outcomes.

use crate::samples::SampleCase;
use crate::translation::{MAX_CHARACTERS, TranslationOutcome};

/// Width of the separator rule.
const RULE_WIDTH: usize = 60;

/// Program banner printed once before the samples.
#[must_use]
pub fn render_banner() -> String {
    let rule = "=".repeat(46);
    format!("{rule}\nRadiology Translation Engine - Test Program\n{rule}\n")
}

/// Render one sample and its outcome as a console block.
#[must_use]
pub fn render_sample(case: &SampleCase, outcome: &TranslationOutcome) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut out = String::with_capacity(case.impression.len() + 4 * RULE_WIDTH + 256);

    out.push_str(&format!("\n{rule}\nTEST: {}\n{rule}\n", case.name));
    out.push_str(&format!("\nORIGINAL IMPRESSION:\n{}\n\n", case.impression));
    out.push_str("Translating...\n\n");

    match outcome {
        TranslationOutcome::Success(translation) => {
            out.push_str("✓ TRANSLATION SUCCESSFUL\n\n");
            out.push_str(&format!("Response Time: {:.0}ms\n", translation.response_time_ms));
            out.push_str(&format!(
                "Character Count: {}/{MAX_CHARACTERS}\n\n",
                translation.character_count
            ));
            out.push_str(&translation.formatted_output());
            out.push('\n');
        }
        TranslationOutcome::Failure(failure) => {
            out.push_str("✗ TRANSLATION FAILED\n\n");
            out.push_str(&format!("Error: {}\n", failure.message));
        }
    }

    out.push_str(&format!("\n{rule}\n\n"));
    out
}
