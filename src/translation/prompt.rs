//! Prompt builder for impression translation.

/// Build the instruction sent to the model for one impression.
///
/// Deterministic: the same impression and ceiling always yield the same prompt.
#[must_use]
pub fn build_prompt(impression: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(PREAMBLE.len() + impression.len() + 512);

    out.push_str(PREAMBLE);
    out.push_str("\n\nCRITICAL REQUIREMENTS:\n");
    out.push_str("- Use simple, clear language that a patient without medical training can understand\n");
    out.push_str("- Avoid medical jargon, or explain technical terms in plain English\n");
    out.push_str("- Be accurate - do not add information that isn't in the original impression\n");
    out.push_str("- Be reassuring and warm in tone, but honest about findings\n");
    out.push_str("- Keep your response under ");
    out.push_str(&max_chars.to_string());
    out.push_str(" characters\n");
    out.push_str("- Do not include any introductory phrases like 'Here is the translation' - start directly with the patient-friendly explanation\n");

    out.push_str("\nRADIOLOGY IMPRESSION:\n");
    out.push_str(impression);
    out.push_str("\n\nProvide the patient-friendly translation now:");

    out
}

const PREAMBLE: &str =
    "You are translating a radiology report impression into patient-friendly language.";

#[cfg(test)]
mod tests {
    use super::*;

    const IMPRESSION: &str = "Right lower lobe pneumonia. Small right pleural effusion.";

    #[test]
    fn test_prompt_embeds_directives() {
        let prompt = build_prompt(IMPRESSION, 2000);
        assert!(prompt.contains("Avoid medical jargon"));
        assert!(prompt.contains("do not add information"));
        assert!(prompt.contains("reassuring and warm"));
        assert!(prompt.contains("honest about findings"));
        assert!(prompt.contains("under 2000 characters"));
        assert!(prompt.contains("start directly with the patient-friendly explanation"));
    }

    #[test]
    fn test_prompt_embeds_impression_verbatim() {
        let prompt = build_prompt(IMPRESSION, 2000);
        assert!(prompt.contains(&format!("RADIOLOGY IMPRESSION:\n{IMPRESSION}\n")));
        assert!(prompt.ends_with("Provide the patient-friendly translation now:"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(IMPRESSION, 1500), build_prompt(IMPRESSION, 1500));
        assert!(build_prompt(IMPRESSION, 1500).contains("under 1500 characters"));
    }
}
