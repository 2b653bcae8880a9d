//! Result shaping: character ceiling, disclaimer, and the caller-facing outcome.

use std::time::Instant;

use crate::translation::error::{ErrorKind, TranslationError};

/// Maximum length of a patient-facing summary, in characters.
pub const MAX_CHARACTERS: usize = 2000;

/// Marker appended to a truncated summary.
pub const ELLIPSIS: &str = "...";

/// Notice attached verbatim to every successful translation.
pub const DISCLAIMER: &str = "
────────────────────────────────────────────────────────────
IMPORTANT NOTICE TO PATIENTS:

This patient-friendly summary is provided for educational purposes only and is not a substitute for the official radiology report above. It is intended to help you understand medical terminology, but should not be used for self-diagnosis or treatment decisions.

Please discuss any questions, concerns, or findings with your healthcare provider. Your doctor is the best resource for interpreting your results and determining appropriate next steps for your care.

This summary was generated using artificial intelligence technology to assist in translating medical language. While every effort is made to ensure accuracy, only the official radiology report above should be considered the authoritative medical record.
────────────────────────────────────────────────────────────";

/// Enforce the character ceiling on raw model output.
///
/// Text longer than `max_chars` is cut to `max_chars - 3` characters and
/// suffixed with [`ELLIPSIS`]; shorter text is returned unchanged. A ceiling
/// too small to hold the marker cuts the text without one, so the result never
/// exceeds `max_chars` characters.
#[must_use]
pub fn truncate_summary(raw: &str, max_chars: usize) -> String {
    if raw.chars().count() <= max_chars {
        return raw.to_string();
    }

    let marker_chars = ELLIPSIS.chars().count();
    if max_chars < marker_chars {
        return raw.chars().take(max_chars).collect();
    }

    let mut out: String = raw.chars().take(max_chars - marker_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

/// A successful translation.
#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
    /// Patient-facing summary, at most [`MAX_CHARACTERS`] characters.
    pub summary: String,
    /// Always [`DISCLAIMER`].
    pub disclaimer: &'static str,
    /// Length of `summary` in characters.
    pub character_count: usize,
    /// Wall-clock time of the model round trip plus shaping.
    pub response_time_ms: f64,
}

impl Translation {
    /// Shape raw model output into a translation, timed from `started`.
    #[must_use]
    pub fn shape(raw: &str, started: Instant) -> Self {
        let summary = truncate_summary(raw, MAX_CHARACTERS);
        let character_count = summary.chars().count();
        Self {
            summary,
            disclaimer: DISCLAIMER,
            character_count,
            response_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Summary and disclaimer as one block ready for insertion in a report.
    #[must_use]
    pub fn formatted_output(&self) -> String {
        format!(
            "\n\nPATIENT-FRIENDLY SUMMARY:\n{}\n{}",
            self.summary, self.disclaimer
        )
    }
}

/// A failed translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationFailure {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable description, including the underlying cause.
    pub message: String,
}

impl From<&TranslationError> for TranslationFailure {
    fn from(err: &TranslationError) -> Self {
        Self {
            kind: err.kind(),
            message: format!("Translation failed: {err}"),
        }
    }
}

/// Result of one translation call; never carries a raw error.
#[derive(Clone, Debug, PartialEq)]
pub enum TranslationOutcome {
    /// Summary, disclaimer and timing.
    Success(Translation),
    /// Message only.
    Failure(TranslationFailure),
}

impl TranslationOutcome {
    /// Whether the call succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The translation, if successful.
    #[must_use]
    pub const fn translation(&self) -> Option<&Translation> {
        match self {
            Self::Success(translation) => Some(translation),
            Self::Failure(_) => None,
        }
    }

    /// The error message, if failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(&failure.message),
        }
    }

    /// The error kind, if failed.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.kind),
        }
    }

    /// Display block: summary plus disclaimer, or the error line.
    #[must_use]
    pub fn formatted_output(&self) -> String {
        match self {
            Self::Success(translation) => translation.formatted_output(),
            Self::Failure(failure) => format!("Error: {}", failure.message),
        }
    }
}
