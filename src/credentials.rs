//! API key resolution.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

const PROMPT: &str = "Enter your Anthropic API key: ";

/// Credential errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Neither the environment nor the prompt produced a key.
    #[error("no API key provided (set {API_KEY_ENV} or enter one at the prompt)")]
    Missing,
    /// Reading the prompt answer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the API key from the process environment, falling back to stdin.
///
/// # Errors
/// Returns an error if no key could be obtained.
pub fn resolve_api_key_interactive() -> Result<String, CredentialError> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stderr();
    resolve_api_key(|key| std::env::var(key).ok(), &mut input, &mut output)
}

/// Resolve the API key from `lookup`, or prompt on `output` and read one line from `input`.
///
/// # Errors
/// Returns an error if the prompt fails or yields a blank key.
pub fn resolve_api_key<F, R, W>(
    lookup: F,
    input: &mut R,
    output: &mut W,
) -> Result<String, CredentialError>
where
    F: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
{
    if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
        tracing::debug!("API key taken from {API_KEY_ENV}");
        return Ok(key.trim().to_string());
    }

    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let key = line.trim();
    if key.is_empty() {
        return Err(CredentialError::Missing);
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_env_key_wins() {
        let mut input = Cursor::new(b"typed-key\n".to_vec());
        let mut output = Vec::new();
        let key = resolve_api_key(
            |k| (k == API_KEY_ENV).then(|| "env-key".to_string()),
            &mut input,
            &mut output,
        );
        assert_eq!(key.ok().as_deref(), Some("env-key"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompt_when_env_missing() {
        let mut input = Cursor::new(b"  typed-key \n".to_vec());
        let mut output = Vec::new();
        let key = resolve_api_key(|_| None, &mut input, &mut output);
        assert_eq!(key.ok().as_deref(), Some("typed-key"));
        assert_eq!(String::from_utf8_lossy(&output), PROMPT);
    }

    #[test]
    fn test_blank_env_falls_back_to_prompt() {
        let mut input = Cursor::new(b"typed-key\n".to_vec());
        let mut output = Vec::new();
        let key = resolve_api_key(|_| Some("   ".to_string()), &mut input, &mut output);
        assert_eq!(key.ok().as_deref(), Some("typed-key"));
    }

    #[test]
    fn test_blank_answer_is_missing() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        let key = resolve_api_key(|_| None, &mut input, &mut output);
        assert!(matches!(key, Err(CredentialError::Missing)));
    }
}
