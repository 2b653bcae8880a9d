//! Startup helpers for the explainer test program.
//!
//! Resolves configuration and credentials, then runs the built-in samples
//! through the engine and prints one block per sample to stdout.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use futures::StreamExt;
use futures::stream;

use crate::config::ExplainerConfig;
use crate::credentials::resolve_api_key_interactive;
use crate::report::{render_banner, render_sample};
use crate::samples::{SAMPLE_CASES, SampleCase};
use crate::translation::{MessagesTransport, TranslationEngine};

/// Run the sample program.
///
/// # Returns
/// `ExitCode::SUCCESS` once every sample was attempted, `1` if setup failed.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting rad-explainer v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout();
    if let Err(e) = stdout.write_all(render_banner().as_bytes()) {
        tracing::error!("Failed to write banner: {e}");
        return ExitCode::from(1);
    }

    let (config, engine) = match initialize() {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("Setup failed: {e:#}");
            return ExitCode::from(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    rt.block_on(report_samples(&engine, &SAMPLE_CASES, config.concurrency, &mut stdout))
        .map_or_else(
            |e| {
                tracing::error!("Failed to write report: {e}");
                ExitCode::from(1)
            },
            |failed| {
                tracing::info!("Finished {} samples, {failed} failed", SAMPLE_CASES.len());
                ExitCode::SUCCESS
            },
        )
}

/// Load configuration, resolve the API key and build the engine.
///
/// # Errors
/// Returns an error if the configuration is invalid, no key is available, or the
/// HTTP client cannot be built.
pub fn initialize() -> anyhow::Result<(ExplainerConfig, TranslationEngine)> {
    let config = ExplainerConfig::from_env().context("failed to read configuration")?;
    config.validate().context("invalid configuration")?;
    tracing::info!("Messages endpoint: {}", config.api_url);

    let api_key = resolve_api_key_interactive().context("failed to obtain API key")?;
    let engine =
        TranslationEngine::new(&config, &api_key).context("failed to build translation engine")?;

    Ok((config, engine))
}

/// Translate `cases` with up to `concurrency` calls in flight and write one
/// block per case to `out`, in input order.
///
/// # Errors
/// Returns an error if writing to `out` fails. Translation failures are reported
/// in the output, not returned.
pub async fn report_samples<T, W>(
    engine: &TranslationEngine<T>,
    cases: &[SampleCase],
    concurrency: usize,
    out: &mut W,
) -> std::io::Result<usize>
where
    T: MessagesTransport,
    W: Write + Send,
{
    let mut outcomes = stream::iter(cases.iter().copied())
        .map(move |case| async move {
            let outcome = engine.translate(case.impression).await;
            (case, outcome)
        })
        .buffered(concurrency.max(1));

    let mut failed = 0;
    while let Some((case, outcome)) = outcomes.next().await {
        if !outcome.is_success() {
            failed += 1;
        }
        out.write_all(render_sample(&case, &outcome).as_bytes())?;
        out.flush()?;
    }

    Ok(failed)
}
