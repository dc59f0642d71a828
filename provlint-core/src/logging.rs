//! Structured logging setup using **tracing**.
//!
//! The rule itself only emits `debug!`/`warn!` events at resolution-skip
//! and exemption-suppress decision points; this module gives embedding
//! hosts a one-call subscriber setup with machine-readable JSON output.

/// Initializes the global tracing collector (subscriber).
///
/// Call *once* at host startup. Configures structured JSON output to
/// stderr, leaving stdout free for the host's own diagnostic rendering.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=provlint=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
