//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber for the whole application.
//!
//! ## Configuration
//!
//! - Log level from the `RUST_LOG` environment variable (`EnvFilter`). Nothing is printed
//!   when it is unset, except errors.
//! - Compact format, no module path (`with_target(false)`): log lines carry a `reducer`
//!   field instead.
//! - Written to **stderr**, so log lines never interleave with screens rendered on stdout.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: `Store started`, `Store dropped`
//! - **Transitions**: `Dispatch` (debug, full action), `Applied` (info, version)
//! - **Rejections**: `Action rejected` (warn, with the reason)
//! - **Page handlers**: spans from `#[instrument]` on the stock page and POS handlers
//!
//! ```bash
//! RUST_LOG=info cargo run     # transitions
//! RUST_LOG=debug cargo run    # full action payloads
//! ```
//!
//! With `RUST_LOG=info`, deleting a stock looks like:
//!
//! ```text
//! INFO request_delete{id=3}: Applied reducer="StockReducer" version=1
//! ```

/// Initialises the global subscriber. Calling it twice is harmless.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
