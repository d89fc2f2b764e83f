//! # Observability & Tracing
//!
//! Structured logging for the whole ordering session via the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Catalog**: file reads, dish count after parsing, load failures
//! - **Cart**: new and merged draft lines, quantity changes, each submitted round with its totals
//! - **Gateway**: actor startup and shutdown, delivered and rejected rounds
//!
//! ## Usage Examples
//!
//! ```bash
//! # Rounds and totals only
//! RUST_LOG=info cargo run
//!
//! # Every cart mutation plus the JSON payload of each round
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=diner_order::cart=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO load_catalog: Catalog loaded dishes=12
//! INFO Submission actor started
//! INFO Round submitted round=1 items=2 confirmed_total=0 new_total=420 grand_total=420
//! INFO Order submitted round=1 units=3 new_total=420 grand_total=420
//! INFO Round delivered round=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
