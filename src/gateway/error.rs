//! Error types for order submission.

use thiserror::Error;

/// Errors a gateway can report for a submitted round.
///
/// The cart does not act on these beyond logging; see
/// [`CartEngine::submit_round`](crate::cart::CartEngine::submit_round).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The submission actor has shut down.
    #[error("Submission channel closed")]
    Closed,

    /// The submission actor dropped the response channel.
    #[error("Submission actor dropped response channel")]
    Dropped,

    /// The backend refused the round.
    #[error("Submission rejected: {0}")]
    Rejected(String),
}
