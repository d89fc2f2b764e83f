//! # Order Submission Gateway
//!
//! The hand-off point for submitted rounds. The cart only knows the
//! [`OrderGateway`] contract; what sits behind it is up to the host.
//!
//! ## Structure
//!
//! - [`OrderGateway`] - synchronous, fire-and-forget hand-off
//! - [`LoggingGateway`] - writes each round to the log as JSON (no backend exists)
//! - [`actor`] - runs any gateway in its own task behind a channel
//! - [`error`] - [`GatewayError`]

pub mod actor;
pub mod error;

pub use actor::{SubmissionActor, SubmissionClient, SubmissionRequest};
pub use error::*;

use crate::model::{Acknowledgement, SubmissionRecord};
use tracing::{debug, info};

/// Receives the batch produced by a submitted round.
///
/// Called from inside [`CartEngine::submit_round`](crate::cart::CartEngine::submit_round),
/// so implementations must not block.
pub trait OrderGateway {
    fn hand_off(&self, record: &SubmissionRecord) -> Result<Acknowledgement, GatewayError>;
}

/// Stand-in backend that logs every round and always acknowledges.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingGateway;

impl OrderGateway for LoggingGateway {
    fn hand_off(&self, record: &SubmissionRecord) -> Result<Acknowledgement, GatewayError> {
        let payload = serde_json::to_string_pretty(record)
            .map_err(|e| GatewayError::Rejected(e.to_string()))?;
        info!(
            round = record.round,
            units = record.unit_count(),
            new_total = record.new_total,
            grand_total = record.grand_total,
            "Order submitted"
        );
        debug!(%payload, "Order payload");
        Ok(Acknowledgement {
            round: record.round,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubmittedItem;

    #[test]
    fn test_logging_gateway_acknowledges() {
        let record = SubmissionRecord {
            round: 2,
            items: vec![SubmittedItem {
                name: "Dumplings".to_string(),
                price: 90,
                quantity: 2,
            }],
            confirmed_total: 300,
            new_total: 180,
            grand_total: 480,
        };
        assert_eq!(
            LoggingGateway.hand_off(&record),
            Ok(Acknowledgement { round: 2 })
        );
    }

    #[test]
    fn test_payload_shape() {
        let record = SubmissionRecord {
            round: 1,
            items: vec![],
            confirmed_total: 0,
            new_total: 0,
            grand_total: 0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["items"].as_array().unwrap().is_empty());
        assert_eq!(json["grand_total"], 0);
    }
}
