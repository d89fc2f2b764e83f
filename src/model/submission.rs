//! The payload a submitted round hands to the order gateway.
use crate::model::CartLine;
use serde::{Deserialize, Serialize};

/// One ordered item as handed to the gateway. No cart-internal flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedItem {
    pub name: String,
    pub price: u32,
    pub quantity: u32,
}

impl From<&CartLine> for SubmittedItem {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.dish().name.clone(),
            price: line.dish().price,
            quantity: line.quantity(),
        }
    }
}

/// The batch produced by one submitted round.
///
/// `items` only holds the lines that were drafts when the round was submitted.
/// `confirmed_total` is what had already been locked before this round,
/// `new_total` is this round's amount and `grand_total` is their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub round: u32,
    pub items: Vec<SubmittedItem>,
    pub confirmed_total: u64,
    pub new_total: u64,
    pub grand_total: u64,
}

impl SubmissionRecord {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Units in this round. Widened so large quantities cannot overflow.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Receipt returned by a gateway once it has accepted a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub round: u32,
}
