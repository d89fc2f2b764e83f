//! Cart line items and the totals derived from them.
//!
//! A line is either a draft (editable, not yet sent to the kitchen) or locked
//! (part of a submitted round, frozen for good). Lines are only created and
//! mutated by [`CartEngine`](crate::cart::CartEngine); everything here is
//! read-only from the outside.
use crate::model::{DishId, DishRecord};
use serde::Serialize;
use std::sync::Arc;

/// Where a line sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineState {
    /// Not yet part of any submitted round.
    Draft,
    /// Included in the given (1-based) round. Permanent.
    Locked { round: u32 },
}

#[derive(Debug, Clone)]
pub struct CartLine {
    dish: Arc<DishRecord>,
    quantity: u32,
    state: LineState,
}

impl CartLine {
    pub(crate) fn draft(dish: Arc<DishRecord>, quantity: u32) -> Self {
        Self {
            dish,
            quantity: quantity.max(1),
            state: LineState::Draft,
        }
    }

    pub fn dish(&self) -> &DishRecord {
        &self.dish
    }

    pub fn dish_id(&self) -> &DishId {
        &self.dish.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn state(&self) -> LineState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, LineState::Locked { .. })
    }

    /// Every locked line has been submitted and vice versa.
    pub fn is_submitted(&self) -> bool {
        self.is_locked()
    }

    pub fn is_draft_for(&self, id: &DishId) -> bool {
        !self.is_locked() && self.dish.id == *id
    }

    /// Quantity × unit price.
    pub fn line_total(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.dish.price)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub(crate) fn lock(&mut self, round: u32) {
        self.state = LineState::Locked { round };
    }
}

/// Totals derived from the current cart contents. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    /// Sum over draft lines.
    pub draft_total: u64,
    /// Sum over locked lines.
    pub confirmed_total: u64,
    pub grand_total: u64,
    /// Units across every line, locked or not.
    pub item_count: u64,
}

impl CartSnapshot {
    pub fn of<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Self {
        lines.into_iter().fold(Self::default(), |mut acc, line| {
            if line.is_locked() {
                acc.confirmed_total += line.line_total();
            } else {
                acc.draft_total += line.line_total();
            }
            acc.grand_total += line.line_total();
            acc.item_count += u64::from(line.quantity());
            acc
        })
    }
}
