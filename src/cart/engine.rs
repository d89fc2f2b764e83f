//! # Cart Engine
//!
//! Owns the cart's line items and every transition between their states.
//!
//! Per dish, the cart is in one of four states: absent, draft, locked, or one
//! locked line plus one draft line. At most one draft line exists per dish;
//! any number of locked lines may sit beside it, one for each round the dish
//! was ordered in.
//!
//! ```text
//!   Absent --add--> Draft(q) --submit--> Locked(q)
//!                     |  ^                   |
//!       decrement@1 / |  | add/increment     | add
//!       remove        v  |                   v
//!                   Absent           Locked(q) + Draft(m)
//! ```
//!
//! Operations on a dish with no draft line are silent no-ops; locked lines never
//! change again once a round has been submitted.

use crate::gateway::OrderGateway;
use crate::model::{CartLine, CartSnapshot, DishId, DishRecord, SubmissionRecord, SubmittedItem};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct CartEngine {
    lines: Vec<CartLine>,
    rounds: u32,
}

impl CartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `dish`, merging into its draft line if one exists.
    /// A quantity of 0 is treated as 1. Locked lines are never merged into.
    pub fn add_item(&mut self, dish: Arc<DishRecord>, quantity: u32) {
        let quantity = quantity.max(1);
        match self.draft_mut(&dish.id) {
            Some(line) => {
                let merged = match line.quantity().checked_add(quantity) {
                    Some(merged) => merged,
                    None => {
                        warn!(dish = %dish.id, added = quantity, "Draft quantity capped at u32::MAX");
                        u32::MAX
                    }
                };
                line.set_quantity(merged);
                debug!(dish = %dish.id, added = quantity, quantity = merged, "Merged into draft line");
            }
            None => {
                debug!(dish = %dish.id, quantity, "New draft line");
                self.lines.push(CartLine::draft(dish, quantity));
            }
        }
    }

    /// Overwrites the quantity of the dish's draft line. No-op if the dish has no
    /// draft line. A quantity of 0 is treated as 1; use
    /// [`remove_item`](Self::remove_item) to drop a line.
    pub fn set_quantity(&mut self, dish_id: &DishId, quantity: u32) {
        match self.draft_mut(dish_id) {
            Some(line) => {
                line.set_quantity(quantity);
                debug!(dish = %dish_id, quantity = line.quantity(), "Quantity set");
            }
            None => debug!(dish = %dish_id, "No draft line, set_quantity ignored"),
        }
    }

    /// Deletes the dish's draft line, if any. Locked lines stay.
    pub fn remove_item(&mut self, dish_id: &DishId) {
        let before = self.lines.len();
        self.lines.retain(|line| !line.is_draft_for(dish_id));
        if self.lines.len() < before {
            debug!(dish = %dish_id, "Draft line removed");
        }
    }

    /// One more unit on the dish's draft line.
    pub fn increment(&mut self, dish_id: &DishId) {
        if let Some(quantity) = self.draft_quantity(dish_id) {
            self.set_quantity(dish_id, quantity.saturating_add(1));
        }
    }

    /// One unit fewer on the dish's draft line. At quantity 1 the line is removed,
    /// so a quantity of 0 is never observable.
    pub fn decrement(&mut self, dish_id: &DishId) {
        match self.draft_quantity(dish_id) {
            Some(1) => self.remove_item(dish_id),
            Some(quantity) => self.set_quantity(dish_id, quantity - 1),
            None => {}
        }
    }

    /// Submits every draft line as one round.
    ///
    /// The record is handed to `gateway`, then every line that was a draft is
    /// locked. Locking happens whatever the gateway answers; a gateway error is
    /// only logged. An empty cart still produces a (empty) round.
    pub fn submit_round<G: OrderGateway + ?Sized>(&mut self, gateway: &G) -> SubmissionRecord {
        let round = self.rounds + 1;
        let before = self.snapshot();

        let record = SubmissionRecord {
            round,
            items: self.draft_lines().map(SubmittedItem::from).collect(),
            confirmed_total: before.confirmed_total,
            new_total: before.draft_total,
            grand_total: before.grand_total,
        };

        if let Err(e) = gateway.hand_off(&record) {
            warn!(round, error = %e, "Gateway did not acknowledge round, locking anyway");
        }

        for line in self.lines.iter_mut().filter(|line| !line.is_locked()) {
            line.lock(round);
        }
        self.rounds = round;

        info!(
            round,
            items = record.items.len(),
            confirmed_total = record.confirmed_total,
            new_total = record.new_total,
            grand_total = record.grand_total,
            "Round submitted"
        );
        record
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::of(&self.lines)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn draft_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|line| !line.is_locked())
    }

    pub fn locked_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|line| line.is_locked())
    }

    /// Whether there is anything to submit.
    pub fn has_draft(&self) -> bool {
        self.draft_lines().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rounds submitted so far, empty ones included.
    pub fn rounds_submitted(&self) -> u32 {
        self.rounds
    }

    pub fn draft_quantity(&self, dish_id: &DishId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.is_draft_for(dish_id))
            .map(CartLine::quantity)
    }

    fn draft_mut(&mut self, dish_id: &DishId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.is_draft_for(dish_id))
    }
}
