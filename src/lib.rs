//! # Diner Order
//!
//! > **Menu browsing and multi-round ordering for a restaurant table.**
//!
//! A diner browses a categorized menu, builds up a cart, and sends it to the
//! kitchen in rounds. Items from earlier rounds stay in the cart but are frozen;
//! new items go into a fresh draft that can be edited until the next round is
//! submitted.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Menu ([`catalog`])
//! Parses the CSV menu and answers category queries.
//! - **Key items**: [`Catalog`](catalog::Catalog), [`load_catalog`](catalog::load_catalog),
//!   [`categories_of`](catalog::categories_of), [`by_category`](catalog::by_category).
//!
//! ### 2. The State Machine ([`cart`])
//! Every cart mutation goes through [`CartEngine`](cart::CartEngine): add, set
//! quantity, remove, increment/decrement and submit a round.
//!
//! ### 3. The Hand-off ([`gateway`])
//! Submitted rounds go to an [`OrderGateway`](gateway::OrderGateway). The
//! [`SubmissionActor`](gateway::SubmissionActor) runs any gateway in its own task.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`DinerSession`](lifecycle::DinerSession) loads the menu, spawns the
//! submission actor, owns the cart and shuts everything down cleanly.
//!
//! ### 5. The Data ([`model`])
//! Plain data types shared by all of the above.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Draft vs. Locked
//! A cart line is either [`LineState::Draft`](model::LineState::Draft) or
//! [`LineState::Locked`](model::LineState::Locked). There is no way to express a
//! line that is locked but was never submitted.
//!
//! ### Failing Soft
//! A catalog that cannot be loaded becomes an empty catalog. Edits aimed at a
//! locked or missing line are ignored. Nothing in the cart returns an error.
//!
//! ### Concurrency Model
//! The cart is plain synchronous state owned by one session. Only the catalog
//! fetch and the gateway actor are asynchronous.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart;
pub mod catalog;
pub mod gateway;
pub mod lifecycle;
pub mod model;
