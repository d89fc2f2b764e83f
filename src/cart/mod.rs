//! Cart state machine: draft and locked lines across submission rounds.
//!
//! See [`engine`] for the state diagram and operation rules.

pub mod engine;

pub use engine::CartEngine;
