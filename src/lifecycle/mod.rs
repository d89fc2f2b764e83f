//! # Session Lifecycle & Orchestration
//!
//! Starts, wires and stops the pieces of an ordering session.
//!
//! **Key Responsibilities:**
//! 1. **Catalog load** - fetch and parse the menu once, failing soft
//! 2. **Gateway wiring** - spawn the submission actor with its backend injected at `run()`
//! 3. **State ownership** - keep the cart in one explicit [`DinerSession`] instead of ambient state
//! 4. **Graceful shutdown** - drop the client, then await the actor so no round is lost
//! 5. **Observability setup** - [`setup_tracing`]
//!
//! ## Graceful Shutdown
//!
//! Rounds are handed to the actor fire-and-forget. Dropping the last
//! [`SubmissionClient`](crate::gateway::SubmissionClient) closes the channel;
//! the actor still processes what is queued before its `recv()` returns `None`.

pub mod config;
pub mod session;
pub mod tracing;

pub use config::*;
pub use session::*;
pub use self::tracing::*;
