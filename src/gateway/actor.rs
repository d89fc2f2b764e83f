//! # Submission Actor
//!
//! Runs an [`OrderGateway`] in its own Tokio task so that a slow backend never
//! stalls the cart.
//!
//! The actor owns the receiving end of an unbounded mpsc channel and processes
//! rounds one at a time. [`SubmissionClient`] is the sending half; it is cheap
//! to clone and itself implements [`OrderGateway`], queueing the round and
//! returning immediately. The queue has no capacity limit, so a hand-off only
//! fails once the actor is gone.
//!
//! ```rust
//! use diner_order::gateway::{LoggingGateway, SubmissionActor};
//! use diner_order::model::SubmissionRecord;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SubmissionActor::new();
//!     let handle = tokio::spawn(actor.run(LoggingGateway));
//!
//!     let record = SubmissionRecord {
//!         round: 1,
//!         items: vec![],
//!         confirmed_total: 0,
//!         new_total: 0,
//!         grand_total: 0,
//!     };
//!     let ack = client.submit(record).await.unwrap();
//!     assert_eq!(ack.round, 1);
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```

use super::{GatewayError, OrderGateway};
use crate::model::{Acknowledgement, SubmissionRecord};
use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, GatewayError>>;

/// Message sent to the submission actor.
#[derive(Debug)]
pub enum SubmissionRequest {
    Submit {
        record: SubmissionRecord,
        respond_to: Response<Acknowledgement>,
    },
}

/// The server half: owns the receiver and forwards each round to a backend.
pub struct SubmissionActor {
    receiver: mpsc::UnboundedReceiver<SubmissionRequest>,
}

impl SubmissionActor {
    /// Creates the actor and its client.
    ///
    /// Submitted rounds are already locked in the cart, so the queue is
    /// unbounded: a round that was handed off is never dropped for lack of room.
    pub fn new() -> (Self, SubmissionClient) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { receiver }, SubmissionClient { sender })
    }

    /// Processes rounds until every client has been dropped.
    ///
    /// The backend is injected here rather than in `new` so the actor can be
    /// created before the backend is ready.
    pub async fn run<G: OrderGateway + Send>(mut self, backend: G) {
        info!("Submission actor started");
        let mut delivered = 0usize;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SubmissionRequest::Submit { record, respond_to } => {
                    debug!(round = record.round, items = record.items.len(), "Submit");
                    let result = backend.hand_off(&record);
                    match &result {
                        Ok(_) => {
                            delivered += 1;
                            info!(round = record.round, "Round delivered");
                        }
                        Err(e) => warn!(round = record.round, error = %e, "Round rejected"),
                    }
                    // Fire-and-forget callers have already dropped the receiver.
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(delivered, "Submission actor shutdown");
    }
}

/// The client half. Clone freely.
#[derive(Clone)]
pub struct SubmissionClient {
    sender: mpsc::UnboundedSender<SubmissionRequest>,
}

impl SubmissionClient {
    /// Queues a round and waits for the backend's answer.
    #[instrument(skip(self, record), fields(round = record.round))]
    pub async fn submit(&self, record: SubmissionRecord) -> Result<Acknowledgement, GatewayError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SubmissionRequest::Submit { record, respond_to })
            .map_err(|_| GatewayError::Closed)?;
        response.await.map_err(|_| GatewayError::Dropped)?
    }
}

impl OrderGateway for SubmissionClient {
    /// Queues the round without waiting. The acknowledgement means "accepted for
    /// delivery"; the backend's own answer is only logged by the actor.
    fn hand_off(&self, record: &SubmissionRecord) -> Result<Acknowledgement, GatewayError> {
        let (respond_to, _response) = oneshot::channel();
        let request = SubmissionRequest::Submit {
            record: record.clone(),
            respond_to,
        };
        self.sender
            .send(request)
            .map_err(|_| GatewayError::Closed)?;
        Ok(Acknowledgement {
            round: record.round,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder {
        rounds: Arc<Mutex<Vec<u32>>>,
    }

    impl OrderGateway for Recorder {
        fn hand_off(&self, record: &SubmissionRecord) -> Result<Acknowledgement, GatewayError> {
            self.rounds.lock().unwrap().push(record.round);
            Ok(Acknowledgement { round: record.round })
        }
    }

    struct Refusing;

    impl OrderGateway for Refusing {
        fn hand_off(&self, _record: &SubmissionRecord) -> Result<Acknowledgement, GatewayError> {
            Err(GatewayError::Rejected("kitchen closed".to_string()))
        }
    }

    fn record(round: u32) -> SubmissionRecord {
        SubmissionRecord {
            round,
            items: vec![],
            confirmed_total: 0,
            new_total: 0,
            grand_total: 0,
        }
    }

    #[tokio::test]
    async fn test_actor_delivers_in_order() {
        let recorder = Recorder::default();
        let (actor, client) = SubmissionActor::new();
        let handle = tokio::spawn(actor.run(recorder.clone()));

        client.hand_off(&record(1)).unwrap();
        client.hand_off(&record(2)).unwrap();
        let ack = client.submit(record(3)).await.unwrap();
        assert_eq!(ack.round, 3);

        drop(client);
        handle.await.unwrap();
        assert_eq!(*recorder.rounds.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_backend_rejection_reaches_awaiting_caller() {
        let (actor, client) = SubmissionActor::new();
        tokio::spawn(actor.run(Refusing));

        let result = client.submit(record(1)).await;
        assert_eq!(
            result,
            Err(GatewayError::Rejected("kitchen closed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (actor, client) = SubmissionActor::new();
        drop(actor);

        assert_eq!(client.hand_off(&record(1)), Err(GatewayError::Closed));
        assert_eq!(client.submit(record(2)).await, Err(GatewayError::Closed));
    }

    #[tokio::test]
    async fn test_burst_of_hand_offs_is_never_refused() {
        let recorder = Recorder::default();
        let (actor, client) = SubmissionActor::new();

        // Nothing drains the queue until the actor is spawned.
        for round in 1..=100 {
            assert_eq!(client.hand_off(&record(round)), Ok(Acknowledgement { round }));
        }
        let handle = tokio::spawn(actor.run(recorder.clone()));

        drop(client);
        handle.await.unwrap();
        assert_eq!(*recorder.rounds.lock().unwrap(), (1..=100).collect::<Vec<u32>>());
    }
}
