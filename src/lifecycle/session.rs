//! Session orchestration: catalog, cart and submission actor under one owner.
use crate::cart::CartEngine;
use crate::catalog::{load_catalog, Catalog, CatalogSource, FileSource};
use crate::gateway::{LoggingGateway, OrderGateway, SubmissionActor, SubmissionClient};
use crate::lifecycle::SessionConfig;
use crate::model::{CartSnapshot, DishId, SubmissionRecord};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors raised while tearing a session down.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Submission actor task failed: {0}")]
    ActorJoin(#[from] tokio::task::JoinError),
}

/// One diner's ordering session.
///
/// `DinerSession` is responsible for:
/// - **Startup**: loading the catalog and spawning the submission actor
/// - **State ownership**: holding the one [`CartEngine`] that all gestures go through
/// - **Shutdown**: closing the submission channel and waiting for queued rounds to drain
///
/// # Example
///
/// ```ignore
/// let mut session = DinerSession::start(&SessionConfig::default()).await;
///
/// session.add_dish(&"A1".into(), 2);
/// let record = session.submit_round();
///
/// session.shutdown().await?;
/// ```
pub struct DinerSession {
    catalog: Catalog,
    cart: CartEngine,
    gateway: SubmissionClient,
    handle: tokio::task::JoinHandle<()>,
}

impl DinerSession {
    /// Loads the catalog from `config.catalog_path` and submits rounds to a
    /// [`LoggingGateway`].
    pub async fn start(config: &SessionConfig) -> Self {
        let source = FileSource::new(&config.catalog_path);
        Self::from_source(&source, LoggingGateway).await
    }

    /// Loads the catalog from any source and submits rounds to `backend`.
    pub async fn from_source<G>(source: &dyn CatalogSource, backend: G) -> Self
    where
        G: OrderGateway + Send + 'static,
    {
        let catalog = load_catalog(source).await;
        Self::with_catalog(catalog, backend)
    }

    /// Wires a session around an already loaded catalog. Must be called inside a
    /// Tokio runtime.
    pub fn with_catalog<G>(catalog: Catalog, backend: G) -> Self
    where
        G: OrderGateway + Send + 'static,
    {
        let (actor, gateway) = SubmissionActor::new();
        let handle = tokio::spawn(actor.run(backend));
        info!(dishes = catalog.len(), "Session started");

        Self {
            catalog,
            cart: CartEngine::new(),
            gateway,
            handle,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartEngine {
        &self.cart
    }

    /// Mutable access to the cart. The engine only exposes its own operations.
    pub fn cart_mut(&mut self) -> &mut CartEngine {
        &mut self.cart
    }

    /// Adds a dish by item code. Returns `false` if the catalog has no such dish.
    pub fn add_dish(&mut self, id: &DishId, quantity: u32) -> bool {
        match self.catalog.get(id) {
            Some(dish) => {
                self.cart.add_item(dish, quantity);
                true
            }
            None => {
                debug!(dish = %id, "Unknown dish, not added");
                false
            }
        }
    }

    /// Submits the current draft lines through the session's submission actor.
    pub fn submit_round(&mut self) -> SubmissionRecord {
        self.cart.submit_round(&self.gateway)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    /// Closes the submission channel and waits until every queued round has been
    /// handed to the backend. Returns the final cart.
    pub async fn shutdown(self) -> Result<CartEngine, LifecycleError> {
        info!("Shutting down session...");
        drop(self.gateway);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Submission actor task failed");
            return Err(e.into());
        }

        info!(rounds = self.cart.rounds_submitted(), "Session shutdown complete.");
        Ok(self.cart)
    }
}
