use async_trait::async_trait;
use diner_order::catalog::{CatalogError, CatalogSource, StaticSource};
use diner_order::gateway::{GatewayError, OrderGateway};
use diner_order::lifecycle::{DinerSession, SessionConfig};
use diner_order::model::{Acknowledgement, Category, DishId, SubmissionRecord, VEGETARIAN_CATEGORY};
use std::sync::{Arc, Mutex};

const MENU: &str = "\
item_code,category,name,description,dietary_tags,spice_level,price
A1,Mains,Braised Pork Rice,\"Pork belly, soy\",meat,0,120
A2,Mains,Mushroom Bowl,Shiitake,vegetarian-friendly,0,160
B1,Drinks,Oolong Tea,,vegan,,60
";

#[derive(Clone, Default)]
struct RecordingGateway {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl OrderGateway for RecordingGateway {
    fn hand_off(&self, record: &SubmissionRecord) -> Result<Acknowledgement, GatewayError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(Acknowledgement {
            round: record.round,
        })
    }
}

struct ClosedKitchen;

impl OrderGateway for ClosedKitchen {
    fn hand_off(&self, _record: &SubmissionRecord) -> Result<Acknowledgement, GatewayError> {
        Err(GatewayError::Rejected("kitchen closed".to_string()))
    }
}

struct FailingSource;

#[async_trait]
impl CatalogSource for FailingSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        Err(CatalogError::Unavailable("simulated fetch failure".to_string()))
    }
}

/// Full session: load menu, order two rounds, shut down, check what the backend got.
#[tokio::test]
async fn test_full_session_delivers_every_round() {
    let backend = RecordingGateway::default();
    let mut session =
        DinerSession::from_source(&StaticSource(MENU.to_string()), backend.clone()).await;

    let names: Vec<String> = session
        .catalog()
        .categories()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Mains", "Drinks", VEGETARIAN_CATEGORY]);
    assert_eq!(session.catalog().by_category(VEGETARIAN_CATEGORY).len(), 2);

    assert!(session.add_dish(&DishId::from("A1"), 2));
    assert!(session.add_dish(&DishId::from("B1"), 1));
    assert!(!session.add_dish(&DishId::from("ZZ"), 1));
    let first = session.submit_round();
    assert_eq!(first.new_total, 300);

    assert!(session.add_dish(&DishId::from("A1"), 1));
    let second = session.submit_round();
    assert_eq!(second.confirmed_total, 300);
    assert_eq!(second.new_total, 120);
    assert_eq!(session.snapshot().item_count, 4);

    let cart = session.shutdown().await.expect("clean shutdown");
    assert_eq!(cart.rounds_submitted(), 2);

    let delivered = backend.records.lock().unwrap();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0], first);
    assert_eq!(delivered[1], second);
}

/// A failed catalog fetch leaves an empty but usable session.
#[tokio::test]
async fn test_failed_catalog_load_is_empty_menu() {
    let mut session = DinerSession::from_source(&FailingSource, RecordingGateway::default()).await;

    assert!(session.catalog().is_empty());
    assert_eq!(session.catalog().categories(), vec![Category::vegetarian()]);
    assert!(!session.add_dish(&DishId::from("A1"), 1));
    assert!(!session.cart().has_draft());

    session.shutdown().await.expect("clean shutdown");
}

/// Missing catalog file through the default file-based startup.
#[tokio::test]
async fn test_start_with_missing_file() {
    let config = SessionConfig::default().with_catalog_path("no/such/menu.csv");
    let session = DinerSession::start(&config).await;

    assert!(session.catalog().is_empty());
    session.shutdown().await.expect("clean shutdown");
}

/// The bundled sample menu parses and drops its nameless row.
#[tokio::test]
async fn test_start_with_sample_menu() {
    let config = SessionConfig::default()
        .with_catalog_path(concat!(env!("CARGO_MANIFEST_DIR"), "/data/dish-data.csv"));
    let session = DinerSession::start(&config).await;

    assert_eq!(session.catalog().len(), 10);
    let dumplings = session
        .catalog()
        .get(&DishId::from("S02"))
        .expect("dumplings on menu");
    assert_eq!(dumplings.spice_level, "0");
    let melon = session
        .catalog()
        .get(&DishId::from("D03"))
        .expect("winter melon tea on menu");
    assert_eq!(melon.price, 0);

    session.shutdown().await.expect("clean shutdown");
}

/// Many rounds submitted back to back, with no await in between, all reach the backend.
#[tokio::test]
async fn test_rapid_rounds_are_all_delivered() {
    let backend = RecordingGateway::default();
    let mut session =
        DinerSession::from_source(&StaticSource(MENU.to_string()), backend.clone()).await;

    let mut submitted = Vec::new();
    for _ in 0..200 {
        assert!(session.add_dish(&DishId::from("B1"), 1));
        submitted.push(session.submit_round());
    }
    assert_eq!(session.snapshot().confirmed_total, 200 * 60);

    let cart = session.shutdown().await.expect("clean shutdown");
    assert_eq!(cart.rounds_submitted(), 200);
    assert_eq!(*backend.records.lock().unwrap(), submitted);
}

/// A backend that refuses every round does not unlock lines or break shutdown.
#[tokio::test]
async fn test_rejecting_backend_still_locks_rounds() {
    let mut session =
        DinerSession::from_source(&StaticSource(MENU.to_string()), ClosedKitchen).await;

    assert!(session.add_dish(&DishId::from("A1"), 1));
    let record = session.submit_round();
    assert_eq!(record.round, 1);
    assert_eq!(record.unit_count(), 1);
    assert!(!session.cart().has_draft());
    assert_eq!(session.snapshot().confirmed_total, 120);

    let cart = session.shutdown().await.expect("clean shutdown");
    assert!(cart.locked_lines().all(|line| line.is_submitted()));
}
