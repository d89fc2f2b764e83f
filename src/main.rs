//! Demo run: one table orders two rounds from the sample menu.

use diner_order::lifecycle::{setup_tracing, DinerSession, SessionConfig};
use diner_order::model::DishId;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting ordering session");
    let mut session = DinerSession::start(&SessionConfig::default()).await;

    let categories = session.catalog().categories();
    for category in &categories {
        let dishes = session.catalog().by_category(&category.name);
        info!(category = %category.display_name, dishes = dishes.len(), "Menu section");
    }

    let Some(first) = session.catalog().dishes().first().cloned() else {
        warn!("Menu is empty, nothing to order");
        session.shutdown().await?;
        return Ok(());
    };
    let second = session.catalog().dishes().get(1).cloned().unwrap_or(first.clone());

    let span = tracing::info_span!("round_1");
    async {
        session.add_dish(&first.id, 2);
        session.add_dish(&second.id, 1);
        session.cart_mut().increment(&second.id);
        let record = session.submit_round();
        info!(new_total = record.new_total, "First round sent");
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("round_2");
    async {
        session.add_dish(&first.id, 1);
        session.cart_mut().decrement(&second.id);
        let snapshot = session.snapshot();
        info!(
            draft_total = snapshot.draft_total,
            confirmed_total = snapshot.confirmed_total,
            items = snapshot.item_count,
            "Cart before second round"
        );
        if session.cart().has_draft() {
            session.submit_round();
        }
    }
    .instrument(span)
    .await;

    if !session.add_dish(&DishId::from("does-not-exist"), 1) {
        warn!("Skipped unknown dish");
    }

    let cart = session.shutdown().await?;
    info!(
        rounds = cart.rounds_submitted(),
        grand_total = cart.snapshot().grand_total,
        "Session completed successfully"
    );
    Ok(())
}
