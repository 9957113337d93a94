//! # Beer Subscription Demo
//!
//! Runs one subscription against one order handler for a few ticks:
//! 1.  Starts the [`OrderSystem`] with a single-case cart.
//! 2.  Replaces the cart after the first orders have been placed.
//! 3.  Shuts down and charges the ledger total when `PAYMENT_ENDPOINT` is set.

use beer_subscription::config::SystemConfig;
use beer_subscription::fixtures::{fixture_beer, fixture_cart, fixture_case};
use beer_subscription::lifecycle::{setup_tracing, OrderSystem};
use beer_subscription::payment::PaymentClient;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(?config, "Starting subscription demo");

    let system = OrderSystem::new(&config, fixture_cart())?;

    tokio::time::sleep(config.interval * 2 + config.interval / 2).await;

    let span = tracing::info_span!("cart_update");
    async {
        let mut party = fixture_cart();
        party.add_case(fixture_case(
            30,
            fixture_beer("Labatt", "Blue Light", 12.0),
            24.99,
        ));
        info!(subtotal = party.subtotal(), "Upgrading subscription cart");
        system.subscription.set_cart(party).await
    }
    .instrument(span)
    .await?;

    tokio::time::sleep(config.interval * 2).await;

    let report = system.shutdown().await?;
    for order in report.ledger.iter() {
        info!(order_id = %order.id, cases = order.cart.len(), subtotal = order.subtotal, "Order");
    }
    info!(
        fired = report.fired,
        orders = report.ledger.len(),
        total = report.ledger.total(),
        "Subscription finished"
    );

    if let Some(endpoint) = config.payment_endpoint {
        let payments = PaymentClient::new(endpoint);
        match payments.process_payment(report.ledger.total()).await {
            Ok(body) => info!(response = %String::from_utf8_lossy(&body), "Payment processed"),
            Err(e) => error!(endpoint = payments.endpoint(), error = %e, "Payment failed"),
        }
    }

    Ok(())
}
