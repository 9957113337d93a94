//! # Order Handler
//!
//! The consumer half of the ordering pipeline. The handler owns the
//! [`OrderLedger`] and is the only code that writes to it, so it runs without
//! locks. It processes messages sequentially until every sender of the order
//! channel has been dropped and the queue is drained, then hands the ledger
//! back to whoever awaited [`OrderHandler::run`].
//!
//! Nothing received on the channel stops the loop: rejected orders and
//! malformed messages are logged and skipped.

use crate::model::{Cart, OrderId, OrderLedger, OrderMessage, PlacedOrder};
use crate::order_handler::{AcceptAll, OrderError, OrderPolicy};
use tokio::sync::mpsc;
use tracing::{debug, error, info, info_span, Instrument, Span};

/// Consumes fired carts and records them as placed orders.
pub struct OrderHandler<P: OrderPolicy = AcceptAll> {
    receiver: mpsc::Receiver<OrderMessage>,
    ledger: OrderLedger,
    policy: P,
    next_id: u32,
    span: Span,
}

impl OrderHandler {
    /// Creates a handler that accepts every cart.
    pub fn new(receiver: mpsc::Receiver<OrderMessage>) -> Self {
        Self::with_policy(receiver, AcceptAll)
    }
}

impl<P: OrderPolicy> OrderHandler<P> {
    pub fn with_policy(receiver: mpsc::Receiver<OrderMessage>, policy: P) -> Self {
        Self {
            receiver,
            ledger: OrderLedger::new(),
            policy,
            next_id: 1,
            span: info_span!("order_handler"),
        }
    }

    /// Replaces the span every log record of this handler is emitted under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    /// Validates the cart against the policy and appends it to the ledger.
    ///
    /// Order ids are only consumed by carts that make it into the ledger.
    pub async fn place_order(&mut self, cart: Cart) -> Result<OrderId, OrderError> {
        self.policy.check(&cart).await?;
        let id = OrderId::from(self.next_id);
        self.next_id += 1;
        self.ledger.push(PlacedOrder::new(id, cart));
        Ok(id)
    }

    /// Runs the consumer loop until the order channel is closed and drained.
    pub async fn run(self) -> OrderLedger {
        let span = self.span.clone();
        self.event_loop().instrument(span).await
    }

    async fn event_loop(mut self) -> OrderLedger {
        info!("Order handler started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderMessage::Order(cart) => {
                    debug!(cases = cart.len(), subtotal = cart.subtotal(), "Order received");
                    match self.place_order(cart).await {
                        Ok(id) => {
                            info!(order_id = %id, size = self.ledger.len(), "Placed order")
                        }
                        Err(e) => error!(error = %e, "Error placing order"),
                    }
                }
                OrderMessage::Malformed { raw, reason } => {
                    error!(msg = %raw, %reason, "Received invalid message on order channel");
                }
            }
        }

        debug!("Order channel closed");
        info!(
            size = self.ledger.len(),
            total = self.ledger.total(),
            "Order handler stopped"
        );
        self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture_cart;
    use crate::order_handler::RejectEmptyCarts;

    #[tokio::test]
    async fn test_place_order_assigns_sequential_ids() {
        let (_sender, receiver) = mpsc::channel(1);
        let mut handler = OrderHandler::new(receiver);

        assert_eq!(handler.place_order(fixture_cart()).await, Ok(OrderId(1)));
        assert_eq!(handler.place_order(Cart::new()).await, Ok(OrderId(2)));
        assert_eq!(handler.ledger().len(), 2);
        assert_eq!(handler.ledger().total(), 14.0);
    }

    #[tokio::test]
    async fn test_rejected_order_does_not_consume_an_id() {
        let (_sender, receiver) = mpsc::channel(1);
        let mut handler = OrderHandler::with_policy(receiver, RejectEmptyCarts);

        assert_eq!(
            handler.place_order(Cart::new()).await,
            Err(OrderError::EmptyCart)
        );
        assert!(handler.ledger().is_empty());
        assert_eq!(handler.place_order(fixture_cart()).await, Ok(OrderId(1)));
    }

    #[tokio::test]
    async fn test_run_returns_ledger_when_channel_closes() {
        let (sender, receiver) = mpsc::channel(4);
        sender.send(fixture_cart().into()).await.unwrap();
        drop(sender);

        let ledger = OrderHandler::new(receiver).run().await;
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(OrderId(1)).unwrap().cart, fixture_cart());
    }
}
