use crate::config::{SystemConfig, MAX_CHANNEL_CAPACITY};
use crate::model::{Cart, OrderLedger, OrderMessage};
use crate::order_handler::{AcceptAll, OrderHandler, OrderPolicy};
use crate::subscription::{SubscriptionActor, SubscriptionClient, SubscriptionError};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, info_span};

/// Errors raised while starting or stopping an [`OrderSystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Subscription error: {0}")]
    Subscription(#[from] SubscriptionError),

    #[error("Invalid {name}: {value} (must be between 1 and {max})", max = MAX_CHANNEL_CAPACITY)]
    InvalidCapacity { name: &'static str, value: usize },

    #[error("Task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// What the system produced before it was shut down.
#[derive(Debug)]
pub struct ShutdownReport {
    /// Carts the subscription handed to the order channel.
    pub fired: u64,
    /// Every order the handler placed.
    pub ledger: OrderLedger,
}

/// The runtime orchestrator wiring one subscription to one order handler.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting both tasks and stopping them in order
/// - **Dependency Wiring**: Creating the order channel shared by producer and consumer
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&SystemConfig::default(), fixture_cart())?;
///
/// // Swap what the next tick fires
/// system.subscription.set_cart(other_cart).await?;
///
/// // Stop the timer, drain the channel, collect the ledger
/// let report = system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for reading and replacing the subscription state.
    pub subscription: SubscriptionClient,

    /// Extra producer handle; see [`OrderSystem::order_sender`].
    orders: mpsc::Sender<OrderMessage>,

    cancel: CancellationToken,
    subscription_handle: JoinHandle<u64>,
    handler_handle: JoinHandle<OrderLedger>,
}

impl OrderSystem {
    /// Starts a subscription firing `cart` and an order handler accepting every order.
    pub fn new(config: &SystemConfig, cart: Cart) -> Result<Self, SystemError> {
        Self::with_policy(config, cart, AcceptAll)
    }

    /// Starts the system with a custom order validation policy.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_policy<P: OrderPolicy>(
        config: &SystemConfig,
        cart: Cart,
        policy: P,
    ) -> Result<Self, SystemError> {
        check_capacity("order channel capacity", config.order_channel_capacity)?;
        check_capacity("command buffer", config.command_buffer)?;

        let (orders, inbox) = mpsc::channel(config.order_channel_capacity);
        let cancel = CancellationToken::new();

        let (subscription_actor, subscription) = SubscriptionActor::new(
            cart,
            config.interval,
            orders.clone(),
            cancel.clone(),
            config.command_buffer,
        )?;
        let system_span = info_span!("order_system");
        let subscription_actor =
            subscription_actor.with_span(info_span!(parent: &system_span, "subscription"));
        let handler = OrderHandler::with_policy(inbox, policy)
            .with_span(info_span!(parent: &system_span, "order_handler"));

        let handler_handle = tokio::spawn(handler.run());
        let subscription_handle = tokio::spawn(subscription_actor.run());

        Ok(Self {
            subscription,
            orders,
            cancel,
            subscription_handle,
            handler_handle,
        })
    }

    /// Returns another producer for the order channel.
    ///
    /// The order handler only stops once every sender is dropped, so clones
    /// must be released before [`OrderSystem::shutdown`] can complete.
    pub fn order_sender(&self) -> mpsc::Sender<OrderMessage> {
        self.orders.clone()
    }

    /// Token that stops the subscription when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Gracefully shuts down the system.
    ///
    /// 1. Cancels the subscription, which stops firing and drops its sender
    /// 2. Drops the system's own sender, closing the order channel
    /// 3. Waits for the handler to drain the remaining carts
    pub async fn shutdown(self) -> Result<ShutdownReport, SystemError> {
        info!("Shutting down system...");

        self.cancel.cancel();
        drop(self.subscription);
        drop(self.orders);

        let fired = self.subscription_handle.await.map_err(|e| {
            error!("Subscription task failed: {:?}", e);
            e
        })?;
        let ledger = self.handler_handle.await.map_err(|e| {
            error!("Order handler task failed: {:?}", e);
            e
        })?;

        info!(fired, orders = ledger.len(), "System shutdown complete.");
        Ok(ShutdownReport { fired, ledger })
    }
}

fn check_capacity(name: &'static str, value: usize) -> Result<(), SystemError> {
    if value == 0 || value > MAX_CHANNEL_CAPACITY {
        return Err(SystemError::InvalidCapacity { name, value });
    }
    Ok(())
}
