//! # Subscription Actor
//!
//! The producer half of the ordering pipeline. The actor owns the current cart
//! and the fire interval; nothing else can touch them except through
//! [`SubscriptionRequest`]s, so no lock is needed.
//!
//! ## Event Loop
//!
//! Each iteration waits for whichever comes first:
//!
//! 1. **Cancellation**: the loop ends, nothing more is sent.
//! 2. **A request**: applied immediately. A new interval restarts the timer.
//! 3. **A tick**: a snapshot of the current cart is sent on the order channel.
//!
//! The send waits for room on the order channel, which lets a slow order handler
//! throttle the subscription. Cancellation is still honoured while waiting.

use crate::model::{Cart, OrderMessage};
use crate::subscription::{SubscriptionClient, SubscriptionError, SubscriptionRequest};
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, warn, Instrument, Span};

/// What woke the event loop up.
enum Event {
    Cancelled,
    Request(SubscriptionRequest),
    Tick,
}

/// A timer-driven producer that fires its cart into the order channel.
pub struct SubscriptionActor {
    receiver: mpsc::Receiver<SubscriptionRequest>,
    orders: mpsc::Sender<OrderMessage>,
    cart: Cart,
    interval: Duration,
    cancel: CancellationToken,
    span: Span,
}

impl SubscriptionActor {
    /// Creates a new `SubscriptionActor` and its associated `SubscriptionClient`.
    ///
    /// # Arguments
    ///
    /// * `cart` - The cart fired on every tick until replaced.
    /// * `interval` - Time between ticks. Must be non-zero and schedulable from now.
    /// * `orders` - Sending half of the order channel.
    /// * `cancel` - Token that stops the event loop.
    /// * `buffer_size` - Capacity of the request channel used by the client.
    ///   Must be between 1 and [`Semaphore::MAX_PERMITS`].
    pub fn new(
        cart: Cart,
        interval: Duration,
        orders: mpsc::Sender<OrderMessage>,
        cancel: CancellationToken,
        buffer_size: usize,
    ) -> Result<(Self, SubscriptionClient), SubscriptionError> {
        first_deadline(interval)?;
        if buffer_size == 0 || buffer_size > Semaphore::MAX_PERMITS {
            return Err(SubscriptionError::InvalidBufferSize(buffer_size));
        }
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            orders,
            cart,
            interval,
            cancel,
            span: info_span!("subscription"),
        };
        Ok((actor, SubscriptionClient::new(sender)))
    }

    /// Replaces the span every log record of this actor is emitted under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Runs the event loop until cancelled, returning the number of carts fired.
    pub async fn run(self) -> u64 {
        let span = self.span.clone();
        self.event_loop().instrument(span).await
    }

    async fn event_loop(mut self) -> u64 {
        info!(interval = ?self.interval, cases = self.cart.len(), "Subscription started");
        let mut ticker = match first_deadline(self.interval) {
            Ok(start) => new_ticker(start, self.interval),
            Err(e) => {
                error!(error = %e, "Subscription cannot be scheduled");
                return 0;
            }
        };
        let mut fired = 0u64;

        loop {
            let event = tokio::select! {
                biased;
                () = self.cancel.cancelled() => Event::Cancelled,
                Some(request) = self.receiver.recv() => Event::Request(request),
                _ = ticker.tick() => Event::Tick,
            };

            match event {
                Event::Cancelled => {
                    debug!("Subscription cancelled");
                    break;
                }
                Event::Request(request) => {
                    if let Some(rescheduled) = self.handle_request(request) {
                        ticker = rescheduled;
                    }
                }
                Event::Tick => {
                    if !self.fire().await {
                        break;
                    }
                    fired += 1;
                }
            }
        }

        info!(fired, "Subscription stopped");
        fired
    }

    /// Applies a request, returning the new timer when the interval changed.
    fn handle_request(&mut self, request: SubscriptionRequest) -> Option<Interval> {
        match request {
            SubscriptionRequest::GetCart { respond_to } => {
                let _ = respond_to.send(Ok(self.cart.clone()));
                None
            }
            SubscriptionRequest::SetCart { cart, respond_to } => {
                info!(cases = cart.len(), subtotal = cart.subtotal(), "Cart replaced");
                self.cart = cart;
                let _ = respond_to.send(Ok(()));
                None
            }
            SubscriptionRequest::GetInterval { respond_to } => {
                let _ = respond_to.send(Ok(self.interval));
                None
            }
            SubscriptionRequest::SetInterval {
                interval,
                respond_to,
            } => {
                let start = match first_deadline(interval) {
                    Ok(start) => start,
                    Err(e) => {
                        warn!(?interval, "Interval rejected");
                        let _ = respond_to.send(Err(e));
                        return None;
                    }
                };
                info!(old = ?self.interval, new = ?interval, "Interval replaced");
                self.interval = interval;
                let _ = respond_to.send(Ok(()));
                Some(new_ticker(start, interval))
            }
        }
    }

    /// Sends a snapshot of the current cart. Returns `false` when the loop must stop.
    async fn fire(&self) -> bool {
        let snapshot = self.cart.clone();
        debug!(cases = snapshot.len(), subtotal = snapshot.subtotal(), "Firing cart");

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                debug!("Subscription cancelled while sending");
                false
            }
            sent = self.orders.send(OrderMessage::Order(snapshot)) => {
                if sent.is_err() {
                    warn!("Order channel closed");
                }
                sent.is_ok()
            }
        }
    }
}

/// When the first tick of a timer started now would fire.
///
/// Zero periods and periods that overflow the clock are rejected.
fn first_deadline(period: Duration) -> Result<Instant, SubscriptionError> {
    if period.is_zero() {
        return Err(SubscriptionError::InvalidInterval(period));
    }
    Instant::now()
        .checked_add(period)
        .ok_or(SubscriptionError::InvalidInterval(period))
}

fn new_ticker(start: Instant, period: Duration) -> Interval {
    let mut ticker = time::interval_at(start, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}
