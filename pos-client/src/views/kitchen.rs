//! Kitchen board
//!
//! Shows orders waiting in the kitchen (`Pendiente`) and orders ready at
//! the pass (`Listo`). The board re-fetches on a fixed interval while it
//! is mounted.

use std::time::Duration;

use chrono::{DateTime, Utc};
use shared::{Order, OrderStatus, filter_by_status};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

use crate::{ClientError, ClientResult, HttpClient};

/// Shortest accepted polling period
pub const MIN_POLL_PERIOD: Duration = Duration::from_millis(10);

/// One fetch of the kitchen board
#[derive(Debug, Clone, Default)]
pub struct KitchenSnapshot {
    pub pending: Vec<Order>,
    pub ready: Vec<Order>,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Incremented on every successful fetch
    pub revision: u64,
}

impl KitchenSnapshot {
    pub fn find(&self, order_id: &str) -> Option<&Order> {
        self.pending
            .iter()
            .chain(self.ready.iter())
            .find(|o| o.id == order_id)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty()
    }

    /// Move an updated order to the column of its new status
    fn apply(&mut self, order: &Order) {
        self.pending.retain(|o| o.id != order.id);
        self.ready.retain(|o| o.id != order.id);
        let column = match order.status {
            OrderStatus::Pendiente => &mut self.pending,
            OrderStatus::Listo => &mut self.ready,
            OrderStatus::Entregado => return,
        };
        column.push(order.clone());
        column.sort_by_key(|o| o.timestamp);
    }
}

/// Fetch both columns of the board
///
/// Results are filtered client-side so a backend ignoring the status
/// query cannot put an order in the wrong column.
async fn fetch_board(client: &HttpClient, revision: u64) -> ClientResult<KitchenSnapshot> {
    let (pending, ready) = tokio::try_join!(
        client.list_orders(OrderStatus::Pendiente),
        client.list_orders(OrderStatus::Listo),
    )?;
    let mut pending = filter_by_status(pending, OrderStatus::Pendiente);
    let mut ready = filter_by_status(ready, OrderStatus::Listo);
    // Oldest first
    pending.sort_by_key(|o| o.timestamp);
    ready.sort_by_key(|o| o.timestamp);

    Ok(KitchenSnapshot {
        pending,
        ready,
        fetched_at: Some(Utc::now()),
        revision,
    })
}

pub struct KitchenView {
    client: HttpClient,
    board: KitchenSnapshot,
}

impl KitchenView {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            board: KitchenSnapshot::default(),
        }
    }

    /// Fetch the board
    pub async fn refresh(&mut self) -> ClientResult<&KitchenSnapshot> {
        self.board = fetch_board(&self.client, self.board.revision + 1).await?;
        Ok(&self.board)
    }

    pub fn board(&self) -> &KitchenSnapshot {
        &self.board
    }

    /// Move an order on the board to its next status, then re-fetch
    pub async fn advance(&mut self, order_id: &str) -> ClientResult<Order> {
        let current = self
            .board
            .find(order_id)
            .map(|o| o.status)
            .ok_or_else(|| ClientError::NotFound(format!("order {order_id} is not on the board")))?;
        let next = current.next().ok_or_else(|| ClientError::InvalidTransition {
            order_id: order_id.to_string(),
            from: current,
            to: "a later status".to_string(),
        })?;
        self.set_status(order_id, current, next).await
    }

    /// Move an order from `from` to `to`; only forward single steps are sent
    ///
    /// The board is patched locally, then re-fetched. A failed re-fetch
    /// does not fail the update.
    pub async fn set_status(
        &mut self,
        order_id: &str,
        from: OrderStatus,
        to: OrderStatus,
    ) -> ClientResult<Order> {
        if !from.can_transition_to(to) {
            return Err(ClientError::InvalidTransition {
                order_id: order_id.to_string(),
                from,
                to: to.to_string(),
            });
        }

        let updated = self.client.update_order_status(order_id, to).await?;
        tracing::info!(order_id, %from, %to, "Order status updated");
        self.board.apply(&updated);
        if let Err(e) = self.refresh().await {
            tracing::warn!(error = %e, "Kitchen board refresh failed after status update");
        }
        Ok(updated)
    }

    /// Start re-fetching the board every `period`
    pub fn start_polling(&self, period: Duration) -> KitchenPoller {
        KitchenPoller::spawn(self.client.clone(), period)
    }
}

/// Background re-fetch of the kitchen board
///
/// Publishes snapshots on a watch channel. Stopped explicitly with
/// [`KitchenPoller::stop`] or implicitly when dropped.
pub struct KitchenPoller {
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
    rx: watch::Receiver<KitchenSnapshot>,
}

impl KitchenPoller {
    /// Start polling; `period` is raised to [`MIN_POLL_PERIOD`] when shorter
    pub fn spawn(client: HttpClient, period: Duration) -> Self {
        let period = period.max(MIN_POLL_PERIOD);
        let (tx, rx) = watch::channel(KitchenSnapshot::default());
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(poll_loop(client, period, tx, shutdown.clone()));
        Self {
            shutdown,
            handle: Some(handle),
            rx,
        }
    }

    /// Receiver notified on every new snapshot
    pub fn subscribe(&self) -> watch::Receiver<KitchenSnapshot> {
        self.rx.clone()
    }

    /// Most recent snapshot (empty until the first fetch completes)
    pub fn latest(&self) -> KitchenSnapshot {
        self.rx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop polling and wait for the task to exit
    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take()
            && let Err(e) = handle.await
        {
            tracing::error!(error = %e, "Kitchen poller task failed");
        }
    }
}

impl Drop for KitchenPoller {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn poll_loop(
    client: HttpClient,
    period: Duration,
    tx: watch::Sender<KitchenSnapshot>,
    shutdown: CancellationToken,
) {
    tracing::info!(period_secs = period.as_secs_f32(), "Kitchen poller started");
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut revision = 0u64;

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let fetched = tokio::select! {
            _ = shutdown.cancelled() => break,
            result = fetch_board(&client, revision + 1) => result,
        };

        match fetched {
            Ok(snapshot) => {
                revision = snapshot.revision;
                tracing::debug!(
                    revision,
                    pending = snapshot.pending.len(),
                    ready = snapshot.ready.len(),
                    "Kitchen board refreshed"
                );
                if tx.send(snapshot).is_err() {
                    // Every receiver is gone
                    break;
                }
            }
            // Keep the previous snapshot and try again on the next tick
            Err(e) => tracing::warn!(error = %e, "Kitchen board refresh failed"),
        }
    }

    tracing::info!("Kitchen poller stopped");
}
