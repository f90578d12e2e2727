use crate::clients::OrderFormClient;
use crate::model::PriceList;
use crate::summary_view::OrderSummaryView;
use tracing::{error, info};

/// The runtime for the order entry screens.
///
/// `OrderEntrySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the order form actor
/// - **Context Injection**: handing the actor the [`PriceList`] it prices orders with
/// - **Wiring**: building summary views that talk to that actor
///
/// # Example
///
/// ```ignore
/// let system = OrderEntrySystem::new();
/// let mut view = system.summary_view();
/// let outcome = view.invoke(&mut input).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderEntrySystem {
    /// Client for the order form actor
    pub form_client: OrderFormClient,

    /// Task handles for running actors (awaited on shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderEntrySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderEntrySystem {
    /// Starts the system with the standard menu prices.
    pub fn new() -> Self {
        Self::with_prices(PriceList::default())
    }

    /// Starts the system pricing orders from `prices`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn with_prices(prices: PriceList) -> Self {
        let (form_actor, form_generic_client) = crate::order_form::new();
        let form_client = OrderFormClient::new(form_generic_client);

        // The price list is the actor's context, shared by every session.
        let form_handle = tokio::spawn(form_actor.run(prices));

        Self {
            form_client,
            handles: vec![form_handle],
        }
    }

    /// A new main screen backed by this system's order form actor.
    pub fn summary_view(&self) -> OrderSummaryView {
        OrderSummaryView::new(self.form_client.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor tasks. Actors stop once every
    /// client is gone, so views created by [`summary_view`](Self::summary_view) must be
    /// dropped first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.form_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
