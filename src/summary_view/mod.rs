//! # Order Summary View
//!
//! The main screen. It launches an order form, waits for the session to finish, and
//! shows what came back. It holds no pricing or selection logic of its own.
//!
//! - [`OrderSummaryView`] - launches sessions and owns the display
//! - [`SummaryDisplay`] - the five rendered text fields
//! - [`FormInput`] - whoever fills in the form ([`ScriptedInput`] replays fixed steps)

pub mod display;
pub mod input;

pub use display::*;
pub use input::*;

use crate::clients::{OrderForm, OrderFormClient};
use crate::model::SessionOutcome;
use crate::order_form::OrderFormError;
use tracing::{info, instrument, warn};

/// The main screen.
pub struct OrderSummaryView {
    forms: OrderFormClient,
    display: SummaryDisplay,
}

impl OrderSummaryView {
    pub fn new(forms: OrderFormClient) -> Self {
        Self {
            forms,
            display: SummaryDisplay::default(),
        }
    }

    pub fn display(&self) -> &SummaryDisplay {
        &self.display
    }

    /// Runs one form session to completion and renders its outcome.
    ///
    /// Opens a session, lets `input` fill it in, then finishes the form: a session
    /// `input` left open is cancelled. The display always shows what the session ended
    /// with.
    ///
    /// A confirmed order is returned as `Completed` even if `input` failed afterwards.
    /// Otherwise an input error is returned after the cancellation is rendered, and it
    /// takes precedence over a failure to cancel.
    #[instrument(skip_all)]
    pub async fn invoke<I>(&mut self, input: &mut I) -> Result<SessionOutcome, OrderFormError>
    where
        I: FormInput + ?Sized,
    {
        let mut form = OrderForm::open(self.forms.clone()).await?;
        let session = form.id();
        let filled = input.fill(&mut form).await;
        let finished = form.finish().await;

        let outcome = match &finished {
            Ok(outcome) => outcome.clone(),
            Err(_) => SessionOutcome::Cancelled,
        };
        self.display.apply(&outcome);

        if let Some(order) = outcome.result() {
            if let Err(e) = &filled {
                warn!(%session, error = %e, "Form input failed after confirmation");
            }
            info!(%session, total = order.total, "Order received");
            return Ok(outcome);
        }

        match (filled, finished) {
            (Err(e), finished) => {
                if let Err(cancel_error) = finished {
                    warn!(%session, error = %cancel_error, "Cancelling session failed");
                }
                warn!(%session, error = %e, "Form input failed");
                Err(e)
            }
            (Ok(()), Err(e)) => {
                warn!(%session, error = %e, "Cancelling session failed");
                Err(e)
            }
            (Ok(()), Ok(outcome)) => {
                info!(%session, "Order form cancelled");
                Ok(outcome)
            }
        }
    }
}
