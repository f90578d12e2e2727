//! # Order Form Handle
//!
//! [`OrderForm`] is one open session seen from the outside: the selection screen's
//! operations, bound to a session id.
use crate::clients::OrderFormClient;
use crate::framework::ActorClient;
use crate::model::{
    AddOn, Drink, FormPhase, MainCourse, OrderResult, SelectionState, SessionId, SessionOutcome,
};
use crate::order_form::{ConfirmationPrompt, OrderFormError};
use tracing::{debug, instrument};

/// A handle to a single order form session.
///
/// Owned exclusively by whoever is filling the form in. Once the session is confirmed
/// or cancelled the handle remembers the outcome; [`OrderForm::finish`] returns it,
/// cancelling first if the session is still open.
pub struct OrderForm {
    client: OrderFormClient,
    id: SessionId,
    outcome: Option<SessionOutcome>,
}

impl OrderForm {
    /// Opens a new session on `client`.
    pub async fn open(client: OrderFormClient) -> Result<Self, OrderFormError> {
        let id = client.open_session().await?;
        Ok(Self {
            client,
            id,
            outcome: None,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The terminal outcome, once there is one.
    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    pub async fn select_main_course(&self, choice: MainCourse) -> Result<SelectionState, OrderFormError> {
        self.client.select_main_course(self.id, choice).await
    }

    pub async fn select_drink(&self, choice: Drink) -> Result<SelectionState, OrderFormError> {
        self.client.select_drink(self.id, choice).await
    }

    pub async fn toggle_add_on(&self, item: AddOn) -> Result<SelectionState, OrderFormError> {
        self.client.toggle_add_on(self.id, item).await
    }

    pub async fn set_name(&self, name: &str) -> Result<SelectionState, OrderFormError> {
        self.client.set_name(self.id, name).await
    }

    pub async fn reset(&self) -> Result<SelectionState, OrderFormError> {
        self.client.reset(self.id).await
    }

    pub async fn request_confirmation(&self) -> Result<ConfirmationPrompt, OrderFormError> {
        self.client.request_confirmation(self.id).await
    }

    pub async fn confirm(&mut self) -> Result<OrderResult, OrderFormError> {
        let order = self.client.confirm(self.id).await?;
        self.outcome = Some(SessionOutcome::Completed(order.clone()));
        Ok(order)
    }

    pub async fn decline(&self) -> Result<(), OrderFormError> {
        self.client.decline(self.id).await
    }

    pub async fn cancel(&mut self) -> Result<(), OrderFormError> {
        self.client.cancel(self.id).await?;
        self.outcome = Some(SessionOutcome::Cancelled);
        Ok(())
    }

    /// Current selection of an open session.
    pub async fn selection(&self) -> Result<SelectionState, OrderFormError> {
        self.client
            .get(self.id)
            .await?
            .map(|session| session.selection)
            .ok_or_else(|| OrderFormError::SessionNotFound(self.id.to_string()))
    }

    /// Current phase. Finished sessions are gone from the actor, so their phase comes
    /// from the remembered outcome.
    pub async fn phase(&self) -> Result<FormPhase, OrderFormError> {
        match &self.outcome {
            Some(SessionOutcome::Completed(_)) => Ok(FormPhase::Completed),
            Some(SessionOutcome::Cancelled) => Ok(FormPhase::Cancelled),
            None => self
                .client
                .get(self.id)
                .await?
                .map(|session| session.phase)
                .ok_or_else(|| OrderFormError::SessionNotFound(self.id.to_string())),
        }
    }

    /// Ends the handle and returns the session's outcome.
    ///
    /// A session that never reached a terminal state is cancelled here: leaving the
    /// form without confirming yields no result.
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn finish(mut self) -> Result<SessionOutcome, OrderFormError> {
        if let Some(outcome) = self.outcome.take() {
            return Ok(outcome);
        }
        debug!("Leaving open form");
        self.cancel().await?;
        Ok(SessionOutcome::Cancelled)
    }
}
