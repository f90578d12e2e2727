//! # Order Form Client
//!
//! High-level API for the session actor. Wraps a `ResourceClient<OrderSession>` and turns
//! the generic update/action traffic into one method per form operation.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{AddOn, Drink, MainCourse, OrderResult, OrderSession, SelectionState, SessionId};
use crate::order_form::{
    ConfirmationPrompt, FormAction, FormActionResult, FormEdit, OrderFormError, SessionOpen,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order form actor.
#[derive(Clone)]
pub struct OrderFormClient {
    inner: ResourceClient<OrderSession>,
}

#[async_trait]
impl ActorClient<OrderSession> for OrderFormClient {
    type Error = OrderFormError;

    fn inner(&self) -> &ResourceClient<OrderSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderFormError::from(e)
    }
}

impl OrderFormClient {
    pub fn new(inner: ResourceClient<OrderSession>) -> Self {
        Self { inner }
    }

    /// Opens a fresh session with an empty selection.
    #[instrument(skip(self))]
    pub async fn open_session(&self) -> Result<SessionId, OrderFormError> {
        info!("Opening order form");
        self.inner.create(SessionOpen).await.map_err(Self::map_error)
    }

    pub async fn select_main_course(
        &self,
        id: SessionId,
        choice: MainCourse,
    ) -> Result<SelectionState, OrderFormError> {
        self.edit(id, FormEdit::SelectMainCourse(choice)).await
    }

    pub async fn select_drink(
        &self,
        id: SessionId,
        choice: Drink,
    ) -> Result<SelectionState, OrderFormError> {
        self.edit(id, FormEdit::SelectDrink(choice)).await
    }

    pub async fn toggle_add_on(
        &self,
        id: SessionId,
        item: AddOn,
    ) -> Result<SelectionState, OrderFormError> {
        self.edit(id, FormEdit::ToggleAddOn(item)).await
    }

    pub async fn set_name(&self, id: SessionId, name: &str) -> Result<SelectionState, OrderFormError> {
        self.edit(id, FormEdit::SetName(name.to_string())).await
    }

    pub async fn reset(&self, id: SessionId) -> Result<SelectionState, OrderFormError> {
        self.edit(id, FormEdit::Reset).await
    }

    /// Sends one edit and returns the selection as it stands afterwards.
    #[instrument(skip(self))]
    pub async fn edit(&self, id: SessionId, edit: FormEdit) -> Result<SelectionState, OrderFormError> {
        debug!("Sending request");
        self.inner
            .update(id, edit)
            .await
            .map(|session| session.selection)
            .map_err(Self::map_error)
    }

    /// Shows the checkout prompt. The order is not committed yet.
    pub async fn request_confirmation(&self, id: SessionId) -> Result<ConfirmationPrompt, OrderFormError> {
        match self.transition(id, FormAction::RequestConfirmation).await? {
            FormActionResult::Prompt(prompt) => Ok(prompt),
            other => Err(unexpected(FormAction::RequestConfirmation, other)),
        }
    }

    /// Answers the prompt with yes. The session completes and is retired.
    pub async fn confirm(&self, id: SessionId) -> Result<OrderResult, OrderFormError> {
        match self.transition(id, FormAction::Confirm).await? {
            FormActionResult::Completed(order) => Ok(order),
            other => Err(unexpected(FormAction::Confirm, other)),
        }
    }

    /// Answers the prompt with no. The session goes back to editing.
    pub async fn decline(&self, id: SessionId) -> Result<(), OrderFormError> {
        match self.transition(id, FormAction::Decline).await? {
            FormActionResult::Resumed => Ok(()),
            other => Err(unexpected(FormAction::Decline, other)),
        }
    }

    /// Leaves the form without confirming. The session is retired with no result.
    pub async fn cancel(&self, id: SessionId) -> Result<(), OrderFormError> {
        match self.transition(id, FormAction::Cancel).await? {
            FormActionResult::Cancelled => Ok(()),
            other => Err(unexpected(FormAction::Cancel, other)),
        }
    }

    #[instrument(skip(self))]
    async fn transition(&self, id: SessionId, action: FormAction) -> Result<FormActionResult, OrderFormError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(action: FormAction, result: FormActionResult) -> OrderFormError {
    OrderFormError::ActorCommunicationError(format!(
        "{} answered with {:?}",
        action.name(),
        result
    ))
}
