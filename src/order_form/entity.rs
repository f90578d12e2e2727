//! ActorEntity trait implementation for the [`OrderSession`] domain type.
//!
//! Edits arrive through `on_update`, and the checkout state machine lives in
//! `handle_action`. Pricing uses the [`PriceList`] injected as the actor context.

use super::actions::{ConfirmationPrompt, FormAction, FormActionResult, FormEdit, SessionOpen};
use super::error::OrderFormError;
use crate::framework::ActorEntity;
use crate::model::{FormPhase, OrderSession, PriceList, SessionId};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for OrderSession {
    type Id = SessionId;
    type Create = SessionOpen;
    type Update = FormEdit;
    type Action = FormAction;
    type ActionResult = FormActionResult;
    type Context = PriceList;
    type Error = OrderFormError;

    fn from_create_params(id: SessionId, _params: SessionOpen) -> Result<Self, Self::Error> {
        Ok(Self::new(id))
    }

    /// Applies one edit to the selection.
    ///
    /// Rejected with [`OrderFormError::NotEditing`] while the checkout prompt is up.
    async fn on_update(&mut self, edit: FormEdit, _prices: &PriceList) -> Result<(), Self::Error> {
        if self.phase != FormPhase::Editing {
            return Err(OrderFormError::NotEditing { phase: self.phase });
        }
        let selection = &mut self.selection;
        match edit {
            FormEdit::SelectMainCourse(choice) => selection.select_main_course(choice),
            FormEdit::SelectDrink(choice) => selection.select_drink(choice),
            FormEdit::ToggleAddOn(item) => {
                let selected = selection.toggle_add_on(item);
                debug!(session = %self.id, ?item, selected, "Add-on toggled");
            }
            FormEdit::SetName(name) => selection.set_name(name),
            FormEdit::Reset => {
                selection.reset();
                info!(session = %self.id, "Selection reset");
            }
        }
        Ok(())
    }

    /// Drives the checkout state machine.
    ///
    /// | From | Action | To |
    /// |---|---|---|
    /// | Editing | RequestConfirmation | Confirming |
    /// | Confirming | Confirm | Completed (emits the result) |
    /// | Confirming | Decline | Editing |
    /// | Editing, Confirming | Cancel | Cancelled |
    ///
    /// Anything else is an [`OrderFormError::InvalidTransition`].
    async fn handle_action(
        &mut self,
        action: FormAction,
        prices: &PriceList,
    ) -> Result<FormActionResult, Self::Error> {
        let from = self.phase;
        let result = match (from, action) {
            (FormPhase::Editing, FormAction::RequestConfirmation) => {
                self.phase = FormPhase::Confirming;
                FormActionResult::Prompt(ConfirmationPrompt::CHECKOUT)
            }
            (FormPhase::Confirming, FormAction::Confirm) => {
                let order = self.selection.to_result(prices);
                self.phase = FormPhase::Completed;
                info!(session = %self.id, total = order.total, "Order confirmed");
                FormActionResult::Completed(order)
            }
            (FormPhase::Confirming, FormAction::Decline) => {
                self.phase = FormPhase::Editing;
                FormActionResult::Resumed
            }
            (FormPhase::Editing | FormPhase::Confirming, FormAction::Cancel) => {
                self.phase = FormPhase::Cancelled;
                info!(session = %self.id, "Session cancelled");
                FormActionResult::Cancelled
            }
            (phase, action) => {
                return Err(OrderFormError::InvalidTransition {
                    phase,
                    action: action.name(),
                })
            }
        };
        debug!(session = %self.id, %from, to = %self.phase, "Transition");
        Ok(result)
    }

    fn is_retired(&self) -> bool {
        self.phase.is_terminal()
    }
}
