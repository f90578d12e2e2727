//! Requests understood by an order session.
//!
//! Edits change the selection and travel as framework `Update`s. Transitions move the
//! session through its state machine and travel as `Action`s. See
//! [`impl ActorEntity for OrderSession`](crate::model::OrderSession#impl-ActorEntity-for-OrderSession).

use crate::model::{AddOn, Drink, MainCourse, OrderResult};

/// Payload for opening a session. Every session starts empty.
#[derive(Debug, Clone, Default)]
pub struct SessionOpen;

/// Edits to the selection. Only accepted while the session is editing.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    SelectMainCourse(MainCourse),
    SelectDrink(Drink),
    ToggleAddOn(AddOn),
    SetName(String),
    /// Clear every pick and the name without closing the form.
    Reset,
}

/// State-machine transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Editing -> Confirming. Shows the checkout prompt.
    RequestConfirmation,
    /// Confirming -> Completed. Prices the selection and emits the result.
    Confirm,
    /// Confirming -> Editing. Nothing changes.
    Decline,
    /// Editing or Confirming -> Cancelled. No result.
    Cancel,
}

impl FormAction {
    pub fn name(self) -> &'static str {
        match self {
            FormAction::RequestConfirmation => "request confirmation",
            FormAction::Confirm => "confirm",
            FormAction::Decline => "decline",
            FormAction::Cancel => "cancel",
        }
    }
}

/// Results from FormActions - variants match 1:1 with FormAction
#[derive(Debug, Clone, PartialEq)]
pub enum FormActionResult {
    Prompt(ConfirmationPrompt),
    Completed(OrderResult),
    Resumed,
    Cancelled,
}

/// The yes/no question shown before checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
    pub decline_label: &'static str,
}

impl ConfirmationPrompt {
    pub const CHECKOUT: ConfirmationPrompt = ConfirmationPrompt {
        title: "確認訂單",
        message: "您確定要結帳嗎？",
        confirm_label: "確認",
        decline_label: "取消",
    };
}
