//! Who fills in the form.
//!
//! The summary screen doesn't know how selections are made; it hands the open
//! [`OrderForm`] to a [`FormInput`] and waits for it to return.

use crate::clients::OrderForm;
use crate::model::{AddOn, Drink, MainCourse};
use crate::order_form::OrderFormError;
use async_trait::async_trait;
use tracing::{debug, info};

/// The user side of a form session.
///
/// `fill` may confirm, cancel, or simply return. Returning with the session still
/// open counts as navigating away.
#[async_trait]
pub trait FormInput: Send {
    async fn fill(&mut self, form: &mut OrderForm) -> Result<(), OrderFormError>;
}

/// Answer to the checkout prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Confirm,
    Decline,
}

/// One user gesture on the selection screen.
#[derive(Debug, Clone, PartialEq)]
pub enum FormStep {
    SetName(String),
    MainCourse(MainCourse),
    Drink(Drink),
    ToggleAddOn(AddOn),
    Reset,
    /// Press checkout, then answer the prompt.
    Checkout(Answer),
    /// Navigate away. Remaining steps are skipped.
    Leave,
}

/// Replays a fixed list of steps.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    steps: Vec<FormStep>,
}

impl ScriptedInput {
    pub fn new(steps: impl IntoIterator<Item = FormStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }
}

#[async_trait]
impl FormInput for ScriptedInput {
    async fn fill(&mut self, form: &mut OrderForm) -> Result<(), OrderFormError> {
        for step in self.steps.drain(..) {
            debug!(?step, "Replaying");
            match step {
                FormStep::SetName(name) => {
                    form.set_name(&name).await?;
                }
                FormStep::MainCourse(choice) => {
                    form.select_main_course(choice).await?;
                }
                FormStep::Drink(choice) => {
                    form.select_drink(choice).await?;
                }
                FormStep::ToggleAddOn(item) => {
                    form.toggle_add_on(item).await?;
                }
                FormStep::Reset => {
                    form.reset().await?;
                }
                FormStep::Checkout(answer) => {
                    let prompt = form.request_confirmation().await?;
                    info!(title = prompt.title, ?answer, "Checkout prompt");
                    match answer {
                        Answer::Confirm => {
                            form.confirm().await?;
                            return Ok(());
                        }
                        Answer::Decline => form.decline().await?,
                    }
                }
                FormStep::Leave => {
                    form.cancel().await?;
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}
