use async_trait::async_trait;
use order_entry::clients::{OrderForm, OrderFormClient};
use order_entry::framework::mock::MockClient;
use order_entry::framework::FrameworkError;
use order_entry::lifecycle::OrderEntrySystem;
use order_entry::model::{
    FormPhase, MainCourse, OrderResult, OrderSession, SessionId, SessionOutcome,
};
use order_entry::order_form::{ConfirmationPrompt, FormActionResult, OrderFormError};
use order_entry::summary_view::{Answer, FormInput, FormStep, OrderSummaryView, ScriptedInput};

/// The summary screen against a mocked order form actor.
///
/// Pattern: View + Mock
/// - Real OrderSummaryView and OrderForm handle
/// - Scripted replies in place of the session actor
#[tokio::test]
async fn test_view_renders_mocked_completion() {
    let mut mock = MockClient::<OrderSession>::new();
    mock.expect_create().return_ok(SessionId(7));
    mock.expect_action(SessionId(7))
        .return_ok(FormActionResult::Prompt(ConfirmationPrompt::CHECKOUT));
    mock.expect_action(SessionId(7))
        .return_ok(FormActionResult::Completed(OrderResult {
            customer_name: "Eve".into(),
            main_course_label: "麥香魚".into(),
            drink_label: String::new(),
            add_on_labels: "雞塊".into(),
            total: 180,
        }));

    let mut view = OrderSummaryView::new(OrderFormClient::new(mock.client()));
    let mut input = ScriptedInput::new([FormStep::Checkout(Answer::Confirm)]);
    let outcome = view.invoke(&mut input).await.unwrap();

    assert!(matches!(outcome, SessionOutcome::Completed(_)));
    assert_eq!(view.display().customer_name, "Eve");
    assert_eq!(view.display().drink, "");
    assert_eq!(view.display().total, "總金額：180");
    mock.verify();
}

#[tokio::test]
async fn test_failed_input_still_cancels_session() {
    let mut mock = MockClient::<OrderSession>::new();
    mock.expect_create().return_ok(SessionId(1));
    mock.expect_update(SessionId(1))
        .return_err(FrameworkError::EntityError(Box::new(OrderFormError::NotEditing {
            phase: FormPhase::Confirming,
        })));
    // finish() cancels the abandoned session.
    mock.expect_action(SessionId(1)).return_ok(FormActionResult::Cancelled);

    let mut view = OrderSummaryView::new(OrderFormClient::new(mock.client()));
    let mut input = ScriptedInput::new([FormStep::SetName("Frank".into())]);
    let err = view.invoke(&mut input).await.unwrap_err();

    assert_eq!(
        err,
        OrderFormError::NotEditing {
            phase: FormPhase::Confirming
        }
    );
    assert_eq!(view.display().main_course, "");
    mock.verify();
}

#[tokio::test]
async fn test_closed_actor_surfaces_as_communication_error() {
    let mut mock = MockClient::<OrderSession>::new();
    mock.expect_create().return_err(FrameworkError::ActorClosed);

    let mut view = OrderSummaryView::new(OrderFormClient::new(mock.client()));
    let err = view
        .invoke(&mut ScriptedInput::new([FormStep::Leave]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderFormError::ActorCommunicationError(_)));
    mock.verify();
}

/// Confirms a Big Mac, then keeps typing into the finished form.
struct LateEdit;

#[async_trait]
impl FormInput for LateEdit {
    async fn fill(&mut self, form: &mut OrderForm) -> Result<(), OrderFormError> {
        form.select_main_course(MainCourse::BigMac).await?;
        form.request_confirmation().await?;
        form.confirm().await?;
        assert!(matches!(form.outcome(), Some(SessionOutcome::Completed(_))));
        form.set_name("late").await?;
        Ok(())
    }
}

#[tokio::test]
async fn test_order_confirmed_before_input_error_is_returned() {
    let system = OrderEntrySystem::new();
    let mut view = system.summary_view();

    let outcome = view.invoke(&mut LateEdit).await.unwrap();

    let order = outcome.result().expect("confirmed order is kept");
    assert_eq!(order.main_course_label, "大麥克");
    assert_eq!(order.total, 130);
    assert_eq!(view.display().main_course, "大麥克");
    assert_eq!(view.display().total, "總金額：130");

    drop(view);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_input_error_wins_over_failed_cancel() {
    let mut mock = MockClient::<OrderSession>::new();
    mock.expect_create().return_ok(SessionId(1));
    mock.expect_action(SessionId(1))
        .return_ok(FormActionResult::Prompt(ConfirmationPrompt::CHECKOUT));
    mock.expect_action(SessionId(1))
        .return_ok(FormActionResult::Completed(OrderResult {
            customer_name: "Gina".into(),
            main_course_label: "蘋果派".into(),
            drink_label: String::new(),
            add_on_labels: String::new(),
            total: 20,
        }));
    mock.expect_create().return_ok(SessionId(2));
    mock.expect_update(SessionId(2))
        .return_err(FrameworkError::EntityError(Box::new(OrderFormError::NotEditing {
            phase: FormPhase::Confirming,
        })));
    mock.expect_action(SessionId(2)).return_err(FrameworkError::ActorClosed);

    let mut view = OrderSummaryView::new(OrderFormClient::new(mock.client()));
    view.invoke(&mut ScriptedInput::new([FormStep::Checkout(Answer::Confirm)]))
        .await
        .unwrap();

    let err = view
        .invoke(&mut ScriptedInput::new([FormStep::SetName("Hank".into())]))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderFormError::NotEditing {
            phase: FormPhase::Confirming
        }
    );
    // Rendered as a cancellation.
    assert_eq!(view.display().main_course, "");
    assert_eq!(view.display().customer_name, "Gina");
    assert_eq!(view.display().total, "總金額：20");
    mock.verify();
}
