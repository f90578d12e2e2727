//! Error types for the order form actor.

use crate::framework::FrameworkError;
use crate::model::FormPhase;
use thiserror::Error;

/// Errors that can occur while driving an order form session.
///
/// None of these arise from ordinary use: an unselected group is not an error, and
/// leaving the form is a `Cancelled` outcome. They flag requests that don't fit the
/// session's current phase, or a broken channel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderFormError {
    /// The session is unknown or already finished.
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// An edit arrived while the session was not editing.
    #[error("Session is {phase}; edits are only accepted while editing")]
    NotEditing { phase: FormPhase },

    /// A transition the state machine has no edge for.
    #[error("Cannot {action} while {phase}")]
    InvalidTransition { phase: FormPhase, action: &'static str },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderFormError {
    fn from(msg: String) -> Self {
        OrderFormError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for OrderFormError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderFormError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => OrderFormError::SessionNotFound(id),
            Err(other) => OrderFormError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_errors_survive_the_framework() {
        let boxed = FrameworkError::EntityError(Box::new(OrderFormError::NotEditing {
            phase: FormPhase::Confirming,
        }));
        assert_eq!(
            OrderFormError::from(boxed),
            OrderFormError::NotEditing {
                phase: FormPhase::Confirming
            }
        );
    }

    #[test]
    fn missing_session_maps_to_session_not_found() {
        let err = OrderFormError::from(FrameworkError::NotFound("session_3".into()));
        assert_eq!(err, OrderFormError::SessionNotFound("session_3".into()));
    }

    #[test]
    fn closed_actor_is_a_communication_error() {
        let err = OrderFormError::from(FrameworkError::ActorClosed);
        assert!(matches!(err, OrderFormError::ActorCommunicationError(_)));
    }
}
