use crate::model::{OrderResult, SelectionState};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for form sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Where a session sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    Editing,
    /// The confirmation prompt is showing.
    Confirming,
    Completed,
    Cancelled,
}

impl FormPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, FormPhase::Completed | FormPhase::Cancelled)
    }
}

impl Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormPhase::Editing => "editing",
            FormPhase::Confirming => "confirming",
            FormPhase::Completed => "completed",
            FormPhase::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// One order form session, as stored by the session actor.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for OrderSession`](#impl-ActorEntity-for-OrderSession) for:
/// - Edits ([`FormEdit`](crate::order_form::FormEdit))
/// - Transitions ([`FormAction`](crate::order_form::FormAction))
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSession {
    pub id: SessionId,
    pub selection: SelectionState,
    pub phase: FormPhase,
}

impl OrderSession {
    /// A fresh session: empty selection, editing.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            selection: SelectionState::default(),
            phase: FormPhase::Editing,
        }
    }
}

/// What a finished session hands back to whoever opened it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Completed(OrderResult),
    /// The customer left without confirming. No result.
    Cancelled,
}

impl SessionOutcome {
    pub fn result(&self) -> Option<&OrderResult> {
        match self {
            SessionOutcome::Completed(result) => Some(result),
            SessionOutcome::Cancelled => None,
        }
    }
}
