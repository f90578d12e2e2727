//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to live inside a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Associated types pin down the payload for every request kind, so an order session can
//! only ever receive order-session edits and actions. Hooks are async and receive the
//! actor's injected `Context`.
//!
//! # Provided Methods
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::is_retired`]
//!
//! The defaults do nothing (or report "not retired").

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other actors. The `Context` is handed
/// to `run()` rather than `new()`, which lets the owner wire dependencies (or a price
/// list) after the actor has been constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier for this entity. Built from the actor's `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to open a new instance.
    type Create: Send + Sync + Debug;

    /// Payload describing a mutation of an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime context injected into the actor. Use `()` if nothing is needed.
    type Context: Send + Sync;

    /// One error type per actor, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its id and creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether the entity has reached a terminal state.
    ///
    /// The actor checks this after every successful update or action and evicts a
    /// retired entity from its store. Later requests for that id see `NotFound`.
    fn is_retired(&self) -> bool {
        false
    }
}
