//! # Generic Actor Server
//!
//! `ResourceActor` owns a store of entities and processes requests for them one at a
//! time. Exclusive ownership inside a single Tokio task replaces any locking.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and its client.
/// 2. **Wire**: pass the context into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use order_entry::framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32, punched: bool }
/// #[derive(Debug)] struct Issue;
/// #[derive(Debug)] struct Punch;
/// #[derive(Debug)] enum TicketAction {}
/// #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
///
/// #[async_trait]
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = Issue;
///     type Update = Punch;
///     type Action = TicketAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TicketError;
///
///     fn from_create_params(id: u32, _: Issue) -> Result<Self, Self::Error> {
///         Ok(Self { id, punched: false })
///     }
///     async fn on_update(&mut self, _: Punch, _: &()) -> Result<(), Self::Error> {
///         self.punched = true;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: TicketAction, _: &()) -> Result<(), Self::Error> {
///         Ok(())
///     }
///     fn is_retired(&self) -> bool { self.punched }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Ticket>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(Issue).await.unwrap();
///     client.update(id, Punch).await.unwrap();
///     // A punched ticket is retired and evicted.
///     assert!(client.get(id).await.unwrap().is_none());
/// }
/// ```
///
/// # Eviction
///
/// After a successful `Update` or `Action`, the actor asks the entity
/// [`is_retired`](ActorEntity::is_retired). A retired entity is answered normally and
/// then dropped from the store.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client
    /// calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is passed by reference to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    self.update(id, update, &context, respond_to).await;
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    self.action(id, action, &context, respond_to).await;
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T::Id, FrameworkError> {
        let entity_type = entity_type::<T>();
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
        respond_to: Response<T>,
    ) {
        let entity_type = entity_type::<T>();
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };
        if let Err(e) = item.on_update(update, context).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            return;
        }
        info!(entity_type, %id, "Updated");
        let _ = respond_to.send(Ok(item.clone()));
        self.evict_if_retired(&id);
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = entity_type::<T>();
        let Some(item) = self.store.get(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        self.store.remove(id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
        respond_to: Response<T::ActionResult>,
    ) {
        let entity_type = entity_type::<T>();
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };
        let result = item
            .handle_action(action, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        let _ = respond_to.send(result);
        self.evict_if_retired(&id);
    }

    fn evict_if_retired(&mut self, id: &T::Id) {
        if self.store.get(id).is_some_and(|item| item.is_retired()) {
            self.store.remove(id);
            info!(entity_type = entity_type::<T>(), %id, size = self.store.len(), "Retired");
        }
    }
}

/// Short type name for log fields (e.g. "OrderSession" instead of the full path).
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: u32,
        limit: u32,
    }

    #[derive(Debug)]
    struct CounterOpen {
        limit: u32,
    }

    #[derive(Debug)]
    struct Bump;

    #[derive(Debug)]
    enum CounterAction {
        Read,
        Fail,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter refused")]
    struct CounterError;

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterOpen;
        type Update = Bump;
        type Action = CounterAction;
        type ActionResult = u32;
        type Context = u32;
        type Error = CounterError;

        fn from_create_params(id: u32, params: CounterOpen) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                value: 0,
                limit: params.limit,
            })
        }

        async fn on_update(&mut self, _update: Bump, step: &u32) -> Result<(), Self::Error> {
            self.value += step;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _ctx: &u32,
        ) -> Result<u32, Self::Error> {
            match action {
                CounterAction::Read => Ok(self.value),
                CounterAction::Fail => Err(CounterError),
            }
        }

        fn is_retired(&self) -> bool {
            self.value >= self.limit
        }
    }

    #[tokio::test]
    async fn test_context_reaches_hooks() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(5));

        let id = client.create(CounterOpen { limit: 100 }).await.unwrap();
        let bumped = client.update(id, Bump).await.unwrap();
        assert_eq!(bumped.value, 5);
        assert_eq!(client.perform_action(id, CounterAction::Read).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_retired_entity_is_evicted_after_reply() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(1));

        let id = client.create(CounterOpen { limit: 2 }).await.unwrap();
        client.update(id, Bump).await.unwrap();
        assert!(client.get(id).await.unwrap().is_some());

        // The reply still carries the final state.
        let last = client.update(id, Bump).await.unwrap();
        assert_eq!(last.value, 2);
        assert!(client.get(id).await.unwrap().is_none());

        let again = client.update(id, Bump).await;
        assert!(matches!(again, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_failed_action_is_boxed_entity_error() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(1));

        let id = client.create(CounterOpen { limit: 10 }).await.unwrap();
        let err = client
            .perform_action(id, CounterAction::Fail)
            .await
            .unwrap_err();
        assert!(err.downcast_entity::<CounterError>().is_ok());
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_delete_removes() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        let handle = tokio::spawn(actor.run(1));

        let first = client.create(CounterOpen { limit: 10 }).await.unwrap();
        let second = client.create(CounterOpen { limit: 10 }).await.unwrap();
        assert_eq!((first, second), (1, 2));

        client.delete(first).await.unwrap();
        assert!(client.get(first).await.unwrap().is_none());
        assert!(matches!(
            client.delete(first).await,
            Err(FrameworkError::NotFound(_))
        ));

        drop(client);
        handle.await.unwrap();
    }
}
