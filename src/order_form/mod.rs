//! # Order Form Actor
//!
//! The selection screen's logic. Each open form is one [`OrderSession`] entity in a
//! [`ResourceActor`]; the actor's context is the [`PriceList`](crate::model::PriceList)
//! used to price confirmations.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`OrderSession`]
//! - [`actions`] - [`FormEdit`], [`FormAction`] and their results
//! - [`error`] - [`OrderFormError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use order_entry::clients::OrderFormClient;
//! use order_entry::model::{MainCourse, PriceList};
//! use order_entry::order_form;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_form::new();
//!     let client = OrderFormClient::new(generic_client);
//!     tokio::spawn(actor.run(PriceList::default()));
//!
//!     let id = client.open_session().await?;
//!     client.select_main_course(id, MainCourse::BigMac).await?;
//!     client.request_confirmation(id).await?;
//!     let order = client.confirm(id).await?;
//!     assert_eq!(order.total, 130);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::OrderSession;

/// Request queue depth for the session actor.
pub const SESSION_BUFFER: usize = 32;

/// Creates a new session actor and its client.
pub fn new() -> (ResourceActor<OrderSession>, ResourceClient<OrderSession>) {
    ResourceActor::new(SESSION_BUFFER)
}
