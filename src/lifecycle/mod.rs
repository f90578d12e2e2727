//! # System Lifecycle
//!
//! Starting, wiring, and shutting down the order entry runtime.
//!
//! - [`OrderEntrySystem`] - spawns the order form actor with its price list and builds
//!   summary views on top of it
//! - [`setup_tracing`] - installs the `tracing` subscriber
//!
//! ## Context Injection
//!
//! The order form actor is created without dependencies and receives its
//! [`PriceList`](crate::model::PriceList) through `run(context)`:
//!
//! ```rust,ignore
//! let (form_actor, client) = order_form::new();
//! tokio::spawn(form_actor.run(PriceList::default()));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - `shutdown()` joins the actor task

pub mod entry_system;
pub mod tracing;

pub use self::entry_system::*;
pub use self::tracing::*;
