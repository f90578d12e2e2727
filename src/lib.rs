//! # Order Entry
//!
//! > **A two-screen order form on top of resource-oriented actors.**
//!
//! A main screen launches an order form, the customer picks a main course, a drink and
//! some add-ons, and on confirmation the form hands back the chosen items with their
//! total. Leaving the form hands back nothing.
//!
//! ## Architecture Notes
//!
//! ### 1. Sessions are actor entities
//! Every open form is an [`OrderSession`](model::OrderSession) inside a generic
//! [`ResourceActor`](framework::ResourceActor). Edits travel as updates, and checkout
//! steps travel as actions through an explicit state machine
//! (Editing → Confirming → Completed, or Cancelled). Finished sessions retire and are
//! evicted, so a session is never reused.
//!
//! ### 2. Pricing is a table, not a branch chain
//! Each selection group is a closed enum ([`MainCourse`](model::MainCourse),
//! [`Drink`](model::Drink), [`AddOn`](model::AddOn)). Prices live in a
//! [`PriceList`](model::PriceList) keyed by those enums, injected into the actor as its
//! context. The total is recomputed from the selection at confirmation and never stored
//! ahead of it.
//!
//! ### 3. Type-safe errors
//! [`OrderFormError`](order_form::OrderFormError) is the single error type for the form
//! actor. Framework errors are downcast back into it at the client boundary.
//!
//! ### 4. Observability
//! `tracing` everywhere, with `session` and `entity_type` fields. See
//! [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`] - generic actor, client, entity trait and mocks
//! - [`model`] - menu, selection, session and outcome types
//! - [`order_form`] - the session entity: edits, transitions, errors
//! - [`clients`] - [`OrderFormClient`](clients::OrderFormClient) and the per-session
//!   [`OrderForm`](clients::OrderForm) handle
//! - [`summary_view`] - the main screen and the [`FormInput`](summary_view::FormInput) seam
//! - [`lifecycle`] - [`OrderEntrySystem`](lifecycle::OrderEntrySystem) and tracing setup
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_form;
pub mod summary_view;
