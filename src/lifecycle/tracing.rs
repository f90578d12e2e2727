//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the log subscriber for the binary. Library code only
//! emits events; nothing in the crate installs a subscriber on its own.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, and store size
//! - **Requests**: Create, Get, Update, Delete and Action, with the session id
//! - **Form transitions**: confirmation, cancellation, resets, and the confirmed total
//! - **Summary screen**: each received order or cancellation
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Every edit and transition, with payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the actor plumbing
//! RUST_LOG=order_entry::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="OrderSession"
//! INFO invoke:open_session: Opening order form
//! INFO invoke:open_session: Created entity_type="OrderSession" id=session_1 size=1
//! INFO invoke: Checkout prompt title="確認訂單" answer=Confirm
//! INFO Order confirmed session=session_1 total=250
//! INFO Retired entity_type="OrderSession" id=session_1 size=0
//! INFO invoke: Order received session=session_1 total=250
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add nothing; entity_type and session say where
        .compact()
        .init();
}
