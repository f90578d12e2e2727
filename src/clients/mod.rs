//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod order_form;
pub mod order_form_client;

pub use order_form::*;
pub use order_form_client::*;
