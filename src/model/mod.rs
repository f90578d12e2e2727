//! Pure data: the menu, the selection a customer builds, and the session entity.

pub mod menu;
pub mod selection;
pub mod session;

pub use menu::*;
pub use selection::*;
pub use session::*;
