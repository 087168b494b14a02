//! Navigation state machine
//!
//! The navigation state is entirely the stack of visited menus plus the
//! cached copies of the active menu and item.

pub mod events;
pub mod session;
pub mod stack;

pub use events::{MenuAction, MenuNav, MenuShow};
pub use session::NavigationSession;
pub use stack::{NavError, NavigationStack, StackFrame};
