//! Callback boundary
//!
//! These traits define the interface between the navigation state machine
//! and the application: rendering, item behavior and navigation behavior.

pub mod control;
pub mod host;

pub use control::{ItemFunction, MenuControl, NavFunction};
pub use host::{MenuHost, MenuView};
