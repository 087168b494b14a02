//! Display and input glue for lcdmenu
//!
//! This crate provides:
//! - `DisplayBackend` trait for character displays (HD44780 LCD, OLED in
//!   text mode, ...)
//! - `Screen`, a character buffer rendered to any backend
//! - `MenuScreen`, a display callback that draws the current menu title
//!   and item
//! - `NavigationEvent` and `InputSource` for mapping buttons or a rotary
//!   encoder to menu actions
//!
//! Hardware drivers are not part of this crate; boards implement
//! `DisplayBackend` and `InputSource` for their peripherals.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod input;
pub mod menu_screen;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use input::{InputSource, NavigationEvent};
pub use menu_screen::MenuScreen;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
