//! Menu catalog
//!
//! Menus and items are defined once by the application, usually as
//! `static` data, and never modified. The session copies what it needs
//! into its own caches.

pub mod catalog;

pub use catalog::{Menu, MenuItem, Parameter};
