//! Board-agnostic menu navigation engine
//!
//! This crate contains the navigation logic for small character displays
//! driven by a handful of discrete inputs (previous, next, select):
//!
//! - Menu catalog types (menus and items defined as `static` data)
//! - Fixed-capacity navigation stack of visited menus
//! - Navigation session state machine (enter, leave, process action)
//! - Callback contracts toward the display, item and navigation functions
//! - Built-in item functions for entering and leaving submenus
//!
//! Rendering, input polling and storage access are left to the
//! application, which plugs in through [`MenuHost`].

#![no_std]
#![deny(unsafe_code)]

pub mod actions;
pub mod config;
pub mod menu;
pub mod nav;
pub mod traits;

pub use menu::{Menu, MenuItem, Parameter};
pub use nav::{MenuAction, MenuNav, MenuShow, NavError, NavigationSession, NavigationStack};
pub use traits::{ItemFunction, MenuControl, MenuHost, MenuView, NavFunction};
