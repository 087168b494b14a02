//! Navigation stack
//!
//! Fixed-capacity history of entered menus. The bottom frame is the root
//! menu and is never popped.

use core::fmt;

use heapless::Vec;

use crate::config::{ItemIndex, DEFAULT_STACK_DEPTH};
use crate::menu::Menu;

/// Navigation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavError {
    /// Entering another menu would exceed the stack depth
    StackFull,
    /// Index does not address an item in the current menu
    InvalidIndex,
    /// No menu has been entered yet
    NotInitialized,
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::StackFull => f.write_str("navigation stack full"),
            NavError::InvalidIndex => f.write_str("item index out of range"),
            NavError::NotInitialized => f.write_str("no menu entered"),
        }
    }
}

/// One entered menu and its selected item
pub struct StackFrame<H: 'static> {
    /// Menu definition
    pub menu: &'static Menu<H>,
    /// Selected item
    pub selected_index: ItemIndex,
}

impl<H: 'static> Clone for StackFrame<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for StackFrame<H> {}

impl<H: 'static> fmt::Debug for StackFrame<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackFrame")
            .field("menu", &self.menu.title)
            .field("selected_index", &self.selected_index)
            .finish()
    }
}

/// Stack of entered menus
pub struct NavigationStack<H: 'static, const DEPTH: usize = { DEFAULT_STACK_DEPTH }> {
    frames: Vec<StackFrame<H>, DEPTH>,
}

impl<H: 'static, const DEPTH: usize> Default for NavigationStack<H, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: 'static, const DEPTH: usize> NavigationStack<H, DEPTH> {
    /// Create an empty stack
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Remove all frames
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Push a menu with its first item selected
    pub fn push(&mut self, menu: &'static Menu<H>) -> Result<(), NavError> {
        self.frames
            .push(StackFrame {
                menu,
                selected_index: 0,
            })
            .map_err(|_| NavError::StackFull)
    }

    /// Pop the top frame
    ///
    /// The root frame is never removed. Returns `true` if a frame was popped.
    pub fn pop(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    /// Active frame
    pub fn top(&self) -> Option<&StackFrame<H>> {
        self.frames.last()
    }

    /// Active frame, mutable
    pub fn top_mut(&mut self) -> Option<&mut StackFrame<H>> {
        self.frames.last_mut()
    }

    /// Number of frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Maximum number of frames
    pub const fn capacity(&self) -> usize {
        DEPTH
    }

    /// Check if no menu has been entered
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Check if another push would fail
    pub fn is_full(&self) -> bool {
        self.frames.is_full()
    }

    /// Check if only the root frame is present
    pub fn is_root(&self) -> bool {
        self.frames.len() == 1
    }

    /// All frames, root first
    pub fn frames(&self) -> &[StackFrame<H>] {
        &self.frames
    }
}

impl<H: 'static, const DEPTH: usize> fmt::Debug for NavigationStack<H, DEPTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames.iter()).finish()
    }
}
