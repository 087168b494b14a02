//! Compile-time configuration
//!
//! Menus live in read-only memory and the session never allocates, so all
//! limits are fixed at build time.

/// Default navigation stack depth (number of nested menus)
pub const DEFAULT_STACK_DEPTH: usize = 10;

/// Index of an item within its menu
///
/// Limits a menu to 256 selectable items; Next on the last index is a no-op.
pub type ItemIndex = u8;
