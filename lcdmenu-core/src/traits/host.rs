//! Application host and display callback

use crate::config::ItemIndex;
use crate::menu::{Menu, MenuItem};
use crate::nav::MenuShow;

/// Read-only snapshot of the session's current menu and item caches
///
/// When the mode is [`MenuShow::Menu`] the item may still be the one from
/// the previous menu; it is refreshed right after, followed by a
/// [`MenuShow::Item`] call.
#[derive(Debug)]
pub struct MenuView<'a, H: 'static> {
    /// Current menu
    pub menu: &'a Menu<H>,
    /// Current item
    pub item: &'a MenuItem<H>,
    /// Index of the current item within the menu
    pub selected_index: ItemIndex,
    /// Number of entered menus, 1 at the root
    pub depth: usize,
}

impl<H: 'static> MenuView<'_, H> {
    /// Check if there are items before the current one
    pub fn has_previous(&self) -> bool {
        self.selected_index > 0
    }

    /// Check if there are items after the current one
    pub fn has_next(&self) -> bool {
        (self.selected_index as usize) + 1 < self.menu.item_count()
    }

    /// Check if the root menu is shown
    pub fn is_root(&self) -> bool {
        self.depth <= 1
    }
}

/// Application side of a navigation session
///
/// The host owns whatever the application's item and navigation functions
/// need to reach (settings, outputs, the display). It is moved into the
/// session and reachable from callbacks through
/// [`MenuControl::host_mut`](crate::MenuControl::host_mut).
pub trait MenuHost: Sized + 'static {
    /// Display callback
    ///
    /// Called whenever the menu or item cache was reloaded. Receives only a
    /// read-only view, so it cannot change navigation state.
    fn show(&mut self, mode: MenuShow, view: MenuView<'_, Self>);
}
