//! Capability handed to item and navigation functions

use crate::config::ItemIndex;
use crate::menu::{Menu, MenuItem, Parameter};
use crate::nav::{MenuNav, NavError};

/// Function bound to a menu item, called on Select
pub type ItemFunction<H> = fn(&mut dyn MenuControl<H>, Parameter<H>);

/// Function bound to a menu, called on entry, selection change and Select
///
/// The return value is only used for [`MenuNav::SelectPressed`], where
/// `true` leaves the menu.
pub type NavFunction<H> = fn(&mut dyn MenuControl<H>, MenuNav) -> bool;

/// Navigation control available to callbacks
///
/// Item and navigation functions run synchronously inside the session and
/// may reenter it through this trait, e.g. to open a submenu.
pub trait MenuControl<H: 'static> {
    /// Enter a menu, pushing it on the navigation stack
    fn enter_menu(&mut self, menu: &'static Menu<H>) -> Result<(), NavError>;

    /// Leave the current menu; a no-op pop at the root
    fn leave_menu(&mut self);

    /// Index of the current item
    fn selected_index(&self) -> ItemIndex;

    /// Select the item at `index` in the current menu
    ///
    /// During [`MenuNav::EnteringMenu`] this only sets the index; the item is
    /// loaded once the navigation function returns.
    fn set_selected_index(&mut self, index: ItemIndex) -> Result<(), NavError>;

    /// Current menu cache
    fn current_menu(&self) -> &Menu<H>;

    /// Current item cache
    fn current_item(&self) -> &MenuItem<H>;

    /// Number of entered menus
    fn depth(&self) -> usize;

    /// Application host
    fn host_mut(&mut self) -> &mut H;
}
