//! Navigation session
//!
//! Owns the navigation stack, the current menu/item caches and the
//! application host. All behavior is a function of the stack and an input
//! action; there are no other mode states.
//!
//! Calls into the session must be serialized. Item and navigation functions
//! may reenter it synchronously through [`MenuControl`].

use crate::config::{ItemIndex, DEFAULT_STACK_DEPTH};
use crate::menu::{Menu, MenuItem};
use crate::traits::{MenuControl, MenuHost, MenuView};

use super::events::{MenuAction, MenuNav, MenuShow};
use super::stack::{NavError, NavigationStack};

/// Menu navigation state machine
pub struct NavigationSession<H: MenuHost, const DEPTH: usize = { DEFAULT_STACK_DEPTH }> {
    /// Application host (display callback and callback state)
    host: H,
    /// Entered menus
    stack: NavigationStack<H, DEPTH>,
    /// Copy of the active frame's menu
    menu: Menu<H>,
    /// Copy of the active frame's selected item
    item: MenuItem<H>,
    /// Set while a navigation function handles `EnteringMenu`
    entering: bool,
}

impl<H: MenuHost, const DEPTH: usize> NavigationSession<H, DEPTH> {
    /// Create a session with an empty stack
    ///
    /// Nothing is shown until [`init`](Self::init) enters the root menu.
    pub fn new(host: H) -> Self {
        Self {
            host,
            stack: NavigationStack::new(),
            menu: Menu::EMPTY,
            item: MenuItem::END,
            entering: false,
        }
    }

    /// Reset the stack and enter the root menu
    pub fn init(&mut self, root: &'static Menu<H>) -> Result<(), NavError> {
        self.stack.clear();
        self.menu = Menu::EMPTY;
        self.item = MenuItem::END;
        self.entering = false;
        self.enter_menu(root)
    }

    /// Enter a menu and show it with its initial item
    ///
    /// The navigation function (if any) is called with
    /// [`MenuNav::EnteringMenu`] before the initial item is loaded, so it
    /// can preselect an item. Fails without touching any state if the
    /// stack is full.
    pub fn enter_menu(&mut self, menu: &'static Menu<H>) -> Result<(), NavError> {
        if let Err(e) = self.stack.push(menu) {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "menu: cannot enter '{}', stack full ({})",
                menu.title,
                self.stack.depth()
            );
            return Err(e);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("menu: enter '{}' depth={}", menu.title, self.stack.depth());

        self.load_menu();

        if let Some(frame) = self.stack.top_mut() {
            frame.selected_index = 0;
        }

        if let Some(nav) = self.menu.nav {
            let outer = core::mem::replace(&mut self.entering, true);
            let _ = nav(self, MenuNav::EnteringMenu);
            self.entering = outer;
        }

        if !self.load_item() {
            // Empty menu: don't keep showing the parent's item
            self.item = MenuItem::END;
        }

        Ok(())
    }

    /// Leave the current menu and show the previous one with its
    /// previously selected item
    ///
    /// At the root menu nothing is popped, the root is just shown again.
    pub fn leave_menu(&mut self) {
        if self.stack.is_empty() {
            return;
        }

        let _popped = self.stack.pop();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "menu: leave popped={} depth={}",
            _popped,
            self.stack.depth()
        );

        self.load_menu();
        if !self.load_item() {
            self.item = MenuItem::END;
        }
    }

    /// Process an input action
    ///
    /// Does nothing before [`init`](Self::init).
    pub fn process(&mut self, action: MenuAction) {
        if self.stack.is_empty() {
            return;
        }

        match action {
            MenuAction::Previous => self.select_previous(),
            MenuAction::Next => self.select_next(),
            MenuAction::Select => self.select(),
            MenuAction::None => {}
        }
    }

    /// Select the item at `index` in the current menu
    ///
    /// Outside of an `EnteringMenu` notification the item is loaded and
    /// shown immediately. No navigation function is called.
    pub fn set_selected_index(&mut self, index: ItemIndex) -> Result<(), NavError> {
        if self.stack.is_empty() {
            return Err(NavError::NotInitialized);
        }
        if !self.menu.contains_index(index) {
            return Err(NavError::InvalidIndex);
        }

        let frame = self.stack.top_mut().ok_or(NavError::NotInitialized)?;
        frame.selected_index = index;

        if !self.entering {
            self.load_item();
        }

        Ok(())
    }

    /// Current menu cache
    pub fn current_menu(&self) -> &Menu<H> {
        &self.menu
    }

    /// Current item cache
    pub fn current_item(&self) -> &MenuItem<H> {
        &self.item
    }

    /// Index of the current item
    pub fn selected_index(&self) -> ItemIndex {
        self.stack.top().map(|f| f.selected_index).unwrap_or(0)
    }

    /// Number of entered menus
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Check if a root menu has been entered
    pub fn is_initialized(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Navigation stack
    pub fn stack(&self) -> &NavigationStack<H, DEPTH> {
        &self.stack
    }

    /// Application host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Application host, mutable
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the session, returning the host
    pub fn into_host(self) -> H {
        self.host
    }

    fn select_previous(&mut self) {
        let Some(frame) = self.stack.top_mut() else {
            return;
        };

        if frame.selected_index == 0 {
            return;
        }
        frame.selected_index -= 1;

        // Moving towards the first item always finds one
        self.load_item();
        self.notify(MenuNav::SelectionChanged);
    }

    fn select_next(&mut self) {
        let Some(frame) = self.stack.top_mut() else {
            return;
        };

        let Some(next) = frame.selected_index.checked_add(1) else {
            return;
        };
        frame.selected_index = next;

        if self.load_item() {
            self.notify(MenuNav::SelectionChanged);
        } else {
            #[cfg(feature = "defmt")]
            defmt::trace!("menu: end of list at {}", next);

            if let Some(frame) = self.stack.top_mut() {
                frame.selected_index = next - 1;
            }
        }
    }

    fn select(&mut self) {
        // The item function may enter or leave menus, so take the navigation
        // function of the menu Select was pressed in before calling it.
        let nav = self.menu.nav;
        let item = self.item;

        #[cfg(feature = "defmt")]
        defmt::debug!("menu: select '{}'", item.label());

        if let Some(action) = item.action {
            action(self, item.parameter);
        }

        if let Some(nav) = nav {
            if nav(self, MenuNav::SelectPressed) {
                self.leave_menu();
            }
        }
    }

    /// Call the current menu's navigation function, ignoring its result
    fn notify(&mut self, mode: MenuNav) {
        if let Some(nav) = self.menu.nav {
            let _ = nav(self, mode);
        }
    }

    /// Copy the active frame's menu into the cache and show it
    fn load_menu(&mut self) {
        let Some(frame) = self.stack.top() else {
            return;
        };
        self.menu = *frame.menu;
        self.show(MenuShow::Menu);
    }

    /// Copy the active frame's item into the cache and show it
    ///
    /// Returns `false` without touching the cache if the index is past the
    /// end of the list.
    fn load_item(&mut self) -> bool {
        let Some(index) = self.stack.top().map(|f| f.selected_index) else {
            return false;
        };

        match self.menu.item(index) {
            Some(item) => {
                self.item = *item;
                self.show(MenuShow::Item);
                true
            }
            None => false,
        }
    }

    fn show(&mut self, mode: MenuShow) {
        let view = MenuView {
            menu: &self.menu,
            item: &self.item,
            selected_index: self.stack.top().map(|f| f.selected_index).unwrap_or(0),
            depth: self.stack.depth(),
        };
        self.host.show(mode, view);
    }
}

impl<H: MenuHost, const DEPTH: usize> MenuControl<H> for NavigationSession<H, DEPTH> {
    fn enter_menu(&mut self, menu: &'static Menu<H>) -> Result<(), NavError> {
        NavigationSession::enter_menu(self, menu)
    }

    fn leave_menu(&mut self) {
        NavigationSession::leave_menu(self)
    }

    fn selected_index(&self) -> ItemIndex {
        NavigationSession::selected_index(self)
    }

    fn set_selected_index(&mut self, index: ItemIndex) -> Result<(), NavError> {
        NavigationSession::set_selected_index(self, index)
    }

    fn current_menu(&self) -> &Menu<H> {
        &self.menu
    }

    fn current_item(&self) -> &MenuItem<H> {
        &self.item
    }

    fn depth(&self) -> usize {
        self.stack.depth()
    }

    fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
