//! Menu and item definitions

use core::fmt;

use crate::config::ItemIndex;
use crate::traits::{ItemFunction, NavFunction};

/// Opaque value bound to a menu item and passed to its item function
pub enum Parameter<H: 'static> {
    /// No parameter
    None,
    /// Integer value (setting value, command code, ...)
    Value(i32),
    /// Static text
    Text(&'static str),
    /// Another menu, used by [`crate::actions::enter_menu`]
    Menu(&'static Menu<H>),
}

impl<H: 'static> Parameter<H> {
    /// Get the integer value, if any
    pub fn value(&self) -> Option<i32> {
        match self {
            Parameter::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the menu reference, if any
    pub fn menu(&self) -> Option<&'static Menu<H>> {
        match self {
            Parameter::Menu(m) => Some(*m),
            _ => None,
        }
    }
}

impl<H: 'static> Clone for Parameter<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for Parameter<H> {}

impl<H: 'static> PartialEq for Parameter<H> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Parameter::None, Parameter::None) => true,
            (Parameter::Value(a), Parameter::Value(b)) => a == b,
            (Parameter::Text(a), Parameter::Text(b)) => a == b,
            // Menus have identity, compare by address
            (Parameter::Menu(a), Parameter::Menu(b)) => core::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl<H: 'static> fmt::Debug for Parameter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::None => f.write_str("None"),
            Parameter::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Parameter::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Parameter::Menu(m) => f.debug_tuple("Menu").field(&m.title).finish(),
        }
    }
}

/// A single menu entry
///
/// An item without a name is the end-of-list sentinel. Item lists may be
/// terminated with [`MenuItem::END`], or simply end with the slice.
pub struct MenuItem<H: 'static> {
    /// Text shown on the display; `None` marks the end of the list
    pub name: Option<&'static str>,
    /// Function called when the item is selected
    pub action: Option<ItemFunction<H>>,
    /// Value passed to `action`
    pub parameter: Parameter<H>,
}

impl<H: 'static> MenuItem<H> {
    /// End-of-list sentinel
    pub const END: Self = Self {
        name: None,
        action: None,
        parameter: Parameter::None,
    };

    /// Create an item without an item function
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Some(name),
            action: None,
            parameter: Parameter::None,
        }
    }

    /// Create an item that calls `action` with `parameter` when selected
    pub const fn with_action(
        name: &'static str,
        action: ItemFunction<H>,
        parameter: Parameter<H>,
    ) -> Self {
        Self {
            name: Some(name),
            action: Some(action),
            parameter,
        }
    }

    /// Check if this is the end-of-list sentinel
    pub const fn is_end(&self) -> bool {
        self.name.is_none()
    }

    /// Display name, empty for the sentinel
    pub fn label(&self) -> &'static str {
        self.name.unwrap_or("")
    }
}

impl<H: 'static> Clone for MenuItem<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for MenuItem<H> {}

impl<H: 'static> fmt::Debug for MenuItem<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("name", &self.name)
            .field("action", &self.action.is_some())
            .field("parameter", &self.parameter)
            .finish()
    }
}

/// A menu: a title, its items and an optional navigation function
pub struct Menu<H: 'static> {
    /// Title shown on the display
    pub title: &'static str,
    /// Items, optionally terminated by [`MenuItem::END`]
    pub items: &'static [MenuItem<H>],
    /// Navigation function, notified on entry, selection change and select
    pub nav: Option<NavFunction<H>>,
}

impl<H: 'static> Menu<H> {
    /// Placeholder used before a session has entered any menu
    pub const EMPTY: Self = Self {
        title: "",
        items: &[],
        nav: None,
    };

    /// Create a menu without a navigation function
    pub const fn new(title: &'static str, items: &'static [MenuItem<H>]) -> Self {
        Self {
            title,
            items,
            nav: None,
        }
    }

    /// Create a menu with a navigation function
    pub const fn with_nav(
        title: &'static str,
        items: &'static [MenuItem<H>],
        nav: NavFunction<H>,
    ) -> Self {
        Self {
            title,
            items,
            nav: Some(nav),
        }
    }

    /// Look up the item at `index`
    ///
    /// Returns `None` past the end of the slice or at the sentinel, which is
    /// how the state machine detects the end of the list.
    pub fn item(&self, index: ItemIndex) -> Option<&MenuItem<H>> {
        self.items
            .get(index as usize)
            .filter(|item| !item.is_end())
    }

    /// Number of items before the sentinel (or the end of the slice)
    pub fn item_count(&self) -> usize {
        self.items.iter().take_while(|item| !item.is_end()).count()
    }

    /// Check if `index` addresses a selectable item
    pub fn contains_index(&self, index: ItemIndex) -> bool {
        (index as usize) < self.item_count()
    }
}

impl<H: 'static> Clone for Menu<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for Menu<H> {}

impl<H: 'static> fmt::Debug for Menu<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("title", &self.title)
            .field("items", &self.item_count())
            .field("nav", &self.nav.is_some())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<H: 'static> defmt::Format for Menu<H> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Menu[{}, {} items]", self.title, self.item_count());
    }
}

#[cfg(feature = "defmt")]
impl<H: 'static> defmt::Format for MenuItem<H> {
    fn format(&self, f: defmt::Formatter) {
        match self.name {
            Some(name) => defmt::write!(f, "MenuItem[{}]", name),
            None => defmt::write!(f, "MenuItem[END]"),
        }
    }
}
