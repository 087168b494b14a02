//! Inputs to the state machine and notifications it emits

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input actions processed by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MenuAction {
    /// No action
    #[default]
    None,
    /// Switch to the previous item
    Previous,
    /// Switch to the next item
    Next,
    /// Select the current item
    Select,
}

/// What the display callback is asked to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MenuShow {
    /// The current menu was loaded (title line)
    Menu,
    /// The current item was loaded (item line)
    Item,
}

/// Reason a navigation function is called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MenuNav {
    /// The menu was just entered; the initial item is not loaded yet
    EnteringMenu,
    /// The current item changed after Previous/Next
    SelectionChanged,
    /// Select was pressed and the item function (if any) has run.
    /// Returning `true` leaves the menu.
    SelectPressed,
}
