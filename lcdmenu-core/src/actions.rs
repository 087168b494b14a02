//! Built-in item functions
//!
//! Ready-made [`ItemFunction`](crate::ItemFunction)s for the two most common
//! items: one that opens a submenu and one that goes back.
//!
//! ```ignore
//! static MAIN_ITEMS: [MenuItem<App>; 3] = [
//!     MenuItem::with_action("Settings", actions::enter_menu, Parameter::Menu(&SETTINGS)),
//!     MenuItem::with_action("Back", actions::leave_menu, Parameter::None),
//!     MenuItem::END,
//! ];
//! ```

use crate::menu::Parameter;
use crate::traits::MenuControl;

/// Enter the submenu given as [`Parameter::Menu`]
///
/// Other parameters are ignored. If the navigation stack is full the
/// submenu is not entered and the current menu stays on screen.
pub fn enter_menu<H: 'static>(ctl: &mut dyn MenuControl<H>, parameter: Parameter<H>) {
    let Some(menu) = parameter.menu() else {
        #[cfg(feature = "defmt")]
        defmt::warn!("menu: enter_menu item without a menu parameter");
        return;
    };

    if let Err(_e) = ctl.enter_menu(menu) {
        #[cfg(feature = "defmt")]
        defmt::warn!("menu: submenu '{}' not entered: {}", menu.title, _e);
    }
}

/// Leave the current menu; the parameter is ignored
pub fn leave_menu<H: 'static>(ctl: &mut dyn MenuControl<H>, _parameter: Parameter<H>) {
    ctl.leave_menu();
}
