//! Menu rendering
//!
//! Draws the current menu on a two-line character display:
//!
//! ```text
//! +----------------+
//! |Settings        |   menu title
//! |< Brightness   >|   current item, arrows when more items exist
//! +----------------+
//! ```
//!
//! The item name is inverted on displays that support it.

use heapless::String;
use lcdmenu_core::{MenuHost, MenuShow, MenuView};

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::{Screen, LINE_LEN, SCREEN_COLS};

/// Row showing the menu title
pub const TITLE_ROW: usize = 0;

/// Row showing the current item
pub const ITEM_ROW: usize = 1;

/// Column where the item name starts
const NAME_COL: u8 = 2;

/// Columns available for the item name, leaving room for the arrows
const NAME_COLS: usize = SCREEN_COLS - 3;

/// Display callback that keeps a screen buffer in sync with the session
///
/// Applications that need their own host state embed a `MenuScreen` and
/// forward [`MenuHost::show`] to [`MenuScreen::show`]. Simple menus can use
/// `MenuScreen` itself as the host.
#[derive(Clone, Debug, Default)]
pub struct MenuScreen {
    screen: Screen,
}

impl MenuScreen {
    /// Create a menu screen with an empty buffer
    pub fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Update the buffer for a display callback
    pub fn show<H: 'static>(&mut self, mode: MenuShow, view: &MenuView<'_, H>) {
        match mode {
            MenuShow::Menu => {
                self.screen.set_line(TITLE_ROW, view.menu.title);
                // The item line is redrawn by the following item callback
                self.screen.set_line(ITEM_ROW, "");
                self.screen.clear_highlight(ITEM_ROW);
            }
            MenuShow::Item => {
                let line = item_line(view);
                self.screen.set_line(ITEM_ROW, &line);

                let name_len = view.item.label().chars().take(NAME_COLS).count() as u8;
                if name_len > 0 {
                    self.screen
                        .set_highlight(ITEM_ROW, NAME_COL, NAME_COL + name_len);
                } else {
                    self.screen.clear_highlight(ITEM_ROW);
                }
            }
        }
    }

    /// Screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Draw pending changes to a backend
    pub fn render<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        self.screen.render(backend)
    }
}

impl MenuHost for MenuScreen {
    fn show(&mut self, mode: MenuShow, view: MenuView<'_, Self>) {
        MenuScreen::show(self, mode, &view);
    }
}

/// Format the item row: `<` and `>` mark further items on either side
fn item_line<H: 'static>(view: &MenuView<'_, H>) -> String<LINE_LEN> {
    let mut line: String<LINE_LEN> = String::new();

    let _ = line.push(if view.has_previous() { '<' } else { ' ' });
    let _ = line.push(' ');

    let mut used = 2;
    for c in view.item.label().chars().take(NAME_COLS) {
        let _ = line.push(c);
        used += 1;
    }

    if view.has_next() {
        for _ in used..SCREEN_COLS - 1 {
            let _ = line.push(' ');
        }
        let _ = line.push('>');
    }

    line
}
