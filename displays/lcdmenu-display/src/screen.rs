//! Screen buffer
//!
//! Character buffer for text displays, rendered to a `DisplayBackend` only
//! when something changed.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows (16x2 LCD)
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns (16x2 LCD)
pub const SCREEN_COLS: usize = 16;

/// Maximum bytes per line
///
/// Room for multi-byte characters; at most `SCREEN_COLS` characters are kept.
pub const LINE_LEN: usize = SCREEN_COLS * 4;

/// Screen buffer for text-mode displays
#[derive(Clone, Debug)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Highlighted region per row (start_col, end_col exclusive)
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            highlights: [None; SCREEN_ROWS],
            dirty: true,
        }
    }

    /// Set the content of a row, truncated to the screen width
    ///
    /// Rows outside the screen are ignored.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };

        let end = text
            .char_indices()
            .nth(SCREEN_COLS)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let text = &text[..end];

        if line.as_str() != text {
            line.clear();
            let _ = line.push_str(text);
            self.dirty = true;
        }
    }

    /// Get the content of a row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Set highlight (invert) region for a row
    pub fn set_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        self.update_highlight(row, Some((start_col, end_col)));
    }

    /// Clear highlight for a row
    pub fn clear_highlight(&mut self, row: usize) {
        self.update_highlight(row, None);
    }

    fn update_highlight(&mut self, row: usize, region: Option<(u8, u8)>) {
        if let Some(highlight) = self.highlights.get_mut(row) {
            if *highlight != region {
                *highlight = region;
                self.dirty = true;
            }
        }
    }

    /// Get highlight region for a row
    pub fn get_highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Draw the buffer to a backend if it changed
    ///
    /// Each row is padded to the full width so stale characters are
    /// overwritten. Returns `Ok(false)` if nothing had to be drawn.
    pub fn render<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        if !self.dirty {
            return Ok(false);
        }
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        let (cols, rows) = backend.dimensions();
        if (cols as usize) < SCREEN_COLS || (rows as usize) < SCREEN_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        for (row, line) in self.lines.iter().enumerate() {
            let mut padded: String<LINE_LEN> = String::new();
            let _ = padded.push_str(line);
            for _ in line.chars().count()..SCREEN_COLS {
                let _ = padded.push(' ');
            }
            backend.draw_text(row as u8, 0, &padded)?;

            if let Some((start, end)) = self.highlights[row] {
                backend.invert_region(row as u8, start, end)?;
            }
        }

        backend.flush()?;
        self.dirty = false;
        Ok(true)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use heapless::Vec;

    /// Backend that records draw calls
    #[derive(Default)]
    pub(crate) struct MockBackend {
        pub rows: [String<LINE_LEN>; SCREEN_ROWS],
        pub inverted: Vec<(u8, u8, u8), 8>,
        pub flushes: usize,
        pub not_ready: bool,
    }

    impl DisplayBackend for MockBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            for row in &mut self.rows {
                row.clear();
            }
            Ok(())
        }

        fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
            if col != 0 {
                return Err(DisplayError::InvalidCoordinates);
            }
            let line = self
                .rows
                .get_mut(row as usize)
                .ok_or(DisplayError::InvalidCoordinates)?;
            line.clear();
            line.push_str(text)
                .map_err(|_| DisplayError::InvalidCoordinates)
        }

        fn invert_region(
            &mut self,
            row: u8,
            start_col: u8,
            end_col: u8,
        ) -> Result<(), DisplayError> {
            let _ = self.inverted.push((row, start_col, end_col));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (SCREEN_COLS as u8, SCREEN_ROWS as u8)
        }

        fn is_ready(&self) -> bool {
            !self.not_ready
        }
    }

    #[test]
    fn test_set_line_truncates() {
        let mut screen = Screen::new();
        screen.set_line(0, "This line is far too long");
        assert_eq!(screen.get_line(0), Some("This line is far"));
    }

    #[test]
    fn test_set_line_truncates_on_char_boundary() {
        let mut screen = Screen::new();
        screen.set_line(1, "Température réglée");
        assert_eq!(screen.get_line(1).map(|l| l.chars().count()), Some(SCREEN_COLS));
    }

    #[test]
    fn test_out_of_range_row_ignored() {
        let mut screen = Screen::new();
        screen.set_line(SCREEN_ROWS, "nope");
        screen.set_highlight(SCREEN_ROWS, 0, 1);
        assert_eq!(screen.get_line(0), Some(""));
        assert_eq!(screen.get_line(1), Some(""));
        assert_eq!(screen.get_line(SCREEN_ROWS), None);
        assert_eq!(screen.get_highlight(SCREEN_ROWS), None);
    }

    #[test]
    fn test_render_pads_and_cleans() {
        let mut screen = Screen::new();
        let mut backend = MockBackend::default();
        screen.set_line(0, "Main");
        screen.set_highlight(1, 0, 1);

        assert_eq!(screen.render(&mut backend), Ok(true));
        assert_eq!(backend.rows[0].as_str(), "Main            ");
        assert_eq!(backend.rows[1].as_str(), "                ");
        assert_eq!(backend.inverted.as_slice(), &[(1, 0, 1)]);
        assert_eq!(backend.flushes, 1);
        assert!(!screen.is_dirty());

        // Nothing changed
        assert_eq!(screen.render(&mut backend), Ok(false));
        screen.set_line(0, "Main");
        assert_eq!(screen.render(&mut backend), Ok(false));
        assert_eq!(backend.flushes, 1);
    }

    #[test]
    fn test_render_requires_ready_backend() {
        let mut screen = Screen::new();
        let mut backend = MockBackend {
            not_ready: true,
            ..Default::default()
        };
        assert_eq!(
            screen.render(&mut backend),
            Err(DisplayError::NotInitialized)
        );
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_highlight_change_marks_dirty() {
        let mut screen = Screen::new();
        let mut backend = MockBackend::default();
        screen.set_highlight(0, 0, 2);
        assert_eq!(screen.render(&mut backend), Ok(true));

        // Same region again
        screen.set_highlight(0, 0, 2);
        assert!(!screen.is_dirty());

        screen.clear_highlight(0);
        assert!(screen.is_dirty());
        assert_eq!(screen.get_highlight(0), None);
    }
}
