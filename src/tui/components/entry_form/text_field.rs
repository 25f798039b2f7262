//! Single-line editable text for one form field.
//!
//! `TextField` owns the buffer and a byte-offset cursor. Newlines never enter
//! the buffer, so each field stays on one row; content wider than the box
//! scrolls horizontally to keep the cursor visible.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct TextField {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pos: usize,
}

impl TextField {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pos = 0;
    }

    /// Apply an editing event. Returns `true` if the buffer or cursor changed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                if c.is_control() {
                    return false;
                }
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                true
            }
            TuiEvent::Paste(text) => {
                let cleaned: String = text
                    .chars()
                    .filter(|c| !matches!(c, '\n' | '\r'))
                    .collect();
                if cleaned.is_empty() {
                    return false;
                }
                self.buffer.insert_str(self.pos, &cleaned);
                self.pos += cleaned.len();
                true
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return false;
                }
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                true
            }
            TuiEvent::Delete => {
                if self.pos >= self.buffer.len() {
                    return false;
                }
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                true
            }
            TuiEvent::CursorLeft => {
                if self.pos == 0 {
                    return false;
                }
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                true
            }
            TuiEvent::CursorRight => {
                if self.pos >= self.buffer.len() {
                    return false;
                }
                self.pos = next_char_boundary(&self.buffer, self.pos);
                true
            }
            TuiEvent::CursorHome => {
                let moved = self.pos != 0;
                self.pos = 0;
                moved
            }
            TuiEvent::CursorEnd => {
                let moved = self.pos != self.buffer.len();
                self.pos = self.buffer.len();
                moved
            }
            _ => false,
        }
    }

    /// The slice to display in a box `width` columns wide, and the cursor
    /// column inside that box.
    pub fn viewport(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        if width == 0 {
            return ("", 0);
        }

        // Drop leading chars until the cursor fits (one column reserved for the cursor itself)
        let mut start = 0;
        let mut cursor_col = self.buffer[..self.pos].width();
        while cursor_col >= width && start < self.pos {
            let c = self.buffer[start..].chars().next().unwrap_or(' ');
            cursor_col -= c.width().unwrap_or(0);
            start += c.len_utf8();
        }

        (&self.buffer[start..], cursor_col as u16)
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
