//! Multiline textarea widget for the request editor.
//!
//! Cursor columns are counted in characters, not bytes, so multi-byte input
//! (`°C`, `—`) edits cleanly. The text round-trips exactly: `set_text(s)`
//! followed by `text()` returns `s`, trailing newline included.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Spaces inserted for Tab; matches the two-space JSON indent.
const TAB_WIDTH: usize = 2;

/// Multiline textarea widget.
#[derive(Debug, Clone)]
pub struct TextArea {
    lines: Vec<String>,
    cursor_row: usize,
    /// In characters.
    cursor_col: usize,
    style: Style,
}

impl Default for TextArea {
    fn default() -> Self {
        Self { lines: vec![String::new()], cursor_row: 0, cursor_col: 0, style: Style::default() }
    }
}

impl TextArea {
    /// Create a TextArea holding `text` with the cursor at the start.
    pub fn new(text: &str) -> Self {
        let mut textarea = Self::default();
        textarea.set_text(text);
        textarea
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The content as a single string with `\n` separators.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the content and move the cursor to the start.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(ToString::to_string).collect();
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Cursor position as (row, column in characters).
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Handle a key event. Returns `true` when the text changed.
    ///
    /// Keys with Control held are left to the caller.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Tab => {
                for _ in 0..TAB_WIDTH {
                    self.insert_char(' ');
                }
                true
            }
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Up => {
                self.move_vertical(-1);
                false
            }
            KeyCode::Down => {
                self.move_vertical(1);
                false
            }
            KeyCode::Home => {
                self.cursor_col = 0;
                false
            }
            KeyCode::End => {
                self.cursor_col = self.line_len(self.cursor_row);
                false
            }
            _ => false,
        }
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_row];
        let at = byte_index(line, self.cursor_col);
        line.insert(at, c);
        self.cursor_col += 1;
    }

    fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let at = byte_index(line, self.cursor_col);
        let rest = line.split_off(at);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let at = byte_index(line, self.cursor_col - 1);
            line.remove(at);
            self.cursor_col -= 1;
            true
        } else if self.cursor_row > 0 {
            let current = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
            self.lines[self.cursor_row].push_str(&current);
            true
        } else {
            false
        }
    }

    fn delete(&mut self) -> bool {
        if self.cursor_col < self.line_len(self.cursor_row) {
            let line = &mut self.lines[self.cursor_row];
            let at = byte_index(line, self.cursor_col);
            line.remove(at);
            true
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
            true
        } else {
            false
        }
    }

    fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
        }
    }

    fn move_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let target = self.cursor_row.saturating_add_signed(delta);
        if target < self.lines.len() {
            self.cursor_row = target;
            self.cursor_col = self.cursor_col.min(self.line_len(target));
        }
    }

    /// First row shown so the cursor stays inside a viewport of `height` rows.
    fn first_visible_row(&self, height: usize) -> usize {
        (self.cursor_row + 1).saturating_sub(height)
    }
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

impl Widget for &TextArea {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let height = area.height as usize;
        let width = area.width as usize;
        let first_row = self.first_visible_row(height);

        // Scroll horizontally so the cursor column is on screen.
        let cursor_line = &self.lines[self.cursor_row];
        let cursor_x = cursor_line[..byte_index(cursor_line, self.cursor_col)].width();
        let x_offset = (cursor_x + 1).saturating_sub(width);

        for (offset, line) in self.lines.iter().skip(first_row).take(height).enumerate() {
            let y = area.y + offset as u16;
            let visible: String = skip_columns(line, x_offset);
            buf.set_stringn(area.x, y, &visible, width, self.style);
        }

        let cursor_y = area.y + (self.cursor_row - first_row) as u16;
        let cursor_screen_x = area.x + (cursor_x - x_offset) as u16;
        if let Some(cell) = buf.cell_mut((cursor_screen_x, cursor_y)) {
            if cell.symbol().trim().is_empty() {
                cell.set_char(' ');
            }
            cell.set_style(self.style.add_modifier(Modifier::REVERSED));
        }
    }
}

/// Drops the first `columns` display columns of `line`.
fn skip_columns(line: &str, columns: usize) -> String {
    let mut skipped = 0;
    line.chars()
        .skip_while(|c| {
            if skipped >= columns {
                return false;
            }
            skipped += unicode_width::UnicodeWidthChar::width(*c).unwrap_or(0);
            true
        })
        .collect()
}
