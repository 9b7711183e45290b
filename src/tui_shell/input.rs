/// Single-line text field. `cursor` counts chars, not bytes.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.buf
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }

    fn char_len(&self) -> usize {
        self.buf.chars().count()
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Same width as the buffer, every char replaced by `*`.
    pub(super) fn masked(&self) -> String {
        "*".repeat(self.char_len())
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/input_tests.rs"]
mod tests;
