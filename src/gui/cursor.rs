/// Highlighted row of a vertical menu, wrapping at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCursor {
    index: usize,
    len: usize,
}

impl SelectionCursor {
    /// Creates a cursor on row 0 of a menu with `len` rows (at least 1)
    pub fn new(len: usize) -> Self {
        SelectionCursor {
            index: 0,
            len: len.max(1),
        }
    }

    /// Currently selected index
    pub fn current(&self) -> usize {
        self.index
    }

    /// Move selection up (wraps to bottom)
    pub fn move_up(&mut self) {
        if self.index == 0 {
            self.index = self.len - 1;
        } else {
            self.index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn move_down(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Re-applies wraparound against a row count that may have changed
    ///
    /// An index past the end goes back to the top.
    pub fn rewrap(&mut self, len: usize) {
        self.len = len.max(1);
        if self.index >= self.len {
            self.index = 0;
        }
    }
}
