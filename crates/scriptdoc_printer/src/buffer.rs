//! The append-only output buffer owned by every printer.

use std::fmt;

/// Accumulated printer output.
///
/// Text is only ever appended. [`DocBuffer::finalize`] produces the finished
/// string without touching the buffer, so it can be called any number of
/// times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBuffer {
    text: String,
}

impl DocBuffer {
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(4096),
        }
    }

    /// Append a raw fragment. No escaping or validation happens here.
    #[inline]
    pub fn push_str(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    #[inline]
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn ends_with_newline(&self) -> bool {
        self.text.ends_with('\n')
    }

    /// The text with exactly one trailing newline enforced.
    ///
    /// An empty buffer stays empty; a buffer already ending in `\n` is
    /// returned as is.
    pub fn finalize(&self) -> String {
        if self.text.is_empty() || self.ends_with_newline() {
            return self.text.clone();
        }
        let mut text = String::with_capacity(self.text.len() + 1);
        text.push_str(&self.text);
        text.push('\n');
        text
    }
}

impl fmt::Write for DocBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
