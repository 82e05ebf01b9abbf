// SPDX-License-Identifier: Apache-2.0

use crate::scratch_buffer::ScratchBuffer;

/// Read position over the input, paired with the scratch buffer used to
/// decode strings.
///
/// The cursor only moves forward. Lookahead within a single token goes
/// through [`Cursor::remaining`] and never rewinds the cursor itself.
#[derive(Debug)]
pub struct Cursor<'a, 'b> {
    data: &'a [u8],
    pos: usize,
    scratch: &'b mut ScratchBuffer,
}

impl<'a, 'b> Cursor<'a, 'b> {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: &'a [u8], scratch: &'b mut ScratchBuffer) -> Self {
        Self {
            data,
            pos: 0,
            scratch,
        }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// The input that has not been consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    /// The next byte, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consumes and returns the next byte.
    pub fn consume_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos = self.pos.saturating_add(1);
        Some(byte)
    }

    /// Moves past `n` bytes, stopping at end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Skips spaces, tabs, newlines and carriage returns.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos = self.pos.saturating_add(1);
        }
    }

    pub fn scratch(&mut self) -> &mut ScratchBuffer {
        self.scratch
    }
}
