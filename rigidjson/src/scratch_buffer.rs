// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// Initial capacity used the first time the buffer has to grow.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Smallest initial capacity that still grows under `capacity += capacity >> 1`.
const MIN_INITIAL_CAPACITY: usize = 2;

/// A position in the [`ScratchBuffer`] to roll back or cut to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

/// Growable scratch storage with stack discipline.
///
/// Bytes are pushed on top and later cut out again back to a remembered
/// [`Mark`]. Storage is allocated lazily: the first push that needs room
/// allocates `initial_capacity` bytes, later growth multiplies the capacity
/// by 1.5 until the request fits. Existing bytes survive every reallocation.
#[derive(Debug)]
pub struct ScratchBuffer {
    /// Backing storage; `storage.len()` is the capacity
    storage: Vec<u8>,
    /// Bytes currently in use
    top: usize,
    initial_capacity: usize,
}

impl ScratchBuffer {
    /// Creates an empty buffer with the default initial capacity.
    pub fn new() -> Self {
        Self::with_initial_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty buffer. Nothing is allocated until the first push.
    ///
    /// Capacities below 2 are raised to 2.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            storage: Vec::new(),
            top: 0,
            initial_capacity: initial_capacity.max(MIN_INITIAL_CAPACITY),
        }
    }

    /// Number of bytes currently written.
    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Number of bytes the buffer can hold without growing.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Remembers the current top of the buffer.
    pub fn mark(&self) -> Mark {
        Mark(self.top)
    }

    /// Discards everything written since `mark`.
    pub fn rollback(&mut self, mark: Mark) {
        if mark.0 < self.top {
            self.top = mark.0;
        }
    }

    /// Number of bytes written since `mark`.
    pub fn len_since(&self, mark: Mark) -> usize {
        self.top.saturating_sub(mark.0)
    }

    /// Reserves `n` bytes on top of the buffer and returns them for writing.
    ///
    /// Pushing zero bytes returns an empty window and never allocates.
    pub fn push(&mut self, n: usize) -> &mut [u8] {
        let start = self.top;
        let end = start.saturating_add(n);
        if n > 0 {
            self.reserve_total(end);
            self.top = end;
        }
        self.storage.get_mut(start..end).unwrap_or_default()
    }

    /// Pushes a single byte.
    pub fn push_byte(&mut self, byte: u8) {
        if let Some(slot) = self.push(1).first_mut() {
            *slot = byte;
        }
    }

    /// Removes the top `n` bytes and returns them.
    ///
    /// The returned view is valid until the buffer is next mutated. Returns
    /// `None`, leaving the buffer untouched, if fewer than `n` bytes are
    /// present.
    pub fn pop(&mut self, n: usize) -> Option<&[u8]> {
        let start = self.top.checked_sub(n)?;
        let end = self.top;
        self.top = start;
        self.storage.get(start..end)
    }

    /// Removes everything written since `mark` and returns it.
    pub fn cut(&mut self, mark: Mark) -> &[u8] {
        let n = self.len_since(mark);
        self.pop(n).unwrap_or_default()
    }

    /// Grows the storage until it holds at least `required` bytes.
    fn reserve_total(&mut self, required: usize) {
        let mut capacity = self.storage.len();
        if required <= capacity {
            return;
        }
        if capacity == 0 {
            capacity = self.initial_capacity;
        }
        while capacity < required {
            capacity = capacity.saturating_add(capacity >> 1);
        }
        log::trace!(
            "scratch buffer grows from {} to {} bytes",
            self.storage.len(),
            capacity
        );
        // `resize` either completes or aborts, so the recorded capacity never
        // runs ahead of the storage.
        self.storage.resize(capacity, 0);
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}
