// SPDX-License-Identifier: Apache-2.0

use crate::scratch_buffer::DEFAULT_INITIAL_CAPACITY;

/// Tunables for a [`Parser`](crate::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Bytes allocated for the string scratch buffer the first time it is
    /// needed. Later growth is by a factor of 1.5.
    pub initial_capacity: usize,
}

impl ParserConfig {
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ParserConfig::default().initial_capacity, 256);
        assert_eq!(
            ParserConfig::new().with_initial_capacity(16).initial_capacity,
            16
        );
    }
}
