// SPDX-License-Identifier: MPL-2.0

/// Monotonic counter starting at zero.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next value. Values are never reused.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_increments() {
        let mut sequence = IdSequence::new();
        assert_eq!(sequence.next_id(), 0);
        assert_eq!(sequence.next_id(), 1);
        assert_eq!(sequence.next_id(), 2);
    }
}
