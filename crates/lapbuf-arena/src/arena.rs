//! The [`FixedArena`] bump arena.

use crate::error::ArenaError;

/// A fixed-capacity block of `f64` storage with a single bump cursor.
///
/// The arena is created once with its full capacity and reused across many
/// decompositions. `reserve` advances the cursor and returns the offset of
/// the claimed region; `release` moves the cursor back. Reservations must
/// be released in strict reverse order of acquisition — the arena does not
/// track individual regions, only the cursor.
///
/// The backing storage is zero-initialised at construction but is NOT
/// re-zeroed between reservations: a region reserved after an earlier
/// release sees whatever the previous occupant left behind. Callers must
/// treat fresh reservations as uninitialised and must never read released
/// regions.
///
/// The arena has no internal synchronisation. One logical operation may be
/// in flight against a given arena at a time; concurrent callers must each
/// own their own instance.
pub struct FixedArena {
    /// Backing storage. Allocated to full capacity at creation, never
    /// resized.
    data: Vec<f64>,
    /// Bump cursor: number of f64 elements currently reserved.
    len: usize,
}

impl FixedArena {
    /// Create a new arena with the given capacity (in f64 elements).
    pub fn with_capacity(max_len: usize) -> Self {
        Self {
            data: vec![0.0; max_len],
            len: 0,
        }
    }

    /// Reserve `len` f64 elements.
    ///
    /// Returns the offset of the reserved region (the cursor position at
    /// the time of the call). Fails with [`ArenaError::OutOfCapacity`] if
    /// the reservation would exceed capacity, in which case the cursor is
    /// left unchanged. `reserve(0)` succeeds and returns the current
    /// cursor.
    pub fn reserve(&mut self, len: usize) -> Result<usize, ArenaError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(ArenaError::OutOfCapacity {
                requested: len,
                remaining,
            });
        }
        let offset = self.len;
        self.len += len;
        Ok(offset)
    }

    /// Release the most recently reserved `len` elements.
    ///
    /// Precondition (caller-enforced): `len` equals the length of the most
    /// recently acquired still-live reservation. Releasing out of order or
    /// releasing more than was reserved corrupts the cursor; this is a
    /// programming error on the caller's side, checked only in debug
    /// builds.
    pub fn release(&mut self, len: usize) {
        debug_assert!(
            len <= self.len,
            "release of {len} elements exceeds {} reserved",
            self.len
        );
        self.len -= len;
    }

    /// Drop every live reservation and return the cursor to zero.
    ///
    /// The backing storage is NOT zeroed.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Number of f64 elements currently reserved.
    pub fn used(&self) -> usize {
        self.len
    }

    /// Total capacity in f64 elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Remaining free capacity in f64 elements.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.len
    }

    /// Whether no reservations are live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f64>()
    }

    /// Shared access to a reserved region.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the reserved prefix.
    pub fn slice(&self, offset: usize, len: usize) -> &[f64] {
        let end = offset + len;
        assert!(end <= self.len, "slice [{offset}, {end}) outside reserved prefix of {}", self.len);
        &self.data[offset..end]
    }

    /// Mutable access to a reserved region.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the reserved prefix.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [f64] {
        let end = offset + len;
        assert!(end <= self.len, "slice [{offset}, {end}) outside reserved prefix of {}", self.len);
        &mut self.data[offset..end]
    }

    /// Mutable access to two disjoint reserved regions at once.
    ///
    /// The decomposition hands the kernel both the input copy and the
    /// scratch workspace in a single call, so both regions must be
    /// borrowed simultaneously. `first` must end at or before `second`
    /// begins.
    ///
    /// # Panics
    ///
    /// Panics if the regions overlap, are out of order, or extend past the
    /// reserved prefix.
    pub fn split_mut(
        &mut self,
        first: (usize, usize),
        second: (usize, usize),
    ) -> (&mut [f64], &mut [f64]) {
        let (first_off, first_len) = first;
        let (second_off, second_len) = second;
        assert!(
            first_off + first_len <= second_off,
            "regions overlap or are out of order"
        );
        assert!(
            second_off + second_len <= self.len,
            "second region outside reserved prefix of {}",
            self.len
        );
        let (head, tail) = self.data.split_at_mut(second_off);
        (
            &mut head[first_off..first_off + first_len],
            &mut tail[..second_len],
        )
    }
}
