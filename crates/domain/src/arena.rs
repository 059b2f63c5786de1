// crates/domain/src/arena.rs
//! Fixed-capacity region allocator.
//!
//! An [`Arena`] owns `capacity` preallocated units and hands out contiguous
//! [`Span`]s of them by bumping a `used` counter. It never grows. Releasing
//! memory is either bulk ([`Arena::reset`], O(1)) or stack-like
//! ([`Arena::deallocate_top`]) for short-lived scratch regions.
//!
//! Spans are plain offsets, so a span that outlives a `reset` still points at
//! valid memory; it just reads whatever the next user wrote there. Callers
//! must write a region before reading it.

use std::ops::Range;

use dirlist_shared_kernel::{DomainError, DomainResult};

/// A contiguous region inside an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    len: usize,
}

impl Span {
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    pub const fn start(self) -> usize {
        self.start
    }

    pub const fn len(self) -> usize {
        self.len
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    fn range(self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

#[derive(Debug)]
pub struct Arena<T> {
    name: &'static str,
    units: Box<[T]>,
    used: usize,
}

impl<T: Copy + Default> Arena<T> {
    /// Preallocates `capacity` units. This is the only allocation the arena
    /// ever performs.
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self { name, units: vec![T::default(); capacity].into_boxed_slice(), used: 0 }
    }
}

impl<T: Copy> Arena<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capacity(&self) -> usize {
        self.units.len()
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Reserves `n` units. Their contents are whatever was left there.
    ///
    /// # Errors
    ///
    /// [`DomainError::ArenaCapacityExceeded`] when `used + n > capacity`.
    pub fn allocate(&mut self, n: usize) -> DomainResult<Span> {
        if n > self.remaining() {
            return Err(DomainError::ArenaCapacityExceeded {
                arena: self.name,
                requested: n,
                used: self.used,
                capacity: self.capacity(),
            });
        }
        let span = Span { start: self.used, len: n };
        self.used += n;
        Ok(span)
    }

    /// Allocates one unit holding `value` and returns its index.
    pub fn push(&mut self, value: T) -> DomainResult<usize> {
        let span = self.allocate(1)?;
        self.units[span.start] = value;
        Ok(span.start)
    }

    /// Allocates a region and copies `values` into it.
    pub fn push_slice(&mut self, values: &[T]) -> DomainResult<Span> {
        let span = self.allocate(values.len())?;
        self.units[span.range()].copy_from_slice(values);
        Ok(span)
    }

    pub fn get(&self, span: Span) -> &[T] {
        &self.units[span.range()]
    }

    pub fn get_mut(&mut self, span: Span) -> &mut [T] {
        &mut self.units[span.range()]
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The units allocated so far, in allocation order.
    pub fn as_slice(&self) -> &[T] {
        &self.units[..self.used]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.units[..self.used]
    }

    /// Marks every unit free again. Memory is neither zeroed nor released.
    pub fn reset(&mut self) {
        self.used = 0;
    }

    /// Releases the `n` most recently allocated units.
    ///
    /// # Errors
    ///
    /// [`DomainError::ArenaUnderflow`] when `n > used`.
    pub fn deallocate_top(&mut self, n: usize) -> DomainResult<()> {
        if n > self.used {
            return Err(DomainError::ArenaUnderflow { arena: self.name, requested: n, used: self.used });
        }
        self.used -= n;
        Ok(())
    }
}
