//! Stack with an optional fixed capacity

use crate::collections::Collection;
use crate::error::{Error, ErrorKind, Result, Span};

/// LIFO stack that refuses pushes beyond `capacity` when it is non-zero
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundedStack<T> {
    /// Create an unbounded stack
    pub const fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a stack holding at most `capacity` elements (0 means unlimited)
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Iterate from the bottom of the stack to the top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    const fn is_full(&self) -> bool {
        self.capacity > 0 && self.items.len() >= self.capacity
    }
}

impl<T> Collection<T> for BoundedStack<T> {
    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn offer(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::new(
                ErrorKind::CapacityExceeded {
                    capacity: self.capacity,
                },
                Span::empty(),
            ));
        }
        self.items.push(value);
        Ok(())
    }

    fn poll(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| Error::new(ErrorKind::EmptyStack, Span::empty()))
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
