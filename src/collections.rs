//! Container abstractions shared by the scanner and the tree builder

pub mod stack;

pub use stack::BoundedStack;

use crate::error::Result;

/// A last-in, first-out collection of `T`
pub trait Collection<T> {
    /// Borrow the most recently offered element, if any
    fn peek(&self) -> Option<&T>;

    /// Add an element on top
    fn offer(&mut self, value: T) -> Result<()>;

    /// Remove and return the top element
    fn poll(&mut self) -> Result<T>;

    fn size(&self) -> usize;

    /// Configured maximum size; 0 means unlimited
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
