//! Traversal collaborators: a LIFO [`Stack`] and a FIFO [`Queue`].
//!
//! The tree never recurses; every walk that could go as deep as the tree
//! itself is driven by one of these two helpers (or by a plain work list)
//! so that degenerate trees cannot exhaust the call stack.

use std::collections::VecDeque;

/// A last-in, first-out stack.
///
/// # Examples
///
/// ```
/// use linked_bst::support::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes an item onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item, or `None` if the
    /// stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns `true` if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A first-in, first-out queue.
///
/// # Examples
///
/// ```
/// use linked_bst::support::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds an item to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue, or `None` if
    /// the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns `true` if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        for x in 0..5 {
            stack.push(x);
        }
        assert_eq!(stack.len(), 5);

        let drained: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(drained, [4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        for x in 0..5 {
            queue.enqueue(x);
        }
        assert_eq!(queue.len(), 5);

        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained, [0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
    }
}
