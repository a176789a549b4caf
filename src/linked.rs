//! A link-based BST storing an ordered multiset of comparable items.
//!
//! Unlike a map, the tree stores bare items and does not reject duplicates:
//! inserting an item equal to one already present places the newcomer in the
//! right subtree of the first equal node it meets, so equal items keep their
//! insertion order under an in-order traversal.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree = Tree::new();
//! for item in [5, 3, 8, 1, 4] {
//!     tree.add(item);
//! }
//!
//! let ascending: Vec<_> = tree.in_order().copied().collect();
//! assert_eq!(ascending, [1, 3, 4, 5, 8]);
//!
//! assert_eq!(tree.remove(&3), Ok(3));
//! assert_eq!(tree.find(&3), None);
//! assert_eq!(tree.len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::support::{Queue, Stack};

type Link<T> = Option<Box<Node<T>>>;

/// A single tree node. Children are owned exclusively by their parent; there
/// are no parent back-references, so mutation tracks the parent link slot
/// externally while descending.
struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            left: None,
            right: None,
        })
    }
}

/// A link-based Binary Search Tree holding an ordered multiset of items.
///
/// For every node, all items in its left subtree compare strictly less than
/// the node's item and all items in its right subtree compare
/// greater-or-equal. Insertion always lands at a leaf and performs no
/// rotations; call [`rebalance`](Tree::rebalance) to rebuild the tree at
/// minimal height when lookups degrade.
///
/// # Examples
///
/// ```
/// use linked_bst::linked::Tree;
///
/// let mut tree = Tree::new();
///
/// // Nothing in here yet.
/// assert_eq!(tree.find(&1), None);
///
/// tree.add(1);
/// assert_eq!(tree.find(&1), Some(&1));
///
/// // Deleting an item returns it.
/// assert_eq!(tree.remove(&1), Ok(1));
/// assert_eq!(tree.find(&1), None);
/// ```
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The derived drop would recurse once per level, which a degenerate
    // tree can turn into a call-stack overflow.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let root = match self.root.as_deref() {
            None => None,
            Some(root) => {
                let mut new_root = Node::new_boxed(root.item.clone());
                let mut work: Vec<(&Node<T>, &mut Node<T>)> = vec![(root, &mut *new_root)];
                while let Some((source, copy)) = work.pop() {
                    if let Some(left) = source.left.as_deref() {
                        copy.left = Some(Node::new_boxed(left.item.clone()));
                        work.push((left, copy.left.as_deref_mut().expect("just linked")));
                    }
                    if let Some(right) = source.right.as_deref() {
                        copy.right = Some(Node::new_boxed(right.item.clone()));
                        work.push((right, copy.right.as_deref_mut().expect("just linked")));
                    }
                }
                Some(new_root)
            }
        };
        Self {
            root,
            size: self.size,
        }
    }
}

impl<T> Tree<T> {
    /// Creates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of items in the tree, counting duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Makes the tree empty, discarding every node.
    ///
    /// The node graph is dismantled iteratively, so clearing (or dropping) a
    /// deep, degenerate tree cannot overflow the call stack.
    pub fn clear(&mut self) {
        let mut stack = Stack::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
        self.size = 0;
    }

    /// Returns a reference to the first item equal to `item`, or `None` if
    /// no such item is stored. With duplicates present this is the earliest
    /// inserted of the equal items.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    ///
    /// assert_eq!(tree.find(&2), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut cur = &self.root;
        while let Some(node) = cur {
            match item.cmp(&node.item) {
                Ordering::Less => cur = &node.left,
                Ordering::Equal => return Some(&node.item),
                Ordering::Greater => cur = &node.right,
            }
        }
        None
    }

    /// Returns `true` if an equal item is stored in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Adds `item` to the tree.
    ///
    /// The new item is attached as a leaf: descending from the root, a
    /// strictly smaller item goes left, anything else (including an equal
    /// item) goes right. No rebalancing happens and the call never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(2);
    ///
    /// // Duplicates are kept.
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            if item < node.item {
                cur = &mut node.left;
            } else {
                cur = &mut node.right;
            }
        }
        *cur = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Removes the first item equal to `item` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no equal item is stored; the tree is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::error::Error;
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: Ord,
    {
        // `cur` is the parent's link slot for the node under inspection.
        // Starting it at the root slot makes root removal the same as any
        // other removal, with no sentinel node required.
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match item.cmp(&node.item) {
                Ordering::Less => cur = &mut cur.as_mut().expect("just matched Some").left,
                Ordering::Greater => cur = &mut cur.as_mut().expect("just matched Some").right,
                Ordering::Equal => {
                    let removed = if node.left.is_some() && node.right.is_some() {
                        // Two children: lift the maximum of the left subtree
                        // into this node, then unlink that maximum. It was
                        // reached by following right links, so it has at
                        // most a left child.
                        let mut max_link = &mut node.left;
                        while max_link.as_ref().expect("walk stays on Some").right.is_some() {
                            max_link = &mut max_link.as_mut().expect("walk stays on Some").right;
                        }
                        let max = max_link.take().expect("left subtree is non-empty");
                        *max_link = max.left;
                        std::mem::replace(&mut node.item, max.item)
                    } else {
                        // At most one child: splice it into our slot.
                        let target = cur.take().expect("cursor is on the matched node");
                        *cur = if target.left.is_some() {
                            target.left
                        } else {
                            target.right
                        };
                        target.item
                    };
                    self.size -= 1;
                    return Ok(removed);
                }
            }
        }
        Err(Error::NotFound)
    }

    /// Overwrites the first item equal to `item` with `replacement` and
    /// returns the old item, or returns `None` if no equal item is stored.
    ///
    /// The node is not relinked: the caller must ensure `replacement` still
    /// belongs at the matched position, otherwise the ordering invariant is
    /// violated and subsequent searches may miss items.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(5);
    /// tree.add(8);
    ///
    /// // 9 sorts the same way 8 did relative to its neighbors.
    /// assert_eq!(tree.replace(&8, 9), Some(8));
    /// assert_eq!(tree.find(&9), Some(&9));
    /// assert_eq!(tree.find(&8), None);
    /// ```
    pub fn replace(&mut self, item: &T, replacement: T) -> Option<T>
    where
        T: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match item.cmp(&node.item) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
                Ordering::Equal => {
                    return Some(std::mem::replace(&mut node.item, replacement));
                }
            }
        }
        None
    }

    /// Returns the height of the tree: -1 when empty, 0 for a single node.
    ///
    /// This deliberately measures only the two outermost spines below the
    /// root (all-left links and all-right links) and reports one plus the
    /// deeper of the two. It is *not* the true recursive height: a tree
    /// whose deepest path zig-zags is reported shallower than it really is.
    /// [`is_balanced`](Tree::is_balanced) is defined against this exact
    /// measure, so the approximation is kept rather than corrected.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// for item in [10, 4, 8, 6] {
    ///     tree.add(item);
    /// }
    ///
    /// // The deepest path (10 -> 4 -> 8 -> 6) zig-zags, but only the spines
    /// // are measured: the left spine is 10 -> 4.
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return -1,
        };

        let mut left_depth: isize = -1;
        let mut walk = &root.left;
        while let Some(node) = walk {
            left_depth += 1;
            walk = &node.left;
        }

        let mut right_depth: isize = -1;
        let mut walk = &root.right;
        while let Some(node) = walk {
            right_depth += 1;
            walk = &node.right;
        }

        left_depth.max(right_depth) + 1
    }

    /// Returns `true` if `height() < 2 * log2(len + 1) - 2`.
    ///
    /// The threshold is derived from the item count with the binary
    /// logarithm; the height side uses the spine approximation documented on
    /// [`height`](Tree::height). Nothing is rebalanced automatically.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<i32> = (1..=8).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        (self.height() as f64) < 2.0 * ((self.size + 1) as f64).log2() - 2.0
    }

    /// Rebuilds the tree at minimal height, preserving the multiset of
    /// items, and returns `&mut self` for chaining.
    ///
    /// The items are collected in ascending order, the old node graph is
    /// discarded, and a new tree is built from an explicit work list of
    /// `(node, range)` entries where the middle item of each index range
    /// becomes that subtree's root. The resulting height is ⌊log2(n)⌋ for n
    /// items (and -1 for an empty tree).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<i32> = (1..=10).collect();
    ///
    /// // Ascending insertion built a right-leaning chain.
    /// assert_eq!(tree.height(), 9);
    ///
    /// assert_eq!(tree.rebalance().height(), 3);
    /// let ascending: Vec<_> = tree.in_order().copied().collect();
    /// assert_eq!(ascending, (1..=10).collect::<Vec<_>>());
    /// ```
    pub fn rebalance(&mut self) -> &mut Self
    where
        T: Ord,
    {
        let items = self.drain_in_order();
        self.root = Self::build_minimal(items);
        self
    }

    /// Empties the tree into an ascending `Vec`, consuming the node graph
    /// iteratively. Leaves `size` untouched for `rebalance` to reuse.
    fn drain_in_order(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.size);
        let mut stack = Stack::new();
        let mut cur = self.root.take();
        loop {
            while let Some(mut node) = cur.take() {
                cur = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(mut node) => {
                    cur = node.right.take();
                    items.push(node.item);
                }
                None => break,
            }
        }
        items
    }

    /// Builds a minimal-height tree from ascending `items`. Each work-list
    /// entry pairs a freshly created node with the index range it covers;
    /// the node already holds the range's middle item, and children are
    /// created for whatever remains on either side of the middle.
    fn build_minimal(items: Vec<T>) -> Link<T> {
        if items.is_empty() {
            return None;
        }
        let last = items.len() - 1;
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let mut root = Node::new_boxed(slots[last / 2].take().expect("each index claimed once"));

        let mut work: Vec<(&mut Node<T>, usize, usize)> = vec![(&mut *root, 0, last)];
        while let Some((node, first, last)) = work.pop() {
            let mid = (first + last) / 2;
            if mid > first {
                let left_mid = (first + mid - 1) / 2;
                let item = slots[left_mid].take().expect("each index claimed once");
                node.left = Some(Node::new_boxed(item));
                work.push((node.left.as_deref_mut().expect("just linked"), first, mid - 1));
            }
            if mid < last {
                let right_mid = (mid + 1 + last) / 2;
                let item = slots[right_mid].take().expect("each index claimed once");
                node.right = Some(Node::new_boxed(item));
                work.push((node.right.as_deref_mut().expect("just linked"), mid + 1, last));
            }
        }

        Some(root)
    }

    /// Returns the smallest stored item strictly greater than `item`, or
    /// `None` if there is none.
    ///
    /// `item` itself does not have to be stored. The lookup scans the full
    /// in-order sequence, so it is O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&6), Some(&8));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.in_order().filter(|candidate| *candidate > item).min()
    }

    /// Returns the largest stored item strictly less than `item`, or `None`
    /// if there is none.
    ///
    /// `item` itself does not have to be stored. The lookup scans the full
    /// in-order sequence, so it is O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&4), Some(&3));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.in_order().filter(|candidate| *candidate < item).max()
    }

    /// Returns references to every stored item in `[low, high]` (both bounds
    /// inclusive), in ascending order and with duplicates repeated.
    ///
    /// This is a bounded in-order traversal pruned by the bounds, so it
    /// works for any ordered item type. For integer trees, see
    /// [`range_find`](Tree::range_find) for the membership-probing variant;
    /// the two are not equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<&str> = ["pear", "apple", "quince", "fig"].into_iter().collect();
    ///
    /// assert_eq!(tree.range(&"apple", &"pear"), [&"apple", &"fig", &"pear"]);
    /// ```
    pub fn range(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        let mut found = Vec::new();
        let mut stack = Stack::new();
        let mut cur = self.root.as_deref();
        loop {
            while let Some(node) = cur {
                if node.item < *low {
                    // The whole left subtree sits below the bound too.
                    cur = node.right.as_deref();
                } else {
                    stack.push(node);
                    cur = node.left.as_deref();
                }
            }
            let node = match stack.pop() {
                Some(node) => node,
                None => break,
            };
            if node.item > *high {
                // In-order never shrinks, so nothing later can qualify.
                break;
            }
            found.push(&node.item);
            cur = node.right.as_deref();
        }
        found
    }

    /// Returns a preorder iterator over the tree (node before either
    /// subtree), driven by a LIFO [`Stack`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let visited: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(visited, [5, 3, 1, 4, 8]);
    /// ```
    pub fn iter(&self) -> Preorder<'_, T> {
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        Preorder { stack }
    }

    /// Returns an in-order iterator over the tree, yielding items in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let ascending: Vec<_> = tree.in_order().copied().collect();
    /// assert_eq!(ascending, [1, 3, 4, 5, 8]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder {
            stack: Stack::new(),
            cur: self.root.as_deref(),
        }
    }

    /// Returns a level-order (breadth-first) iterator over the tree, driven
    /// by a FIFO [`Queue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let by_level: Vec<_> = tree.level_order().copied().collect();
    /// assert_eq!(by_level, [5, 3, 8, 1, 4]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        let mut queue = Queue::new();
        if let Some(root) = self.root.as_deref() {
            queue.enqueue(root);
        }
        LevelOrder { queue }
    }
}

macro_rules! impl_range_find {
    ($($int:ty),* $(,)?) => {$(
        impl Tree<$int> {
            /// Returns every value in `low..=high` (both bounds inclusive)
            /// that is present in the tree, in ascending order.
            ///
            /// Each candidate value in the interval is probed one by one
            /// with [`find`](Tree::find), which is why this is only offered
            /// for integer items: the interval must be densely enumerable.
            /// It is not equivalent to [`range`](Tree::range): a duplicated
            /// value is reported once here, and wide bounds enumerate the
            /// whole interval regardless of how few items are stored.
            ///
            /// # Examples
            ///
            /// ```
            /// use linked_bst::linked::Tree;
            ///
            /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
            ///
            /// assert_eq!(tree.range_find(1, 5), [1, 3, 4, 5]);
            /// ```
            pub fn range_find(&self, low: $int, high: $int) -> Vec<$int> {
                (low..=high).filter(|value| self.contains(value)).collect()
            }
        }
    )*};
}

impl_range_find!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for item in iter {
            tree.add(item);
        }
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the tree rotated 90 degrees counterclockwise: the right subtree
/// is printed above its parent, the left below, and each level adds a
/// leading `"| "`.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Stack::new();
        let mut cur = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, level)) = cur {
                stack.push((node, level));
                cur = node.right.as_deref().map(|right| (right, level + 1));
            }
            let (node, level) = match stack.pop() {
                Some(entry) => entry,
                None => break,
            };
            for _ in 0..level {
                f.write_str("| ")?;
            }
            writeln!(f, "{}", node.item)?;
            cur = node.left.as_deref().map(|left| (left, level + 1));
        }
        Ok(())
    }
}

/// A preorder iterator over a [`Tree`], created by [`Tree::iter`].
pub struct Preorder<'a, T> {
    stack: Stack<&'a Node<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.item)
    }
}

/// An ascending iterator over a [`Tree`], created by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    stack: Stack<&'a Node<T>>,
    cur: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(node) = self.cur {
            self.stack.push(node);
            self.cur = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.cur = node.right.as_deref();
        Some(&node.item)
    }
}

/// A breadth-first iterator over a [`Tree`], created by
/// [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: Queue<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.queue.dequeue()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.enqueue(right);
        }
        Some(&node.item)
    }
}
