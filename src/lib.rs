//! This crate exposes a link-based Binary Search Tree (BST) holding an
//! ordered multiset of comparable items.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one item and
//! sometimes has child `Node`s. The most important invariants of this
//! tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have an item
//!    less than its own item.
//! 2. For every `Node`, all the `Node`s in its right subtree have an item
//!    greater than or equal to its own item. Duplicates are kept, and they
//!    land to the right of the items they equal.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching the tree takes `O(height)`, but insertion here always attaches
//! a leaf and never rotates, so a tree fed sorted input degrades into a
//! chain. [`Tree::rebalance`](linked::Tree::rebalance) rebuilds the whole
//! tree at minimal height in one pass; [`Tree::is_balanced`](linked::Tree::is_balanced)
//! reports whether that is worth doing. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod linked;
pub mod support;
