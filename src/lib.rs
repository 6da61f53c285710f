//! # Ordered collections backed by height-balanced search trees
//!
//! `balanced-collections` provides [`AvlMap`], a sorted map, and [`AvlSet`],
//! a sorted set.  Both are built on [AVL
//! trees](https://en.wikipedia.org/wiki/AVL_tree), which rebalance themselves
//! on every update so that lookups, insertions, and removals all run in
//! O(log n) time.  The collections have no dependencies and make no use of
//! `std::collections` for their own storage, which makes them handy when you
//! need an ordered associative container with predictable costs and full
//! control over the implementation.

mod avl;
pub use avl::AvlMap;
pub use avl::AvlSet;
