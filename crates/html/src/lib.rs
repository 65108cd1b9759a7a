//! Minimal document tree: element/text nodes with stable ids, plus the
//! query and mutation helpers used by widgets that rewrite the tree.

pub mod dom_utils;
pub mod traverse;

mod types;

pub use crate::types::{Id, Node, NodeId};
