use crate::{Id, Node};

/// Largest id in the tree (`Id(0)` for a tree with no assigned ids).
pub fn max_node_id(root: &Node) -> Id {
    root.children()
        .iter()
        .map(max_node_id)
        .fold(root.id(), Id::max)
}

/// Hands out ids that are unused in the tree it was created from.
///
/// Ids are never reused: once `u32::MAX` has been handed out the allocator
/// is exhausted and [`next_id`](Self::next_id) returns `None`.
#[derive(Clone, Copy, Debug)]
pub struct IdAllocator {
    next: Option<u32>,
}

impl IdAllocator {
    pub fn after(root: &Node) -> Self {
        Self {
            next: max_node_id(root).0.checked_add(1),
        }
    }

    pub fn next_id(&mut self) -> Option<Id> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(Id(id))
    }

    /// Number of ids still available.
    pub fn remaining(&self) -> u64 {
        self.next
            .map_or(0, |n| u64::from(u32::MAX) - u64::from(n) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_skips_existing_ids() {
        let doc = Node::document(vec![
            Node::element(Id(4), "p"),
            Node::element(Id(2), "div").with_child(Node::element(Id(9), "b")),
        ]);
        assert_eq!(max_node_id(&doc), Id(9));
        let mut ids = IdAllocator::after(&doc);
        assert_eq!(ids.next_id(), Some(Id(10)));
        assert_eq!(ids.next_id(), Some(Id(11)));
    }

    #[test]
    fn allocator_stops_instead_of_wrapping() {
        let doc = Node::document(vec![Node::element(Id(u32::MAX - 1), "p")]);
        let mut ids = IdAllocator::after(&doc);
        assert_eq!(ids.remaining(), 1);
        assert_eq!(ids.next_id(), Some(Id(u32::MAX)));
        assert_eq!(ids.remaining(), 0);
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);

        let full = Node::document(vec![Node::element(Id(u32::MAX), "p")]);
        assert_eq!(IdAllocator::after(&full).next_id(), None);
    }
}
