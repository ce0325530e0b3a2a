//! SinglyLinkedList: arena-backed singly linked list with stable node handles.

use slotmap::{DefaultKey, SlotMap};

/// Stable handle to a node in a [`SinglyLinkedList`]. Handles are
/// generational: after the node is removed, the handle stops resolving and
/// never aliases a later insertion, even if the physical slot is reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeRef(DefaultKey);

impl NodeRef {
    pub fn data<'a, T>(&self, list: &'a SinglyLinkedList<T>) -> Option<&'a T> {
        list.get(*self)
    }

    pub fn next<T>(&self, list: &SinglyLinkedList<T>) -> Option<NodeRef> {
        list.next(*self)
    }
}

#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<DefaultKey>,
}

/// Ordered sequence of owned nodes with O(1) head/after-node insertion and
/// removal, a cached tail, and an O(1) element count.
///
/// Structural invariants, upheld by every mutation:
/// - `len() == 0` iff `head()` is `None` iff `tail()` is `None`.
/// - Following `next` from the head reaches the tail in `len() - 1` steps,
///   and the tail node has no successor.
/// - Every node in the arena is reachable from the head exactly once.
pub struct SinglyLinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>, // storage using generational keys
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    /// Insert `data` just after `anchor`, or at the head when `anchor` is
    /// `None`. Returns the new node's handle. Returns `None` without
    /// inserting only when a supplied anchor no longer resides in this
    /// list. O(1).
    pub fn insert_after(&mut self, anchor: Option<NodeRef>, data: T) -> Option<NodeRef> {
        match anchor {
            None => {
                let key = self.nodes.insert(Node {
                    data,
                    next: self.head,
                });
                // First node ever: it is also the tail.
                if self.tail.is_none() {
                    self.tail = Some(key);
                }
                self.head = Some(key);
                Some(NodeRef(key))
            }
            Some(NodeRef(a)) => {
                let successor = self.nodes.get(a)?.next;
                let key = self.nodes.insert(Node {
                    data,
                    next: successor,
                });
                self.nodes[a].next = Some(key);
                if successor.is_none() {
                    self.tail = Some(key);
                }
                Some(NodeRef(key))
            }
        }
    }

    /// Remove the node just after `anchor`, or the head node when `anchor`
    /// is `None`, and return its payload. Returns `None` when the list is
    /// empty, the anchor has no successor, or the anchor is stale. O(1).
    pub fn remove_after(&mut self, anchor: Option<NodeRef>) -> Option<T> {
        match anchor {
            None => {
                let head = self.head?;
                let node = self
                    .nodes
                    .remove(head)
                    .expect("head key must be live while set");
                self.head = node.next;
                if self.head.is_none() {
                    self.tail = None;
                }
                Some(node.data)
            }
            Some(NodeRef(a)) => {
                let victim = self.nodes.get(a)?.next?;
                let node = self
                    .nodes
                    .remove(victim)
                    .expect("successor key must be live while linked");
                self.nodes[a].next = node.next;
                // Unlinked the last node: the anchor becomes the tail.
                if node.next.is_none() {
                    self.tail = Some(a);
                }
                Some(node.data)
            }
        }
    }

    pub fn head(&self) -> Option<NodeRef> {
        self.head.map(NodeRef)
    }

    pub fn tail(&self) -> Option<NodeRef> {
        self.tail.map(NodeRef)
    }

    /// Handle of the node following `node`, if any. `None` for the tail
    /// and for stale handles.
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        self.nodes.get(node.0)?.next.map(NodeRef)
    }

    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.nodes.get(node.0).map(|n| &n.data)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// In-order traversal of payloads from head to tail. Restartable:
    /// each call starts a fresh pass. O(n) to exhaust.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over payloads of a `SinglyLinkedList`, head to tail.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    cursor: Option<DefaultKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = self.nodes.get(key)?;
        self.cursor = node.next;
        Some(&node.data)
    }
}
