//! Recency List Module
//!
//! Arena-backed doubly linked list tracking access order for LRU eviction.

use crate::cache::CacheEntry;

// == Node Handle ==
/// Stable index of a node inside the recency arena.
///
/// A handle stays valid until the node it names is removed; the slot may then
/// be reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

#[derive(Debug)]
struct Node {
    entry: CacheEntry,
    prev: Option<NodeHandle>,
    next: Option<NodeHandle>,
}

// == Recency List ==
/// Tracks access order for the LRU eviction strategy.
///
/// - Front = Most recently used
/// - Back = Least recently used
///
/// All operations are O(1). Freed slots are recycled through a free list.
#[derive(Debug, Default)]
pub struct RecencyList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Front ==
    /// Inserts an entry as the most recently used and returns its handle.
    pub fn push_front(&mut self, entry: CacheEntry) -> NodeHandle {
        let node = Node {
            entry,
            prev: None,
            next: self.head,
        };
        let handle = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeHandle(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeHandle(self.slots.len() - 1)
            }
        };

        match self.head {
            Some(old_head) => {
                if let Some(node) = self.node_mut(old_head) {
                    node.prev = Some(handle);
                }
            }
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    // == Move To Front ==
    /// Marks a node as recently used.
    pub fn move_to_front(&mut self, handle: NodeHandle) {
        if self.head == Some(handle) || self.node(handle).is_none() {
            return;
        }

        self.unlink(handle);
        let old_head = self.head;
        if let Some(node) = self.node_mut(handle) {
            node.prev = None;
            node.next = old_head;
        }
        if let Some(old_head) = old_head {
            if let Some(node) = self.node_mut(old_head) {
                node.prev = Some(handle);
            }
        }
        self.head = Some(handle);
        if self.tail.is_none() {
            self.tail = Some(handle);
        }
    }

    // == Remove ==
    /// Unlinks a node and returns its entry.
    ///
    /// Returns None if the handle does not name a live node.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<CacheEntry> {
        self.node(handle)?;
        self.unlink(handle);
        let node = self.slots[handle.0].take()?;
        self.free.push(handle.0);
        self.len -= 1;
        Some(node.entry)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    pub fn pop_back(&mut self) -> Option<CacheEntry> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Accessors ==
    pub fn get(&self, handle: NodeHandle) -> Option<&CacheEntry> {
        self.node(handle).map(|node| &node.entry)
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut CacheEntry> {
        self.node_mut(handle).map(|node| &mut node.entry)
    }

    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates handles and entries from most to least recently used.
    pub fn handles(&self) -> impl Iterator<Item = (NodeHandle, &CacheEntry)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let handle = cursor?;
            let node = self.node(handle)?;
            cursor = node.next;
            Some((handle, &node.entry))
        })
    }

    // == Internal Helpers ==
    fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    /// Detaches a node from its neighbours, fixing head and tail.
    fn unlink(&mut self, handle: NodeHandle) {
        let (prev, next) = match self.node(handle) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev) => {
                if let Some(node) = self.node_mut(prev) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next) => {
                if let Some(node) = self.node_mut(next) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::NEVER_EXPIRES;

    fn entry(key: &str) -> CacheEntry {
        CacheEntry::new(key, format!("value_{}", key), NEVER_EXPIRES)
    }

    fn keys(list: &RecencyList) -> Vec<String> {
        list.handles().map(|(_, e)| e.key.clone()).collect()
    }

    #[test]
    fn test_list_new() {
        let list = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(keys(&list).is_empty());
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::new();

        list.push_front(entry("key1"));
        list.push_front(entry("key2"));
        list.push_front(entry("key3"));

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), vec!["key3", "key2", "key1"]);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));

        list.move_to_front(a);

        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        assert_eq!(list.pop_back().map(|e| e.key), Some("b".to_string()));
    }

    #[test]
    fn test_move_tail_to_front_updates_tail() {
        let mut list = RecencyList::new();

        let a = list.push_front(entry("a"));
        let b = list.push_front(entry("b"));

        list.move_to_front(a);
        assert_eq!(keys(&list).last().map(String::as_str), Some("b"));
        list.move_to_front(b);
        assert_eq!(keys(&list).last().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_pop_back() {
        let mut list = RecencyList::new();

        list.push_front(entry("key1"));
        list.push_front(entry("key2"));

        assert_eq!(list.pop_back().map(|e| e.key), Some("key1".to_string()));
        assert_eq!(list.pop_back().map(|e| e.key), Some("key2".to_string()));
        assert!(list.pop_back().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::new();

        list.push_front(entry("a"));
        let b = list.push_front(entry("b"));
        list.push_front(entry("c"));

        let removed = list.remove(b).unwrap();
        assert_eq!(removed.key, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), vec!["c", "a"]);
        assert!(list.get(b).is_none());
    }

    #[test]
    fn test_remove_stale_handle_is_noop() {
        let mut list = RecencyList::new();

        let a = list.push_front(entry("a"));
        list.remove(a);

        assert!(list.remove(a).is_none());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = RecencyList::new();

        let a = list.push_front(entry("a"));
        list.remove(a);
        let b = list.push_front(entry("b"));

        assert_eq!(a, b);
        assert_eq!(list.get(b).map(|e| e.key.as_str()), Some("b"));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = RecencyList::new();

        let a = list.push_front(entry("a"));
        if let Some(e) = list.get_mut(a) {
            e.value = "changed".to_string();
        }

        assert_eq!(list.get(a).map(|e| e.value.as_str()), Some("changed"));
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::new();

        let a = list.push_front(entry("a"));
        let b = list.push_front(entry("b"));
        let c = list.push_front(entry("c"));

        list.move_to_front(a);
        list.move_to_front(c);
        list.move_to_front(b);

        // front=[b, c, a]=back
        assert_eq!(list.pop_back().map(|e| e.key), Some("a".to_string()));
        assert_eq!(list.pop_back().map(|e| e.key), Some("c".to_string()));
        assert_eq!(list.pop_back().map(|e| e.key), Some("b".to_string()));
    }

    #[test]
    fn test_handles_iteration_matches_entries() {
        let mut list = RecencyList::new();

        let a = list.push_front(entry("a"));
        let b = list.push_front(entry("b"));

        let handles: Vec<NodeHandle> = list.handles().map(|(h, _)| h).collect();
        assert_eq!(handles, vec![b, a]);
    }
}
