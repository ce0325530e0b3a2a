// SinglyLinkedList integration suite.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Coherence: len() == 0 iff head() is None iff tail() is None.
// - Splicing: insert_after/remove_after touch only the anchor's link and
//   keep head/tail accurate.
// - Counting: every successful removal decrements len() by exactly one.
// - Handles: generational, so a removed node's handle never aliases a
//   later insertion.
use chained_table::SinglyLinkedList;

// Test: the list-level push/pop identity.
// Assumes: insert_after(None, v) prepends.
// Verifies: remove_after(None) returns v and restores the pre-insert
// size, head, and tail.
#[test]
fn head_insert_then_head_remove_restores_state() {
    let mut list = SinglyLinkedList::new();
    let a = list.insert_after(None, 1).unwrap();
    let b = list.insert_after(Some(a), 2).unwrap();
    let (old_len, old_head, old_tail) = (list.len(), list.head(), list.tail());

    list.insert_after(None, 99).unwrap();
    assert_eq!(list.len(), old_len + 1);

    assert_eq!(list.remove_after(None), Some(99));
    assert_eq!(list.len(), old_len);
    assert_eq!(list.head(), old_head);
    assert_eq!(list.tail(), old_tail);
    assert_eq!(list.tail(), Some(b));
}

// Test: ordered conversion to a sequence.
// Assumes: iter() walks head to tail following node links.
// Verifies: appending via the tail handle yields insertion order, and a
// second pass repeats it (restartable).
#[test]
fn append_order_is_preserved_by_iter() {
    let mut list = SinglyLinkedList::new();
    for v in ["a", "b", "c", "d"] {
        let tail = list.tail();
        list.insert_after(tail, v).unwrap();
    }
    let once: Vec<_> = list.iter().copied().collect();
    let twice: Vec<_> = list.iter().copied().collect();
    assert_eq!(once, vec!["a", "b", "c", "d"]);
    assert_eq!(once, twice);
}

// Test: tail maintenance across tail removals.
// Assumes: remove_after(anchor) removes the anchor's successor.
// Verifies: when the removed node was the tail, the anchor becomes the
// tail and appending through it still works.
#[test]
fn removing_the_tail_retargets_it_to_the_anchor() {
    let mut list = SinglyLinkedList::new();
    let a = list.insert_after(None, 1).unwrap();
    let b = list.insert_after(Some(a), 2).unwrap();
    list.insert_after(Some(b), 3).unwrap();

    assert_eq!(list.remove_after(Some(b)), Some(3));
    assert_eq!(list.tail(), Some(b));
    assert_eq!(list.remove_after(Some(a)), Some(2));
    assert_eq!(list.tail(), Some(a));
    assert_eq!(list.head(), Some(a));
    assert_eq!(list.len(), 1);

    // The survivor is still a usable append anchor.
    list.insert_after(Some(a), 4).unwrap();
    let seq: Vec<_> = list.iter().copied().collect();
    assert_eq!(seq, vec![1, 4]);
}

// Test: misses are results, not errors.
// Assumes: remove_after returns None rather than panicking.
// Verifies: empty-list removal, no-successor removal, and stale-anchor
// removal all miss and leave the list untouched.
#[test]
fn removal_misses_leave_the_list_untouched() {
    let mut list: SinglyLinkedList<u8> = SinglyLinkedList::new();
    assert_eq!(list.remove_after(None), None);

    let only = list.insert_after(None, 7).unwrap();
    assert_eq!(list.remove_after(Some(only)), None, "tail has no successor");
    assert_eq!(list.len(), 1);

    assert_eq!(list.remove_after(None), Some(7));
    assert_eq!(list.remove_after(Some(only)), None, "anchor is stale now");
    assert!(list.is_empty());
}

// Test: handle staleness.
// Assumes: the node arena uses generational keys.
// Verifies: a handle to a removed node resolves to nothing even after
// new insertions reuse its slot, and differs from every fresh handle.
#[test]
fn stale_handles_never_resolve() {
    let mut list = SinglyLinkedList::new();
    let old = list.insert_after(None, 10).unwrap();
    assert_eq!(list.remove_after(None), Some(10));

    let fresh = list.insert_after(None, 20).unwrap();
    assert_ne!(old, fresh);
    assert_eq!(old.data(&list), None);
    assert_eq!(fresh.data(&list), Some(&20));
}

// Test: payload ownership transfers on removal.
// Assumes: remove_after returns the payload by value.
// Verifies: a non-Copy payload comes back intact and the list no longer
// holds it.
#[test]
fn removal_hands_back_owned_payloads() {
    let mut list = SinglyLinkedList::new();
    list.insert_after(None, String::from("owned")).unwrap();
    let out = list.remove_after(None).expect("head present");
    assert_eq!(out, "owned");
    assert!(list.is_empty());
}
