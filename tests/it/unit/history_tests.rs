//! Unit tests for the bounded undo/redo history.

use paintcrop::constants::MAX_HISTORY_STATES;
use paintcrop::history::{HistoryManager, HistoryState};

#[test]
fn test_default_capacity() {
    let h: HistoryManager<u8> = HistoryManager::default();
    assert_eq!(h.capacity(), MAX_HISTORY_STATES);
    assert!(h.is_empty());
    assert_eq!(h.cursor(), None);
}

#[test]
fn test_boundaries_are_noops() {
    let mut h = HistoryManager::new(5);
    h.push("baseline");
    assert_eq!(h.undo(), None);
    assert_eq!(h.redo(), None);
    assert_eq!(h.cursor(), Some(0));
    assert_eq!(h.current(), Some(&"baseline"));
}

#[test]
fn test_never_exceeds_capacity() {
    let mut h = HistoryManager::new(MAX_HISTORY_STATES);
    for i in 0..(MAX_HISTORY_STATES * 3) {
        h.push(i);
        assert!(h.len() <= MAX_HISTORY_STATES);
        assert_eq!(h.current(), Some(&i));
    }
}

#[test]
fn test_eviction_drops_exactly_the_oldest() {
    let mut h = HistoryManager::new(MAX_HISTORY_STATES);
    for i in 0..MAX_HISTORY_STATES {
        h.push(i);
    }
    assert_eq!(h.len(), MAX_HISTORY_STATES);
    h.push(MAX_HISTORY_STATES);
    assert_eq!(h.len(), MAX_HISTORY_STATES);
    assert_eq!(h.cursor(), Some(MAX_HISTORY_STATES - 1));

    let mut oldest = None;
    while let Some(v) = h.undo() {
        oldest = Some(*v);
    }
    assert_eq!(oldest, Some(1));
}

#[test]
fn test_eviction_while_behind_cursor() {
    let mut h = HistoryManager::new(3);
    h.push('a');
    h.push('b');
    h.push('c');
    h.undo();
    // Branch 'c' is pruned first, so nothing is evicted
    h.push('d');
    assert_eq!(h.len(), 3);
    h.push('e');
    assert_eq!(h.len(), 3);
    assert_eq!(h.current(), Some(&'e'));
    assert_eq!(h.undo(), Some(&'d'));
    assert_eq!(h.undo(), Some(&'b'));
    assert_eq!(h.undo(), None);
}

#[test]
fn test_redo_unreachable_after_push() {
    let mut h = HistoryManager::new(10);
    for i in 0..5 {
        h.push(i);
    }
    h.undo();
    h.undo();
    h.push(99);
    assert!(!h.can_redo());
    assert_eq!(h.redo(), None);
    assert_eq!(h.len(), 4);
}

#[test]
fn test_state_flags() {
    let mut h = HistoryManager::new(10);
    h.push(0);
    assert_eq!(h.state(), HistoryState { can_undo: false, can_redo: false });
    h.push(1);
    assert_eq!(h.state(), HistoryState { can_undo: true, can_redo: false });
    h.undo();
    assert_eq!(h.state(), HistoryState { can_undo: false, can_redo: true });
}

#[test]
fn test_zero_capacity_keeps_one() {
    let mut h = HistoryManager::new(0);
    h.push(1);
    h.push(2);
    assert_eq!(h.len(), 1);
    assert_eq!(h.current(), Some(&2));
}
