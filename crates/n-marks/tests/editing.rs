//! End-to-end: marks tracking a live rope buffer through an editing session.
//!
//! Drives a [`MarkStore`] the way a host would — toggle marks, edit the
//! rope, report the new line count and edit origin — and checks that the
//! marks keep pointing at the same *content* lines afterwards.

use n_marks::marks::Toggle;
use n_marks::store::MarkStore;
use pretty_assertions::assert_eq;
use ropey::Rope;

const BUFFER: usize = 0;

/// The text of a 1-indexed line, without its line ending.
fn line_text(rope: &Rope, line: usize) -> String {
    let mut text = rope.line(line - 1).to_string();
    while text.ends_with(['\n', '\r']) {
        text.pop();
    }
    text
}

/// Char index where the 1-indexed line starts.
fn line_start(rope: &Rope, line: usize) -> usize {
    rope.line_to_char(line - 1)
}

#[test]
fn marks_follow_their_lines_through_edits() {
    let mut rope = Rope::from_str("alpha\nbravo\ncharlie\ndelta\necho");
    let mut store = MarkStore::new();

    // Mark "bravo" (line 2) and "delta" (line 4).
    assert_eq!(store.toggle(BUFFER, 2), Toggle::Added);
    assert_eq!(store.toggle(BUFFER, 4), Toggle::Added);

    // Seed the remembered line count.
    assert!(store.reconcile(BUFFER, rope.len_lines(), 1).is_empty());
    assert_eq!(rope.len_lines(), 5);

    // Insert two lines above "bravo".
    rope.insert(line_start(&rope, 2), "foxtrot\ngolf\n");
    let result = store.reconcile(BUFFER, rope.len_lines(), 2);
    assert_eq!(result.moved, vec![(2, 4), (4, 6)]);
    assert!(result.dropped.is_empty());

    // The marks still anchor the same content.
    assert_eq!(line_text(&rope, 4), "bravo");
    assert_eq!(line_text(&rope, 6), "delta");

    // Delete the single line "bravo" (line 4): its mark is gone, the
    // "delta" mark slides up.
    rope.remove(line_start(&rope, 4)..line_start(&rope, 5));
    let result = store.reconcile(BUFFER, rope.len_lines(), 4);
    assert_eq!(result.dropped, vec![4]);
    assert_eq!(result.moved, vec![(6, 5)]);
    assert_eq!(line_text(&rope, 5), "delta");

    // One mark left: navigation finds it from anywhere, wrapping from it.
    let target = store.next(BUFFER, 1).unwrap();
    assert_eq!(target.line, 5);
    assert!(!target.wrapped);
    assert!(store.next(BUFFER, 5).unwrap().wrapped);
}

#[test]
fn reconcile_on_cursor_move_without_edit_is_a_noop() {
    let rope = Rope::from_str("one\ntwo\nthree");
    let mut store = MarkStore::new();
    let _ = store.toggle(BUFFER, 2);
    let _ = store.reconcile(BUFFER, rope.len_lines(), 1);

    // A host wired to a cursor-move hook reconciles on every movement;
    // most calls see no line-count change.
    for cursor in [1, 3, 2, 1] {
        assert!(store.reconcile(BUFFER, rope.len_lines(), cursor).is_empty());
    }
    assert!(store.contains(BUFFER, 2));
}

#[test]
fn each_buffer_tracks_its_own_rope() {
    let mut left = Rope::from_str("a\nb\nc\nd");
    let right = Rope::from_str("x\ny\nz");
    let mut store = MarkStore::new();

    let _ = store.toggle(0, 3);
    let _ = store.toggle(1, 2);
    let _ = store.reconcile(0, left.len_lines(), 1);
    let _ = store.reconcile(1, right.len_lines(), 1);

    // Edit only the left buffer.
    left.insert(0, "top\n");
    let result = store.reconcile(0, left.len_lines(), 1);
    assert_eq!(result.moved, vec![(3, 4)]);
    assert_eq!(line_text(&left, 4), "c");

    // The right buffer's mark never moved.
    assert!(store.contains(1, 2));
    assert_eq!(line_text(&right, 2), "y");
}
