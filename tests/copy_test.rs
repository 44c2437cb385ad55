//! Tests for the unconditional copy.

use tola_seq::prelude::*;

// =============================================================================
// Contents and order
// =============================================================================

#[test]
fn test_copy_slice_to_slice() {
    let src = [1, 2, 3, 4];
    let mut out = [0; 4];
    let end = copy(&src[..], SliceCursor::new(&mut out));
    assert_eq!(end.position(), 4);
    assert_eq!(out, src);
}

#[test]
fn test_copy_returns_one_past_last_written() {
    let mut out = [0; 6];
    let end = copy(&[9, 8][..], SliceCursor::new(&mut out));
    assert_eq!(end.position(), 2);
    assert_eq!(end.into_written(), &[9, 8]);
}

#[test]
fn test_copy_into_back_inserter() {
    let mut out = vec![0];
    let end = copy(&[1, 2, 3][..], back_inserter(&mut out));
    assert_eq!(OutputCursor::<i32>::written(&end), 3);
    assert_eq!(out, vec![0, 1, 2, 3]);
}

#[test]
fn test_copy_from_every_traversal() {
    let expected = vec![1, 2, 3];

    let mut a = Vec::new();
    copy(SinglePass::new(vec![1, 2, 3]), back_inserter(&mut a));
    let mut b = Vec::new();
    copy(Forward::new(1..4), back_inserter(&mut b));
    let mut c = [0; 3];
    copy(Bidirectional::new(1..4), SliceCursor::new(&mut c));

    assert_eq!(a, expected);
    assert_eq!(b, expected);
    assert_eq!(c.to_vec(), expected);
}

#[test]
fn test_copy_reversed_bidirectional() {
    let mut out = Vec::new();
    copy(Bidirectional::new(1..4).reversed(), back_inserter(&mut out));
    assert_eq!(out, vec![3, 2, 1]);
}

#[test]
fn test_copy_non_copy_elements() {
    let src = vec![String::from("a"), String::from("bc")];
    let mut out = vec![String::new(); 2];
    copy(&src, SliceCursor::new(&mut out));
    assert_eq!(out, src);
}

// =============================================================================
// Empty source
// =============================================================================

#[test]
fn test_copy_empty_returns_destination_unchanged() {
    let mut out = [7; 3];
    let src: [i32; 0] = [];
    let end = copy(&src[..], SliceCursor::new(&mut out));
    assert_eq!(end.position(), 0);
    assert_eq!(out, [7; 3]);
}

#[test]
fn test_copy_empty_into_zero_length_destination() {
    let mut out: [i32; 0] = [];
    let end = copy(Forward::new(0..0), SliceCursor::new(&mut out));
    assert_eq!(end.position(), 0);
}

#[test]
fn test_copy_empty_single_pass() {
    let mut out: Vec<u8> = Vec::new();
    let end = copy(SinglePass::new(Vec::<u8>::new()), back_inserter(&mut out));
    assert_eq!(OutputCursor::<u8>::written(&end), 0);
    assert!(out.is_empty());
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
#[should_panic]
fn test_copy_short_destination_panics() {
    let mut out = [0; 2];
    copy(&[1, 2, 3][..], SliceCursor::new(&mut out));
}
