//! Tests for `#[derive(Truthy)]`.

#![cfg(feature = "derive")]

use tola_seq::prelude::*;

#[derive(Truthy)]
struct Flag(bool);

#[derive(Truthy)]
struct Count {
    n: u32,
}

#[derive(Truthy)]
struct Row {
    #[allow(dead_code)]
    id: u64,
    #[truthy]
    selected: bool,
}

#[derive(Truthy)]
struct Wrapper<T> {
    inner: T,
}

#[derive(Truthy)]
struct Always;

#[derive(Clone, Copy, Truthy)]
enum Mark {
    Keep,
    #[falsy]
    Drop,
    Weight(#[allow(dead_code)] u8),
    #[falsy]
    Skipped {
        #[allow(dead_code)]
        reason: u8,
    },
}

#[test]
fn test_struct_delegates_to_field() {
    assert!(Flag(true).is_truthy());
    assert!(!Flag(false).is_truthy());
    assert!(Count { n: 3 }.is_truthy());
    assert!(!Count { n: 0 }.is_truthy());
}

#[test]
fn test_marked_field_decides() {
    assert!(Row { id: 0, selected: true }.is_truthy());
    assert!(!Row { id: 42, selected: false }.is_truthy());
}

#[test]
fn test_generic_struct() {
    assert!(Wrapper { inner: Some(()) }.is_truthy());
    assert!(!Wrapper { inner: 0.0f32 }.is_truthy());
    assert!(Wrapper { inner: Wrapper { inner: 'x' } }.is_truthy());
}

#[test]
fn test_unit_struct_is_truthy() {
    assert!(Always.is_truthy());
}

#[test]
fn test_enum_falsy_variants() {
    assert!(Mark::Keep.is_truthy());
    assert!(!Mark::Drop.is_truthy());
    assert!(Mark::Weight(0).is_truthy());
    assert!(!Mark::Skipped { reason: 1 }.is_truthy());
}

#[test]
fn test_derived_stencil() {
    let marks = [Mark::Keep, Mark::Drop, Mark::Weight(2), Mark::Skipped { reason: 0 }];
    let mut out = Vec::new();
    copy_when(&["a", "b", "c", "d"][..], &marks[..], back_inserter(&mut out));
    assert_eq!(out, vec!["a", "c"]);
}
