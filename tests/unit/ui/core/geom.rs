use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2);
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));
    assert!(!r.contains(Pos::new(9, 20)));
}

#[test]
fn rect_empty_never_contains() {
    assert!(!Rect::new(0, 0, 0, 10).contains(Pos::new(0, 0)));
    assert!(!Rect::new(0, 0, 10, 0).contains(Pos::new(0, 0)));
}

#[test]
fn intersect_overlapping_and_disjoint() {
    let a = Rect::new(0, 0, 10, 4);
    assert_eq!(a.intersect(Rect::new(5, 2, 10, 10)), Rect::new(5, 2, 5, 2));
    assert!(a.intersect(Rect::new(20, 20, 3, 3)).is_empty());
}

#[test]
fn inset_saturates() {
    assert_eq!(Rect::new(0, 0, 10, 5).inset(1), Rect::new(1, 1, 8, 3));
    assert!(Rect::new(0, 0, 1, 1).inset(1).is_empty());
}

#[test]
fn split_top_and_rows() {
    let (top, rest) = Rect::new(2, 3, 8, 5).split_top(2);
    assert_eq!(top, Rect::new(2, 3, 8, 2));
    assert_eq!(rest, Rect::new(2, 5, 8, 3));
    assert_eq!(rest.row(2), Some(Rect::new(2, 7, 8, 1)));
    assert_eq!(rest.row(3), None);

    let (all, none) = Rect::new(0, 0, 4, 1).split_top(5);
    assert_eq!(all.h, 1);
    assert!(none.is_empty());
}
