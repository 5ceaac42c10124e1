use super::*;
use crate::OrdTotalOrder;
use alloc::format;

#[test]
fn test_natural_order_matches_ord() {
    let order = OrdTotalOrder::<i32>::default();
    assert_eq!(order.cmp(&1, &2), Ordering::Less);
    assert_eq!(order.cmp(&2, &2), Ordering::Equal);
    assert!(order.lt(&1, &2));
    assert!(order.le(&2, &2));
    assert!(order.gt(&3, &2));
    assert!(order.ge(&3, &3));
    assert!(order.eq(&4, &4));
}

#[test]
fn test_natural_order_on_unsized() {
    let order = OrdTotalOrder::<str>::default();
    assert_eq!(order.cmp("apple", "banana"), Ordering::Less);
}

#[test]
fn test_reversed_flips() {
    let order = Reversed(OrdTotalOrder::<u8>::default());
    assert_eq!(order.cmp(&1, &2), Ordering::Greater);
    assert_eq!(order.cmp(&2, &2), Ordering::Equal);
    assert!(order.lt(&9, &3));

    let twice = Reversed(order);
    assert!(twice.lt(&3, &9));
}

#[test]
fn test_closure_is_total_order() {
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    assert_eq!(TotalOrder::cmp(&by_len, &"ab", &"c"), Ordering::Greater);
    assert_eq!(Comparator::compare(&by_len, &"ab", &"cd"), Ok(Ordering::Equal));
    assert_eq!(Comparator::less(&by_len, &"a", &"cd"), Ok(true));
}

#[test]
fn test_optional_order_without_order() {
    let order: DynOrder<i32> = OptionalOrder::default();
    assert!(!order.is_set());
    assert!(order.get().is_none());
    assert_eq!(
        order.compare(&1, &2).map_err(|e| e.kind()),
        Err(HeapErrorKind::NotComparable)
    );
    assert_eq!(order.less(&1, &1).map_err(|e| e.kind()), Err(HeapErrorKind::NotComparable));
}

#[test]
fn test_optional_order_with_order() {
    let mut order = OptionalOrder::some(OrdTotalOrder::<i32>::default());
    assert!(order.is_set());
    assert_eq!(order.compare(&1, &2), Ok(Ordering::Less));

    let replaced = order.set(OrdTotalOrder::default());
    assert!(replaced.is_some());

    let from: OptionalOrder<OrdTotalOrder<i32>> = None.into();
    assert!(!from.is_set());
    let reversed = OptionalOrder::from(Some(Reversed(OrdTotalOrder::<i32>::default())));
    assert_eq!(reversed.less(&2, &1), Ok(true));
}

#[test]
fn test_optional_order_debug() {
    assert_eq!(format!("{:?}", DynOrder::<u8>::none()), "OptionalOrder(None)");
    let order = DynOrder::boxed(|a: &u8, b: &u8| a.cmp(b));
    assert_eq!(format!("{order:?}"), "OptionalOrder(Some(..))");
}
