use core::cmp::Ordering;

/// Decides which of two items belongs closer to the root of a heap.
///
/// `Ordering::Less` means `a` is more root-worthy than `b`. The ordering
/// should be consistent for the lifetime of the heap that owns it.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Smallest item at the root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MinOrder;

impl<T: Ord> Comparator<T> for MinOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Greatest item at the root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MaxOrder;

impl<T: Ord> Comparator<T> for MaxOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Orders items by a key extracted from each one; smallest key first.
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}
