use crate::compare::{Comparator, MaxOrder, MinOrder};
use crate::error::Error;
use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use log::{debug, trace};

/// A priority queue stored as an implicit binary tree in a `Vec`.
///
/// The item at index 0 is the one the comparator ranks most root-worthy.
/// Every other item compares as `Equal` or `Greater` than its parent.
pub struct BinaryHeap<T, C = MinOrder> {
    pq: Vec<T>,
    compare: C,
}

/// Construction parameters for `BinaryHeap::from_options`.
pub struct Options<C> {
    pub compare: Option<C>,
    pub capacity: usize,
}

impl<C> Default for Options<C> {
    fn default() -> Self {
        Self {
            compare: None,
            capacity: 0,
        }
    }
}

fn left(parent: usize) -> usize { parent * 2 + 1 }
fn right(parent: usize) -> usize { parent * 2 + 2 }
fn parent(child: usize) -> usize { (child - 1) / 2 }

impl<T: Ord> BinaryHeap<T, MinOrder> {
    /// Extracts the smallest item first.
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: Ord> BinaryHeap<T, MaxOrder> {
    /// Extracts the greatest item first.
    pub fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    pub fn new(compare: C) -> Self {
        Self::with_capacity(0, compare)
    }

    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        debug!("BinaryHeap: new, capacity = {}", capacity);
        Self {
            pq: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Builds a heap from an options value. Fails if no comparator was given.
    pub fn from_options(options: Options<C>) -> Result<Self, Error> {
        match options.compare {
            Some(compare) => Ok(Self::with_capacity(options.capacity, compare)),
            None => Err(Error::MissingComparator),
        }
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn len(&self) -> usize {
        self.pq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    pub fn clear(&mut self) {
        debug!("BinaryHeap: clear, dropping {} items", self.pq.len());
        self.pq.clear();
    }

    /// Returns the most root-worthy item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.pq.first()
    }

    /// Inserts an item into the partially-sorted heap.
    pub fn insert(&mut self, item: T) {
        self.pq.push(item);
        self.sift_up(self.pq.len() - 1);
    }

    /// Removes the most root-worthy item, or returns `None` if the heap is empty.
    pub fn extract_top(&mut self) -> Option<T> {
        let last = self.pq.pop()?;
        if self.pq.is_empty() {
            return Some(last);
        }
        let top = core::mem::replace(&mut self.pq[0], last);
        self.sift_down(0);
        Some(top)
    }

    fn cmp_at(&self, a: usize, b: usize) -> Ordering {
        self.compare.compare(&self.pq[a], &self.pq[b])
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = parent(i);
            if self.cmp_at(parent, i) != Ordering::Greater {
                break;
            }
            trace!("sift_up: {} -> {}", i, parent);
            self.pq.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.pq.len();
        loop {
            // Strict comparisons: the current item wins ties, then the left child.
            let mut best = i;
            let left = left(i);
            if left < len && self.cmp_at(left, best) == Ordering::Less {
                best = left;
            }
            let right = right(i);
            if right < len && self.cmp_at(right, best) == Ordering::Less {
                best = right;
            }
            if best == i {
                break;
            }
            trace!("sift_down: {} -> {}", i, best);
            self.pq.swap(i, best);
            i = best;
        }
    }

    /// The backing sequence, in array order.
    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.pq
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.pq.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Debug, C> Debug for BinaryHeap<T, C> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for item in self.pq.iter() {
            write!(fmt, "{:?} ", item)?;
        }
        Ok(())
    }
}
