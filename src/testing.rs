use crate::compare::Comparator;
use crate::priority_queue::BinaryHeap;
use core::cmp::Ordering;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub fn init_test() {
    drop(env_logger::try_init());
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Task {
    pub name: String,
    pub priority: i32,
}

pub fn task(name: &str, priority: i32) -> Task {
    Task {
        name: name.to_string(),
        priority,
    }
}

/// Lowest priority value first.
pub fn by_priority(a: &Task, b: &Task) -> Ordering {
    (a.priority - b.priority).cmp(&0)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `0..n` in a shuffled order that depends only on `seed`.
pub fn shuffled_range(n: u32, seed: u64) -> Vec<u32> {
    let mut values: Vec<u32> = (0..n).collect();
    values.shuffle(&mut seeded_rng(seed));
    values
}

/// Checks that no item compares as `Greater` than its parent.
pub fn assert_heap_property<T, C: Comparator<T>>(heap: &BinaryHeap<T, C>) {
    let items = heap.as_slice();
    for i in 1..items.len() {
        let parent = (i - 1) / 2;
        assert_ne!(
            heap.comparator().compare(&items[parent], &items[i]),
            Ordering::Greater,
            "heap property violated at index {}",
            i
        );
    }
}

/// Extracts every item, in extraction order.
pub fn drain<T, C: Comparator<T>>(heap: &mut BinaryHeap<T, C>) -> Vec<T> {
    let mut out = Vec::new();
    while let Some(item) = heap.extract_top() {
        out.push(item);
    }
    out
}
