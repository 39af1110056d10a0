use crate::error::{Error, Result};
use log::{debug, trace};

/// Binary max-heap stored as an implicit tree in a `Vec`.
///
/// For an element at index `i` its parent lives at `(i - 1) / 2` and its
/// children at `2i + 1` and `2i + 2`. Every parent compares greater than or
/// equal to its children, so the maximum is always at index 0.
#[derive(Clone, Debug)]
pub struct MaxHeap<T: Ord> {
    values: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        MaxHeap { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MaxHeap {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn sort(input: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        debug!("sorting {} elements", input.len());
        input.iter().cloned().collect::<Self>().into_sorted_vec()
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
        self.siftup(self.values.len() - 1);
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.values.is_empty() {
            return Err(Error::EmptyHeap);
        }
        // last element takes the root slot
        let value = self.values.swap_remove(0);
        if !self.values.is_empty() {
            self.siftdown(0);
        }
        Ok(value)
    }

    pub fn top(&self) -> Result<&T> {
        self.values.first().ok_or(Error::EmptyHeap)
    }

    pub fn find(&self, value: &T) -> bool {
        self.values.iter().any(|x| x == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        debug!("clearing {} elements", self.values.len());
        self.values.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.values.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    fn siftup(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.values[parent] < self.values[index] {
                trace!("siftup: swapping {} and parent {}", index, parent);
                self.values.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn siftdown(&mut self, mut index: usize) {
        let len = self.values.len();
        loop {
            let left_idx = 2 * index + 1;
            let right_idx = 2 * index + 2;

            // Strict comparisons: equal children never move, left wins over
            // an equal right.
            let mut greater_idx = index;
            if left_idx < len && self.values[left_idx] > self.values[greater_idx] {
                greater_idx = left_idx;
            }
            if right_idx < len && self.values[right_idx] > self.values[greater_idx] {
                greater_idx = right_idx;
            }

            if greater_idx == index {
                break;
            }
            trace!("siftdown: swapping {} and child {}", index, greater_idx);
            self.values.swap(index, greater_idx);
            index = greater_idx;
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MaxHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.values.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}
