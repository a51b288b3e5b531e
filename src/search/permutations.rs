use std::iter::FusedIterator;

/// Lazy iterator over every ordering of a slice.
///
/// Orderings are produced in lexicographic order of source positions, so the
/// first item is the input itself. Positions are permuted rather than values:
/// a slice with repeated values still yields all `n!` orderings.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

pub fn permutations<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations {
        items: items.to_vec(),
        indices: (0..items.len()).collect(),
        started: false,
        exhausted: false,
    }
}

impl<T> Permutations<T> {
    /// Step `indices` to the next lexicographic ordering, returning false after the last one
    fn advance(&mut self) -> bool {
        let len = self.indices.len();
        if len < 2 {
            return false;
        }

        // Rightmost position whose successor is larger
        let Some(pivot) = (0..len - 1)
            .rev()
            .find(|&i| self.indices.get(i) < self.indices.get(i + 1))
        else {
            return false;
        };

        let Some(&pivot_value) = self.indices.get(pivot) else {
            return false;
        };
        let Some(swap) = (pivot + 1..len)
            .rev()
            .find(|&j| self.indices.get(j).is_some_and(|&v| v > pivot_value))
        else {
            return false;
        };

        self.indices.swap(pivot, swap);
        if let Some(tail) = self.indices.get_mut(pivot + 1..) {
            tail.reverse();
        }
        true
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if self.started {
            if !self.advance() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }

        self.indices
            .iter()
            .map(|&i| self.items.get(i).cloned())
            .collect()
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}
