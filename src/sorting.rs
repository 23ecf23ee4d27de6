//! The two comparison sorts being raced.
//!
//! Both sort ascending, in place, and are stable. Neither allocates.

/// Bubble sort: adjacent-pair swaps over decreasing-length passes.
///
/// Quadratic in the worst case. No early-exit optimization; every pass
/// runs to its shrinking end.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Insertion sort: for each position from the second element onward,
/// shift larger predecessors rightward until the element sits in its slot.
///
/// The shifting is done with swaps so the element type only needs `Ord`.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_bubble_sort_basic() {
        let mut data = vec![5, 3, 1, 4, 2];
        bubble_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insertion_sort_basic() {
        let mut data = vec![5, 3, 1, 4, 2];
        insertion_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        bubble_sort(&mut empty);
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        bubble_sort(&mut one);
        assert_eq!(one, vec![42]);
        insertion_sort(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_preserves_elements() {
        let original = vec![9, -3, 7, 7, 0, 12, -3, 5, 1, 1, 1];
        let mut expected = original.clone();
        expected.sort();

        let mut by_bubble = original.clone();
        bubble_sort(&mut by_bubble);
        assert_eq!(by_bubble, expected);

        let mut by_insertion = original;
        insertion_sort(&mut by_insertion);
        assert_eq!(by_insertion, expected);
    }

    #[test]
    fn test_sorts_agree() {
        let original: Vec<i32> = (0..200).map(|i| (i * 7919) % 337 - 100).collect();

        let mut a = original.clone();
        let mut b = original;
        bubble_sort(&mut a);
        insertion_sort(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_already_sorted_idempotent() {
        let mut data: Vec<i32> = (1..=50).collect();
        let snapshot = data.clone();
        bubble_sort(&mut data);
        assert_eq!(data, snapshot);
        insertion_sort(&mut data);
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut data: Vec<i32> = (1..=50).rev().collect();
        bubble_sort(&mut data);
        assert_eq!(data, (1..=50).collect::<Vec<_>>());
    }

    // Element whose ordering ignores the tag, so stability is observable.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tagged {
        key: i32,
        tag: usize,
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    fn tagged(keys: &[i32]) -> Vec<Tagged> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect()
    }

    #[test]
    fn test_bubble_sort_stable() {
        let mut data = tagged(&[2, 1, 2, 1, 2]);
        bubble_sort(&mut data);
        let tags_of_twos: Vec<usize> =
            data.iter().filter(|t| t.key == 2).map(|t| t.tag).collect();
        assert_eq!(tags_of_twos, vec![0, 2, 4]);
    }

    #[test]
    fn test_insertion_sort_stable() {
        let mut data = tagged(&[2, 1, 2, 1, 2]);
        insertion_sort(&mut data);
        let tags_of_twos: Vec<usize> =
            data.iter().filter(|t| t.key == 2).map(|t| t.tag).collect();
        assert_eq!(tags_of_twos, vec![0, 2, 4]);
    }
}
