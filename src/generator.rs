//! Random input generation.

use rand::Rng;

/// Generate `len` integers drawn uniformly from `low..high` (half-open).
///
/// A fresh array is produced on every call; values are not reproducible
/// across runs, only the shape is.
pub fn generate_array(len: usize, low: i32, high: i32) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(low..high)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_length() {
        assert_eq!(generate_array(0, 1, 1000).len(), 0);
        assert_eq!(generate_array(1, 1, 1000).len(), 1);
        assert_eq!(generate_array(1000, 1, 1000).len(), 1000);
    }

    #[test]
    fn test_values_within_bounds() {
        let data = generate_array(5000, 1, 1000);
        assert!(data.iter().all(|&v| (1..1000).contains(&v)));
    }

    #[test]
    fn test_negative_range() {
        let data = generate_array(500, -50, 50);
        assert!(data.iter().all(|&v| (-50..50).contains(&v)));
    }
}
