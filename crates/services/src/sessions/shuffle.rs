use rand::Rng;

/// Fisher–Yates shuffle over a mutable slice.
///
/// For index i from n−1 down to 1, the element at i is swapped with a
/// uniformly chosen element from [0, i], producing a uniformly random
/// permutation in O(n). Slices of length 0 or 1 are left untouched.
///
/// The random source is injected so callers can pin it down in tests.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
