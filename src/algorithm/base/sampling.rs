use rand::Rng;
use rand_chacha::ChaChaRng;


/// Index of the first strictly greatest value, or -1 when the slice is
/// empty or nothing exceeds -1.0.
pub fn arg_max(items: &[f64]) -> i32 {
    let mut max_val = -1.0;
    let mut max_i = -1;
    for (i, &item) in items.iter().enumerate() {
        if max_val < item {
            max_val = item;
            max_i = i as i32;
        }
    }
    max_i
}

/// Weighted-random sample over a probability vector: cumulative-sum walk in
/// natural index order, falling back to 0 on degenerate input.
pub fn pick(items: &[f64], rng: &mut ChaChaRng) -> usize {
    let p = rng.gen::<f64>();
    let mut cumulative = 0.0;
    for (i, &item) in items.iter().enumerate() {
        cumulative += item;
        if p <= cumulative {
            return i;
        }
    }
    0
}

/// In-place Fisher-Yates: slot i swaps with a slot drawn uniformly from
/// [i, len).
pub fn shuffle_ints(slice: &mut [usize], rng: &mut ChaChaRng) {
    let n = slice.len();
    for i in 0..n {
        let r = i + rng.gen_range(0..n - i);
        slice.swap(i, r);
    }
}
