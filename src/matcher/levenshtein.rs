//! Levenshtein edit distance algorithm.
//!
//! Compares whole `char`s as yielded by [`str::chars`]. No normalization and
//! no case folding: `"Ann"` and `"ann"` are one substitution apart.

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character edits (insertions,
/// deletions, substitutions) required to transform `a` into `b`.
/// Runs in O(m*n) time for any input size.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full (m+1) x (n+1) table.
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j] // deletion
                    .min(curr[j - 1]) // insertion
                    .min(prev[j - 1]) // substitution
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Compute similarity ratio between two strings (0.0 = completely different,
/// 1.0 = identical).
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let dist = distance(a, b);
    1.0 - (dist as f64 / max_len as f64)
}
