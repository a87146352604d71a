//! Levenshtein edit distance.
//!
//! Used by the text matcher for typo-tolerant term matching. Distances are
//! measured in single-character insertions, deletions, and substitutions
//! over Unicode scalar values, not bytes.

/// Compute the Levenshtein edit distance between two strings.
///
/// Classic two-row dynamic programming, O(a.len() * b.len()) time and
/// O(b.len()) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Edit distance divided by the length of `a`, the usual normalization when
/// `a` is the query term.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let len = a.chars().count();
    if len == 0 {
        return if b.is_empty() { 0.0 } else { f64::INFINITY };
    }
    levenshtein(a, b) as f64 / len as f64
}
