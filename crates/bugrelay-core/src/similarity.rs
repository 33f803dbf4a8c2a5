// SPDX-License-Identifier: Apache-2.0

//! Textual similarity scoring for issue titles.
//!
//! Implements a partial-match ratio on a 0-100 scale: the shorter string is
//! slid over same-length character windows of the longer string, each window
//! is scored with a normalized Levenshtein ratio, and the best window wins.
//! A short title fully contained in a long title therefore scores 100.
//!
//! The function is deterministic and pure; comparison is case-insensitive.

/// Computes the partial-match similarity ratio between two strings.
///
/// Returns a score in `0..=100` where identical (or fully contained)
/// strings score 100 and completely disjoint strings score near 0. Both
/// inputs are lowercased before scoring. Two empty strings score 100; an
/// empty string against a non-empty one scores 0.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return if longer.is_empty() { 100 } else { 0 };
    }

    let len = shorter.len();
    let mut best = 0;
    for start in 0..=(longer.len() - len) {
        let window = &longer[start..start + len];
        let score = window_ratio(&shorter, window);
        if score > best {
            best = score;
        }
        if best == 100 {
            break;
        }
    }
    best
}

/// Normalized Levenshtein ratio between two equal-length char slices.
#[allow(clippy::cast_possible_truncation)]
fn window_ratio(a: &[char], b: &[char]) -> u8 {
    let len = a.len();
    let distance = levenshtein(a, b);
    // distance <= len for equal-length inputs, so the ratio fits in 0..=100
    (((len - distance) * 100) / len) as u8
}

/// Levenshtein edit distance over char slices, two-row dynamic programming.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution_cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + substitution_cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
