//! Character and token similarity metrics.
//!
//! Two metrics drive the matchers: a character-level sequence similarity
//! ratio (Ratcliff/Obershelp: matched characters across longest common
//! blocks, doubled, over the combined length) and a Jaccard ratio over
//! unique whitespace-split tokens.

use std::collections::HashMap;
use std::collections::HashSet;

/// Character-level sequence similarity in [0, 1].
///
/// Finds the longest block of characters common to `a` and `b`, recurses
/// into the unmatched stretches on either side, and sums the matched
/// character count M over all blocks. The ratio is `2·M / (len(a) + len(b))`.
/// Two empty strings are fully similar (1.0).
///
/// The result is deterministic for a fixed argument order; when several
/// longest blocks tie, the earliest in `a` (then the earliest in `b`) wins.
/// The matchers always pass the query text first and the candidate second.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let positions = char_positions(&b_chars);
    let matched = matched_char_count(&a_chars, &positions);

    2.0 * matched as f64 / total as f64
}

/// Jaccard similarity over unique whitespace-split tokens, in [0, 1].
///
/// Returns 0.0 when either token set is empty; there is no overlap to
/// measure.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let a_tokens: HashSet<&str> = a.split_whitespace().collect();
    let b_tokens: HashSet<&str> = b.split_whitespace().collect();

    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let intersection = a_tokens.intersection(&b_tokens).count();
    let union = a_tokens.union(&b_tokens).count();

    intersection as f64 / union as f64
}

/// Positions of each character in `b`, in ascending order.
fn char_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        positions.entry(c).or_default().push(j);
    }
    positions
}

/// Total characters covered by the longest-common-block decomposition.
///
/// Works through an explicit stack of (a-range, b-range) segments: locate
/// the longest matching block within the segment, count it, and queue the
/// unmatched stretches to its left and right.
fn matched_char_count(a: &[char], positions: &HashMap<char, Vec<usize>>) -> usize {
    let b_len = positions.values().map(Vec::len).sum();

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b_len)];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_block(a, positions, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        pending.push((alo, i, blo, j));
        pending.push((i + size, ahi, j + size, bhi));
    }

    matched
}

/// Longest matching block between `a[alo..ahi]` and the `b` positions
/// restricted to `[blo, bhi)`, as (start in a, start in b, length).
///
/// Ties are broken toward the earliest start in `a`, then in `b`.
fn longest_block(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // lengths of blocks ending at each b position for the previous a index
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_run_lengths: HashMap<usize, usize> = HashMap::new();
        if let Some(js) = positions.get(&a[i]) {
            for &j in js {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let length = if j > blo {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_run_lengths.insert(j, length);
                if length > best_size {
                    best_i = i + 1 - length;
                    best_j = j + 1 - length;
                    best_size = length;
                }
            }
        }
        run_lengths = next_run_lengths;
    }

    (best_i, best_j, best_size)
}
