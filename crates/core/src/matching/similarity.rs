//! Similarity scoring between free-text vehicle names
//!
//! Combines word-level and character-level agreement into a single score in
//! `[0, 1]`. Word-level agreement is the stronger signal for model/trim names
//! ("RAV4 Hybrid" vs "RAV4 Hybrid XLE"), so it carries most of the weight;
//! exact and substring cases short-circuit because they are unambiguous.

use std::collections::HashSet;

use super::normalize::normalize;

const TOKEN_OVERLAP_WEIGHT: f64 = 0.7;
const CHAR_OVERLAP_WEIGHT: f64 = 0.3;
const SUBSTRING_SCORE: f64 = 0.9;

/// Score how closely two free-text names agree.
///
/// Rules, first applicable wins:
/// 1. Identical after normalization: `1.0`
/// 2. One normalized form a substring of the other: `0.9`
/// 3. Weighted blend of token-set Jaccard overlap and greedy ordered
///    character overlap; `0` when neither string has any word token.
///
/// The result is always within `[0, 1]`. The character component uses a
/// single greedy pass, not an edit distance, and is not exactly symmetric
/// when the two normalized forms tie in length; callers' thresholds are
/// tuned against this behavior.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let left = normalize(a);
    let right = normalize(b);

    if left == right {
        return 1.0;
    }

    if left.contains(&right) || right.contains(&left) {
        return SUBSTRING_SCORE;
    }

    let Some(token_overlap) = token_overlap(&left, &right) else {
        return 0.0;
    };

    let char_overlap = ordered_char_overlap(&left, &right);

    TOKEN_OVERLAP_WEIGHT * token_overlap + CHAR_OVERLAP_WEIGHT * char_overlap
}

/// Jaccard similarity over whitespace-split word sets.
///
/// `None` when the union is empty (neither input has a token).
fn token_overlap(left: &str, right: &str) -> Option<f64> {
    let left_tokens: HashSet<&str> = left.split_whitespace().collect();
    let right_tokens: HashSet<&str> = right.split_whitespace().collect();

    let union = left_tokens.union(&right_tokens).count();
    if union == 0 {
        return None;
    }

    let intersection = left_tokens.intersection(&right_tokens).count();
    Some(intersection as f64 / union as f64)
}

/// Greedy single-pass subsequence match.
///
/// Walks the longer string once with a cursor over the shorter; every time
/// the current characters agree the cursor advances. Counts characters found
/// in relative order, divided by the longer length. Empty longer string
/// scores `1.0`.
fn ordered_char_overlap(left: &str, right: &str) -> f64 {
    let (longer, shorter) =
        if left.len() >= right.len() { (left, right) } else { (right, left) };

    if longer.is_empty() {
        return 1.0;
    }

    let shorter_chars: Vec<char> = shorter.chars().collect();
    let mut cursor = 0;
    let mut matched = 0usize;
    let mut total = 0usize;

    for c in longer.chars() {
        total += 1;
        if cursor < shorter_chars.len() && c == shorter_chars[cursor] {
            matched += 1;
            cursor += 1;
        }
    }

    matched as f64 / total as f64
}
