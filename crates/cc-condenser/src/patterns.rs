//! Repeating-window search and the greedy substitution plan.

use std::collections::HashMap;

/// One planned substitution: every occurrence of `pattern` becomes `digit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub digit: char,
    pub pattern: String,
}

/// Decimal digits that do not occur anywhere in `s`, in ascending order.
/// Only these are safe to repurpose as substitution variables.
pub fn free_digits(s: &str) -> Vec<char> {
    ('0'..='9').filter(|d| !s.contains(*d)).collect()
}

/// Count non-overlapping fixed-size windows for sizes `max_len` down to
/// `min_len` (stepping by the window size, not sliding). Returns the windows
/// seen more than once whose length equals the top-scoring window's length,
/// ranked descending by occurrences × length. Ties break lexicographically so
/// the plan is deterministic.
pub fn find_patterns(s: &str, max_len: usize, min_len: usize) -> Vec<(String, usize)> {
    let chars: Vec<char> = s.chars().collect();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for size in (min_len..=max_len).rev() {
        let mut n = 0;
        while n + size <= chars.len() {
            let window: String = chars[n..n + size].iter().collect();
            *counts.entry(window).or_insert(0) += 1;
            n += size;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| {
        let score_a = a.1 * a.0.chars().count();
        let score_b = b.1 * b.0.chars().count();
        score_b.cmp(&score_a).then_with(|| a.0.cmp(&b.0))
    });

    let best_len = match ranked.first() {
        Some((pattern, _)) => pattern.chars().count(),
        None => return Vec::new(),
    };
    ranked.retain(|(pattern, count)| *count > 1 && pattern.chars().count() == best_len);
    ranked
}

/// Pair free digits with ranked patterns in order and keep the whole plan
/// only if the characters saved by substitution beat the characters spent on
/// the variable header (including its ':' terminator).
pub fn plan_substitutions(free: &[char], ranked: &[(String, usize)]) -> Option<Vec<Substitution>> {
    let mut uses = 1;
    let mut saves = 0;
    let mut plan = Vec::new();

    for (digit, (pattern, count)) in free.iter().zip(ranked.iter()) {
        let len = pattern.chars().count();
        uses += 1 + len;
        saves += len * count;
        plan.push(Substitution { digit: *digit, pattern: pattern.clone() });
    }

    if plan.is_empty() || saves <= uses {
        return None;
    }
    Some(plan)
}
