// Fuzzy matching for "did you mean" suggestions on category and status names

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two-row dynamic programming table
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, a) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b) in s2_chars.iter().enumerate() {
            let cost = if a == b { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

/// Names within `max_distance` edits of `search` (case-insensitive), or that
/// start with it. Closest first, at most 3.
pub fn suggest<'a>(search: &str, candidates: &[&'a str], max_distance: usize) -> Vec<&'a str> {
    let search_lower = search.trim().to_lowercase();
    if search_lower.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(&'a str, usize)> = candidates
        .iter()
        .filter_map(|candidate| {
            let lower = candidate.to_lowercase();
            let distance = levenshtein_distance(&search_lower, &lower);
            if distance <= max_distance {
                Some((*candidate, distance))
            } else if lower.starts_with(&search_lower) {
                Some((*candidate, max_distance))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    matches.into_iter().take(3).map(|(name, _)| name).collect()
}
