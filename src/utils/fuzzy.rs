// Name matching for project search and "did you mean" suggestions

/// Levenshtein edit distance between two strings (by chars)
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows instead of the full matrix
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Check if `needle` occurs in `haystack`, ignoring case
///
/// An empty needle matches everything.
pub fn is_substring_match(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Find names close to `search`
///
/// Candidates are `(key, name)` pairs; the key comes back with each match,
/// so duplicate names stay distinguishable. A name qualifies when its
/// case-insensitive edit distance is within `max_distance`, or when it
/// contains `search` and is at most `max_distance + 2` characters longer
/// (prefix matches rank ahead of inner matches). Returns up to 5
/// `(key, score)` pairs, best first; ties keep candidate order.
pub fn find_near_names<'a, K, I>(search: &str, candidates: I, max_distance: usize) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = (K, &'a str)>,
{
    let search_lower = search.to_lowercase();
    let mut matches: Vec<(K, usize)> = Vec::new();

    for (key, name) in candidates {
        let name_lower = name.to_lowercase();
        let distance = levenshtein_distance(&search_lower, &name_lower);

        if distance <= max_distance {
            matches.push((key, distance));
            continue;
        }

        let search_len = search_lower.chars().count();
        let name_len = name_lower.chars().count();
        if search_len > 0 && search_len < name_len && name_lower.contains(&search_lower) {
            let extra = name_len - search_len;
            let score = if name_lower.starts_with(&search_lower) { extra } else { extra + 1 };
            if score <= max_distance + 2 {
                matches.push((key, score.min(max_distance)));
            }
        }
    }

    matches.sort_by_key(|m| m.1);
    matches.truncate(5);
    matches
}
