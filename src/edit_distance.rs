//! Spelling suggestions for object keys that could not be found.

/// Levenshtein distance between `a` and `b`, counted in `char`s.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != *cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Pick the candidate closest to `lookup`. A candidate equal to `lookup` up to ASCII case always
/// wins. Otherwise the closest candidate within `dist` edits is chosen, where `dist` defaults to
/// a third of the length of `lookup` (but at least one).
pub fn find_best_match_for_name<'c>(
    candidates: impl IntoIterator<Item = &'c str>,
    lookup: &str,
    dist: Option<usize>,
) -> Option<&'c str> {
    let max_dist = dist.unwrap_or_else(|| (lookup.chars().count() / 3).max(1));

    let mut best: Option<(usize, &'c str)> = None;
    for candidate in candidates {
        if candidate.eq_ignore_ascii_case(lookup) {
            return Some(candidate);
        }
        let d = edit_distance(candidate, lookup);
        if d <= max_dist && best.map_or(true, |(best_d, _)| d < best_d) {
            best = Some((d, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}
