//! Character-level edit distance.

/// Levenshtein distance between `a` and `b`, counted in characters.
///
/// Insertions, deletions and substitutions each cost one. Comparison is
/// exact; fold the inputs first for caseless matching.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two rows of the edit matrix are enough; the rest is never revisited.
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        row[0] = i + 1;
        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);
            row[j + 1] = (prev_row[j] + cost)
                .min(prev_row[j + 1] + 1)
                .min(row[j] + 1);
        }
        std::mem::swap(&mut prev_row, &mut row);
    }

    prev_row[b_len]
}
