//! Token sequence alignment: longest common subsequence and Levenshtein distance.
//!
//! Both algorithms fill the classic DP matrix row by row but keep only two live
//! rows. The shorter sequence always indexes the columns, so memory stays
//! O(min(m, n)) however long the documents are. Both metrics are symmetric,
//! which makes the swap safe.
//!
//! Results are raw counts. Normalizing them into similarities is the scorer's
//! responsibility.

/// Order a pair so that the second slice is the shorter one.
fn longer_first<'a, T>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    if a.len() >= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Length of the longest common subsequence of `a` and `b`.
///
/// Returns 0 when either sequence is empty.
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (rows, cols) = longer_first(a, b);
    if cols.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; cols.len() + 1];
    let mut curr = vec![0usize; cols.len() + 1];

    for row_token in rows {
        for (j, col_token) in cols.iter().enumerate() {
            curr[j + 1] = if row_token == col_token {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[cols.len()]
}

/// Levenshtein distance between `a` and `b` with unit insert, delete and
/// substitute costs.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (rows, cols) = longer_first(a, b);
    if cols.is_empty() {
        return rows.len();
    }

    let mut prev: Vec<usize> = (0..=cols.len()).collect();
    let mut curr = vec![0usize; cols.len() + 1];

    for (i, row_token) in rows.iter().enumerate() {
        curr[0] = i + 1;
        for (j, col_token) in cols.iter().enumerate() {
            let cost = usize::from(row_token != col_token);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[cols.len()]
}
