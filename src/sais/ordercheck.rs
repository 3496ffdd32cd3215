//! The crate's "lightweight suffix-order check" oracle: a linear-time
//! verifier used both as an opt-in per-recursion-level sanity pass
//! (`SainOptions::intermediate_check`) and as the full-permutation check
//! run for `SainOptions::final_check`. There is no recoverable path for a
//! violation here — it is a programming error, not a user error, so every
//! call site panics rather than returning a `Result` the caller could
//! ignore.

use super::bucket::EMPTY;
use super::seqview::SeqView;

/// Compares two full suffixes of `view` lexicographically. Position `n`
/// denotes the virtual empty suffix, smaller than any non-empty one.
fn suffix_less(view: &SeqView, i: usize, j: usize) -> bool {
    let n = view.len();
    if i == j {
        return false;
    }
    let (mut i, mut j) = (i, j);
    loop {
        let a = if i < n { Some(view.get(i)) } else { None };
        let b = if j < n { Some(view.get(j)) } else { None };
        match (a, b) {
            (None, None) => return false,
            (None, Some(_)) => return true,
            (Some(_), None) => return false,
            (Some(x), Some(y)) => {
                if x != y {
                    return x < y;
                }
                i += 1;
                j += 1;
            }
        }
    }
}

/// Verifies `suf` is strictly increasing in full-suffix order, skipping
/// `EMPTY` slots the caller never claimed were meaningful yet.
pub fn check_order(view: &SeqView, suf: &[i64]) -> Result<(), usize> {
    let mut prev: Option<usize> = None;
    for (idx, &x) in suf.iter().enumerate() {
        if x == EMPTY {
            continue;
        }
        let p = x as usize;
        if let Some(q) = prev {
            if !suffix_less(view, q, p) {
                return Err(idx);
            }
        }
        prev = Some(p);
    }
    Ok(())
}

fn next_lms_or_end(lms_original: &[usize], p: usize, n: usize) -> usize {
    match lms_original.binary_search(&p) {
        Ok(idx) if idx + 1 < lms_original.len() => lms_original[idx + 1],
        _ => n,
    }
}

/// Orders two LMS substrings: equal up to the shorter one's length, then
/// the shorter sorts first. Deliberately reimplemented independently of
/// `namer::lms_substr_eq`'s run-length scan, so this check can catch bugs
/// in that routine rather than just re-deriving its own answer.
fn lms_substr_leq(view: &SeqView, a: usize, end_a: usize, b: usize, end_b: usize) -> bool {
    let (len_a, len_b) = (end_a - a, end_b - b);
    let len = len_a.min(len_b);
    for k in 0..len {
        let (ca, cb) = (view.get(a + k), view.get(b + k));
        if ca != cb {
            return ca < cb;
        }
    }
    len_a <= len_b
}

/// Verifies a left-to-right list of LMS positions is non-decreasing in
/// LMS-substring order. Ties are expected here (full suffix order among
/// equal substrings is only resolved by recursion) so this does not use
/// `check_order`.
pub fn check_lms_order(
    view: &SeqView,
    lms_sorted: &[usize],
    lms_original: &[usize],
) -> Result<(), usize> {
    let n = view.len();
    for w in 1..lms_sorted.len() {
        let (a, b) = (lms_sorted[w - 1], lms_sorted[w]);
        let end_a = next_lms_or_end(lms_original, a, n);
        let end_b = next_lms_or_end(lms_original, b, n);
        if !lms_substr_leq(view, a, end_a, b, end_b) {
            return Err(w);
        }
    }
    Ok(())
}

/// Verifies `suf[0..=n]` is a permutation of `{0,...,n}`, via a presence
/// bitset rather than a sort, to stay linear.
pub fn check_permutation(n: usize, suf: &[i64]) -> Result<(), &'static str> {
    if suf.len() != n + 1 {
        return Err("wrong length");
    }
    let mut seen = vec![false; n + 1];
    for &x in suf {
        if x < 0 || x as usize > n {
            return Err("value out of range");
        }
        let p = x as usize;
        if seen[p] {
            return Err("duplicate position");
        }
        seen[p] = true;
    }
    if seen.iter().all(|&b| b) {
        Ok(())
    } else {
        Err("missing position")
    }
}

pub fn abort_on_violation(view: &SeqView, suf: &[i64], context: &str) {
    if let Err(idx) = check_order(view, suf) {
        panic!("suffix order violated at slot {} during {}", idx, context);
    }
}

pub fn abort_on_violation_lms(
    view: &SeqView,
    lms_sorted: &[usize],
    lms_original: &[usize],
    context: &str,
) {
    if let Err(idx) = check_lms_order(view, lms_sorted, lms_original) {
        panic!("lms substring order violated at index {} during {}", idx, context);
    }
}

pub fn abort_on_permutation_violation(n: usize, suf: &[i64], context: &str) {
    if let Err(reason) = check_permutation(n, suf) {
        panic!("permutation invariant violated ({}) during {}", reason, context);
    }
}

/// The `final_check` entry point: verifies the complete, tail-filled
/// array is a permutation of `{0,...,n}`, and that its non-special prefix
/// (`suf[..order_prefix_end]`, the bootstrap entry plus every ordinary
/// sorted suffix) is strictly increasing in suffix order.
///
/// The appended special positions are deliberately excluded from the
/// order check: §8's order property is scoped to the non-special prefix
/// only, since specials are "sorted by position alone" (an appending
/// convention, not a lexicographic guarantee) — see `DESIGN.md`.
pub fn check_final_permutation(view: &SeqView, suf: &[i64], order_prefix_end: usize) {
    let n = view.len();
    abort_on_permutation_violation(n, suf, "final check");
    abort_on_violation(view, &suf[..order_prefix_end], "final check");
}
