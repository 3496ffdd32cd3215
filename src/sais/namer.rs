//! Assigns names to sorted LMS substrings. `lms_substr_eq`/`peek` compare
//! one pair at a time by direct character walk, generalized from the
//! reference crate to an arbitrary `SeqView`. `fast_lms_eq_flags` is the
//! round-table-accelerated alternative (see `DESIGN.md`): instead of
//! independently re-walking each adjacent pair, it refines the whole
//! already-sorted run in lockstep, one character offset ("round") at a
//! time, splitting it into shrinking equal-so-far groups.

use super::seqview::SeqView;

/// Tests LMS substring equality. `s[i..]` and `s[j..]` must both be LMS
/// suffixes (their substrings run up to and including the next LMS
/// position, or the end of the sequence).
pub fn lms_substr_eq(view: &SeqView, mut i: usize, mut j: usize) -> bool {
    if i > j {
        std::mem::swap(&mut i, &mut j);
    }
    let n = view.len();
    if j > n {
        panic!("index out of range");
    }
    if i == j {
        return true;
    }

    // compare the s-type part and the peak
    if j == n || view.get(i) != view.get(j) {
        return false;
    }
    let mut last = view.get(i);
    i += 1;
    j += 1;
    while j < n && view.get(i) >= last {
        if view.get(i) != view.get(j) {
            return false;
        }
        last = view.get(i);
        i += 1;
        j += 1;
    }

    // compare the remaining l-type part until the valley
    while j < n {
        let (p0, len0, t0) = peek(view, i);
        let (p1, len1, t1) = peek(view, j);
        if p0 != p1 || t0 != t1 {
            return false;
        }
        if t0 {
            // up to the nearest lms character, the runs were identical
            return true;
        }
        if len0 != len1 {
            return false;
        }
        i += len0;
        j += len1;
    }
    false
}

/// Equality flags for each adjacent pair in `lms_sorted`, an already
/// lms-substring-sorted run (i.e. the order `engine::construct`'s
/// pre-naming induction pass produces). `flags[w]` says whether
/// `lms_sorted[w]` and `lms_sorted[w + 1]` name the same lms substring —
/// the same fact `lms_substr_eq` gives pairwise.
///
/// Because the run is already sorted, two lms substrings are equal iff
/// every position between them shares the same character at every
/// offset: equal-so-far elements are always contiguous, so a position
/// can never need to be compared against a non-neighbor. Each round
/// looks one more character offset `k` ahead from every still-undecided
/// group's start, splitting any group whose members disagree there;
/// a group collapses to "equal" once every member runs off the end of
/// its lms substring on the same round. Requires `lms_sorted.len() >= 2`
/// callers already guarantee by skipping this path on smaller runs.
pub fn fast_lms_eq_flags(view: &SeqView, lms_sorted: &[usize]) -> Vec<bool> {
    let n = view.len();
    let count = lms_sorted.len();
    if count <= 1 {
        return Vec::new();
    }

    let key = |idx: usize, k: usize| -> Option<i64> {
        let q = lms_sorted[idx] + k;
        if q >= n {
            None
        } else {
            Some(view.get(q))
        }
    };

    let mut eq = vec![true; count - 1];
    let mut groups: Vec<(usize, usize)> = vec![(0, count)];
    let mut k = 0usize;

    while !groups.is_empty() {
        let mut next_round = Vec::new();
        for (lo, hi) in groups.drain(..) {
            let mut run_start = lo;
            for i in (lo + 1)..hi {
                if key(i, k) != key(i - 1, k) {
                    eq[i - 1] = false;
                    if i - run_start >= 2 {
                        next_round.push((run_start, i));
                    }
                    run_start = i;
                }
            }
            // A run that survived the whole group with a real (non-`None`)
            // key still needs another round; one that bottomed out at
            // `None` together is confirmed equal and needs no more.
            if hi - run_start >= 2 && key(run_start, k).is_some() {
                next_round.push((run_start, hi));
            }
        }
        groups = next_round;
        k += 1;
    }

    eq
}

/// Length and direction of the maximal constant run starting at `i`:
/// `(value, run_length, rises_afterward)`.
fn peek(view: &SeqView, mut i: usize) -> (i64, usize, bool) {
    let n = view.len();
    let p = view.get(i);
    let mut len = 1;
    i += 1;
    while i < n {
        let c = view.get(i);
        if c > p {
            return (p, len, true);
        } else if c < p {
            return (p, len, false);
        }
        len += 1;
        i += 1;
    }
    (p, len, false)
}
