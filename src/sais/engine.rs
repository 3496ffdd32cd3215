//! Drives one recursion level: LMS scan, pre-naming induction, naming,
//! recursion over the named subsequence (or a direct skip when every LMS
//! substring already has a unique name), expansion back to original
//! positions, and the final post-naming induction.
//!
//! Every level, including the top one, uses the same internal buffer
//! convention: `suf` has length `view.len() + 1` and slot `0` is always
//! the bootstrap "one past the end" entry (value `n`), the seed the
//! L-pass needs to induce position `n-1`. This is purely an internal
//! convention: `mod.rs`'s entry points rotate the finished top-level
//! buffer before returning, so the bootstrap value ends up at `sa[n]`
//! as the public contract documents (`SPEC_FULL.md` §4.8, §8). Recursive
//! sub-calls never see that rotation — each one reads its own `sub_suf`
//! back with the bootstrap still at slot `0`.

use super::bucket::{fast_method_applies, BucketState, EMPTY};
use super::induce;
use super::namer::{fast_lms_eq_flags, lms_substr_eq};
use super::ordercheck;
use super::scan;
use super::seqview::SeqView;
use super::SainOptions;

/// Left-to-right positions of every LMS position of `view`.
fn lms_positions_in_order(view: &SeqView) -> Vec<usize> {
    let mut out = Vec::new();
    scan::for_each_lms(view, |p| out.push(p));
    out.reverse();
    out
}

/// Recovers the lms-substring-sorted order of every lms position from a
/// `suf` buffer the pre-naming induction pass has just filled, given the
/// left-to-right `lms_original` positions.
fn gather_lms_sorted(view: &SeqView, suf: &[i64], lms_original: &[usize]) -> Vec<usize> {
    let n = view.len();
    let mut is_lms = vec![false; n];
    for &p in lms_original {
        is_lms[p] = true;
    }

    let mut lms_sorted = Vec::with_capacity(lms_original.len());
    for &x in suf[1..].iter() {
        if x != EMPTY {
            let p = x as usize;
            if p < n && is_lms[p] {
                lms_sorted.push(p);
            }
        }
    }
    assert_eq!(
        lms_sorted.len(),
        lms_original.len(),
        "lost an lms position during induction"
    );
    lms_sorted
}

/// Exposes a genuinely lms-substring-sorted position list for testing
/// `fast_lms_eq_flags` against `lms_substr_eq` on the same input: runs the
/// scan and pre-naming induction pass exactly as `construct` does, then
/// stops short of naming.
#[cfg(test)]
pub(crate) fn lms_sorted_for_test(view: &SeqView) -> Vec<usize> {
    let n = view.len();
    let mut suf = vec![EMPTY; n + 1];
    suf[0] = n as i64;
    let mut bkt = BucketState::compute(view);
    let use_writebuffer = view.alphabet_size() <= 256;
    scan::seed_lms(view, &mut suf, &mut bkt, use_writebuffer);
    induce::induce(view, &mut suf, &mut bkt, false);
    let lms_original = lms_positions_in_order(view);
    gather_lms_sorted(view, &suf, &lms_original)
}

pub fn construct(view: &SeqView, suf: &mut [i64], opts: &SainOptions, level: usize) {
    let n = view.len();
    assert_eq!(suf.len(), n + 1, "suf must have length n+1");

    for x in suf.iter_mut() {
        *x = EMPTY;
    }
    suf[0] = n as i64;

    if n < 2 {
        let mut bkt = BucketState::compute(view);
        induce::induce(view, suf, &mut bkt, true);
        if opts.intermediate_check {
            ordercheck::abort_on_violation(view, suf, "base case (n<2)");
        }
        return;
    }

    opts.report("scan");
    let mut bkt = BucketState::compute(view);
    let sigma = view.alphabet_size();
    let use_writebuffer = sigma <= 256;
    let count_lms = scan::seed_lms(view, suf, &mut bkt, use_writebuffer);

    if opts.verbose {
        println!(
            "sain: level {} n={} count_lms={} ratio={:.4}",
            level,
            n,
            count_lms,
            count_lms as f64 / n as f64
        );
    }

    if count_lms == 0 {
        induce::induce(view, suf, &mut bkt, true);
        if opts.intermediate_check {
            ordercheck::abort_on_violation(view, suf, "count_lms == 0");
        }
        return;
    }
    assert!(2 * count_lms <= n, "lms-count bound violated");

    opts.report("induce-pre");
    induce::induce(view, suf, &mut bkt, false);

    let lms_original = lms_positions_in_order(view);
    debug_assert_eq!(lms_original.len(), count_lms);
    let lms_sorted = gather_lms_sorted(view, suf, &lms_original);

    if opts.intermediate_check {
        ordercheck::abort_on_violation_lms(view, &lms_sorted, &lms_original, "pre-naming lms order");
    }

    opts.report("name");
    let eq_flags: Vec<bool> = if fast_method_applies(view) {
        fast_lms_eq_flags(view, &lms_sorted)
    } else {
        (1..lms_sorted.len())
            .map(|w| lms_substr_eq(view, lms_sorted[w - 1], lms_sorted[w]))
            .collect()
    };
    let mut name_of = vec![0i64; n];
    let mut name = 0i64;
    name_of[lms_sorted[0]] = 0;
    for w in 1..lms_sorted.len() {
        if !eq_flags[w - 1] {
            name += 1;
        }
        name_of[lms_sorted[w]] = name;
    }
    let num_names = (name + 1) as usize;

    let name_seq: Vec<i64> = lms_original.iter().map(|&p| name_of[p]).collect();

    let sorted_idx: Vec<usize> = if num_names == count_lms {
        // Every lms substring is unique: the name sequence already is the
        // inverse permutation of sorted rank -> original lms index.
        let mut v = vec![0usize; count_lms];
        for (i, &nm) in name_seq.iter().enumerate() {
            v[nm as usize] = i;
        }
        v
    } else {
        opts.report("recurse");
        let mut sub_suf = vec![EMPTY; count_lms + 1];
        let sub_view = SeqView::IntArray(&name_seq, num_names);
        construct(&sub_view, &mut sub_suf, opts, level + 1);
        sub_suf[1..count_lms + 1]
            .iter()
            .map(|&x| x as usize)
            .collect()
    };

    let lms_sorted_final: Vec<usize> = sorted_idx.iter().map(|&i| lms_original[i]).collect();

    if opts.intermediate_check {
        ordercheck::abort_on_violation_lms(
            view,
            &lms_sorted_final,
            &lms_original,
            "post-recursion lms order",
        );
    }

    opts.report("induce-post");
    for x in suf.iter_mut() {
        *x = EMPTY;
    }
    suf[0] = n as i64;
    bkt.reset_tail();
    for &p in lms_sorted_final.iter().rev() {
        let c = view.get(p);
        if (c as usize) < sigma {
            let slot = bkt.insert_tail_ptr(c as usize);
            suf[slot] = p as i64;
        }
    }
    bkt.reset_head();
    induce::induce(view, suf, &mut bkt, true);

    if opts.intermediate_check {
        ordercheck::abort_on_violation(view, suf, "post-naming full order");
    }
}
