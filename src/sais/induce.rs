//! L- and S-type induction, generalized from the reference crate's
//! `induce_by_lms`. The same two passes are reused verbatim for both the
//! pre-naming (LMS-substring) sort and the post-naming (final suffix)
//! sort — the caller only decides whether to clear `SUF[i]` behind it as
//! it reads (pre-naming: yes, to leave a clean slate for the eventual
//! full pass; post-naming: no, every entry is already meaningful) and
//! whether to run the special single-S bootstrap ahead of the S-pass.

use super::bucket::{BucketState, EMPTY};
use super::seqview::SeqView;

/// L-induction: left to right, from head fill pointers. Run unchanged for
/// both the pre-naming and post-naming passes — the reference crate's
/// `induce_by_lms` is itself called twice over the same buffer with no
/// extra flag, relying only on what each stage has already placed there.
fn induce_l(view: &SeqView, suf: &mut [i64], bkt: &mut BucketState) {
    let n = view.len();
    let sigma = view.alphabet_size();

    for i in 0..suf.len() {
        let x = suf[i];
        if x == EMPTY || x == 0 {
            continue;
        }
        let j = x as usize;
        let pred = j - 1;

        // j == n <=> x is the bootstrap "one past the end" entry, whose
        // predecessor (n-1) is unconditionally L-type by the rightmost-is-L
        // convention; otherwise pred is L-type iff it doesn't compare
        // smaller than j.
        let induce_here = j == n || view.get(pred) >= view.get(j);
        if induce_here {
            let c = view.get(pred);
            if (c as usize) < sigma {
                let slot = bkt.insert_head_ptr(c as usize);
                suf[slot] = pred as i64;
            }
        }
    }
}

/// Seeds suffixes that precede the end-of-sequence or a special-character
/// range directly into their S-type tail bucket. These positions can
/// never be discovered by scanning `SUF` because the position they would
/// be induced from (a special position, or the virtual end-of-sequence)
/// is never itself placed in `SUF`.
///
/// Walked in ascending position order within the view's own read
/// direction: among two boundary positions sharing a first symbol, the
/// one further to the left has the lexicographically larger suffix (its
/// immediate successor's `UNIQUE` value is larger), so it must be handed
/// to `insert_tail_ptr` first to land in the higher slot. Seeding in
/// ascending order achieves exactly that.
fn seed_special_boundaries(view: &SeqView, suf: &mut [i64], bkt: &mut BucketState) {
    let sigma = view.alphabet_size();
    if let SeqView::Encoded { seq, readmode } = view {
        if !seq.has_special_ranges() {
            return;
        }
        for range in seq.special_ranges(*readmode) {
            if range.start == 0 {
                continue;
            }
            let q = range.start - 1;
            let c = view.get(q);
            if (c as usize) < sigma {
                let slot = bkt.insert_tail_ptr(c as usize);
                suf[slot] = q as i64;
            }
        }
    }
}

/// S-induction: right to left, from tail fill pointers.
fn induce_s(view: &SeqView, suf: &mut [i64], bkt: &mut BucketState, seed_boundaries: bool) {
    let sigma = view.alphabet_size();

    if seed_boundaries {
        seed_special_boundaries(view, suf, bkt);
    }

    let mut i = suf.len();
    while i > 1 {
        i -= 1;
        let x = suf[i];
        if x == EMPTY || x == 0 {
            continue;
        }
        let j = x as usize;
        let pred = j - 1;
        let cj = view.get(j);
        let cjm1 = view.get(pred);

        // cjm1 < cj: pred is s-type outright.
        // cjm1 == cj: pred is in the same bucket as j; every l-type
        // character of that bucket is already placed before the head
        // pointer, so head_ptr(cj) < i <=> pred is s-type.
        let induce_here = cjm1 < cj || (cjm1 == cj && bkt.head_ptr(cj as usize) < i as i64);
        if induce_here && (cjm1 as usize) < sigma {
            let slot = bkt.insert_tail_ptr(cjm1 as usize);
            suf[slot] = pred as i64;
        }
    }
}

/// Runs one L-pass followed by one S-pass over `suf`.
///
/// `seed_boundaries` is set only for the final, post-naming pass: the
/// pre-naming pass only needs to rank already-seeded LMS positions
/// against each other, and any boundary position that happens to also be
/// LMS is already seeded through the ordinary path.
pub fn induce(view: &SeqView, suf: &mut [i64], bkt: &mut BucketState, seed_boundaries: bool) {
    induce_l(view, suf, bkt);
    bkt.clear_tails(suf);
    induce_s(view, suf, bkt, seed_boundaries);
}
