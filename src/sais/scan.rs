//! One reverse pass classifying S-type/L-type positions and emitting LMS
//! positions, generalized from the reference crate's `for_each_lms` to an
//! arbitrary `SeqView`.
//!
//! The rightmost position's type is taken as L by construction rather
//! than compared against a virtual end-of-sequence symbol: there is
//! nothing to its right to compare against, and fixing it as L is exactly
//! the bootstrap convention the rest of the engine relies on (`SUF[0]`
//! always holds the length of the sequence, the "one past the end"
//! suffix, which sorts first).

use super::bucket::BucketState;
use super::seqview::SeqView;
use super::writebuf::WriteBuffer;

/// Visits every LMS position in decreasing order (rightmost first).
/// Mirrors the reference crate's `for_each_lms(s, false, ..)`.
pub fn for_each_lms<F: FnMut(usize)>(view: &SeqView, mut f: F) {
    let n = view.len();
    if n < 2 {
        return;
    }

    let mut is_s = false; // type of position n-1, fixed as L
    for i in (1..n - 1).rev() {
        let l = view.get(i - 1);
        let c = view.get(i);
        let r = view.get(i + 1);
        if c < r {
            is_s = true;
        } else if c > r {
            is_s = false;
        }
        if l > c && is_s {
            f(i);
        }
    }
}

/// Seeds every LMS position into its bucket's tail, returning the count
/// of LMS positions found. Positions whose own symbol is special (only
/// possible on encoded backends) are counted but never bucketed — they
/// have no bucket slot and are reintroduced later by `TailFiller`.
pub fn seed_lms(
    view: &SeqView,
    suf: &mut [i64],
    bkt: &mut BucketState,
    use_writebuffer: bool,
) -> usize {
    let sigma = view.alphabet_size();
    let mut count = 0usize;
    let mut wb = if use_writebuffer {
        Some(WriteBuffer::new(sigma))
    } else {
        None
    };

    for_each_lms(view, |i| {
        count += 1;
        let c = view.get(i);
        if (c as usize) < sigma {
            match wb.as_mut() {
                Some(wb) => wb.push(bkt, suf, c as usize, i as i64),
                None => {
                    let slot = bkt.insert_tail_ptr(c as usize);
                    suf[slot] = i as i64;
                }
            }
        }
    });

    if let Some(wb) = wb.as_mut() {
        wb.flush_all(bkt, suf);
    }
    count
}
