//! Per-symbol bucket bounds and fill pointers, generalized from the fixed
//! 256-wide bucket array the reference crate uses for byte strings to an
//! arbitrary runtime alphabet size (needed by the recursive int-array
//! layer, whose alphabet shrinks by at least half each level).

use super::seqview::SeqView;

/// Marks a `SUF` slot nothing has written to yet.
pub const EMPTY: i64 = -1;

/// Bucket array with bi-directional (head/tail) fill pointers.
///
/// `bounds[c]` is the first index of symbol `c`'s bucket, `bounds[c+1]`
/// one past its last; slot `0` is always reserved for the bootstrap
/// "empty suffix" entry, mirroring the reference crate's own `sa[0] = n`
/// convention.
pub struct BucketState {
    sigma: usize,
    bounds: Vec<i64>,
    head: Vec<i64>,
    tail: Vec<i64>,
}

impl BucketState {
    /// Computes bucket boundaries by scanning the view once. Positions
    /// whose symbol is `>= sigma` (special positions on encoded backends)
    /// are not counted: they never occupy a bucket slot.
    pub fn compute(view: &SeqView) -> Self {
        let sigma = view.alphabet_size();
        let mut counts = vec![0i64; sigma];
        for i in 0..view.len() {
            let v = view.get(i);
            if (v as usize) < sigma {
                counts[v as usize] += 1;
            }
        }

        let mut bounds = vec![0i64; sigma + 1];
        let mut sum = 1i64;
        for c in 0..sigma {
            bounds[c] = sum;
            sum += counts[c];
        }
        bounds[sigma] = sum;

        let mut bkt = BucketState {
            sigma,
            bounds,
            head: vec![0; sigma],
            tail: vec![0; sigma],
        };
        bkt.reset_head();
        bkt.reset_tail();
        bkt
    }

    pub fn alphabet_size(&self) -> usize {
        self.sigma
    }

    /// `fill[c] = sum_{d<c} size[d]` (head pointers, for L-induction).
    pub fn reset_head(&mut self) {
        self.head.copy_from_slice(&self.bounds[..self.sigma]);
    }

    /// `fill[c] = sum_{d<=c} size[d]` (tail pointers, for S-induction).
    pub fn reset_tail(&mut self) {
        self.tail.copy_from_slice(&self.bounds[1..]);
    }

    /// Reserves the next head slot for symbol `c` and returns it.
    #[inline]
    pub fn insert_head_ptr(&mut self, c: usize) -> usize {
        let p = self.head[c];
        self.head[c] += 1;
        p as usize
    }

    /// Reserves the next tail slot for symbol `c` and returns it.
    #[inline]
    pub fn insert_tail_ptr(&mut self, c: usize) -> usize {
        self.tail[c] -= 1;
        self.tail[c] as usize
    }

    #[inline]
    pub fn head_ptr(&self, c: usize) -> i64 {
        self.head[c]
    }

    #[inline]
    pub fn tail_ptr(&self, c: usize) -> i64 {
        self.tail[c]
    }

    #[inline]
    pub fn tail_bound(&self, c: usize) -> i64 {
        self.bounds[c + 1]
    }

    /// Clears the not-yet-consumed part of every bucket's tail region
    /// (the LMS seeds, once the pre-naming L-pass has consumed them) and
    /// resets the tail pointers, readying the array for the S-pass.
    pub fn clear_tails(&mut self, suf: &mut [i64]) {
        for c in 0..self.sigma {
            let end = self.bounds[c + 1] as usize;
            let start = self.tail[c] as usize;
            for x in &mut suf[start..end] {
                *x = EMPTY;
            }
        }
        self.reset_tail();
    }
}

/// Whether the round-table-accelerated naming path pays for itself: a
/// small alphabet relative to the input (so the per-round refinement
/// converges in few rounds) on an input large enough to amortize it.
pub fn fast_method_applies(view: &SeqView) -> bool {
    let n = view.len();
    let sigma = view.alphabet_size();
    n > 1024 && sigma < (n / 4).max(1)
}
