//! Small per-bucket write cache amortizing scattered tail-pointer writes
//! during LMS seeding. Semantically indistinguishable from writing
//! straight through `BucketState::insert_tail_ptr`; it exists purely to
//! turn single scattered stores into small contiguous bursts.

use super::bucket::BucketState;

/// Per-symbol capacity of the write cache. Kept small and fixed so the
/// whole cache stays a small constant of words regardless of alphabet
/// size.
const CAP: usize = 4;

pub struct WriteBuffer {
    bufs: Vec<Vec<i64>>,
}

impl WriteBuffer {
    /// Only meaningful for `sigma <= 256`; callers with a larger alphabet
    /// (the recursive int-array layer) write directly instead.
    pub fn new(sigma: usize) -> Self {
        WriteBuffer {
            bufs: (0..sigma).map(|_| Vec::with_capacity(CAP)).collect(),
        }
    }

    pub fn push(&mut self, bkt: &mut BucketState, suf: &mut [i64], c: usize, pos: i64) {
        let buf = &mut self.bufs[c];
        buf.push(pos);
        if buf.len() == CAP {
            for &v in buf.iter() {
                let slot = bkt.insert_tail_ptr(c);
                suf[slot] = v;
            }
            buf.clear();
        }
    }

    pub fn flush_all(&mut self, bkt: &mut BucketState, suf: &mut [i64]) {
        for c in 0..self.bufs.len() {
            for i in 0..self.bufs[c].len() {
                let v = self.bufs[c][i];
                let slot = bkt.insert_tail_ptr(c);
                suf[slot] = v;
            }
            self.bufs[c].clear();
        }
    }
}
