//! Appends special-character positions to the tail of a finished suffix
//! array, for callers that opted into `final_check`. Special positions
//! never occupy a bucket slot during construction (they compare greater
//! than every regular symbol and are only ever used to type their left
//! neighbor); this restores them afterward in forward read order,
//! filling the otherwise-untouched tail of `sa` so the full array is a
//! permutation of `{0,...,n}`.

use super::seqview::{ReadMode, SeqView};

/// Fills `sa[start..]` with the sequence's special positions, in forward
/// read order. `start` is one past the last slot the construction core
/// itself wrote (the bootstrap entry plus every ordinary sorted suffix).
/// Panics if the number of positions appended doesn't match the view's
/// own special-character count, or doesn't exactly fill the remainder of
/// `sa`.
pub fn fill_special_tail(view: &SeqView, sa: &mut [i64], start: usize) {
    let seq = match view {
        SeqView::Encoded { seq, .. } => *seq,
        _ => return,
    };

    let mut i = start;
    for range in seq.special_ranges(ReadMode::Forward) {
        for pos in range {
            sa[i] = pos as i64;
            i += 1;
        }
    }
    assert_eq!(
        i - start,
        seq.special_characters(),
        "special-character count mismatch during tail fill"
    );
    assert_eq!(i, sa.len(), "tail fill did not exactly reach the end of sa");
}
