//! SA-IS suffix array construction core.
//!
//! Builds on the reference crate's `sais_bytes`/`Bucket` design (one
//! reverse LMS scan, two bucket-induction passes, recursion over named
//! LMS substrings) generalized to:
//! - an arbitrary runtime alphabet, so the same engine serves the
//!   top-level byte/encoded input and every recursion level;
//! - a `SeqView` abstraction so the engine doesn't care whether it is
//!   reading a byte slice, a wildcard-bearing encoded sequence, or a
//!   recursively-assigned name array.

mod bucket;
mod engine;
mod induce;
mod namer;
mod ordercheck;
mod scan;
mod seqview;
mod tailfill;


pub use ordercheck::abort_on_violation;
pub use seqview::{range_reverse, EncodedChar, EncodedSequence, ReadMode, SeqView, WildcardSequence};

use std::cell::RefCell;

/// A progress-reporting seam the construction core calls before each
/// named phase. `NoopTimer` is the zero-cost default.
pub trait Timer {
    fn show_progress(&mut self, description: &str);
}

/// Default, zero-cost `Timer` implementation.
pub struct NoopTimer;

impl Timer for NoopTimer {
    fn show_progress(&mut self, _description: &str) {}
}

/// Construction-time configuration.
///
/// `timer` is wrapped in a `RefCell` so the entry points can take `opts`
/// by shared reference (matching the reference crate's own preference for
/// plain, non-builder-heavy configuration) while still letting the
/// construction core call `Timer::show_progress`'s `&mut self`.
pub struct SainOptions<'a> {
    pub intermediate_check: bool,
    pub final_check: bool,
    pub verbose: bool,
    pub timer: Option<RefCell<&'a mut dyn Timer>>,
}

impl<'a> Default for SainOptions<'a> {
    fn default() -> Self {
        SainOptions {
            intermediate_check: false,
            final_check: false,
            verbose: false,
            timer: None,
        }
    }
}

impl<'a> SainOptions<'a> {
    pub(crate) fn report(&self, description: &str) {
        if let Some(cell) = &self.timer {
            cell.borrow_mut().show_progress(description);
        }
    }
}

/// Every `engine::construct` frame (including the top-level call) writes
/// its bootstrap "one past the end" entry at slot `0`, since that's the
/// seed the L-pass needs for position `n-1`. The public contract instead
/// puts that bookkeeping value at `sa[n]`, with the sorted positions
/// filling `sa[0..n)` (see `SPEC_FULL.md` §4.8, §8). This rotates a
/// finished top-level buffer from the internal layout to the public one.
fn rotate_bootstrap_to_tail(sa: &mut [i64]) {
    let n = sa.len() - 1;
    let bootstrap = sa[0];
    sa.copy_within(1.., 0);
    sa[n] = bootstrap;
}

/// Sorts the suffix array of a plain byte sequence into `sa`, a buffer of
/// length `seq.len() + 1`. On return, `sa[0..seq.len())` holds the sorted
/// suffix positions and `sa[seq.len()]` holds the fixed bookkeeping value
/// `seq.len()`.
///
/// `opts.final_check` is ignored: there is no encoded-sequence-only
/// oracle to run over a bare byte slice (see `DESIGN.md`).
pub fn sort_suffixes_plain(seq: &[u8], sa: &mut [i64], opts: &SainOptions) {
    assert_eq!(sa.len(), seq.len() + 1, "sa must have length seq.len()+1");
    let view = SeqView::Plain(seq);
    engine::construct(&view, sa, opts, 0);
    rotate_bootstrap_to_tail(sa);
}

/// Sorts the suffix array of an encoded sequence (one that may contain
/// special/unsortable positions) into `sa`, a buffer of length
/// `encseq.total_length() + 1`. On return, `sa[0..nonspecial)` holds the
/// sorted non-special suffixes, any special positions fill
/// `sa[nonspecial..total_length())`, and `sa[total_length()]` holds the
/// fixed bookkeeping value `total_length()`.
pub fn sort_suffixes_encoded(
    encseq: &dyn EncodedSequence,
    readmode: ReadMode,
    sa: &mut [i64],
    opts: &SainOptions,
) {
    assert_eq!(
        sa.len(),
        encseq.total_length() + 1,
        "sa must have length total_length()+1"
    );
    let view = SeqView::Encoded {
        seq: encseq,
        readmode,
    };
    engine::construct(&view, sa, opts, 0);

    if opts.final_check {
        // Pre-rotation: the bootstrap entry (slot 0) plus every ordinary
        // sorted suffix occupy sa[0..=nonspecial]; specials fill the
        // remainder. `rotate_bootstrap_to_tail` below moves slot 0 to the
        // back afterward, so these offsets must stay tied to the
        // internal (bootstrap-at-front) layout `engine::construct` uses.
        let nonspecial = view.len() - view.special_characters();
        tailfill::fill_special_tail(&view, sa, nonspecial + 1);
        ordercheck::check_final_permutation(&view, sa, nonspecial + 1);
    }

    rotate_bootstrap_to_tail(sa);
}
