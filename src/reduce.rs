//! Normal forms for words in a right-angled Artin group.
//!
//! Two rules rewrite a word:
//!
//! 1. cancellation: `x u x^-1 -> u` when every letter of `u` commutes with `x`;
//! 2. sorting: `y u x -> x y u` when `x < y` by base symbol and `x` commutes
//!    with `y` and with every letter of `u`.
//!
//! With `u` empty these are the familiar adjacent-pair rules. Allowing a
//! commuting run in between is what makes the system confluent: with only
//! adjacent swaps, `b*x*a` and `a*b*x` (where `a` commutes with `x` and `b`,
//! but `x` and `b` do not commute) are distinct fixed points of the same
//! element. The fixed point reached here is the lexicographically least
//! freely reduced spelling of the element, so words are equal in the group
//! exactly when their normal forms are identical.
//!
//! The word is rebuilt left to right. Each incoming letter walks leftward
//! over the commuting tail of the output built so far; it either meets its
//! inverse and both vanish (rule 1 is tried first), or settles in front of
//! the first tail letter that sorts after it. The output is in normal form
//! after every step, so a single sweep reaches the fixed point and the work
//! is bounded by one comparison per (letter, earlier letter) pair.
use crate::*;

/// A reduced word together with the work it took to get there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reduction {
    pub word: Word,
    /// Tail letters inspected while placing incoming letters.
    pub comparisons: usize,
    /// Inverse pairs removed.
    pub cancellations: usize,
    /// Positions letters moved left past commuting letters.
    pub swaps: usize,
}

impl Reduction {
    /// The most comparisons a word of length `n` can need.
    pub fn comparison_bound(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}

/// Reduce `word` to normal form. The word is not checked against the
/// alphabet; symbols outside `presentation` commute with nothing.
pub fn reduce(presentation: &Presentation, word: &Word) -> Word {
    reduce_with_stats(presentation, word).word
}

pub fn reduce_with_stats(presentation: &Presentation, word: &Word) -> Reduction {
    let mut out: Vec<Generator> = Vec::with_capacity(word.len());
    let mut reduction = Reduction::default();
    for letter in word {
        place(presentation, &mut out, letter, &mut reduction);
    }
    reduction.word = out.into();
    log::trace!(
        "reduced {} letters to {} ({} comparisons, {} cancellations, {} swaps)",
        word.len(),
        reduction.word.len(),
        reduction.comparisons,
        reduction.cancellations,
        reduction.swaps
    );
    reduction
}

/// Whether `word` is already a fixed point.
pub fn is_reduced(presentation: &Presentation, word: &Word) -> bool {
    reduce(presentation, word) == *word
}

/// Append `letter` to the normal-form prefix `out`, keeping it in normal
/// form.
fn place(
    presentation: &Presentation,
    out: &mut Vec<Generator>,
    letter: &Generator,
    reduction: &mut Reduction,
) {
    let mut insert_at = out.len();
    for i in (0..out.len()).rev() {
        let prev = &out[i];
        reduction.comparisons += 1;
        if prev.symbol() == letter.symbol() {
            if prev.is_inverse_of(letter) {
                out.remove(i);
                reduction.cancellations += 1;
                return;
            }
            break;
        }
        if !presentation.generators_commute(prev, letter) {
            break;
        }
        if prev.symbol() > letter.symbol() {
            insert_at = i;
        }
    }
    reduction.swaps += out.len() - insert_at;
    out.insert(insert_at, letter.clone());
}
