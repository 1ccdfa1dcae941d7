//! Whole-sequence translation into hyphen-joined amino-acid chains.
//!
//! Walks a nucleotide sequence in non-overlapping 3-base steps from offset
//! zero, translating each codon with [`translate_codon`]. Translation is a
//! prefix: it halts at the first stop codon or untranslatable triplet and
//! never resumes past it.

use crate::codon::{translate_codon, INVALID_CODON, STOP};

fn translate_impl(seq: &[u8], include_stop: bool) -> String {
    let mut chain: Vec<&'static str> = Vec::with_capacity(seq.len() / 3);
    for codon in seq.chunks_exact(3) {
        let aa = translate_codon(codon);
        if aa == STOP {
            if include_stop {
                chain.push(STOP);
            }
            break;
        }
        if aa == INVALID_CODON {
            break;
        }
        chain.push(aa);
    }
    chain.join("-")
}

/// Translate a nucleotide sequence into a hyphen-joined amino-acid chain.
///
/// Codons are read in-frame from offset zero; a trailing partial codon is
/// dropped. Translation halts at the first stop codon (which is not
/// included in the output) or at the first untranslatable triplet, keeping
/// whatever was accumulated up to that point. Empty, whitespace-only, and
/// sub-codon input yield an empty string.
///
/// # Example
///
/// ```
/// use seqsense::translate;
///
/// assert_eq!(translate(b"ATGGAT"), "Met-Asp");
/// assert_eq!(translate(b"ATGGATTGATAGCCGTA"), "Met-Asp");
/// assert_eq!(translate(b""), "");
/// ```
pub fn translate(seq: &[u8]) -> String {
    translate_impl(seq, false)
}

/// Translate like [`translate`], but append the `STOP` marker when a stop
/// codon terminates the chain.
///
/// # Example
///
/// ```
/// use seqsense::translate_with_stop;
///
/// assert_eq!(translate_with_stop(b"ATGGATTGATAGCCGTA"), "Met-Asp-STOP");
/// ```
pub fn translate_with_stop(seq: &[u8]) -> String {
    translate_impl(seq, true)
}
