//! Codon translation under the standard genetic code.
//!
//! Maps 3-base codons to three-letter amino-acid abbreviations via a
//! 64-entry lookup table. Codons may be given in DNA (`T`) or RNA (`U`)
//! form interchangeably, in any case. Stop codons translate to the
//! [`STOP`] marker; anything unrecognizable translates to [`INVALID_CODON`].

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T/U=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Convert an index in [0, 64) back to a codon (as DNA: A/C/G/T).
fn index_to_codon(idx: usize) -> [u8; 3] {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

// ---------------------------------------------------------------------------
// Standard genetic code (three-letter abbreviations)
// ---------------------------------------------------------------------------

/// Marker returned for the three stop codons (TAA, TAG, TGA).
pub const STOP: &str = "STOP";

/// Sentinel returned for codons that cannot be translated.
pub const INVALID_CODON: &str = "Invalid codon";

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT

/// Standard genetic code, 64 entries indexed by [`codon_index`].
const STANDARD_CODE: [&str; 64] = [
    "Lys", "Asn", "Lys", "Asn", "Thr", "Thr", "Thr", "Thr", // AAA..ACT
    "Arg", "Ser", "Arg", "Ser", "Ile", "Ile", "Met", "Ile", // AGA..ATT
    "Gln", "His", "Gln", "His", "Pro", "Pro", "Pro", "Pro", // CAA..CCT
    "Arg", "Arg", "Arg", "Arg", "Leu", "Leu", "Leu", "Leu", // CGA..CTT
    "Glu", "Asp", "Glu", "Asp", "Ala", "Ala", "Ala", "Ala", // GAA..GCT
    "Gly", "Gly", "Gly", "Gly", "Val", "Val", "Val", "Val", // GGA..GTT
    STOP, "Tyr", STOP, "Tyr", "Ser", "Ser", "Ser", "Ser", // TAA..TCT
    STOP, "Cys", "Trp", "Cys", "Leu", "Phe", "Leu", "Phe", // TGA..TTT
];

/// Translate a single codon to a three-letter amino-acid abbreviation.
///
/// Accepts both DNA (`T`) and RNA (`U`) codons, in any case. Returns
/// [`STOP`] for the three stop codons and [`INVALID_CODON`] for input that
/// is not exactly 3 bytes or contains a byte outside `ACGTU`.
///
/// # Example
///
/// ```
/// use seqsense::{translate_codon, STOP, INVALID_CODON};
///
/// assert_eq!(translate_codon(b"ATG"), "Met");
/// assert_eq!(translate_codon(b"AUG"), "Met");
/// assert_eq!(translate_codon(b"TAA"), STOP);
/// assert_eq!(translate_codon(b"XYZ"), INVALID_CODON);
/// ```
pub fn translate_codon(codon: &[u8]) -> &'static str {
    match codon_index(codon) {
        Some(idx) => STANDARD_CODE[idx],
        None => INVALID_CODON,
    }
}

/// Check whether a codon is a stop codon.
///
/// Unrecognizable codons are not stop codons.
pub fn is_stop_codon(codon: &[u8]) -> bool {
    codon_index(codon).map_or(false, |idx| STANDARD_CODE[idx] == STOP)
}

/// Return the stop codons (as DNA).
pub fn stop_codons() -> Vec<[u8; 3]> {
    (0..64)
        .filter(|&i| STANDARD_CODE[i] == STOP)
        .map(index_to_codon)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_codons() {
        assert_eq!(translate_codon(b"ATG"), "Met");
        assert_eq!(translate_codon(b"TTT"), "Phe");
        assert_eq!(translate_codon(b"TTC"), "Phe");
        assert_eq!(translate_codon(b"GGG"), "Gly");
        assert_eq!(translate_codon(b"CAT"), "His");
        assert_eq!(translate_codon(b"GAC"), "Asp");
        assert_eq!(translate_codon(b"TGG"), "Trp");
    }

    #[test]
    fn stop_codons_translate_to_marker() {
        assert_eq!(translate_codon(b"TAA"), STOP);
        assert_eq!(translate_codon(b"TAG"), STOP);
        assert_eq!(translate_codon(b"TGA"), STOP);
    }

    #[test]
    fn rna_and_dna_codons_are_interchangeable() {
        assert_eq!(translate_codon(b"AUG"), translate_codon(b"ATG"));
        assert_eq!(translate_codon(b"UUU"), "Phe");
        assert_eq!(translate_codon(b"UAA"), STOP);
    }

    #[test]
    fn lowercase_codons() {
        assert_eq!(translate_codon(b"aug"), "Met");
        assert_eq!(translate_codon(b"taa"), STOP);
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert_eq!(translate_codon(b""), INVALID_CODON);
        assert_eq!(translate_codon(b"AU"), INVALID_CODON);
        assert_eq!(translate_codon(b"AUGX"), INVALID_CODON);
    }

    #[test]
    fn unknown_bases_are_invalid() {
        assert_eq!(translate_codon(b"XYZ"), INVALID_CODON);
        assert_eq!(translate_codon(b"AXG"), INVALID_CODON);
        assert_eq!(translate_codon(b"AT "), INVALID_CODON);
    }

    #[test]
    fn table_covers_all_64_codons() {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut stops = 0;
        let mut abbrevs = HashSet::new();
        for &b1 in &bases {
            for &b2 in &bases {
                for &b3 in &bases {
                    let aa = translate_codon(&[b1, b2, b3]);
                    assert_ne!(aa, INVALID_CODON);
                    if aa == STOP {
                        stops += 1;
                    } else {
                        abbrevs.insert(aa);
                    }
                }
            }
        }
        assert_eq!(stops, 3);
        // 61 sense codons covering the 20 standard amino acids
        assert_eq!(abbrevs.len(), 20);
    }

    #[test]
    fn stop_codon_queries() {
        assert!(is_stop_codon(b"TAA"));
        assert!(is_stop_codon(b"UGA"));
        assert!(!is_stop_codon(b"ATG"));
        assert!(!is_stop_codon(b"XYZ"));

        let stops: Vec<[u8; 3]> = stop_codons();
        assert_eq!(stops, vec![*b"TAA", *b"TAG", *b"TGA"]);
    }
}
