//! Biological sequence classification and nucleotide-to-protein translation.
//!
//! Pure, allocation-light functions over ASCII byte slices:
//!
//! - **Classification** — [`classify`] decides whether a sequence reads as
//!   [`SequenceType::Dna`], [`SequenceType::Rna`], [`SequenceType::Protein`],
//!   or [`SequenceType::Unknown`]
//! - **Codon translation** — [`translate_codon`] maps a 3-base codon (DNA or
//!   RNA form) to its three-letter amino-acid abbreviation, [`STOP`], or
//!   [`INVALID_CODON`]
//! - **Sequence translation** — [`translate`] and [`translate_with_stop`]
//!   walk a nucleotide sequence in-frame and assemble a hyphen-joined
//!   amino-acid chain
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`], [`ProteinAlphabet`],
//!   the membership sets behind the classifier
//!
//! All inputs are case-insensitive. Everything is deterministic and
//! side-effect-free; malformed input produces sentinel values
//! (`Unknown`, `"Invalid codon"`, `""`), never a panic or an error.
//!
//! # Example
//!
//! ```
//! use seqsense::{classify, translate, translate_codon, SequenceType};
//!
//! let dna = b"ATGGAAGTATTTAAAGCGCCACCTATTGGGATATAAG";
//! assert_eq!(classify(dna), SequenceType::Dna);
//! assert_eq!(
//!     translate(dna),
//!     "Met-Glu-Val-Phe-Lys-Ala-Pro-Pro-Ile-Gly-Ile"
//! );
//!
//! // RNA codons translate like their DNA counterparts
//! assert_eq!(translate_codon(b"AUG"), "Met");
//! ```

pub mod alphabet;
pub mod classify;
pub mod codon;
pub mod translate;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, RnaAlphabet};

// Re-export classification
pub use classify::{classify, SequenceType};

// Re-export codon translation
pub use codon::{is_stop_codon, stop_codons, translate_codon, INVALID_CODON, STOP};

// Re-export sequence translation
pub use translate::{translate, translate_with_stop};
