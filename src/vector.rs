use crate::index::{Index, TermId};
use std::collections::HashMap;

/// Weighted query vector, built fresh per query and discarded after scoring.
///
/// Holds at most one entry per distinct term, sorted ascending by term id so
/// the scoring engine accumulates contributions in a fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    pub weights: Vec<(TermId, f32)>,
    /// Distinct query terms not found in the vocabulary. Diagnostic only;
    /// such terms never contribute to the vector.
    pub skipped_terms: usize,
}

/// Computes TF-IDF weights for a processed term sequence.
///
/// The term-frequency factor is `1 + log2(freq)`, so a single occurrence
/// contributes exactly the term's idf weight. Terms absent from the
/// vocabulary are skipped, not errors.
pub fn compute_vector(terms: &[String], index: &Index) -> QueryVector {
    let mut freqs: HashMap<&str, u32> = HashMap::new();
    for term in terms {
        *freqs.entry(term.as_str()).or_insert(0) += 1;
    }

    let mut weights = Vec::with_capacity(freqs.len());
    let mut skipped_terms = 0;
    for (term, freq) in freqs {
        match index.term_entry(term) {
            Some(entry) => {
                let tf = 1.0 + (freq as f32).log2();
                weights.push((entry.term_id, tf * entry.idf));
            }
            None => skipped_terms += 1,
        }
    }
    weights.sort_unstable_by_key(|&(term_id, _)| term_id);

    QueryVector {
        weights,
        skipped_terms,
    }
}

/// Euclidean (L2) length of a weighted vector; 0.0 for an empty one.
pub fn l2_norm(weights: &[(TermId, f32)]) -> f32 {
    weights.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt()
}
