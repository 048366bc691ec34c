use crate::index::{DocId, Index};
use crate::processor::TextProcessor;
use crate::vector::{compute_vector, l2_norm, QueryVector};
use anyhow::{bail, Result};
use std::collections::HashMap;

/// A retrieval model ranks the indexed documents against free-text queries.
///
/// Implementations own the weighting scheme; text processing and the index
/// contract are shared across models, so alternative schemes substitute
/// without changing callers.
pub trait RetrievalModel {
    /// Runs a query and returns `(doc_id, score)` pairs, best first.
    fn run_query(
        &self,
        query_text: &str,
        index: &Index,
        processor: &TextProcessor,
    ) -> Result<Vec<(DocId, f32)>>;
}

/// Cosine similarity over TF-IDF weights.
pub struct Cosine;

impl RetrievalModel for Cosine {
    fn run_query(
        &self,
        query_text: &str,
        index: &Index,
        processor: &TextProcessor,
    ) -> Result<Vec<(DocId, f32)>> {
        let terms = processor.process_text(query_text);
        let query = compute_vector(&terms, index);
        tracing::debug!(
            terms = terms.len(),
            distinct = query.weights.len(),
            skipped = query.skipped_terms,
            "built query vector"
        );
        compute_scores(&query, index)
    }
}

/// Scores every document sharing at least one term with the query.
///
/// Term-at-a-time accumulation: each posting contributes its share of the
/// query/document dot product, scaled by both norms, so the per-document sum
/// is exactly the cosine similarity without materializing dense vectors.
/// Only touched documents enter the accumulator.
pub fn compute_scores(query: &QueryVector, index: &Index) -> Result<Vec<(DocId, f32)>> {
    let query_norm = l2_norm(&query.weights);
    if query_norm == 0.0 {
        // Empty or fully out-of-vocabulary query.
        return Ok(Vec::new());
    }

    let mut accumulator: HashMap<DocId, f32> = HashMap::new();
    // Query weights are sorted by term id, keeping the floating-point
    // summation order reproducible across runs.
    for &(term_id, query_weight) in &query.weights {
        for posting in index.postings(term_id) {
            let doc_norm = match index.doc_norm(posting.doc_id) {
                Some(norm) if norm > 0.0 => norm,
                _ => bail!(
                    "index inconsistency: postings for term {} reference document {} \
                     with no positive norm record",
                    term_id,
                    posting.doc_id
                ),
            };
            *accumulator.entry(posting.doc_id).or_insert(0.0) +=
                posting.weight * query_weight / (doc_norm * query_norm);
        }
    }

    let mut results: Vec<(DocId, f32)> = accumulator.into_iter().collect();
    // Descending score, ties broken by ascending doc id.
    results.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(results)
}
