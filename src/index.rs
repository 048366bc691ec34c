use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TermId = u32;
pub type DocId = u32;

/// Vocabulary payload for one indexed term.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TermEntry {
    pub term_id: TermId,
    /// Precomputed inverse-document-frequency weight, >= 0.
    pub idf: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    /// Precomputed weight of the term within this document, >= 0.
    pub weight: f32,
}

/// Read-only index snapshot consumed by the scoring engine.
///
/// Built and owned externally; handed to queries by shared reference and
/// never mutated while they run. Every `doc_id` reachable through `postings`
/// must have an entry in `documents` with a positive norm.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Index {
    pub vocabulary: HashMap<String, TermEntry>,
    pub postings: HashMap<TermId, Vec<Posting>>,
    /// doc_id -> Euclidean norm of the document's full weighted vector.
    pub documents: HashMap<DocId, f32>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term_entry(&self, term: &str) -> Option<&TermEntry> {
        self.vocabulary.get(term)
    }

    /// Postings for a term id; an unknown id yields an empty slice, not an error.
    pub fn postings(&self, term_id: TermId) -> &[Posting] {
        self.postings.get(&term_id).map_or(&[], Vec::as_slice)
    }

    pub fn doc_norm(&self, doc_id: DocId) -> Option<f32> {
        self.documents.get(&doc_id).copied()
    }
}
