//! Vector-space retrieval core.
//!
//! Ranks documents against free-text queries by cosine similarity between a
//! TF-IDF weighted query vector and each document's stored vector. The index
//! (vocabulary, postings, precomputed document norms) is built elsewhere and
//! consumed here read-only; one immutable [`Index`] can serve any number of
//! concurrent queries.
//!
//! ```no_run
//! use vsm::{Cosine, Index, RetrievalModel, TextProcessor};
//!
//! # fn main() -> anyhow::Result<()> {
//! let index: Index = unimplemented!("loaded from your index builder");
//! let processor = TextProcessor::new(Some("stopwords-en.txt".as_ref()))?;
//! let ranked = Cosine.run_query("systems programming", &index, &processor)?;
//! for (doc_id, score) in ranked {
//!     println!("{doc_id}\t{score:.4}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod index;
pub mod model;
pub mod processor;
pub mod vector;

pub use index::{DocId, Index, Posting, TermEntry, TermId};
pub use model::{compute_scores, Cosine, RetrievalModel};
pub use processor::TextProcessor;
pub use vector::{compute_vector, l2_norm, QueryVector};
