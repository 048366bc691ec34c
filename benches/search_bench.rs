use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use std::path::Path;
use vsm::{Cosine, Index, Posting, RetrievalModel, TermEntry, TextProcessor};

/// Synthetic index: `num_terms` terms spread over `num_docs` documents, each
/// term posted to every eighth document.
fn build_index(num_terms: u32, num_docs: u32) -> Index {
    let mut vocabulary = HashMap::new();
    let mut postings = HashMap::new();
    let mut documents = HashMap::new();

    for term_id in 0..num_terms {
        vocabulary.insert(
            format!("term{term_id}"),
            TermEntry {
                term_id,
                idf: 1.0 + (term_id % 7) as f32,
            },
        );
        let list: Vec<Posting> = (0..num_docs)
            .filter(|doc_id| (doc_id + term_id) % 8 == 0)
            .map(|doc_id| Posting {
                doc_id,
                weight: 1.0 + (doc_id % 5) as f32,
            })
            .collect();
        postings.insert(term_id, list);
    }
    for doc_id in 0..num_docs {
        documents.insert(doc_id, 10.0 + (doc_id % 13) as f32);
    }

    Index {
        vocabulary,
        postings,
        documents,
    }
}

fn bench_process_text(c: &mut Criterion) {
    let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/stopwords-en.txt"));
    let processor = TextProcessor::new(Some(path)).unwrap();
    let text = "the quick brown foxes were running over the lazy dogs again and again ".repeat(64);
    c.bench_function("process_text", |b| b.iter(|| processor.process_text(&text)));
}

fn bench_run_query(c: &mut Criterion) {
    let index = build_index(1_000, 10_000);
    let processor = TextProcessor::new(None).unwrap();
    let query = "term1 term1 term42 term77 term900 term999";
    c.bench_function("run_query", |b| {
        b.iter(|| Cosine.run_query(query, &index, &processor).unwrap())
    });
}

criterion_group!(benches, bench_process_text, bench_run_query);
criterion_main!(benches);
