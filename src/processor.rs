use anyhow::{Context, Result};
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Turns raw query text into the ordered term sequence the vector builder
/// consumes: whitespace tokenization, NFKC + lowercase normalization,
/// stopword removal, then stemming. Duplicates are retained in order.
///
/// Immutable after construction, so one processor can serve concurrent
/// queries.
pub struct TextProcessor {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl TextProcessor {
    /// Creates a processor, loading the line-delimited stopword list if a
    /// path is given. `None` disables stopword filtering entirely.
    ///
    /// The list is expected to hold normalized, unstemmed forms; each line is
    /// run through the same normalization as query tokens, since filtering
    /// happens before stemming.
    pub fn new(stopwords: Option<&Path>) -> Result<Self> {
        let stopwords = match stopwords {
            Some(path) => load_stopwords(path)
                .with_context(|| format!("failed to read stopword list {}", path.display()))?,
            None => HashSet::new(),
        };
        Ok(Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
        })
    }

    pub fn process_text(&self, text: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for token in text.split_whitespace() {
            let normalized = normalize(token);
            if self.stopwords.contains(&normalized) {
                continue;
            }
            terms.push(self.stemmer.stem(&normalized).into_owned());
        }
        terms
    }
}

/// NFKC normalization and lowercase. Applied to query tokens and stopword
/// lines alike so membership checks compare like with like.
fn normalize(token: &str) -> String {
    token.nfkc().collect::<String>().to_lowercase()
}

fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    let file = File::open(path)?;
    let mut words = HashSet::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.insert(normalize(word));
        }
    }
    Ok(words)
}
