//! TF-IDF vectorization and cosine similarity.
//!
//! Tokens are runs of two or more word characters from lowercased text.
//! Weights use raw term counts times a smoothed idf, `ln((1 + n) / (1 + df)) + 1`,
//! and every row is L2-normalized.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use thiserror::Error;

use super::stop_words::ENGLISH_STOP_WORDS;

const TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

#[derive(Debug, Error)]
pub enum VectorizerError {
    #[error("empty vocabulary: documents contain no terms outside the stop-word list")]
    EmptyVocabulary,

    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopWords {
    None,
    English,
}

#[derive(Debug, Clone)]
struct Tokenizer {
    pattern: Regex,
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    fn new(stop_words: StopWords) -> Result<Self, VectorizerError> {
        let stop_words = match stop_words {
            StopWords::None => HashSet::new(),
            StopWords::English => ENGLISH_STOP_WORDS.iter().copied().collect(),
        };
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
            stop_words,
        })
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(t))
            .map(str::to_owned)
            .collect()
    }
}

/// A vectorizer fitted over a fixed set of documents. Terms unseen at fit
/// time are dropped by `transform`.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    /// term -> column, columns assigned in sorted term order
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit(documents: &[&str], stop_words: StopWords) -> Result<Self, VectorizerError> {
        let tokenizer = Tokenizer::new(stop_words)?;

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<String> = tokenizer.tokens(doc).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(VectorizerError::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (column, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, column);
        }

        Ok(Self {
            tokenizer,
            vocabulary,
            idf,
        })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Dense, L2-normalized TF-IDF row for `text`. Text with no in-vocabulary
    /// terms yields the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];
        for token in self.tokenizer.tokens(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                row[column] += 1.0;
            }
        }
        for (weight, idf) in row.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let norm = l2_norm(&row);
        if norm > 0.0 {
            row.iter_mut().for_each(|w| *w /= norm);
        }
        row
    }
}

fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity of two equal-length vectors. Defined as `0.0` when either
/// vector is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let (norm_a, norm_b) = (l2_norm(a), l2_norm(b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_tokens_are_ignored() {
        let v = TfidfVectorizer::fit(&["c r python"], StopWords::None).unwrap();
        assert_eq!(v.vocabulary_len(), 1);
    }

    #[test]
    fn test_stop_words_are_removed() {
        let v = TfidfVectorizer::fit(&["the python and the java"], StopWords::English).unwrap();
        assert_eq!(v.vocabulary_len(), 2);
    }

    #[test]
    fn test_only_stop_words_is_empty_vocabulary() {
        let err = TfidfVectorizer::fit(&["the and of", ""], StopWords::English).unwrap_err();
        assert!(matches!(err, VectorizerError::EmptyVocabulary));
    }

    #[test]
    fn test_rows_are_unit_length() {
        let v = TfidfVectorizer::fit(&["python python docker", "aws"], StopWords::None).unwrap();
        let row = v.transform("python docker docker");
        assert!((l2_norm(&row) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_vocabulary_text_is_zero_vector() {
        let v = TfidfVectorizer::fit(&["python docker"], StopWords::None).unwrap();
        assert!(v.transform("kotlin swift").iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_smoothed_idf_weights_shared_terms_lower() {
        let v = TfidfVectorizer::fit(&["python developer", "python engineer"], StopWords::None)
            .unwrap();
        let a = v.transform("python developer");
        let b = v.transform("python engineer");
        // idf(python) = 1, idf(developer) = idf(engineer) = ln(1.5) + 1
        let rare = 1.5f64.ln() + 1.0;
        let expected = 1.0 / (rare * rare + 1.0);
        assert!((cosine_similarity(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_identical_documents_have_similarity_one() {
        let v = TfidfVectorizer::fit(&["rust tokio axum", "rust tokio axum"], StopWords::None)
            .unwrap();
        let a = v.transform("rust tokio axum");
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_with_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.6, 0.8]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }
}
