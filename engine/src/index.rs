use crate::error::{Error, Result};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, tokenize};
use crate::types::{DocId, DocMeta, DocumentStatus};
use std::collections::{BTreeMap, HashMap};

/// Postings for one term: doc id -> term frequency, ordered by doc id.
pub type Postings = BTreeMap<DocId, f64>;

/// In-memory inverted index. Documents are only ever added.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Postings>,
    docs: BTreeMap<DocId, DocMeta>,
    doc_ids: Vec<DocId>, // insertion order
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index a document. Either every check passes and the document is stored,
    /// or the index is left untouched.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
        stop_words: &StopWords,
    ) -> Result<()> {
        if id < 0 {
            return Err(Error::InvalidId(id));
        }
        if self.docs.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }
        let mut words = Vec::new();
        for word in tokenize(text) {
            if !is_valid_word(word) {
                return Err(Error::InvalidDocumentText { id, word: word.to_string() });
            }
            if !stop_words.is_stop_word(word) {
                words.push(word);
            }
        }
        if words.is_empty() {
            return Err(Error::EmptyDocument(id));
        }

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for &word in &words {
            *counts.entry(word).or_insert(0) += 1;
        }
        let total = words.len() as f64;
        for (word, count) in counts {
            self.postings
                .entry(word.to_string())
                .or_default()
                .insert(id, f64::from(count) / total);
        }

        let rating = average_rating(ratings);
        self.docs.insert(id, DocMeta { rating, status });
        self.doc_ids.push(id);
        tracing::debug!(id, words = words.len(), rating, ?status, "indexed document");
        Ok(())
    }

    /// Postings of `term`, or `None` when no document contains it.
    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.postings.get(term)
    }

    /// Term frequencies of `term` per document; empty when unseen.
    pub fn term_frequencies(&self, term: &str) -> Postings {
        self.postings.get(term).cloned().unwrap_or_default()
    }

    pub fn contains(&self, term: &str, id: DocId) -> bool {
        self.postings.get(term).is_some_and(|p| p.contains_key(&id))
    }

    pub fn document_meta(&self, id: DocId) -> Result<DocMeta> {
        self.docs.get(&id).copied().ok_or(Error::NotFound(id))
    }

    pub fn document_count(&self) -> usize { self.docs.len() }

    pub fn document_id(&self, index: usize) -> Result<DocId> {
        self.doc_ids
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, len: self.doc_ids.len() })
    }

    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.doc_ids.iter().copied()
    }

    pub fn term_count(&self) -> usize { self.postings.len() }
}

/// Mean of the ratings truncated toward zero; 0 for no ratings.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    // the mean of i32 values always fits in i32
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(text: &str) -> StopWords {
        StopWords::from_text(text).unwrap()
    }

    #[test]
    fn computes_term_frequencies() {
        let mut index = InvertedIndex::new();
        index
            .add_document(1, "curly cat curly tail", DocumentStatus::Active, &[7, 2, 7], &stop(""))
            .unwrap();
        let tf = index.term_frequencies("curly");
        assert_eq!(tf.get(&1), Some(&0.5));
        assert_eq!(index.term_frequencies("cat").get(&1), Some(&0.25));
        assert!(index.term_frequencies("dog").is_empty());
    }

    #[test]
    fn stop_words_do_not_count() {
        let mut index = InvertedIndex::new();
        index
            .add_document(2, "curly dog and fancy collar", DocumentStatus::Active, &[], &stop("and"))
            .unwrap();
        assert!(index.postings("and").is_none());
        assert_eq!(index.term_frequencies("dog").get(&2), Some(&0.25));
    }

    #[test]
    fn stores_meta() {
        let mut index = InvertedIndex::new();
        index
            .add_document(3, "big cat", DocumentStatus::Banned, &[1, 2, 7], &stop(""))
            .unwrap();
        assert_eq!(
            index.document_meta(3).unwrap(),
            DocMeta { rating: 3, status: DocumentStatus::Banned }
        );
        assert_eq!(index.document_meta(4).unwrap_err(), Error::NotFound(4));
    }

    #[test]
    fn rejects_bad_documents_without_changes() {
        let mut index = InvertedIndex::new();
        let none = stop("and in");
        index.add_document(1, "cat", DocumentStatus::Active, &[], &none).unwrap();

        assert_eq!(
            index.add_document(-1, "dog", DocumentStatus::Active, &[], &none).unwrap_err(),
            Error::InvalidId(-1)
        );
        assert_eq!(
            index.add_document(1, "dog", DocumentStatus::Active, &[], &none).unwrap_err(),
            Error::DuplicateId(1)
        );
        assert_eq!(
            index.add_document(2, " and in ", DocumentStatus::Active, &[], &none).unwrap_err(),
            Error::EmptyDocument(2)
        );
        assert!(matches!(
            index.add_document(3, "dog do\u{2}g", DocumentStatus::Active, &[], &none),
            Err(Error::InvalidDocumentText { id: 3, .. })
        ));

        assert_eq!(index.document_count(), 1);
        assert_eq!(index.term_count(), 1);
        assert!(index.postings("dog").is_none());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut index = InvertedIndex::new();
        for id in [5, 1, 3] {
            index.add_document(id, "word", DocumentStatus::Active, &[], &stop("")).unwrap();
        }
        assert_eq!(index.document_ids().collect::<Vec<_>>(), vec![5, 1, 3]);
        assert_eq!(index.document_id(1).unwrap(), 1);
        assert_eq!(index.document_id(3).unwrap_err(), Error::IndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn averages_truncate_toward_zero() {
        assert_eq!(average_rating(&[1, 2, 7]), 3);
        assert_eq!(average_rating(&[-1, -2, -2]), -1);
        assert_eq!(average_rating(&[]), 0);
        assert_eq!(average_rating(&[i32::MAX, i32::MAX]), i32::MAX);
    }
}
