use crate::config::SearchConfig;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::types::{DocId, Document, DocumentStatus};
use std::collections::BTreeMap;

/// IDF = ln(N / df)
pub fn inverse_document_freq(num_docs: usize, doc_freq: usize) -> f64 {
    (num_docs as f64 / doc_freq as f64).ln()
}

/// True when `a` belongs before `b`: higher relevance, or higher rating when the
/// relevances are within `epsilon` of each other.
fn ranks_before(a: &Document, b: &Document, epsilon: f64) -> bool {
    if (a.relevance - b.relevance).abs() < epsilon {
        a.rating > b.rating
    } else {
        a.relevance > b.relevance
    }
}

/// Order by relevance descending; relevances within `epsilon` of each other
/// are ordered by rating descending instead.
///
/// Near-equality is not transitive, so the rating pass is an insertion sort over
/// the relevance order: no adjacent pair ends up out of order, and only near ties
/// ever move.
pub fn sort_documents(docs: &mut [Document], epsilon: f64) {
    docs.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then(a.id.cmp(&b.id)));
    for i in 1..docs.len() {
        let mut j = i;
        while j > 0 && ranks_before(&docs[j], &docs[j - 1], epsilon) {
            docs.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Scores documents of one index against parsed queries.
pub struct Ranker<'a> {
    index: &'a InvertedIndex,
    config: SearchConfig,
}

impl<'a> Ranker<'a> {
    pub fn new(index: &'a InvertedIndex, config: SearchConfig) -> Self {
        Self { index, config }
    }

    /// Top documents for `query`, capped at the configured result count.
    pub fn rank<P>(&self, query: &Query, predicate: P) -> Vec<Document>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut docs = self.find_all_documents(query, predicate);
        sort_documents(&mut docs, self.config.relevance_epsilon);
        docs.truncate(self.config.max_result_document_count);
        docs
    }

    /// Every matching document with its TF-IDF relevance, unsorted.
    ///
    /// Minus words drop a document whether or not it passed `predicate`.
    pub fn find_all_documents<P>(&self, query: &Query, predicate: P) -> Vec<Document>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let num_docs = self.index.document_count();
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            let idf = inverse_document_freq(num_docs, postings.len());
            for (&id, &tf) in postings {
                let Ok(meta) = self.index.document_meta(id) else { continue };
                if predicate(id, meta.status, meta.rating) {
                    *relevance.entry(id).or_insert(0.0) += tf * idf;
                }
            }
        }

        for word in &query.minus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            for id in postings.keys() {
                relevance.remove(id);
            }
        }

        relevance
            .into_iter()
            .filter_map(|(id, score)| {
                let meta = self.index.document_meta(id).ok()?;
                Some(Document::new(id, score, meta.rating))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stop_words::StopWords;

    fn index() -> InvertedIndex {
        let stop = StopWords::from_text("and in at").unwrap();
        let mut index = InvertedIndex::new();
        let docs: [(DocId, &str, DocumentStatus, &[i32]); 4] = [
            (1, "curly cat curly tail", DocumentStatus::Active, &[7, 2, 7]),
            (2, "curly dog and fancy collar", DocumentStatus::Active, &[1, 2, 3]),
            (3, "big cat fancy collar", DocumentStatus::Active, &[1, 2, 8]),
            (4, "big dog sparrow Eugene", DocumentStatus::Banned, &[1, 3, 2]),
        ];
        for (id, text, status, ratings) in docs {
            index.add_document(id, text, status, ratings, &stop).unwrap();
        }
        index
    }

    fn ids(docs: &[Document]) -> Vec<DocId> {
        docs.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_inverse_document_freq() {
        assert_eq!(inverse_document_freq(4, 4), 0.0);
        assert!((inverse_document_freq(4, 1) - 4f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn scores_tf_idf() {
        let index = index();
        let ranker = Ranker::new(&index, SearchConfig::default());
        let query = Query::parse("curly").unwrap();
        let docs = ranker.rank(&query, |_, _, _| true);
        assert_eq!(ids(&docs), vec![1, 2]);
        let idf = 2f64.ln();
        assert!((docs[0].relevance - 0.5 * idf).abs() < 1e-12);
        assert!((docs[1].relevance - 0.25 * idf).abs() < 1e-12);
        assert_eq!(docs[0].rating, 5);
    }

    #[test]
    fn minus_words_ignore_predicate() {
        let index = index();
        let ranker = Ranker::new(&index, SearchConfig::default());
        let query = Query::parse("fancy dog -collar").unwrap();
        let docs = ranker.rank(&query, |_, _, _| true);
        assert_eq!(ids(&docs), vec![4]);

        let docs = ranker.rank(&query, |_, status, _| status == DocumentStatus::Active);
        assert!(docs.is_empty());
    }

    #[test]
    fn predicate_filters_plus_words() {
        let index = index();
        let ranker = Ranker::new(&index, SearchConfig::default());
        let query = Query::parse("big").unwrap();
        let docs = ranker.rank(&query, |id, _, _| id % 2 == 0);
        assert_eq!(ids(&docs), vec![4]);
    }

    #[test]
    fn only_minus_words_find_nothing() {
        let index = index();
        let ranker = Ranker::new(&index, SearchConfig::default());
        let query = Query::parse("-curly -unknown").unwrap();
        assert!(ranker.rank(&query, |_, _, _| true).is_empty());
    }

    #[test]
    fn unknown_words_are_ignored() {
        let index = index();
        let ranker = Ranker::new(&index, SearchConfig::default());
        let query = Query::parse("sparrow -parrot").unwrap();
        assert_eq!(ids(&ranker.rank(&query, |_, _, _| true)), vec![4]);
    }

    #[test]
    fn near_equal_relevance_falls_back_to_rating() {
        let mut docs = vec![
            Document::new(1, 0.5, 1),
            Document::new(2, 0.5 + 1e-7, 9),
            Document::new(3, 0.9, 0),
            Document::new(4, 0.1, 100),
        ];
        sort_documents(&mut docs, 1e-6);
        assert_eq!(ids(&docs), vec![3, 2, 1, 4]);
    }

    #[test]
    fn chained_near_ties_order_each_neighbour() {
        let mut docs = vec![
            Document::new(1, 0.5 + 1.5e-6, 0),
            Document::new(2, 0.5 + 0.6e-6, 0),
            Document::new(3, 0.5, 10),
        ];
        sort_documents(&mut docs, 1e-6);
        assert_eq!(ids(&docs), vec![1, 3, 2]);
    }

    #[test]
    fn equal_documents_keep_id_order() {
        let mut docs = vec![Document::new(7, 0.3, 2), Document::new(3, 0.3, 2)];
        sort_documents(&mut docs, 1e-6);
        assert_eq!(ids(&docs), vec![3, 7]);
    }

    #[test]
    fn caps_results() {
        let stop = StopWords::default();
        let mut index = InvertedIndex::new();
        for id in 0..8 {
            index.add_document(id, "cat", DocumentStatus::Active, &[id], &stop).unwrap();
        }
        index.add_document(8, "dog", DocumentStatus::Active, &[], &stop).unwrap();
        let ranker = Ranker::new(&index, SearchConfig::default());
        let docs = ranker.rank(&Query::parse("cat").unwrap(), |_, _, _| true);
        assert_eq!(ids(&docs), vec![7, 6, 5, 4, 3]);

        let wide = SearchConfig { max_result_document_count: 100, ..SearchConfig::default() };
        let ranker = Ranker::new(&index, wide);
        assert_eq!(ranker.rank(&Query::parse("cat").unwrap(), |_, _, _| true).len(), 8);
    }
}
