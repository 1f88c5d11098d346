use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    answer::{self, percent},
    corpus::{Corpus, Document},
    scoring::{KeywordBoostScorer, Scorer},
};

/// How many characters of a document's first chunk make up its preview.
const PREVIEW_CHARS: usize = 120;

/// Retrieval parameters collected by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// The search query. Validation (non-empty after trimming) is the
    /// caller's responsibility; the pipeline itself is total.
    pub query: String,
    /// Maximum number of chunks to return. Zero yields empty results.
    pub top_k: usize,
    /// Maximum number of documents to return. `None` returns every
    /// document represented among the selected chunks.
    pub top_n: Option<usize>,
}

/// A chunk selected by a retrieval pass, annotated with its source
/// document and adjusted score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub id: String,
    pub doc_id: u32,
    /// Display name of the owning document.
    pub source: String,
    pub content: String,
    pub score: f32,
}

/// A document represented among the selected chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentHit {
    pub id: u32,
    pub name: String,
    /// Representative score: the maximum adjusted score among this
    /// document's selected chunks.
    pub score: f32,
    pub preview: String,
}

/// The full output of one retrieval pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub answer: String,
    pub chunks: Vec<ScoredChunk>,
    pub documents: Vec<DocumentHit>,
}

/// Execute the retrieval pipeline with the default keyword-boost scorer.
pub fn retrieve(params: &SearchParams, corpus: &Corpus) -> SearchResult {
    execute_search(params, corpus, &KeywordBoostScorer::default())
}

/// Execute the full retrieval pipeline.
///
/// 1. Flatten the corpus into one scored record per chunk
/// 2. Adjust scores via the pluggable scorer
/// 3. Sort by adjusted score descending (stable: ties keep flatten order)
/// 4. Truncate to the top K chunks
/// 5. Aggregate selected chunks to documents (max score, first-chunk preview)
/// 6. Sort documents by representative score descending
/// 7. Truncate to the top N documents, if N was supplied
/// 8. Synthesize the answer string
///
/// Pure function of its inputs: deterministic, no side effects on the
/// corpus, and no failure modes — a query matching nothing yields empty
/// lists and the fallback answer.
pub fn execute_search<S: Scorer>(
    params: &SearchParams,
    corpus: &Corpus,
    scorer: &S,
) -> SearchResult {
    // Stages 1-2: flatten and score-adjust.
    let mut scored: Vec<ScoredChunk> = corpus
        .documents()
        .iter()
        .flat_map(|doc| {
            doc.chunks.iter().map(|chunk| ScoredChunk {
                id: chunk.id.clone(),
                doc_id: doc.id,
                source: doc.name.clone(),
                content: chunk.content.clone(),
                score: scorer.score(&params.query, chunk),
            })
        })
        .collect();
    let total_chunks = scored.len();

    // Stages 3-4: stable descending sort, then top-K.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(params.top_k);

    // Stage 5: representative score per document is the max adjusted
    // score among its selected chunks. BTreeMap keeps ties in ascending
    // document order through the stable sort below.
    let mut best_scores: BTreeMap<u32, f32> = BTreeMap::new();
    for chunk in &scored {
        let entry = best_scores.entry(chunk.doc_id).or_insert(chunk.score);
        *entry = entry.max(chunk.score);
    }

    let mut documents: Vec<DocumentHit> = best_scores
        .iter()
        .filter_map(|(&doc_id, &score)| {
            corpus.get(doc_id).map(|doc| DocumentHit {
                id: doc_id,
                name: doc.name.clone(),
                score,
                preview: preview(doc),
            })
        })
        .collect();

    // Stages 6-7: descending doc sort, optional top-N.
    documents.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(top_n) = params.top_n {
        documents.truncate(top_n);
    }

    debug!(
        query = %params.query,
        total_chunks,
        selected_chunks = scored.len(),
        selected_documents = documents.len(),
        "retrieval pass complete"
    );

    // Stage 8.
    let answer = answer::synthesize(
        &params.query,
        &scored,
        &documents,
        scorer.matches_query(&params.query),
    );

    SearchResult {
        answer,
        chunks: scored,
        documents,
    }
}

/// Preview string: the first 120 characters of the document's first chunk,
/// always followed by an ellipsis marker.
fn preview(doc: &Document) -> String {
    let mut text: String = doc
        .chunks
        .first()
        .map(|c| c.content.chars().take(PREVIEW_CHARS).collect())
        .unwrap_or_default();
    text.push_str("...");
    text
}

/// Format a result for human-readable terminal output.
pub fn format_human(result: &SearchResult) {
    println!("{}", result.answer);

    println!("\nQueried chunks ({} results)", result.chunks.len());
    for (i, chunk) in result.chunks.iter().enumerate() {
        println!(
            "{:>3}. [{:>3}%] {} #{}",
            i + 1,
            percent(chunk.score),
            chunk.source,
            chunk.id
        );
        println!("     {}", chunk.content);
    }

    println!("\nRelevant documents ({} docs)", result.documents.len());
    for (i, doc) in result.documents.iter().enumerate() {
        println!(
            "{:>3}. [{:>3}%] {}",
            i + 1,
            percent(doc.score),
            doc.name
        );
        println!("     {}", doc.preview);
    }
}

/// Format a result as a single JSON object.
pub fn format_json(result: &SearchResult, query: &str) {
    let payload = serde_json::json!({
        "query": query,
        "chunk_count": result.chunks.len(),
        "document_count": result.documents.len(),
        "answer": result.answer,
        "chunks": result.chunks,
        "documents": result.documents,
    });
    println!("{payload}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        corpus::{Chunk, FileType},
        fixtures::seed_corpus,
    };
    use chrono::Utc;

    fn params(query: &str, top_k: usize, top_n: Option<usize>) -> SearchParams {
        SearchParams {
            query: query.to_string(),
            top_k,
            top_n,
        }
    }

    #[test]
    fn president_query_ranks_inauguration_chunk_first() {
        let corpus = seed_corpus();
        let result = retrieve(&params("Who is the president?", 5, None), &corpus);

        assert_eq!(result.chunks.len(), 5);
        let top = &result.chunks[0];
        assert_eq!(top.id, "c1");
        assert_eq!(top.source, "us_government_overview.pdf");
        // 0.96 + 0.05 capped at 0.99
        assert!((top.score - 0.99).abs() < 1e-6);
        assert!(result.answer.contains("Joe Biden"));
    }

    #[test]
    fn unmatched_query_keeps_base_scores() {
        let corpus = seed_corpus();
        let result = retrieve(&params("xylophone festival", 3, None), &corpus);

        // The three highest base scores, unmodified.
        let scores: Vec<f32> = result.chunks.iter().map(|c| c.score).collect();
        assert_eq!(scores, [0.96, 0.91, 0.89]);
        assert!(result.answer.contains("Found 3 relevant passages"));
        assert!(result.answer.contains("us_government_overview.pdf"));
    }

    #[test]
    fn chunks_sorted_descending() {
        let corpus = seed_corpus();
        let result = retrieve(&params("president", 10, None), &corpus);
        for pair in result.chunks.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn ties_keep_flatten_order() {
        let mut corpus = Corpus::new();
        for (id, name) in [(1, "a.txt"), (2, "b.txt"), (3, "c.txt")] {
            corpus.push(crate::corpus::Document {
                id,
                name: name.to_string(),
                file_type: FileType::Txt,
                size: 100,
                indexed_at: Utc::now(),
                chunks: vec![Chunk::new(format!("c{id}"), "same text", 0.5)],
            });
        }

        let result = retrieve(&params("anything", 3, None), &corpus);
        let ids: Vec<_> = result.chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2", "c3"]);
    }

    #[test]
    fn top_k_bounds_chunk_count() {
        let corpus = seed_corpus();
        assert_eq!(retrieve(&params("q", 3, None), &corpus).chunks.len(), 3);
        // K past the corpus size returns everything.
        assert_eq!(retrieve(&params("q", 50, None), &corpus).chunks.len(), 10);
    }

    #[test]
    fn zero_k_yields_empty_results_not_a_fault() {
        let corpus = seed_corpus();
        let result = retrieve(&params("anything", 0, None), &corpus);
        assert!(result.chunks.is_empty());
        assert!(result.documents.is_empty());
        assert!(result.answer.contains("Found 0 relevant passages"));
        assert!(result.answer.contains("\"unknown\" with 0% relevance"));
    }

    #[test]
    fn document_score_is_max_of_selected_chunks() {
        let corpus = seed_corpus();
        // K=10 selects both chunks of every document.
        let result = retrieve(&params("president", 10, None), &corpus);

        let gov = result
            .documents
            .iter()
            .find(|d| d.name == "us_government_overview.pdf")
            .unwrap();
        // max(0.99, 0.77), not the second chunk's score
        assert!((gov.score - 0.99).abs() < 1e-6);
    }

    #[test]
    fn preview_is_first_chunk_truncated_with_ellipsis() {
        let corpus = seed_corpus();
        let result = retrieve(&params("president", 10, None), &corpus);
        for doc in &result.documents {
            assert!(doc.preview.ends_with("..."));
            assert!(doc.preview.chars().count() <= PREVIEW_CHARS + 3);
        }

        let gov = result
            .documents
            .iter()
            .find(|d| d.id == 1)
            .unwrap();
        assert!(gov.preview.starts_with("The President of the United States"));
    }

    #[test]
    fn top_n_bounds_document_count() {
        let corpus = seed_corpus();
        let all = retrieve(&params("president", 10, None), &corpus);
        assert_eq!(all.documents.len(), 5);

        let capped = retrieve(&params("president", 10, Some(2)), &corpus);
        assert_eq!(capped.documents.len(), 2);
        // The cap keeps the highest-scoring documents.
        assert!(capped.documents[0].score >= capped.documents[1].score);
        assert_eq!(capped.documents[0].id, all.documents[0].id);
    }

    #[test]
    fn absent_n_returns_only_represented_documents() {
        let corpus = seed_corpus();
        // K=1 selects a single chunk, so exactly one document is represented.
        let result = retrieve(&params("president", 1, None), &corpus);
        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.documents[0].id, 1);
    }

    #[test]
    fn documents_sorted_descending() {
        let corpus = seed_corpus();
        let result = retrieve(&params("president", 10, None), &corpus);
        for pair in result.documents.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn corpus_is_untouched_by_retrieval() {
        let corpus = seed_corpus();
        let _ = retrieve(&params("president", 10, None), &corpus);
        // Base scores keep their fixture values; adjustment is per-pass.
        let first = &corpus.documents()[0].chunks[0];
        assert!((first.score - 0.96).abs() < 1e-6);
    }

    #[test]
    fn empty_corpus_yields_fallback_answer() {
        let corpus = Corpus::new();
        let result = retrieve(&params("president", 5, None), &corpus);
        assert!(result.chunks.is_empty());
        assert!(result.documents.is_empty());
        // The keyword template still renders, with zero counts.
        assert!(result.answer.contains("Retrieved 0 relevant chunks from 0 documents."));
    }
}
