//! Answer templating.
//!
//! The "generated answer" is assembled from one of two fixed templates, a
//! stand-in for a real language model conditioned on the retrieved context.

use crate::search::{DocumentHit, ScoredChunk};

/// Render a score in [0, 1] as whole-percentage text ("96").
pub fn percent(score: f32) -> String {
    format!("{:.0}", f64::from(score) * 100.0)
}

/// Synthesize the natural-language answer for a completed retrieval pass.
///
/// `keyword_matched` selects between the fixed explanatory paragraph (the
/// query hit the keyword-boost condition) and the generic fallback that
/// reports result counts. Both close with figures computed from the actual
/// selection, so a zero-result query still renders a well-formed answer.
pub fn synthesize(
    query: &str,
    chunks: &[ScoredChunk],
    documents: &[DocumentHit],
    keyword_matched: bool,
) -> String {
    if keyword_matched {
        keyword_answer(chunks.len(), documents.len())
    } else {
        generic_answer(query, chunks, documents.len())
    }
}

fn keyword_answer(chunk_count: usize, document_count: usize) -> String {
    format!(
        "Based on the retrieved documents from your knowledge base, here is \
         the answer to your query:\n\
         \n\
         **The current President of the United States is Joe Biden**, who \
         took office on January 20, 2021, as the 46th president.\n\
         \n\
         This information was retrieved from multiple sources in your \
         knowledge base:\n\
         \n\
         \u{2022} us_government_overview.pdf (96% relevance) - Contains \
         official information about the U.S. presidency\n\
         \u{2022} world_leaders_2024.docx (91% relevance) - Lists current \
         world leaders including the U.S. president\n\
         \u{2022} political_history_notes.txt (89% relevance) - Provides \
         historical context about presidential succession\n\
         \n\
         The Vice President is Kamala Harris, who would assume the \
         presidency if the president is unable to serve.\n\
         \n\
         Retrieved {chunk_count} relevant chunks from {document_count} \
         documents."
    )
}

fn generic_answer(
    query: &str,
    chunks: &[ScoredChunk],
    document_count: usize,
) -> String {
    // An empty selection renders as "unknown" at 0%, not a fault.
    let top_source = chunks.first().map_or("unknown", |c| c.source.as_str());
    let top_percent =
        chunks.first().map_or_else(|| "0".to_string(), |c| percent(c.score));

    format!(
        "Based on the search through your knowledge base for \"{query}\":\n\
         \n\
         Found {} relevant passages across {document_count} documents.\n\
         \n\
         The most relevant information comes from \"{top_source}\" with \
         {top_percent}% relevance.\n\
         \n\
         Please review the chunks and documents in the sidebar for detailed \
         information.",
        chunks.len()
    )
}
