use crate::corpus::Chunk;

/// A relevance scorer for (query, chunk) pairs.
///
/// The retrieval pipeline is generic over this trait so the mock keyword
/// heuristic can be swapped for a real similarity function (e.g. an
/// embedding-based scorer) without touching ranking, selection, or answer
/// templating.
pub trait Scorer {
    /// Adjusted relevance score for `chunk` under `query`, in [0, 1].
    fn score(&self, query: &str, chunk: &Chunk) -> f32;

    /// Whether `query` triggers this scorer's boost condition at all.
    /// Answer templating keys off the same signal.
    fn matches_query(&self, _query: &str) -> bool {
        false
    }
}

/// The mock scorer: a deterministic, case-insensitive keyword boost.
///
/// When both the query and the chunk text contain the keyword as a
/// substring, the chunk's base score is raised by `boost`, capped at `cap`.
/// Every other chunk keeps its base score unmodified.
#[derive(Debug, Clone)]
pub struct KeywordBoostScorer {
    pub keyword: String,
    pub boost: f32,
    pub cap: f32,
}

impl KeywordBoostScorer {
    pub fn new(keyword: impl Into<String>, boost: f32, cap: f32) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            boost,
            cap,
        }
    }
}

impl Default for KeywordBoostScorer {
    fn default() -> Self {
        Self::new("president", 0.05, 0.99)
    }
}

impl Scorer for KeywordBoostScorer {
    fn score(&self, query: &str, chunk: &Chunk) -> f32 {
        if self.matches_query(query)
            && chunk.content.to_lowercase().contains(&self.keyword)
        {
            (chunk.score + self.boost).min(self.cap)
        } else {
            chunk.score
        }
    }

    fn matches_query(&self, query: &str) -> bool {
        query.to_lowercase().contains(&self.keyword)
    }
}
