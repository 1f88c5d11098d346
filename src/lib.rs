//! mockrag - an in-memory mock retrieval engine for RAG search demos.
//!
//! mockrag simulates the backend of a retrieval-augmented-generation search
//! application: a corpus of documents pre-split into scored chunks, a
//! keyword-boost ranking heuristic standing in for a semantic scorer, and
//! templated answer generation standing in for a language model. There is
//! no real indexing pipeline, embedding model, vector store, or LLM; the
//! corpus lives in process memory and every computation is deterministic.
//!
//! # Quick start
//!
//! ```
//! use mockrag::fixtures::seed_corpus;
//! use mockrag::search::{self, SearchParams};
//!
//! let corpus = seed_corpus();
//! let params = SearchParams {
//!     query: "Who is the president?".to_string(),
//!     top_k: 5,
//!     top_n: None,
//! };
//!
//! let result = search::retrieve(&params, &corpus);
//! assert!(result.answer.contains("Joe Biden"));
//! for chunk in &result.chunks {
//!     println!("{} ({:.2}) {}", chunk.source, chunk.score, chunk.id);
//! }
//! ```

pub mod answer;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod fixtures;
pub mod ingestion;
pub mod scoring;
pub mod search;
pub mod session;

pub use corpus::{Chunk, Corpus, Document, FileType};
pub use error::{Error, Result};
pub use ingestion::FileUpload;
pub use scoring::{KeywordBoostScorer, Scorer};
pub use search::{SearchParams, SearchResult, execute_search, retrieve};
pub use session::Session;
