use chrono::Utc;
use tracing::debug;

use crate::corpus::{Chunk, Corpus, Document, FileType};

/// Base relevance score assigned to the placeholder chunk of an upload.
const PLACEHOLDER_SCORE: f32 = 0.75;

/// A file descriptor handed over by the upload boundary.
///
/// Only the name and byte size cross the boundary; the content is never
/// read. A real implementation would replace [`ingest_upload`] with
/// parsing, chunking, and embedding of the actual file.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub size: u64,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Simulate indexing an uploaded file.
///
/// Synthesizes a document with the next sequential identifier, a file-type
/// tag derived from the name extension, the current timestamp, and exactly
/// one placeholder chunk at score 0.75. The document is appended to the
/// corpus and immediately visible to subsequent queries.
///
/// Returns the identifier assigned to the new document.
pub fn ingest_upload(corpus: &mut Corpus, upload: &FileUpload) -> u32 {
    let id = corpus.next_id();
    let document = Document {
        id,
        name: upload.name.clone(),
        file_type: FileType::from_name(&upload.name),
        size: upload.size,
        indexed_at: Utc::now(),
        chunks: vec![Chunk::new(
            format!("u{id}"),
            format!(
                "Content from {} has been indexed and is now searchable.",
                upload.name
            ),
            PLACEHOLDER_SCORE,
        )],
    };

    debug!(id, name = %upload.name, size = upload.size, "indexed upload");
    corpus.push(document);
    id
}

/// Remove a document (and implicitly its chunks) from the corpus.
///
/// Unknown identifiers are a silent no-op. Returns whether a document was
/// actually removed.
pub fn delete_document(corpus: &mut Corpus, id: u32) -> bool {
    let removed = corpus.remove(id);
    if removed {
        debug!(id, "deleted document");
    }
    removed
}
