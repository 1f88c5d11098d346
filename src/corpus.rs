use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File-type tag derived from a document's name extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Txt,
    Docx,
    Other,
}

impl FileType {
    /// Derive the tag from a file name's extension (case-insensitive).
    ///
    /// Unknown extensions are not rejected; they are tagged [`FileType::Other`].
    /// The reference UI's drop handler is the layer that filters them out.
    pub fn from_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "txt" => Self::Txt,
            "docx" => Self::Docx,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pdf => "pdf",
            Self::Txt => "txt",
            Self::Docx => "docx",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A scored fragment of a document's text, the atomic unit of retrieval.
///
/// Chunks are owned exclusively by their document: they are created at
/// document-creation time and removed only when the document is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier, unique within the corpus (e.g. "c1", "u6").
    pub id: String,
    /// Text content of the fragment.
    pub content: String,
    /// Base relevance score in [0, 1].
    pub score: f32,
}

impl Chunk {
    pub fn new(id: impl Into<String>, content: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            score,
        }
    }
}

/// An indexed document with its ordered, pre-split chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Size of the original file in bytes. The content is never read;
    /// the size exists for display only.
    pub size: u64,
    pub indexed_at: DateTime<Utc>,
    pub chunks: Vec<Chunk>,
}

impl Document {
    /// Number of chunks, derived from the chunk sequence.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// The full in-memory set of indexed documents available for retrieval.
///
/// Mutable only by append (upload) and removal by identifier (delete);
/// insertion order is the default display order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    next_id: u32,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from pre-seeded documents.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let next_id = documents.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        Self { documents, next_id }
    }

    /// The identifier the next appended document will receive.
    ///
    /// Monotonic across the corpus lifetime, so identifiers are never
    /// reused after a deletion.
    pub fn next_id(&self) -> u32 {
        self.next_id.max(1)
    }

    /// Append a document. Advances the identifier counter past its id.
    pub fn push(&mut self, document: Document) {
        self.next_id = self.next_id.max(document.id + 1);
        self.documents.push(document);
    }

    /// Remove a document (and implicitly its chunks) by identifier.
    ///
    /// Returns `false` when no such document exists; absence is not an
    /// error, so repeated removal is a no-op.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        self.documents.len() < before
    }

    pub fn get(&self, id: u32) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total chunk count across all documents.
    pub fn total_chunks(&self) -> usize {
        self.documents.iter().map(Document::chunk_count).sum()
    }

    /// Total byte size across all documents.
    pub fn total_size(&self) -> u64 {
        self.documents.iter().map(|d| d.size).sum()
    }
}

/// Render a byte count the way the reference UI does: B, KB, or MB with
/// one decimal place.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: u32, name: &str) -> Document {
        Document {
            id,
            name: name.to_string(),
            file_type: FileType::from_name(name),
            size: 1000,
            indexed_at: Utc::now(),
            chunks: vec![Chunk::new(format!("c{id}"), "text", 0.5)],
        }
    }

    #[test]
    fn file_type_from_extension() {
        assert_eq!(FileType::from_name("report.pdf"), FileType::Pdf);
        assert_eq!(FileType::from_name("notes.TXT"), FileType::Txt);
        assert_eq!(FileType::from_name("memo.Docx"), FileType::Docx);
        assert_eq!(FileType::from_name("archive.zip"), FileType::Other);
        assert_eq!(FileType::from_name("noextension"), FileType::Other);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut corpus = Corpus::new();
        corpus.push(doc(1, "a.pdf"));
        corpus.push(doc(2, "b.txt"));
        let names: Vec<_> =
            corpus.documents().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.txt"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut corpus = Corpus::new();
        corpus.push(doc(1, "a.pdf"));
        assert!(corpus.remove(1));
        assert!(!corpus.remove(1));
        assert!(!corpus.remove(42));
        assert!(corpus.is_empty());
    }

    #[test]
    fn next_id_survives_deletion() {
        let mut corpus = Corpus::new();
        corpus.push(doc(1, "a.pdf"));
        corpus.push(doc(2, "b.txt"));
        corpus.push(doc(3, "c.docx"));
        corpus.remove(3);
        // len + 1 would hand out 3 again; the counter must not.
        assert_eq!(corpus.next_id(), 4);
    }

    #[test]
    fn chunk_count_is_derived() {
        let mut d = doc(1, "a.pdf");
        assert_eq!(d.chunk_count(), 1);
        d.chunks.push(Chunk::new("c2", "more", 0.4));
        assert_eq!(d.chunk_count(), 2);
    }

    #[test]
    fn totals_sum_over_documents() {
        let mut corpus = Corpus::new();
        corpus.push(doc(1, "a.pdf"));
        corpus.push(doc(2, "b.txt"));
        assert_eq!(corpus.total_chunks(), 2);
        assert_eq!(corpus.total_size(), 2000);
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(45_000), "43.9 KB");
        assert_eq!(format_size(2_500_000), "2.4 MB");
    }
}
