//! The canned document database the demo ships with.
//!
//! Five documents, two chunks each, simulating the output of an indexing
//! pipeline. Contents and base scores are fixed so retrieval results are
//! reproducible.

use chrono::{DateTime, TimeZone, Utc};

use crate::corpus::{Chunk, Corpus, Document, FileType};

fn indexed_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("fixture timestamps are valid")
}

/// Build the default five-document corpus.
pub fn seed_corpus() -> Corpus {
    let documents = vec![
        Document {
            id: 1,
            name: "us_government_overview.pdf".to_string(),
            file_type: FileType::Pdf,
            size: 245_000,
            indexed_at: indexed_at(2024, 1, 15, 10, 30),
            chunks: vec![
                Chunk::new(
                    "c1",
                    "The President of the United States is the head of state \
                     and head of government of the United States. The current \
                     president is Joe Biden, who assumed office on January 20, \
                     2021, as the 46th president.",
                    0.96,
                ),
                Chunk::new(
                    "c2",
                    "Presidential elections are held every four years. The \
                     president serves a maximum of two terms, each lasting \
                     four years, as established by the 22nd Amendment.",
                    0.72,
                ),
            ],
        },
        Document {
            id: 2,
            name: "world_leaders_2024.docx".to_string(),
            file_type: FileType::Docx,
            size: 128_000,
            indexed_at: indexed_at(2024, 1, 16, 14, 20),
            chunks: vec![
                Chunk::new(
                    "c3",
                    "As of 2024, key world leaders include: Joe Biden (USA), \
                     Xi Jinping (China), Emmanuel Macron (France), Narendra \
                     Modi (India), and Olaf Scholz (Germany).",
                    0.91,
                ),
                Chunk::new(
                    "c4",
                    "The role of president varies significantly across \
                     different countries. In the USA, the president holds \
                     executive power, while in some countries the role is \
                     largely ceremonial.",
                    0.68,
                ),
            ],
        },
        Document {
            id: 3,
            name: "political_history_notes.txt".to_string(),
            file_type: FileType::Txt,
            size: 45_000,
            indexed_at: indexed_at(2024, 1, 17, 9, 15),
            chunks: vec![
                Chunk::new(
                    "c5",
                    "Donald Trump served as the 45th President of the United \
                     States from 2017 to 2021. He was succeeded by Joe Biden \
                     following the 2020 presidential election.",
                    0.89,
                ),
                Chunk::new(
                    "c6",
                    "The United States has had 46 presidents since George \
                     Washington took office in 1789. The presidency has \
                     evolved significantly over more than two centuries.",
                    0.75,
                ),
            ],
        },
        Document {
            id: 4,
            name: "executive_branch_guide.pdf".to_string(),
            file_type: FileType::Pdf,
            size: 312_000,
            indexed_at: indexed_at(2024, 1, 18, 16, 45),
            chunks: vec![
                Chunk::new(
                    "c7",
                    "The Executive Branch is headed by the President, who is \
                     both the chief executive of the federal government and \
                     the Commander-in-Chief of the armed forces.",
                    0.85,
                ),
                Chunk::new(
                    "c8",
                    "The Vice President, currently Kamala Harris, serves as \
                     the second-highest executive official and assumes the \
                     presidency if the president is unable to serve.",
                    0.82,
                ),
            ],
        },
        Document {
            id: 5,
            name: "election_results_2020.pdf".to_string(),
            file_type: FileType::Pdf,
            size: 567_000,
            indexed_at: indexed_at(2024, 1, 19, 11, 0),
            chunks: vec![
                Chunk::new(
                    "c9",
                    "The 2020 United States presidential election was held on \
                     November 3, 2020. Joe Biden won with 306 electoral votes \
                     against Donald Trump who received 232 electoral votes.",
                    0.87,
                ),
                Chunk::new(
                    "c10",
                    "Voter turnout in 2020 was the highest in over a century, \
                     with approximately 159 million votes cast, representing \
                     about 66.8% of eligible voters.",
                    0.52,
                ),
            ],
        },
    ];

    Corpus::from_documents(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_documents_ten_chunks() {
        let corpus = seed_corpus();
        assert_eq!(corpus.len(), 5);
        assert_eq!(corpus.total_chunks(), 10);
    }

    #[test]
    fn chunk_ids_are_unique() {
        let corpus = seed_corpus();
        let ids: std::collections::HashSet<_> = corpus
            .documents()
            .iter()
            .flat_map(|d| d.chunks.iter().map(|c| c.id.as_str()))
            .collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn scores_within_unit_interval() {
        let corpus = seed_corpus();
        for doc in corpus.documents() {
            for chunk in &doc.chunks {
                assert!((0.0..=1.0).contains(&chunk.score), "{}", chunk.id);
            }
        }
    }

    #[test]
    fn next_id_follows_fixtures() {
        assert_eq!(seed_corpus().next_id(), 6);
    }
}
