use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mockrag::{
    Corpus, Error, FileUpload, Session,
    answer::percent,
    cli::{Cli, Command, DocsAction},
    corpus::format_size,
    error::Result,
    fixtures::seed_corpus,
    search::{self, SearchParams},
};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("MOCKRAG_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let corpus = if cli.empty { Corpus::new() } else { seed_corpus() };
    let mut session = Session::new(corpus);
    if let Some(ms) = cli.delay_ms {
        session = session.with_delay(Duration::from_millis(ms));
    }

    match cli.command {
        Command::Search(args) => {
            cmd_search(&session, &args)?;
        }
        Command::Docs { action } => match action {
            DocsAction::List { json } => {
                docs_list(&session, json);
            }
            DocsAction::Add { name, size } => {
                docs_add(&mut session, &name, size);
            }
            DocsAction::Remove { id } => {
                docs_remove(&mut session, id);
            }
            DocsAction::Show { id, json } => {
                docs_show(&mut session, id, json)?;
            }
        },
        Command::Status(args) => {
            cmd_status(&session, args.json);
        }
        Command::Completions(args) => {
            args.generate();
        }
    }

    Ok(())
}

fn cmd_search(session: &Session, args: &mockrag::cli::SearchArgs) -> Result<()> {
    // The engine is total over its inputs; blank queries are rejected here
    // at the boundary, as the reference UI does.
    if args.query.trim().is_empty() {
        return Err(Error::Query(
            "query must not be empty or whitespace-only".to_string(),
        ));
    }

    let params = SearchParams {
        query: args.query.clone(),
        top_k: args.top_k as usize,
        top_n: args.top_n.map(|n| n as usize),
    };
    let result = session.search(&params);

    if args.json {
        search::format_json(&result, &args.query);
    } else {
        search::format_human(&result);
    }
    Ok(())
}

fn docs_list(session: &Session, json: bool) {
    let documents = session.corpus().documents();

    if json {
        let payload: Vec<_> = documents
            .iter()
            .map(|d| {
                serde_json::json!({
                    "id": d.id,
                    "name": d.name,
                    "type": d.file_type,
                    "size": d.size,
                    "chunk_count": d.chunk_count(),
                    "indexed_at": d.indexed_at,
                })
            })
            .collect();
        println!("{}", serde_json::json!(payload));
        return;
    }

    if documents.is_empty() {
        println!("No documents indexed yet.");
        return;
    }

    for doc in documents {
        println!(
            "{:>3}. {} [{}] {} | {} chunks | {}",
            doc.id,
            doc.name,
            doc.file_type,
            format_size(doc.size),
            doc.chunk_count(),
            doc.indexed_at.format("%b %d, %Y %H:%M"),
        );
    }
}

fn docs_add(session: &mut Session, name: &str, size: u64) {
    let id = session.upload(&FileUpload::new(name, size));
    println!("Indexed '{name}' as document {id}");
}

fn docs_remove(session: &mut Session, id: u32) {
    // Absent ids are a no-op, not an error.
    if session.delete(id) {
        println!("Removed document {id}");
    } else {
        println!("No document with id {id}");
    }
}

fn docs_show(session: &mut Session, id: u32, json: bool) -> Result<()> {
    session.select(id);
    let doc = session.selected().ok_or_else(|| Error::NotFound {
        kind: "document",
        name: id.to_string(),
    })?;

    if json {
        println!("{}", serde_json::json!(doc));
        return Ok(());
    }

    println!(
        "{} [{}] {} | indexed {}",
        doc.name,
        doc.file_type,
        format_size(doc.size),
        doc.indexed_at.format("%b %d, %Y %H:%M"),
    );
    for (i, chunk) in doc.chunks.iter().enumerate() {
        println!("  Chunk {} (score: {}%) #{}", i + 1, percent(chunk.score), chunk.id);
        println!("    {}", chunk.content);
    }
    Ok(())
}

fn cmd_status(session: &Session, json: bool) {
    let corpus = session.corpus();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "documents": corpus.len(),
                "chunks": corpus.total_chunks(),
                "total_size": corpus.total_size(),
            })
        );
        return;
    }

    println!(
        "{} documents \u{2022} {} chunks \u{2022} {}",
        corpus.len(),
        corpus.total_chunks(),
        format_size(corpus.total_size()),
    );
}
