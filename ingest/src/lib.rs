//! Feed documents and stop words from files into an [`engine::SearchEngine`].
//!
//! The engine itself never touches the filesystem; this crate is the reading side.

use anyhow::{Context, Result};
use engine::{DocId, DocumentStatus, SearchConfig, SearchEngine};
use serde::Deserialize;
use walkdir::WalkDir;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub files: usize,
    pub documents: usize,
}

/// Read stop words separated by spaces or line breaks.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading stop words from {}", path.display()))?;
    Ok(text
        .lines()
        .flat_map(|line| line.split(' '))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect())
}

/// Build an engine from a stop-word file.
pub fn engine_from_stop_word_file<P: AsRef<Path>>(path: P) -> Result<SearchEngine> {
    let words = load_stop_words(&path)?;
    SearchEngine::new(words).with_context(|| format!("stop words in {}", path.as_ref().display()))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SearchConfig> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// One document per non-blank line. Returns the number of documents added.
pub fn ingest_jsonl<R: BufRead>(reader: R, engine: &mut SearchEngine) -> Result<usize> {
    let mut added = 0;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line).with_context(|| format!("line {}", lineno + 1))?;
        add(doc, engine).with_context(|| format!("line {}", lineno + 1))?;
        added += 1;
    }
    Ok(added)
}

/// A JSON array of documents or a single document object.
pub fn ingest_json<R: Read>(reader: R, engine: &mut SearchEngine) -> Result<usize> {
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let docs: Vec<InputDoc> = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value::<InputDoc>)
            .collect::<std::result::Result<_, _>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        _ => anyhow::bail!("expected a document object or an array of documents"),
    };
    let mut added = 0;
    for doc in docs {
        add(doc, engine)?;
        added += 1;
    }
    Ok(added)
}

/// Ingest a `.json`/`.jsonl` file, or every such file under a directory in path order.
pub fn ingest_path<P: AsRef<Path>>(path: P, engine: &mut SearchEngine) -> Result<IngestStats> {
    let input_path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && is_document_file(p) {
                files.push(p.to_path_buf());
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else {
        anyhow::bail!("no such file or directory: {}", input_path.display());
    }

    let mut stats = IngestStats::default();
    for file in files {
        let f = File::open(&file).with_context(|| format!("opening {}", file.display()))?;
        let added = if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            ingest_jsonl(BufReader::new(f), engine)
        } else {
            ingest_json(BufReader::new(f), engine)
        }
        .with_context(|| format!("ingesting {}", file.display()))?;
        tracing::info!(file = %file.display(), documents = added, "ingested file");
        stats.files += 1;
        stats.documents += added;
    }
    tracing::info!(files = stats.files, documents = stats.documents, total = engine.document_count(), "ingestion complete");
    Ok(stats)
}

fn is_document_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|s| s.to_str()), Some("json" | "jsonl"))
}

fn add(doc: InputDoc, engine: &mut SearchEngine) -> Result<()> {
    engine.add_document(doc.id, &doc.text, doc.status, &doc.ratings)?;
    Ok(())
}
