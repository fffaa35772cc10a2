//! Input helpers shared by CLI commands

use std::fs;
use std::io::{self, Read};

use crate::{AnnotatedDocument, Mention};

/// Read `path`, or stdin when `path` is `None` or `"-"`.
pub fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(p) if p != "-" => {
            fs::read_to_string(p).map_err(|e| format!("Failed to read {}: {}", p, e))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(buf)
        }
    }
}

/// Parse mentions from a JSON array of mentions, a JSON array of annotated
/// documents, or JSONL with one mention per line.
pub fn parse_mentions(input: &str) -> Result<Vec<Mention>, String> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        let mention_err = match serde_json::from_str::<Vec<Mention>>(trimmed) {
            Ok(mentions) => return Ok(mentions),
            Err(e) => e,
        };
        let docs: Vec<AnnotatedDocument> = serde_json::from_str(trimmed).map_err(|doc_err| {
            format!(
                "Input is neither a mention array ({}) nor a document array ({})",
                mention_err, doc_err
            )
        })?;
        return Ok(docs.into_iter().flat_map(|d| d.mentions).collect());
    }
    parse_jsonl(input)
}

fn parse_jsonl<T: serde::de::DeserializeOwned>(input: &str) -> Result<Vec<T>, String> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| format!("Line {}: {}", i + 1, e))
        })
        .collect()
}

/// Parse annotated documents from a JSON array or JSONL.
pub fn parse_documents(input: &str) -> Result<Vec<AnnotatedDocument>, String> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|e| format!("Invalid document array: {}", e))
    } else {
        parse_jsonl(input)
    }
}
