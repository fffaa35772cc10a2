//! Validate command - check that mentions line up with document text

use clap::Parser;

use super::super::output::write_output;
use super::super::utils::{parse_documents, read_input};
use crate::AnnotatedDocument;

/// Check that document mentions line up with the document text
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Annotated documents (JSON array or JSONL); reads stdin if omitted or "-"
    #[arg(value_name = "FILE")]
    pub input: Option<String>,
}

/// One line per misaligned mention; empty when everything lines up.
pub fn report(docs: &[AnnotatedDocument]) -> Vec<String> {
    docs.iter()
        .flat_map(|doc| {
            doc.misaligned_mentions().into_iter().map(move |m| {
                format!(
                    "doc {}: mention {:?} (doc {}, {}..{}) does not match the text",
                    doc.id,
                    m.text(),
                    m.parent_doc_id(),
                    m.start(),
                    m.end()
                )
            })
        })
        .collect()
}

/// Run the validate command.
pub fn run(args: ValidateArgs) -> Result<(), String> {
    let input = read_input(args.input.as_deref())?;
    let docs = parse_documents(&input)?;
    if docs.iter().all(AnnotatedDocument::mention_text_matches) {
        let mentions: usize = docs.iter().map(|d| d.mentions.len()).sum();
        write_output(
            &format!("ok: {} documents, {} mentions\n", docs.len(), mentions),
            None,
        )
    } else {
        let problems = report(&docs);
        for line in &problems {
            log::warn!("{}", line);
        }
        Err(format!("{} misaligned mentions:\n{}", problems.len(), problems.join("\n")))
    }
}
