//! Split command - show the full-name / acronym split of a text

use clap::Parser;

use super::super::output::write_output;
use crate::acronym::find_acronym;

/// Show the full-name / acronym split of a text
#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// Text to split, e.g. "Support Vector Machine (SVM)"
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Print JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

/// Render the split of `text`, or a no-match notice.
pub fn render(text: &str, json: bool) -> String {
    let found = find_acronym(text);
    if json {
        let value = match found {
            Some(m) => serde_json::json!({
                "text": text,
                "full": m.full,
                "full_offset": m.full_offset,
                "acronym": m.acronym,
                "acronym_offset": m.acronym_offset,
            }),
            None => serde_json::json!({ "text": text, "full": null, "acronym": null }),
        };
        format!("{}\n", value)
    } else {
        match found {
            Some(m) => format!(
                "full:    {} @{}\nacronym: {} @{}\n",
                m.full, m.full_offset, m.acronym, m.acronym_offset
            ),
            None => "no acronym\n".to_string(),
        }
    }
}

/// Run the split command.
pub fn run(args: SplitArgs) -> Result<(), String> {
    let text = args.text.join(" ");
    write_output(&render(&text, args.json), None)
}
