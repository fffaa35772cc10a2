//! Output formatting utilities for CLI commands

use std::io::{self, Write};

use crate::Clusters;

/// Format error message for display
pub fn format_error(operation: &str, details: &str) -> String {
    format!("ERROR: {} - {}", operation, details)
}

/// Write output to file or stdout
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path, e))?;
    } else {
        print!("{}", content);
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;
    }
    Ok(())
}

/// Clusters as pretty JSON, keyed by cluster id.
pub fn clusters_to_json(clusters: &Clusters) -> Result<String, String> {
    let mut json = serde_json::to_string_pretty(clusters)
        .map_err(|e| format!("Failed to serialize clusters: {}", e))?;
    json.push('\n');
    Ok(json)
}

/// One line per cluster: `id<TAB>size<TAB>text | text | ...`
pub fn clusters_to_text(clusters: &Clusters) -> String {
    let mut out = String::new();
    for (id, members) in clusters {
        let texts: Vec<&str> = members.iter().map(|m| m.text()).collect();
        out.push_str(&format!("{}\t{}\t{}\n", id, members.len(), texts.join(" | ")));
    }
    out
}
