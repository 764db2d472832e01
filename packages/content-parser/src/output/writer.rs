//! Flow-data writers for parsed documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::format::OutputFormat;
use crate::error::Result;
use crate::types::Document;

/// Render a document as JSON flow data.
pub fn to_json(document: &Document, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Read a document back from JSON flow data.
pub fn from_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Render a document as YAML flow data.
///
/// The output starts with a `---` document marker and has sequence items
/// indented under their parent key.
pub fn to_yaml(document: &Document) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(document)?;
    let yaml = indent_yaml_sequences(&yaml);

    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Read a document back from YAML flow data.
pub fn from_yaml(yaml: &str) -> Result<Document> {
    Ok(serde_yaml_ng::from_str(yaml)?)
}

/// Render a document in the given format.
pub fn render(document: &Document, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(document, pretty),
        OutputFormat::Yaml => to_yaml(document),
    }
}

/// Path of the output file for `input` inside `output_dir`.
///
/// Keeps the input's file stem and swaps the extension, so
/// `sops/cleaning.html` becomes `<output_dir>/cleaning.json`.
#[must_use]
pub fn output_path(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "document".into(), |s| s.to_string_lossy());
    output_dir.join(format!("{stem}.{}", format.extension()))
}

/// Save a document to `path`.
///
/// Writes to a temp file next to the target, syncs it, then renames, so a
/// crash never leaves a half-written file behind. Pretty-prints JSON.
pub fn save_document(document: &Document, path: &Path, format: OutputFormat) -> Result<()> {
    let content = render(document, format, true)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map_or_else(|| "document".into(), |s| s.to_string_lossy());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), %format, "Saved document");

    Ok(())
}

/// Indent sequence items two spaces under their parent key.
///
/// serde_yaml_ng writes `- ` items at the same column as the key that owns
/// them; yamllint's `indent-sequences: true` expects them nested.
fn indent_yaml_sequences(yaml: &str) -> String {
    let mut lines = Vec::new();
    // Columns at which the currently open sequences start
    let mut open: Vec<usize> = Vec::new();

    for line in yaml.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            lines.push(line.to_string());
            continue;
        }

        let column = line.len() - trimmed.len();
        let is_item = trimmed.starts_with("- ") || trimmed == "-";

        while let Some(&start) = open.last() {
            if column < start || (column == start && !is_item) {
                open.pop();
            } else {
                break;
            }
        }
        if is_item && open.last() != Some(&column) {
            open.push(column);
        }

        let extra = open.len() * 2;
        lines.push(format!("{}{trimmed}", " ".repeat(column + extra)));
    }

    lines.join("\n")
}
