use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EXPORT_FILE_NAME: &str = "learngame-material.md";
pub const EXPORT_MIME: &str = "text/markdown";
const PRINT_TITLE: &str = "LearnGame Material";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("cannot open print view: {0}")]
    Open(String),
}

/// Sends the whole text to the system clipboard using the OSC 52 terminal
/// escape. Terminals that ignore OSC 52 leave the clipboard unchanged.
pub fn copy<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))?;
    out.flush()
}

/// Saves the markdown as UTF-8 under the fixed export name and returns the
/// written path. The file handle is closed before returning.
pub fn download(text: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    {
        let mut file = File::create(&path)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()?;
    }
    Ok(path)
}

pub fn print_document(text: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>{title}</title>
        <style>
            body {{ font-family: Arial, sans-serif; padding: 20px; }}
            pre {{ background: #f5f5f5; padding: 15px; border-radius: 5px; white-space: pre-wrap; }}
            h1 {{ color: #4361ee; }}
        </style>
    </head>
    <body onload="window.print()">
        <h1>Study material - LearnGame AI</h1>
        <pre>{body}</pre>
    </body>
</html>
"#,
        title = PRINT_TITLE,
        body = escape_html(text)
    )
}

/// Writes the print view to a temporary HTML file and hands it to the system
/// browser, which opens the print dialog on load.
pub fn print(text: &str) -> Result<PathBuf, ExportError> {
    let mut file = tempfile::Builder::new()
        .prefix("learngame-print-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(print_document(text).as_bytes())?;
    let (_, path) = file.keep().map_err(|e| ExportError::Io(e.error))?;

    open::that(&path).map_err(|e| ExportError::Open(e.to_string()))?;
    Ok(path)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
