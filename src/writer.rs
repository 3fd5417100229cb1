use std::fs;
use std::path::Path;

use crate::error::Result;

pub const DISPLAY_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `a, b, c` on one line.
    Flat,
    /// A JSON array of strings.
    Json,
}

impl OutputFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Flat,
        }
    }
}

/// Comma separated tokens, breaking the line once the running width passes `width`.
pub fn wrap_for_display<S: AsRef<str>>(tokens: &[S], width: usize) -> String {
    let mut out = String::new();
    let mut line_width = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let token_width = token.chars().count() + 2;
        if i > 0 {
            if line_width + token_width > width {
                out.push_str(",\n");
                line_width = 0;
            } else {
                out.push_str(", ");
            }
        }
        out.push_str(token);
        line_width += token_width;
    }
    out
}

pub fn join_flat<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders tokens in `format`.
pub fn render(tokens: &[String], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Flat => join_flat(tokens),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)?,
    })
}

/// Truncates `path` and writes the tokens, choosing the format from its extension.
pub fn write_tokens(path: &Path, tokens: &[String]) -> Result<()> {
    let format = OutputFormat::for_path(path);
    let content = render(tokens, format)?;
    fs::write(path, content)?;
    log::info!(
        "wrote {} tokens to {} as {:?}",
        tokens.len(),
        path.display(),
        format
    );
    Ok(())
}
