use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, VocabError};

/// Reads the whole source file. A missing file is reported as
/// [`VocabError::SourceNotFound`] so the run stops before any work.
pub fn load_text(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            log::info!("loaded {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(VocabError::SourceNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(VocabError::Io(e)),
    }
}

/// Sources ending in `.html` or `.htm` get their markup stripped before tokenizing.
pub fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}
