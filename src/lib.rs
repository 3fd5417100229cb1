pub mod analyzer;
pub mod chunker;
pub mod cli;
pub mod config;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod pos;
pub mod refine;
pub mod session;
pub mod tagger;
pub mod tokens;
pub mod writer;

pub use error::{Result, VocabError};
