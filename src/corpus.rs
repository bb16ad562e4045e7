//! Loading a directory of plain-text documents.
//!
//! # Examples
//!
//! ```
//! use lector::corpus::Corpus;
//!
//! let corpus = Corpus::from_documents(vec![
//!     ("a.txt", "The cat sat."),
//!     ("b.txt", "The dog ran."),
//! ]);
//!
//! assert_eq!(corpus.len(), 2);
//! assert_eq!(corpus.get("a.txt"), Some("The cat sat."));
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{LectorError, Result};

/// Raw document texts keyed by document name, ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    documents: BTreeMap<String, String>,
}

impl Corpus {
    /// Build a corpus from in-memory `(name, text)` pairs.
    ///
    /// A repeated name keeps the last text.
    pub fn from_documents<I, N, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        Corpus {
            documents: documents
                .into_iter()
                .map(|(name, text)| (name.into(), text.into()))
                .collect(),
        }
    }

    /// Read every regular file directly inside `dir`.
    ///
    /// Subdirectories are skipped. When `extension` is given, only files
    /// with that extension (compared case-insensitively, without the dot)
    /// are read. Bytes that are not valid UTF-8 are replaced rather than
    /// rejected.
    pub fn load<P: AsRef<Path>>(dir: P, extension: Option<&str>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(LectorError::config(format!(
                "corpus path {} is not a directory",
                dir.display()
            )));
        }

        let wanted = extension.map(|ext| ext.trim_start_matches('.').to_lowercase());
        let mut documents = BTreeMap::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type()?.is_file() {
                log::debug!("Skipping {}: not a regular file", path.display());
                continue;
            }

            if let Some(wanted) = &wanted {
                let matches = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.to_lowercase() == *wanted);
                if !matches {
                    log::debug!("Skipping {}: extension filter", path.display());
                    continue;
                }
            }

            let bytes = fs::read(&path)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            documents.insert(name, String::from_utf8_lossy(&bytes).into_owned());
        }

        log::info!("Loaded {} documents from {}", documents.len(), dir.display());
        Ok(Corpus { documents })
    }

    /// Text of the named document.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.documents.get(name).map(String::as_str)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// `(name, text)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// The underlying name-to-text map.
    pub fn documents(&self) -> &BTreeMap<String, String> {
        &self.documents
    }
}
