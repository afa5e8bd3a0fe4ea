/// Lookup table operations shared by all dictionary books
pub trait Dictionary: Send + Sync {
    /// Whether the table has an entry under this exact key
    fn contains(&self, key: &str) -> bool;

    /// Number of entries in the table
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::ParseError(err.to_string())
    }
}
