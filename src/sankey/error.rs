use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SankeyError {
    #[error("line {line}: {message}")]
    DataFormat { line: usize, message: String },

    #[error("failed to read {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no dataset selected")]
    NoSelection,
}

impl SankeyError {
    pub(super) fn data_format(line: usize, message: impl Into<String>) -> Self {
        Self::DataFormat {
            line,
            message: message.into(),
        }
    }

    /// True for `FileAccess` only.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FileAccess { .. })
    }
}
