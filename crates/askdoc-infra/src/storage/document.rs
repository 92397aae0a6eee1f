//! Document source.
//!
//! The data directory is created on startup if absent. The first regular
//! file in it (by file name) is loaded whole as UTF-8 text; hidden files
//! are skipped.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use askdoc_types::document::Document;
use askdoc_types::error::DocumentError;

/// Create `dir` (and parents) if it does not exist.
pub async fn ensure_data_dir(dir: &Path) -> Result<(), DocumentError> {
    if tokio::fs::try_exists(dir).await.unwrap_or(false) {
        return Ok(());
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| DocumentError::CreateDirectory {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
    info!(path = %dir.display(), "Created data directory");
    Ok(())
}

/// Candidate document files in `dir`, sorted by file name.
pub async fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, DocumentError> {
    let list_err = |e: std::io::Error| DocumentError::ListDirectory {
        path: dir.to_path_buf(),
        message: e.to_string(),
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(list_err)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        if is_file && !hidden {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Load the first document in `dir`.
///
/// Fails with [`DocumentError::EmptyDirectory`] if there is none.
pub async fn load_first_document(dir: &Path) -> Result<Document, DocumentError> {
    let files = list_documents(dir).await?;
    let Some(first) = files.first() else {
        return Err(DocumentError::EmptyDirectory(dir.to_path_buf()));
    };
    if files.len() > 1 {
        warn!(
            path = %first.display(),
            ignored = files.len() - 1,
            "Data directory holds several files; only the first is used"
        );
    }
    load_document(first).await
}

/// Load a specific document file.
pub async fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DocumentError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded document");
    Ok(Document {
        path: path.to_path_buf(),
        content,
    })
}
