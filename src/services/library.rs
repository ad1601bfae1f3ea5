//! Saved-theme library — single-document JSON persistence.
//!
//! DESIGN
//! ======
//! The library mirrors a single storage key holding a bare JSON array:
//! the whole document is rewritten on every change. No schema version,
//! no migration; unreadable content degrades to an empty library rather
//! than an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::services::composer::ThemeResult;
use crate::state::AppState;

/// Storage key — also the stem of the on-disk document.
pub const STORAGE_KEY: &str = "wally_saved_themes";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("library io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("library encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted record derived from a composed theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTheme {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Home-screen data URL, doubling as the list preview.
    pub image: String,
    pub lock_screen: String,
    pub icon_pack: String,
    pub palette: Vec<String>,
    pub tags: Vec<String>,
    pub is_pro: bool,
    pub target_model: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
}

/// Build the persisted record for a composed theme.
#[must_use]
pub fn record_from_result(result: &ThemeResult) -> SavedTheme {
    SavedTheme {
        id: format!("saved-{}", Uuid::new_v4().simple()),
        title: result.style.clone(),
        author: "You".to_string(),
        image: result.home_screen.data_url(),
        lock_screen: result.lock_screen.data_url(),
        icon_pack: result.icon_pack.data_url(),
        palette: result.palette.clone(),
        tags: vec!["Saved".to_string(), "Custom".to_string()],
        is_pro: false,
        target_model: result.target_model.clone(),
        timestamp: OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default(),
    }
}

// =============================================================================
// LIBRARY
// =============================================================================

#[derive(Debug)]
pub struct ThemeLibrary {
    path: PathBuf,
    themes: RwLock<Vec<SavedTheme>>,
}

impl ThemeLibrary {
    /// Open the library rooted at `dir`, reading any existing document.
    /// A missing file is an empty library; a corrupt one is logged and
    /// treated as empty.
    pub async fn open(dir: &Path) -> Self {
        let path = document_path(dir);
        let themes = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(themes) => themes,
                Err(e) => {
                    warn!(error = %e, "failed to parse saved themes, starting empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, themes: RwLock::new(themes) }
    }

    /// An empty library rooted at `dir` without touching the filesystem.
    #[must_use]
    pub fn detached(dir: &Path) -> Self {
        Self { path: document_path(dir), themes: RwLock::new(Vec::new()) }
    }

    /// Saved themes, newest first.
    pub async fn list(&self) -> Vec<SavedTheme> {
        self.themes.read().await.clone()
    }

    /// Prepend a record and rewrite the document.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`] on encode or write failure.
    pub async fn save(&self, record: SavedTheme) -> Result<(), LibraryError> {
        let mut themes = self.themes.write().await;
        themes.insert(0, record);
        self.flush(&themes).await
    }

    /// Remove a record by id and rewrite the document. Returns whether a
    /// record was removed.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`] on encode or write failure.
    pub async fn delete(&self, id: &str) -> Result<bool, LibraryError> {
        let mut themes = self.themes.write().await;
        let before = themes.len();
        themes.retain(|t| t.id != id);
        if themes.len() == before {
            return Ok(false);
        }
        self.flush(&themes).await?;
        Ok(true)
    }

    async fn flush(&self, themes: &[SavedTheme]) -> Result<(), LibraryError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec(themes)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

fn document_path(dir: &Path) -> PathBuf {
    dir.join(format!("{STORAGE_KEY}.json"))
}

// =============================================================================
// STATE-LEVEL FLOWS
// =============================================================================

/// Persist a composed theme into the library.
///
/// # Errors
///
/// Returns [`LibraryError`] when the document cannot be written.
pub async fn save_theme(state: &AppState, result: &ThemeResult) -> Result<SavedTheme, LibraryError> {
    let record = record_from_result(result);
    state.library.save(record.clone()).await?;
    info!(id = %record.id, "library: theme saved");
    Ok(record)
}

/// Apply a composed theme to the shell: accent color from the first
/// palette entry, background image from the home screen.
pub async fn apply_theme(state: &AppState, result: &ThemeResult) {
    let mut shell = state.shell.write().await;
    if let Some(first) = result.palette.first() {
        shell.accent_color = first.clone();
    }
    shell.background_image = Some(result.home_screen.data_url());
    info!(style = %result.style, "library: theme applied");
}

#[cfg(test)]
#[path = "library_test.rs"]
mod tests;
