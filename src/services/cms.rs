//! Owner CMS — in-memory CRUD over the asset catalogs.
//!
//! DESIGN
//! ======
//! Operates on one catalog at a time, selected by kind. Creates prepend,
//! updates replace wholesale by id, deletes remove exactly one item.
//! Single user, single writer — nothing persists beyond the session and
//! there is no conflict handling. The destructive-action confirmation
//! before a delete is the shell's concern.

use tracing::info;
use uuid::Uuid;

use crate::catalog::{Asset, AssetKind};
use crate::state::AppState;

/// Stand-in image for assets created without one.
pub const DEFAULT_ASSET_IMAGE: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=200";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// Blank title on create — a blocking validation the shell surfaces
    /// inline.
    #[error("a title is required")]
    MissingTitle,
    #[error("asset not found: {0}")]
    NotFound(String),
}

/// Raw form input for a new asset.
#[derive(Debug, Clone, Default)]
pub struct AssetDraft {
    pub title: String,
    pub author: String,
    /// URL or inline `data:` payload; blank falls back to
    /// [`DEFAULT_ASSET_IMAGE`].
    pub image: String,
    /// Comma-separated tag list.
    pub tags: String,
}

// =============================================================================
// CRUD
// =============================================================================

/// Create an asset and prepend it to the selected catalog.
///
/// # Errors
///
/// Returns [`CmsError::MissingTitle`] when the title is blank.
pub async fn create_asset(state: &AppState, kind: AssetKind, draft: &AssetDraft) -> Result<Asset, CmsError> {
    if draft.title.trim().is_empty() {
        return Err(CmsError::MissingTitle);
    }

    let asset = Asset {
        id: format!("owner-{}", Uuid::new_v4().simple()),
        title: draft.title.clone(),
        author: if draft.author.is_empty() { None } else { Some(draft.author.clone()) },
        image: if draft.image.is_empty() { DEFAULT_ASSET_IMAGE.to_string() } else { draft.image.clone() },
        likes: None,
        rating: None,
        price: None,
        tags: parse_tags(&draft.tags),
        is_pro: false,
        kind,
    };

    let mut catalog = state.catalog.write().await;
    catalog.get_mut(kind).prepend(asset.clone());
    info!(?kind, id = %asset.id, "cms: asset created");
    Ok(asset)
}

/// Replace an existing asset wholesale by id.
///
/// # Errors
///
/// Returns [`CmsError::NotFound`] when no asset carries the id.
pub async fn update_asset(state: &AppState, kind: AssetKind, asset: Asset) -> Result<Asset, CmsError> {
    let mut catalog = state.catalog.write().await;
    if !catalog.get_mut(kind).replace(asset.clone()) {
        return Err(CmsError::NotFound(asset.id));
    }
    info!(?kind, id = %asset.id, "cms: asset updated");
    Ok(asset)
}

/// Remove exactly one asset by id, leaving all others untouched.
///
/// # Errors
///
/// Returns [`CmsError::NotFound`] when no asset carries the id.
pub async fn delete_asset(state: &AppState, kind: AssetKind, id: &str) -> Result<(), CmsError> {
    let mut catalog = state.catalog.write().await;
    if catalog.get_mut(kind).remove(id).is_none() {
        return Err(CmsError::NotFound(id.to_string()));
    }
    info!(?kind, %id, "cms: asset deleted");
    Ok(())
}

/// The dashboard list view: the active catalog filtered by a
/// case-insensitive title substring.
pub async fn list_assets(state: &AppState, kind: AssetKind, filter: &str) -> Vec<Asset> {
    let needle = filter.to_lowercase();
    let catalog = state.catalog.read().await;
    catalog
        .get(kind)
        .assets()
        .iter()
        .filter(|a| a.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
#[path = "cms_test.rs"]
mod tests;
