//! Asset catalog — seeded collections and browse-time filtering.
//!
//! DESIGN
//! ======
//! Four independent collections (wallpapers, themes, fonts, icons), each
//! an ordered list with unique ids. Browsing screens read through
//! [`Catalog::filter`]; the owner CMS mutates through prepend / replace /
//! remove. Assets are immutable once handed out — the CMS replaces
//! wholesale rather than patching fields.

use serde::{Deserialize, Serialize};

// =============================================================================
// ASSET
// =============================================================================

/// Variant kind of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Wallpaper,
    Theme,
    Font,
    Icon,
}

/// A single catalog entry with display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique within the owning collection.
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Display image: a URL or an inline `data:` URL.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pro: bool,
    pub kind: AssetKind,
}

// =============================================================================
// CATALOG
// =============================================================================

/// An ordered collection of assets of one kind.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    assets: Vec<Asset>,
}

impl Catalog {
    #[must_use]
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Insert at the front — newest entries lead the storefront.
    pub fn prepend(&mut self, asset: Asset) {
        self.assets.insert(0, asset);
    }

    /// Replace the asset with the same id wholesale. Returns `false` when
    /// no asset carries that id.
    pub fn replace(&mut self, asset: Asset) -> bool {
        match self.assets.iter_mut().find(|a| a.id == asset.id) {
            Some(slot) => {
                *slot = asset;
                true
            }
            None => false,
        }
    }

    /// Remove by id, returning the removed asset.
    pub fn remove(&mut self, id: &str) -> Option<Asset> {
        let index = self.assets.iter().position(|a| a.id == id)?;
        Some(self.assets.remove(index))
    }

    /// Browse-time filter: category is an exact tag match (`"All"` passes
    /// everything), query is a case-insensitive substring match against
    /// title and tags.
    #[must_use]
    pub fn filter(&self, category: &str, query: &str) -> Vec<&Asset> {
        let needle = query.to_lowercase();
        self.assets
            .iter()
            .filter(|asset| {
                let matches_category = category == "All" || asset.tags.iter().any(|t| t == category);
                let matches_query = needle.is_empty()
                    || asset.title.to_lowercase().contains(&needle)
                    || asset
                        .tags
                        .iter()
                        .any(|t| t.to_lowercase().contains(&needle));
                matches_category && matches_query
            })
            .collect()
    }
}

// =============================================================================
// CATALOG SET
// =============================================================================

/// The four per-kind collections the app browses and the CMS manages.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    pub wallpapers: Catalog,
    pub themes: Catalog,
    pub fonts: Catalog,
    pub icons: Catalog,
}

impl CatalogSet {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            wallpapers: Catalog::default(),
            themes: Catalog::default(),
            fonts: Catalog::default(),
            icons: Catalog::default(),
        }
    }

    /// The stock storefront content.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            wallpapers: Catalog::new(seed_wallpapers()),
            themes: Catalog::new(seed_themes()),
            fonts: Catalog::new(seed_fonts()),
            icons: Catalog::new(seed_icons()),
        }
    }

    #[must_use]
    pub fn get(&self, kind: AssetKind) -> &Catalog {
        match kind {
            AssetKind::Wallpaper => &self.wallpapers,
            AssetKind::Theme => &self.themes,
            AssetKind::Font => &self.fonts,
            AssetKind::Icon => &self.icons,
        }
    }

    pub fn get_mut(&mut self, kind: AssetKind) -> &mut Catalog {
        match kind {
            AssetKind::Wallpaper => &mut self.wallpapers,
            AssetKind::Theme => &mut self.themes,
            AssetKind::Font => &mut self.fonts,
            AssetKind::Icon => &mut self.icons,
        }
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::seeded()
    }
}

// =============================================================================
// SEED DATA
// =============================================================================

fn asset(id: &str, title: &str, author: &str, image: &str, kind: AssetKind) -> Asset {
    Asset {
        id: id.to_string(),
        title: title.to_string(),
        author: Some(author.to_string()),
        image: image.to_string(),
        likes: None,
        rating: None,
        price: None,
        tags: Vec::new(),
        is_pro: false,
        kind,
    }
}

fn tagged(mut base: Asset, tags: &[&str]) -> Asset {
    base.tags = tags.iter().map(ToString::to_string).collect();
    base
}

fn seed_wallpapers() -> Vec<Asset> {
    let k = AssetKind::Wallpaper;
    let entries = [
        ("1", "Liquid Dreams", "Alex Chen", "photo-1618005182384-a83a8bd57fbe", "1.2k", vec!["Abstract"]),
        ("2", "Neon Gradient", "DesignLab", "photo-1550684848-fac1c5b4e853", "843", vec!["Abstract", "AMOLED"]),
        ("4", "Yosemite Gold", "NatureLover", "photo-1464822759023-fed622ff2c3b", "921", vec!["Nature"]),
        ("w5", "Icelandic Peak", "ArcticShot", "photo-1506744038136-46273834b3fb", "3.1k", vec!["Nature"]),
        ("w6", "Zen Void", "Minimalist", "photo-1494438639946-1ebd1d20bf85", "2.2k", vec!["Minimal"]),
        ("w7", "Soft Shadows", "Studio_S", "photo-1518640467707-6811f4a6ab73", "1.5k", vec!["Minimal"]),
        ("3", "Synthwave City", "NeonDreams", "photo-1605142859862-978be7eba909", "2.5k", vec!["Cyberpunk"]),
        ("w8", "Tokyo Nights", "Future_Viz", "photo-1542281286-9e0a16bb7366", "4.8k", vec!["Cyberpunk", "AMOLED"]),
    ];
    entries
        .into_iter()
        .map(|(id, title, author, photo, likes, tags)| {
            let mut a = tagged(asset(id, title, author, &unsplash(photo, 800), k), &tags);
            a.likes = Some(likes.to_string());
            a
        })
        .collect()
}

fn seed_themes() -> Vec<Asset> {
    let k = AssetKind::Theme;
    let entries = [
        ("t1", "Cyber Seoul", "NeonDreams", "photo-1614850523296-d8c1af93d400", 4.9, true, "Futuristic"),
        ("t2", "Zen Geometric", "ArtStation", "photo-1550684847-75bdda21cc95", 4.7, false, "Minimalist"),
        ("t3", "Misty Peaks", "NatureLover", "photo-1464822759023-fed622ff2c3b", 4.5, false, "Nature"),
        ("t4", "Pastel Material", "GoogleDesign", "photo-1557683316-973673baf926", 4.8, false, "Material"),
        ("t5", "Inferno Gaming", "RazerStudio", "photo-1550745165-9bc0b252726f", 4.6, true, "Gaming"),
        ("t6", "Glass Morphism", "AppleDesign", "photo-1618005198919-d3d4b5a92ead", 4.9, false, "Minimalist"),
    ];
    entries
        .into_iter()
        .map(|(id, title, author, photo, rating, is_pro, tag)| {
            let mut a = tagged(asset(id, title, author, &unsplash(photo, 800), k), &[tag]);
            a.rating = Some(rating);
            a.is_pro = is_pro;
            a
        })
        .collect()
}

fn seed_fonts() -> Vec<Asset> {
    let k = AssetKind::Font;
    [
        ("f1", "Inter Tight", "Google Fonts"),
        ("f2", "Roboto Mono", "Google Fonts"),
        ("f3", "Playfair Display", "Claus Eggers"),
        ("f4", "Montserrat Bold", "Julieta Ulanovsky"),
        ("f5", "JetBrains Mono", "JetBrains"),
    ]
    .into_iter()
    .map(|(id, title, author)| asset(id, title, author, "", k))
    .collect()
}

fn seed_icons() -> Vec<Asset> {
    let k = AssetKind::Icon;
    let image = unsplash("photo-1614027126733-75768163dd34", 400);
    let entries = [
        ("i1", "Glassmorphism", "UI_Master", "Free"),
        ("i2", "Mono Line Dark", "Minimalist", "$2.99"),
        ("i3", "Clay 3D Pastel", "RenderLab", "$5.00"),
        ("i4", "Neumorphic Soft", "SoftUI", "Free"),
    ];
    entries
        .into_iter()
        .map(|(id, title, author, price)| {
            let mut a = asset(id, title, author, &image, k);
            a.price = Some(price.to_string());
            a
        })
        .collect()
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w={width}")
}
