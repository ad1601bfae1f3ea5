//! Theme composer — device-spec inference plus three-step asset generation.
//!
//! DESIGN
//! ======
//! Two phases. A chat call first infers `ratio|palette` for the named
//! device; lock-screen, home-screen, and icon-pack images are then
//! generated sequentially — one outstanding remote call at a time. The
//! composite result is materialized only when every image call succeeds;
//! any partial failure discards the whole attempt and the caller observes
//! `None`, indistinguishable from "nothing generated yet".

use tracing::{info, warn};

use crate::genai::{AspectRatio, ImageData};
use crate::services::generation;
use crate::state::AppState;

/// Palette used when spec inference yields no colors.
pub const FALLBACK_PALETTE: [&str; 4] = ["#8b5cf6", "#3b82f6", "#ec4899", "#10b981"];

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// A required input field was blank. The shell renders this as a
    /// blocking alert; nothing was sent upstream.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Inferred display characteristics of the target device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSpec {
    pub aspect_ratio: AspectRatio,
    pub palette: Vec<String>,
}

/// The composite bundle of generated theme artifacts.
#[derive(Debug, Clone)]
pub struct ThemeResult {
    pub lock_screen: ImageData,
    pub home_screen: ImageData,
    pub icon_pack: ImageData,
    pub palette: Vec<String>,
    pub description: String,
    pub style: String,
    pub target_model: String,
    pub aspect_ratio: AspectRatio,
}

// =============================================================================
// SPEC INFERENCE
// =============================================================================

pub(crate) fn spec_prompt(device_model: &str, style_prompt: &str) -> String {
    format!(
        "Identify device: \"{device_model}\". Return aspect ratio (9:16 or 4:3) and a 4-color hex palette \
         that matches a \"{style_prompt}\" aesthetic. Format: RATIO|COLOR1,COLOR2,COLOR3,COLOR4"
    )
}

/// Parse the `RATIO|COLOR,...` reply. Ratio defaults to 9:16 unless the
/// ratio segment mentions 4:3; the palette falls back to
/// [`FALLBACK_PALETTE`] when parsing yields no colors. Color values are
/// trimmed but otherwise passed through unvalidated.
pub(crate) fn parse_device_spec(raw: &str) -> DeviceSpec {
    let mut segments = raw.splitn(2, '|');
    let ratio_part = segments.next().unwrap_or("");
    let palette_part = segments.next();

    let aspect_ratio = if ratio_part.contains("4:3") { AspectRatio::FourThree } else { AspectRatio::Tall };

    let palette: Vec<String> = palette_part
        .map(|p| {
            p.split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect()
        })
        .unwrap_or_default();
    let palette = if palette.is_empty() {
        FALLBACK_PALETTE.iter().map(ToString::to_string).collect()
    } else {
        palette
    };

    DeviceSpec { aspect_ratio, palette }
}

/// Ask the chat model for the device spec. A failed or garbled reply
/// degrades through [`parse_device_spec`] to the 9:16 / fallback-palette
/// defaults.
pub async fn infer_device_spec(state: &AppState, device_model: &str, style_prompt: &str) -> DeviceSpec {
    let raw = generation::chat_with_wally(state, &spec_prompt(device_model, style_prompt)).await;
    parse_device_spec(&raw)
}

// =============================================================================
// COMPOSITION
// =============================================================================

fn lock_screen_prompt(device_model: &str, style_prompt: &str) -> String {
    format!("Lock Screen wallpaper for {device_model}, {style_prompt} style, focus on upper composition")
}

fn home_screen_prompt(device_model: &str, style_prompt: &str) -> String {
    format!("Home Screen wallpaper for {device_model}, matching {style_prompt} theme, minimalist for icons")
}

fn icon_pack_prompt(style_prompt: &str) -> String {
    format!(
        "A pack of 4 minimalist mobile app icons for Phone, Mail, Camera, Browser, \
         matching {style_prompt} theme, on a grid"
    )
}

fn style_label(style_prompt: &str) -> String {
    let lead: Vec<&str> = style_prompt.split_whitespace().take(2).collect();
    format!("{} Luxe", lead.join(" "))
}

/// Run the full two-phase protocol.
///
/// # Errors
///
/// Returns [`ComposeError::MissingField`] when either input is blank.
/// Remote failures never error — they surface as `Ok(None)`.
pub async fn compose_theme(
    state: &AppState,
    device_model: &str,
    style_prompt: &str,
) -> Result<Option<ThemeResult>, ComposeError> {
    if device_model.trim().is_empty() {
        return Err(ComposeError::MissingField("device model"));
    }
    if style_prompt.trim().is_empty() {
        return Err(ComposeError::MissingField("design prompt"));
    }

    info!(device_model, "composer: inferring device spec");
    let spec = infer_device_spec(state, device_model, style_prompt).await;

    let lock = generation::generate_image(state, &lock_screen_prompt(device_model, style_prompt), spec.aspect_ratio)
        .await;
    let home = generation::generate_image(state, &home_screen_prompt(device_model, style_prompt), spec.aspect_ratio)
        .await;
    // Icon packs are always square regardless of the device ratio.
    let icons = generation::generate_image(state, &icon_pack_prompt(style_prompt), AspectRatio::Square).await;

    let (Some(lock_screen), Some(home_screen), Some(icon_pack)) = (lock, home, icons) else {
        warn!(device_model, "composer: generation incomplete, discarding partial result");
        return Ok(None);
    };

    info!(device_model, ratio = %spec.aspect_ratio, "composer: theme assembled");
    Ok(Some(ThemeResult {
        lock_screen,
        home_screen,
        icon_pack,
        palette: spec.palette,
        description: format!("Personalized {style_prompt} theme for {device_model}."),
        style: style_label(style_prompt),
        target_model: device_model.to_string(),
        aspect_ratio: spec.aspect_ratio,
    }))
}

#[cfg(test)]
#[path = "composer_test.rs"]
mod tests;
