//! Wally — application core for a curated-asset studio app.
//!
//! ARCHITECTURE
//! ============
//! The crate is the state owner a rendering shell embeds. [`state::AppState`]
//! holds the seeded catalogs, the optional generation client, the access
//! controller, and the shell state (active tab, applied theme); the
//! `services` modules operate through it:
//!
//! - [`services::generation`] — facade over the remote Gemini client; the
//!   single boundary where remote failures degrade to inert values.
//! - [`services::chat`] — the studio chat session: intent routing between
//!   conversational replies and image generation.
//! - [`services::composer`] — device-spec inference plus three-step theme
//!   asset generation with all-or-nothing materialization.
//! - [`services::access`] — owner identity + portal passphrase gating.
//! - [`services::cms`] — owner-only CRUD over the asset catalogs.
//! - [`services::library`] — saved-theme persistence (one JSON document).
//!
//! There is no network surface and no CLI; the shell drives everything
//! through explicit calls.

pub mod catalog;
pub mod genai;
pub mod services;
pub mod state;
