//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is the explicit owner of all global view state — active tab,
//! logged-in profile, applied theme — and the seams the services operate
//! through. The shell holds one `AppState` and never mutates anything
//! directly; every transition goes through a service call or
//! [`AppState::set_tab`]. Clone is cheap — all inner fields are
//! Arc-wrapped.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::CatalogSet;
use crate::genai::GenAi;
use crate::services::access::{AccessController, AccessState, CredentialCheck, StaticCredentials};
use crate::services::library::ThemeLibrary;

// =============================================================================
// TABS
// =============================================================================

/// Top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Home,
    Wallpapers,
    Themes,
    Fonts,
    Icons,
    AiStudio,
    Profile,
    OwnerDashboard,
}

// =============================================================================
// SHELL STATE
// =============================================================================

pub const DEFAULT_ACCENT_COLOR: &str = "#8b5cf6";
pub const DEFAULT_BACKGROUND: &str = "#0d0b14";

/// Applied-theme and navigation state the rendering shell reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub active_tab: AppTab,
    pub accent_color: String,
    pub background: String,
    /// Home-screen image of the applied theme, when one has been applied.
    pub background_image: Option<String>,
}

impl ShellState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_tab: AppTab::Home,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            background_image: None,
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, cloned into every flow that needs it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<CatalogSet>>,
    /// Optional generation client. `None` disables generation features.
    pub genai: Option<Arc<dyn GenAi>>,
    pub access: Arc<RwLock<AccessController>>,
    pub library: Arc<ThemeLibrary>,
    pub shell: Arc<RwLock<ShellState>>,
}

impl AppState {
    #[must_use]
    pub fn new(
        catalog: CatalogSet,
        genai: Option<Arc<dyn GenAi>>,
        library: ThemeLibrary,
        credentials: Arc<dyn CredentialCheck>,
    ) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            genai,
            access: Arc::new(RwLock::new(AccessController::new(credentials))),
            library: Arc::new(library),
            shell: Arc::new(RwLock::new(ShellState::new())),
        }
    }

    /// Seeded state with the stock credential check.
    #[must_use]
    pub fn with_defaults(genai: Option<Arc<dyn GenAi>>, library: ThemeLibrary) -> Self {
        Self::new(CatalogSet::seeded(), genai, library, Arc::new(StaticCredentials))
    }

    /// Switch the active tab. The owner dashboard is only reachable once
    /// the access controller has granted `AdminActive`; other targets
    /// always succeed.
    pub async fn set_tab(&self, tab: AppTab) -> bool {
        if tab == AppTab::OwnerDashboard {
            let access = self.access.read().await;
            if access.state() != AccessState::AdminActive {
                return false;
            }
        }
        self.shell.write().await.active_tab = tab;
        true
    }

    pub async fn active_tab(&self) -> AppTab {
        self.shell.read().await.active_tab
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_helpers::test_app_state;

    #[tokio::test]
    async fn shell_defaults() {
        let state = test_app_state();
        let shell = state.shell.read().await;
        assert_eq!(shell.active_tab, AppTab::Home);
        assert_eq!(shell.accent_color, DEFAULT_ACCENT_COLOR);
        assert_eq!(shell.background, DEFAULT_BACKGROUND);
        assert!(shell.background_image.is_none());
    }

    #[tokio::test]
    async fn set_tab_switches_ordinary_targets() {
        let state = test_app_state();
        assert!(state.set_tab(AppTab::Themes).await);
        assert_eq!(state.active_tab().await, AppTab::Themes);
    }

    #[tokio::test]
    async fn owner_dashboard_requires_admin_active() {
        let state = test_app_state();
        assert!(!state.set_tab(AppTab::OwnerDashboard).await);
        assert_eq!(state.active_tab().await, AppTab::Home);

        {
            let mut access = state.access.write().await;
            access.login(crate::services::access::OWNER_IDENTITY_EMAIL);
            access.request_admin();
            access
                .submit_passphrase(crate::services::access::OWNER_PORTAL_PASSPHRASE)
                .unwrap();
        }
        assert!(state.set_tab(AppTab::OwnerDashboard).await);
        assert_eq!(state.active_tab().await, AppTab::OwnerDashboard);
    }
}
