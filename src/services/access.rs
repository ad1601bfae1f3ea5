//! Access control — owner identity, portal passphrase, profile state.
//!
//! DESIGN
//! ======
//! Admin eligibility is a pure function of the login identity; the owner
//! portal adds a fixed-passphrase challenge on top of an already-eligible
//! identity. Non-owner identities are denied before the passphrase prompt
//! is ever shown. Transitions are driven only by explicit controller
//! calls — the shell's button events. There is no session expiry and no
//! attempt lockout; a failed passphrase leaves the challenge open for an
//! idempotent retry.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::state::{AppState, AppTab};

pub const OWNER_IDENTITY_EMAIL: &str = "sanju86682@gmail.com";
pub const OWNER_IDENTITY_PHONE: &str = "9501941286";
pub const OWNER_PORTAL_PASSPHRASE: &str = "Sanju900";

/// Shown under the passphrase field after a failed attempt.
pub const INCORRECT_KEY_MESSAGE: &str = "Incorrect key. Access denied.";

/// Shown when a non-owner identity requests the portal.
pub const ACCESS_DENIED_MESSAGE: &str =
    "Error: This is only for owner. Your account does not have administrative privileges.";

const DEFAULT_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=Alex";

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Credential-check capability. Injected so the inline constants can later
/// be replaced by real credential storage without touching call sites.
/// Two methods because eligibility is evaluated before any secret exists.
pub trait CredentialCheck: Send + Sync {
    /// Whether this identity is the owner (admin-eligible).
    fn is_owner_identity(&self, identity: &str) -> bool;

    /// Whether identity plus secret unlock the owner portal.
    fn is_authorized(&self, identity: &str, secret: &str) -> bool;
}

/// The stock check: two hardcoded identities and a plain-string passphrase
/// compare.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCredentials;

impl CredentialCheck for StaticCredentials {
    fn is_owner_identity(&self, identity: &str) -> bool {
        identity == OWNER_IDENTITY_EMAIL || identity == OWNER_IDENTITY_PHONE
    }

    fn is_authorized(&self, identity: &str, secret: &str) -> bool {
        self.is_owner_identity(identity) && secret == OWNER_PORTAL_PASSPHRASE
    }
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    LoggedOut,
    LoggedIn,
    AwaitingPassphrase,
    AccessDenied,
    AdminActive,
}

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// The passphrase did not match. The challenge stays open.
    #[error("Incorrect key. Access denied.")]
    IncorrectKey,
    /// No passphrase challenge is in progress.
    #[error("no passphrase challenge in progress")]
    NoChallenge,
}

/// The logged-in user's display profile. `is_admin` is derived from the
/// login identity on every login — it is never persisted trust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub handle: String,
    pub bio: String,
    pub avatar: String,
    pub is_pro: bool,
    pub is_admin: bool,
    /// Email or phone used to log in.
    pub identity: String,
}

impl UserProfile {
    fn guest() -> Self {
        Self {
            name: "New Creator".to_string(),
            handle: "creator".to_string(),
            bio: "Digital Artist".to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            is_pro: false,
            is_admin: false,
            identity: String::new(),
        }
    }
}

/// Editable profile fields. Identity and admin status are not editable.
#[derive(Debug, Clone)]
pub struct ProfileEdit {
    pub name: String,
    pub handle: String,
    pub bio: String,
    pub avatar: String,
    pub is_pro: bool,
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct AccessController {
    credentials: Arc<dyn CredentialCheck>,
    state: AccessState,
    profile: UserProfile,
}

impl AccessController {
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialCheck>) -> Self {
        Self { credentials, state: AccessState::LoggedOut, profile: UserProfile::guest() }
    }

    #[must_use]
    pub fn state(&self) -> AccessState {
        self.state
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Log in with an email or phone identity. Admin status is derived
    /// here and nowhere else.
    pub fn login(&mut self, identity: &str) {
        let is_admin = self.credentials.is_owner_identity(identity);
        self.profile.identity = identity.to_string();
        self.profile.is_admin = is_admin;
        if is_admin {
            self.profile.name = "Sanju Owner".to_string();
            self.profile.handle = "admin_sanju".to_string();
        } else {
            self.profile.name = "New Creator".to_string();
            self.profile.handle = format!("user_{}", &Uuid::new_v4().simple().to_string()[..4]);
        }
        self.state = AccessState::LoggedIn;
        info!(is_admin, "access: logged in");
    }

    /// Request entry to the owner portal. Non-owner identities land in
    /// `AccessDenied` without the passphrase prompt ever being shown.
    pub fn request_admin(&mut self) -> AccessState {
        if self.state == AccessState::LoggedOut {
            return self.state;
        }
        if self.credentials.is_owner_identity(&self.profile.identity) {
            self.state = AccessState::AwaitingPassphrase;
        } else {
            info!("access: portal request denied for non-owner identity");
            self.state = AccessState::AccessDenied;
        }
        self.state
    }

    /// Answer the passphrase challenge. Only an exact match unlocks the
    /// portal; anything else errors and leaves the challenge open.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoChallenge`] outside `AwaitingPassphrase`;
    /// [`AccessError::IncorrectKey`] on a mismatch.
    pub fn submit_passphrase(&mut self, secret: &str) -> Result<(), AccessError> {
        if self.state != AccessState::AwaitingPassphrase {
            return Err(AccessError::NoChallenge);
        }
        if self.credentials.is_authorized(&self.profile.identity, secret) {
            self.state = AccessState::AdminActive;
            info!("access: owner portal unlocked");
            Ok(())
        } else {
            Err(AccessError::IncorrectKey)
        }
    }

    /// Dismiss an open challenge or denial dialog.
    pub fn dismiss(&mut self) {
        if matches!(self.state, AccessState::AwaitingPassphrase | AccessState::AccessDenied) {
            self.state = AccessState::LoggedIn;
        }
    }

    /// Leave the owner portal without logging out.
    pub fn exit_portal(&mut self) {
        if self.state == AccessState::AdminActive {
            self.state = AccessState::LoggedIn;
        }
    }

    pub fn logout(&mut self) {
        self.state = AccessState::LoggedOut;
        self.profile = UserProfile::guest();
    }

    /// Apply a profile edit. Handles are normalized the way the edit form
    /// does: whitespace stripped, lowercased.
    pub fn update_profile(&mut self, edit: ProfileEdit) {
        self.profile.name = edit.name;
        self.profile.handle = edit.handle.split_whitespace().collect::<String>().to_lowercase();
        self.profile.bio = edit.bio;
        self.profile.avatar = edit.avatar;
        self.profile.is_pro = edit.is_pro;
    }
}

// =============================================================================
// STATE-LEVEL FLOWS
// =============================================================================

/// Log out and return the shell to the home tab.
pub async fn logout(state: &AppState) {
    state.access.write().await.logout();
    state.shell.write().await.active_tab = AppTab::Home;
}

/// Answer the passphrase challenge; success navigates to the dashboard.
///
/// # Errors
///
/// Propagates [`AccessController::submit_passphrase`] errors; the shell
/// shows [`INCORRECT_KEY_MESSAGE`] and keeps the dialog open.
pub async fn enter_portal(state: &AppState, secret: &str) -> Result<(), AccessError> {
    state.access.write().await.submit_passphrase(secret)?;
    state.set_tab(AppTab::OwnerDashboard).await;
    Ok(())
}

#[cfg(test)]
#[path = "access_test.rs"]
mod tests;
