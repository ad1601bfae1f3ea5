use super::*;
use crate::state::test_helpers::test_app_state;

fn owner_controller() -> AccessController {
    let mut controller = AccessController::new(Arc::new(StaticCredentials));
    controller.login(OWNER_IDENTITY_EMAIL);
    controller
}

// =========================================================================
// Login / eligibility
// =========================================================================

#[test]
fn owner_email_login_derives_admin() {
    let controller = owner_controller();
    assert_eq!(controller.state(), AccessState::LoggedIn);
    let profile = controller.profile();
    assert!(profile.is_admin);
    assert_eq!(profile.name, "Sanju Owner");
    assert_eq!(profile.handle, "admin_sanju");
    assert_eq!(profile.identity, OWNER_IDENTITY_EMAIL);
}

#[test]
fn owner_phone_login_derives_admin() {
    let mut controller = AccessController::new(Arc::new(StaticCredentials));
    controller.login(OWNER_IDENTITY_PHONE);
    assert!(controller.profile().is_admin);
}

#[test]
fn other_identities_are_never_admin() {
    for identity in ["someone@example.com", "SANJU86682@GMAIL.COM", "9501941287", ""] {
        let mut controller = AccessController::new(Arc::new(StaticCredentials));
        controller.login(identity);
        assert!(!controller.profile().is_admin, "{identity:?} must not be admin");
        assert!(controller.profile().handle.starts_with("user_"));
    }
}

// =========================================================================
// Portal request gating
// =========================================================================

#[test]
fn non_owner_request_is_denied_before_passphrase() {
    let mut controller = AccessController::new(Arc::new(StaticCredentials));
    controller.login("someone@example.com");
    assert_eq!(controller.request_admin(), AccessState::AccessDenied);

    // The challenge never opened, so a passphrase has nowhere to go.
    assert!(matches!(controller.submit_passphrase(OWNER_PORTAL_PASSPHRASE), Err(AccessError::NoChallenge)));
}

#[test]
fn owner_request_opens_the_challenge() {
    let mut controller = owner_controller();
    assert_eq!(controller.request_admin(), AccessState::AwaitingPassphrase);
}

#[test]
fn logged_out_request_is_inert() {
    let mut controller = AccessController::new(Arc::new(StaticCredentials));
    assert_eq!(controller.request_admin(), AccessState::LoggedOut);
}

// =========================================================================
// Passphrase challenge
// =========================================================================

#[test]
fn exact_passphrase_unlocks_the_portal() {
    let mut controller = owner_controller();
    controller.request_admin();
    controller.submit_passphrase(OWNER_PORTAL_PASSPHRASE).unwrap();
    assert_eq!(controller.state(), AccessState::AdminActive);
}

#[test]
fn wrong_passphrase_errors_and_leaves_challenge_open() {
    let mut controller = owner_controller();
    controller.request_admin();

    let err = controller.submit_passphrase("wrong").unwrap_err();
    assert!(matches!(err, AccessError::IncorrectKey));
    assert_eq!(err.to_string(), INCORRECT_KEY_MESSAGE);
    assert_eq!(controller.state(), AccessState::AwaitingPassphrase);

    // Idempotent retry: the right key still works afterwards.
    controller.submit_passphrase(OWNER_PORTAL_PASSPHRASE).unwrap();
    assert_eq!(controller.state(), AccessState::AdminActive);
}

#[test]
fn near_miss_passphrases_are_rejected() {
    for secret in ["sanju900", "Sanju900 ", " Sanju900", "Sanju9000", ""] {
        let mut controller = owner_controller();
        controller.request_admin();
        assert!(controller.submit_passphrase(secret).is_err(), "{secret:?} must not unlock");
        assert_eq!(controller.state(), AccessState::AwaitingPassphrase);
    }
}

// =========================================================================
// Dismiss / exit / logout
// =========================================================================

#[test]
fn dismiss_recovers_from_denial_and_challenge() {
    let mut controller = AccessController::new(Arc::new(StaticCredentials));
    controller.login("someone@example.com");
    controller.request_admin();
    controller.dismiss();
    assert_eq!(controller.state(), AccessState::LoggedIn);

    let mut controller = owner_controller();
    controller.request_admin();
    controller.dismiss();
    assert_eq!(controller.state(), AccessState::LoggedIn);
}

#[test]
fn exit_portal_returns_to_logged_in() {
    let mut controller = owner_controller();
    controller.request_admin();
    controller.submit_passphrase(OWNER_PORTAL_PASSPHRASE).unwrap();
    controller.exit_portal();
    assert_eq!(controller.state(), AccessState::LoggedIn);
}

#[test]
fn logout_resets_profile() {
    let mut controller = owner_controller();
    controller.logout();
    assert_eq!(controller.state(), AccessState::LoggedOut);
    assert!(!controller.profile().is_admin);
    assert!(controller.profile().identity.is_empty());
}

// =========================================================================
// Profile edits
// =========================================================================

#[test]
fn update_profile_normalizes_handle_and_keeps_admin_fields() {
    let mut controller = owner_controller();
    controller.update_profile(ProfileEdit {
        name: "S. Owner".into(),
        handle: "My Cool Handle".into(),
        bio: "Curator".into(),
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Wally".into(),
        is_pro: true,
    });

    let profile = controller.profile();
    assert_eq!(profile.name, "S. Owner");
    assert_eq!(profile.handle, "mycoolhandle");
    assert_eq!(profile.bio, "Curator");
    assert!(profile.is_pro);
    // Not reachable through edits:
    assert!(profile.is_admin);
    assert_eq!(profile.identity, OWNER_IDENTITY_EMAIL);
}

// =========================================================================
// State-level flows
// =========================================================================

#[tokio::test]
async fn enter_portal_navigates_on_success() {
    let state = test_app_state();
    {
        let mut access = state.access.write().await;
        access.login(OWNER_IDENTITY_EMAIL);
        access.request_admin();
    }

    assert!(matches!(enter_portal(&state, "wrong").await, Err(AccessError::IncorrectKey)));
    assert_eq!(state.active_tab().await, crate::state::AppTab::Home);

    enter_portal(&state, OWNER_PORTAL_PASSPHRASE).await.unwrap();
    assert_eq!(state.active_tab().await, crate::state::AppTab::OwnerDashboard);
}

#[tokio::test]
async fn logout_flow_returns_home() {
    let state = test_app_state();
    {
        let mut access = state.access.write().await;
        access.login(OWNER_IDENTITY_EMAIL);
    }
    state.set_tab(crate::state::AppTab::Profile).await;

    logout(&state).await;

    assert_eq!(state.access.read().await.state(), AccessState::LoggedOut);
    assert_eq!(state.active_tab().await, crate::state::AppTab::Home);
}
