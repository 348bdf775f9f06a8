//! End-to-end session scenarios: the store, reducers, and effects running
//! against mock providers.

mod common;

use admin_console::ConsoleAction;
use admin_console::error::ApiError;
use admin_console::guard::Route;
use admin_console::providers::{
    LoginCredentials, LoginPayload, PasswordChange, ProfileUpdate, RegistrationForm,
    SessionStorage,
};
use admin_console::state::{ConsoleState, PersistedSession};
use common::{Harness, harness, harness_with_state, profile, wait_for_state, wait_until};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(2);

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "sarah@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

fn signed_in_harness() -> Harness {
    let mut state = ConsoleState::default();
    state
        .session
        .establish("tok".to_string(), profile("u1", "Sarah"));
    let h = harness_with_state(state);
    h.bearer.set("tok");
    h
}

#[tokio::test]
async fn login_success_establishes_persists_and_navigates() {
    let h = harness();
    h.api.script_login(Ok(LoginPayload {
        token: "tok-1".to_string(),
        user: profile("u1", "Sarah"),
    }));

    let _ = h
        .store
        .send(ConsoleAction::LoginSubmitted {
            credentials: credentials(),
        })
        .await;

    assert!(
        wait_for_state(&h.store, TIMEOUT, |s| {
            s.session.token.as_deref() == Some("tok-1") && s.session.user.is_some()
        })
        .await,
        "session should be established"
    );

    assert!(
        wait_until(TIMEOUT, || {
            h.storage
                .stored()
                .is_some_and(|p| p.token == "tok-1")
        })
        .await,
        "session should be persisted"
    );

    assert!(
        wait_until(TIMEOUT, || {
            h.navigator
                .last()
                .is_some_and(|n| n.route == Route::Dashboard && !n.replace)
        })
        .await,
        "should navigate to the dashboard"
    );

    assert!(
        wait_until(TIMEOUT, || {
            h.notifier
                .successes()
                .iter()
                .any(|m| m == "Login successful!")
        })
        .await
    );

    assert_eq!(h.bearer.get().as_deref(), Some("tok-1"));
    assert!(wait_for_state(&h.store, TIMEOUT, |s| !s.session.is_loading()).await);
}

#[tokio::test]
async fn login_failure_surfaces_the_server_message_and_changes_nothing() {
    let h = harness();
    h.api.script_login(Err(ApiError::Api {
        status: 400,
        message: Some("Invalid credentials. Please try again.".to_string()),
    }));

    let _ = h
        .store
        .send(ConsoleAction::LoginSubmitted {
            credentials: credentials(),
        })
        .await;

    assert!(
        wait_until(TIMEOUT, || {
            h.notifier
                .errors()
                .iter()
                .any(|m| m == "Invalid credentials. Please try again.")
        })
        .await,
        "server-provided message should surface as a notification"
    );

    let session = h.store.state(|s| s.session.clone()).await;
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert!(h.storage.stored().is_none());
    assert!(h.bearer.get().is_none());
}

#[tokio::test]
async fn loading_flag_toggles_around_the_request() {
    let h = harness();
    h.api.script_login_delayed(
        Ok(LoginPayload {
            token: "tok".to_string(),
            user: profile("u1", "Sarah"),
        }),
        Duration::from_millis(100),
    );

    let _ = h
        .store
        .send(ConsoleAction::LoginSubmitted {
            credentials: credentials(),
        })
        .await;

    // In flight: the global busy flag is up.
    assert!(h.store.state(|s| s.session.is_loading()).await);

    assert!(
        wait_for_state(&h.store, TIMEOUT, |s| {
            s.session.is_authenticated() && !s.session.is_loading()
        })
        .await,
        "busy flag should clear when the request completes"
    );
}

#[tokio::test]
async fn logout_clears_state_storage_and_credential() {
    let h = signed_in_harness();
    let seed = PersistedSession {
        token: "tok".to_string(),
        user: profile("u1", "Sarah"),
    };
    let _ = h.storage.persist(&seed).await;

    let _ = h.store.send(ConsoleAction::LogoutRequested).await;

    assert!(
        wait_for_state(&h.store, TIMEOUT, |s| {
            s.session.token.is_none() && s.session.user.is_none()
        })
        .await
    );
    assert!(wait_until(TIMEOUT, || h.storage.stored().is_none()).await);
    assert!(wait_until(TIMEOUT, || h.bearer.get().is_none()).await);
    assert!(
        wait_until(TIMEOUT, || {
            h.navigator
                .last()
                .is_some_and(|n| n.route == Route::Login && !n.replace)
        })
        .await
    );
}

#[tokio::test]
async fn unauthorized_forces_a_replace_redirect_to_login() {
    let h = signed_in_harness();
    let seed = PersistedSession {
        token: "tok".to_string(),
        user: profile("u1", "Sarah"),
    };
    let _ = h.storage.persist(&seed).await;

    let _ = h.store.send(ConsoleAction::UnauthorizedReceived).await;

    assert!(
        wait_for_state(&h.store, TIMEOUT, |s| !s.session.is_authenticated()).await,
        "session state should be cleared"
    );
    assert!(wait_until(TIMEOUT, || h.storage.stored().is_none()).await);
    assert!(
        wait_until(TIMEOUT, || {
            h.navigator
                .last()
                .is_some_and(|n| n.route == Route::Login && n.replace)
        })
        .await,
        "redirect must replace history so back-navigation cannot return"
    );
}

#[tokio::test]
async fn profile_edit_replaces_user_and_updates_the_persisted_copy() {
    let h = signed_in_harness();
    h.api
        .script_update_profile(Ok(profile("u1", "Sarah-Jane")));

    let _ = h
        .store
        .send(ConsoleAction::ProfileEditSubmitted {
            update: ProfileUpdate {
                first_name: "Sarah-Jane".to_string(),
                last_name: "Wilson".to_string(),
                ..ProfileUpdate::default()
            },
        })
        .await;

    assert!(
        wait_for_state(&h.store, TIMEOUT, |s| {
            s.session.user.as_ref().is_some_and(|u| u.first_name == "Sarah-Jane")
                && s.session.token.as_deref() == Some("tok")
        })
        .await,
        "user replaced, token untouched"
    );

    assert!(
        wait_until(TIMEOUT, || {
            h.storage
                .stored()
                .is_some_and(|p| p.user.first_name == "Sarah-Jane" && p.token == "tok")
        })
        .await,
        "persisted copy should follow the profile edit"
    );
}

#[tokio::test]
async fn register_success_notifies_and_navigates_to_login() {
    let h = harness();
    h.api.script_register(Ok(()));

    let _ = h
        .store
        .send(ConsoleAction::RegisterSubmitted {
            form: RegistrationForm {
                first_name: "Sarah".to_string(),
                last_name: "Wilson".to_string(),
                email: "sarah@example.com".to_string(),
                password: "hunter2".to_string(),
                phone_number: None,
            },
        })
        .await;

    assert!(
        wait_until(TIMEOUT, || {
            h.navigator
                .last()
                .is_some_and(|n| n.route == Route::Login)
        })
        .await
    );
    assert!(!h.store.state(|s| s.session.is_authenticated()).await);
}

#[tokio::test]
async fn change_password_success_notifies() {
    let h = signed_in_harness();
    h.api.script_change_password(Ok(()));

    let _ = h
        .store
        .send(ConsoleAction::PasswordChangeSubmitted {
            change: PasswordChange {
                current_password: "old".to_string(),
                new_password: "new".to_string(),
            },
        })
        .await;

    assert!(
        wait_until(TIMEOUT, || {
            h.notifier
                .successes()
                .iter()
                .any(|m| m == "Password changed successfully!")
        })
        .await
    );
    assert!(wait_for_state(&h.store, TIMEOUT, |s| !s.session.is_loading()).await);
}

#[tokio::test]
async fn service_failures_always_resolve_to_a_notification() {
    // Transport-level breakage must surface as a message, never a panic.
    let h = harness();
    // Nothing scripted: the mock answers every endpoint with a transport
    // error.

    let _ = h
        .store
        .send(ConsoleAction::ForgotPasswordSubmitted {
            email: "sarah@example.com".to_string(),
        })
        .await;

    assert!(
        wait_until(TIMEOUT, || !h.notifier.errors().is_empty()).await,
        "failure should surface as an error notification"
    );
    let errors = h.notifier.errors();
    assert!(errors.iter().all(|m| !m.is_empty()));
}
