//! Composition root.
//!
//! Wires the production providers together: session file storage, bearer
//! cell, HTTP adapter with the unauthorized hook, REST API, and the store
//! itself.

use crate::actions::ConsoleAction;
use crate::api::RestAdminApi;
use crate::config::ConsoleConfig;
use crate::environment::ConsoleEnvironment;
use crate::http::{BearerCell, HttpClient, UnauthorizedHook};
use crate::providers::{FileSessionStorage, SessionStorage, TracingNavigator, TracingNotifier};
use crate::reducers::ConsoleReducer;
use crate::state::ConsoleState;
use admin_console_core::environment::SystemClock;
use admin_console_runtime::Store;
use std::sync::Arc;

/// Production environment: REST API, session file, tracing surfaces.
pub type ProductionEnvironment =
    ConsoleEnvironment<RestAdminApi, FileSessionStorage, TracingNotifier, TracingNavigator>;

/// Production reducer over the production environment.
pub type ProductionReducer =
    ConsoleReducer<RestAdminApi, FileSessionStorage, TracingNotifier, TracingNavigator>;

/// The production console store.
pub type ConsoleStore =
    Store<ConsoleState, ConsoleAction, ProductionEnvironment, ProductionReducer>;

/// Build the production store.
///
/// Hydrates initial state synchronously from the session file, primes the
/// bearer cell with the persisted token, and registers the unauthorized
/// hook: a 401 anywhere clears the adapter's credential and feeds
/// [`ConsoleAction::UnauthorizedReceived`] into the store, which resets
/// the session and forces navigation to login.
///
/// Must be called from within a tokio runtime (the hook forwarder is a
/// spawned task).
#[must_use]
pub fn build_store(config: ConsoleConfig) -> ConsoleStore {
    let storage = FileSessionStorage::new(&config.session_file);

    // A corrupt session document is treated as signed out, not fatal.
    let persisted = match storage.load() {
        Ok(persisted) => persisted,
        Err(error) => {
            tracing::warn!(%error, "Failed to load persisted session, starting signed out");
            None
        },
    };

    let bearer = BearerCell::new();
    if let Some(session) = &persisted {
        bearer.set(session.token.clone());
    }

    // The adapter cannot hold the store (it is built from the environment
    // the store needs), so 401 signals cross over a channel.
    let (unauthorized_tx, mut unauthorized_rx) = tokio::sync::mpsc::unbounded_channel();
    let hook: UnauthorizedHook = Arc::new(move || {
        let _ = unauthorized_tx.send(());
    });

    let http = HttpClient::new(&config, bearer.clone()).with_unauthorized_hook(hook);
    let api = RestAdminApi::new(http);

    let initial_state = ConsoleState::restore(persisted, config.default_page_size);
    let environment = ConsoleEnvironment::new(
        api,
        storage,
        TracingNotifier,
        TracingNavigator,
        bearer,
        Arc::new(SystemClock),
        config,
    );

    let store = Store::new(initial_state, ConsoleReducer::new(), environment);

    let forwarder = store.clone();
    tokio::spawn(async move {
        while unauthorized_rx.recv().await.is_some() {
            let _ = forwarder.send(ConsoleAction::UnauthorizedReceived).await;
        }
    });

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PersistedSession, UserId, UserProfile};

    fn temp_session_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "admin-console-bootstrap-{name}-{}.json",
            std::process::id()
        ))
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId::new("u1"),
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            email: "sarah@example.com".to_string(),
            phone_number: None,
            gender: None,
            profile_image: None,
            address: None,
            city: None,
            state: None,
            country: None,
            postal_code: None,
            latitude: None,
            longitude: None,
            is_active: true,
            is_verify: true,
            joining_date: None,
            booking_count: 0,
            review_count: 0,
        }
    }

    #[tokio::test]
    async fn hydrates_a_persisted_session_at_startup() {
        let path = temp_session_file("hydrate");
        let document = PersistedSession {
            token: "persisted-tok".to_string(),
            user: profile(),
        };
        let raw = match serde_json::to_string(&document) {
            Ok(raw) => raw,
            Err(e) => unreachable!("session document must serialize: {e}"),
        };
        assert!(std::fs::write(&path, raw).is_ok());

        let config = ConsoleConfig::new("http://localhost:0", "key").with_session_file(&path);
        let store = build_store(config);

        let (token, has_user) = store
            .state(|s| (s.session.token.clone(), s.session.user.is_some()))
            .await;
        assert_eq!(token.as_deref(), Some("persisted-tok"));
        assert!(has_user, "the cached user record rides along");

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn starts_signed_out_without_a_session_document() {
        let config = ConsoleConfig::new("http://localhost:0", "key")
            .with_session_file(temp_session_file("absent"));
        let store = build_store(config);

        assert!(!store.state(|s| s.session.is_authenticated()).await);
    }

    #[tokio::test]
    async fn treats_a_corrupt_session_document_as_signed_out() {
        let path = temp_session_file("corrupt");
        assert!(std::fs::write(&path, "{not json").is_ok());

        let config = ConsoleConfig::new("http://localhost:0", "key").with_session_file(&path);
        let store = build_store(config);

        assert!(!store.state(|s| s.session.is_authenticated()).await);
        let _ = std::fs::remove_file(&path);
    }
}
