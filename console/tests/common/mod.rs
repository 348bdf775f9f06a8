//! Shared fixtures for integration tests: a store wired to mock
//! providers, plus polling helpers for asserting on asynchronous effects.

// Each integration test binary compiles this module separately and uses a
// different subset of it.
#![allow(dead_code)]

use admin_console::config::ConsoleConfig;
use admin_console::environment::ConsoleEnvironment;
use admin_console::http::BearerCell;
use admin_console::mocks::{
    MockAdminApi, MockSessionStorage, RecordingNavigator, RecordingNotifier,
};
use admin_console::reducers::ConsoleReducer;
use admin_console::state::{ConsoleState, ListPage, UserId, UserProfile};
use admin_console::ConsoleAction;
use admin_console_runtime::Store;
use admin_console_testing::test_clock;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub type TestEnv =
    ConsoleEnvironment<MockAdminApi, MockSessionStorage, RecordingNotifier, RecordingNavigator>;

pub type TestStore = Store<
    ConsoleState,
    ConsoleAction,
    TestEnv,
    ConsoleReducer<MockAdminApi, MockSessionStorage, RecordingNotifier, RecordingNavigator>,
>;

/// A store plus handles to every mock it was wired with.
pub struct Harness {
    pub store: TestStore,
    pub api: MockAdminApi,
    pub storage: MockSessionStorage,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
    pub bearer: BearerCell,
}

/// Debounce used by the test harness; short enough to keep tests fast,
/// long enough to land two keystrokes inside one window.
pub const TEST_DEBOUNCE: Duration = Duration::from_millis(80);

pub fn harness() -> Harness {
    harness_with_state(ConsoleState::default())
}

pub fn harness_with_state(initial: ConsoleState) -> Harness {
    // Honors RUST_LOG when debugging a test run; idempotent across tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let api = MockAdminApi::new();
    let storage = MockSessionStorage::new();
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();
    let bearer = BearerCell::new();

    let environment = ConsoleEnvironment::new(
        api.clone(),
        storage.clone(),
        notifier.clone(),
        navigator.clone(),
        bearer.clone(),
        Arc::new(test_clock()),
        ConsoleConfig::new("http://localhost:0", "test-key").with_debounce(TEST_DEBOUNCE),
    );

    let store = Store::new(initial, ConsoleReducer::new(), environment);

    Harness {
        store,
        api,
        storage,
        notifier,
        navigator,
        bearer,
    }
}

/// Poll a state predicate until it holds or the timeout elapses.
pub async fn wait_for_state<F>(store: &TestStore, timeout: Duration, predicate: F) -> bool
where
    F: Fn(&ConsoleState) -> bool,
{
    let start = Instant::now();
    loop {
        if store.state(&predicate).await {
            return true;
        }
        if start.elapsed() > timeout {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Poll a mock-side predicate until it holds or the timeout elapses.
pub async fn wait_until<F>(timeout: Duration, predicate: F) -> bool
where
    F: Fn() -> bool,
{
    let start = Instant::now();
    loop {
        if predicate() {
            return true;
        }
        if start.elapsed() > timeout {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

pub fn profile(id: &str, first_name: &str) -> UserProfile {
    UserProfile {
        id: UserId::new(id),
        first_name: first_name.to_string(),
        last_name: "Wilson".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
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
        is_verify: false,
        joining_date: None,
        booking_count: 0,
        review_count: 0,
    }
}

pub fn page_of(ids: &[&str], total: u64, page: u64, page_size: u64) -> ListPage {
    ListPage {
        items: ids.iter().map(|id| profile(id, "Sarah")).collect(),
        total,
        page,
        page_size,
    }
}
