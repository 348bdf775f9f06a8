//! Console reducers.
//!
//! One flat action enum covers the session flows and the user-list flows;
//! [`SessionReducer`] and [`UserListReducer`] each handle their own
//! variants over the shared [`ConsoleState`](crate::state::ConsoleState)
//! and return no effects for foreign variants. [`ConsoleReducer`] runs
//! both and concatenates their effects - the combined-reducer pattern as a
//! concrete `Clone`-able struct, since the store requires a `Clone`
//! reducer.

use crate::actions::ConsoleAction;
use crate::environment::ConsoleEnvironment;
use crate::guard::Route;
use crate::providers::{AdminApi, Navigator, Notifier, SessionStorage};
use admin_console_core::SmallVec;
use admin_console_core::effect::Effect;
use admin_console_core::reducer::Reducer;

pub mod session;
pub mod user_list;

pub use session::SessionReducer;
pub use user_list::UserListReducer;

/// Effect that shows a success notification.
pub(crate) fn notify_success<N>(notifier: &N, message: impl Into<String>) -> Effect<ConsoleAction>
where
    N: Notifier + Clone + 'static,
{
    let notifier = notifier.clone();
    let message = message.into();
    Effect::Future(Box::pin(async move {
        notifier.success(&message).await;
        None
    }))
}

/// Effect that shows an error notification.
pub(crate) fn notify_error<N>(notifier: &N, message: impl Into<String>) -> Effect<ConsoleAction>
where
    N: Notifier + Clone + 'static,
{
    let notifier = notifier.clone();
    let message = message.into();
    Effect::Future(Box::pin(async move {
        notifier.error(&message).await;
        None
    }))
}

/// Effect that pushes a navigation.
pub(crate) fn navigate_to<V>(navigator: &V, route: Route) -> Effect<ConsoleAction>
where
    V: Navigator + Clone + 'static,
{
    let navigator = navigator.clone();
    Effect::Future(Box::pin(async move {
        navigator.navigate(route).await;
        None
    }))
}

/// Root reducer for the console store.
///
/// Runs the session reducer, then the user-list reducer, concatenating
/// effects in that order.
#[derive(Debug, Clone)]
pub struct ConsoleReducer<A, P, N, V> {
    session: SessionReducer<A, P, N, V>,
    users: UserListReducer<A, P, N, V>,
}

impl<A, P, N, V> ConsoleReducer<A, P, N, V> {
    /// Create the root reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            session: SessionReducer::new(),
            users: UserListReducer::new(),
        }
    }
}

impl<A, P, N, V> Default for ConsoleReducer<A, P, N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, P, N, V> Reducer for ConsoleReducer<A, P, N, V>
where
    A: AdminApi + Clone + Send + Sync + 'static,
    P: SessionStorage + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
    V: Navigator + Clone + Send + Sync + 'static,
{
    type State = crate::state::ConsoleState;
    type Action = ConsoleAction;
    type Environment = ConsoleEnvironment<A, P, N, V>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut effects = self.session.reduce(state, action.clone(), env);
        effects.extend(self.users.reduce(state, action, env));
        effects
    }
}

/// Shared fixtures for reducer unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::http::BearerCell;
    use crate::mocks::{MockAdminApi, MockSessionStorage, RecordingNavigator, RecordingNotifier};
    use crate::state::{ListPage, UserId, UserProfile};
    use admin_console_testing::test_clock;
    use std::sync::Arc;
    use std::time::Duration;

    /// Environment type used by reducer unit tests.
    pub type TestEnv =
        ConsoleEnvironment<MockAdminApi, MockSessionStorage, RecordingNotifier, RecordingNavigator>;

    /// Environment wired to fresh mocks, 50ms debounce, page size 10.
    pub fn test_env() -> TestEnv {
        ConsoleEnvironment::new(
            MockAdminApi::new(),
            MockSessionStorage::new(),
            RecordingNotifier::new(),
            RecordingNavigator::new(),
            BearerCell::new(),
            Arc::new(test_clock()),
            ConsoleConfig::new("http://localhost:0", "test-key")
                .with_debounce(Duration::from_millis(50)),
        )
    }

    /// A minimal user record.
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

    /// A one-row page with the given echoed pagination.
    pub fn page_of(ids: &[&str], total: u64, page: u64, page_size: u64) -> ListPage {
        ListPage {
            items: ids.iter().map(|id| profile(id, "Sarah")).collect(),
            total,
            page,
            page_size,
        }
    }
}
