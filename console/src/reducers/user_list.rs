//! User-list reducer.
//!
//! Drives the paginated, searchable, mutable user table: trailing-edge
//! debounce on search input, sequence-stamped fetches with stale-response
//! discard, wholesale result replacement with the server's echoed
//! pagination as the authority, and fire-and-refetch mutations.

use crate::actions::ConsoleAction;
use crate::environment::ConsoleEnvironment;
use crate::guard::Route;
use crate::outcome::RequestOutcome;
use crate::providers::{AdminApi, Navigator, Notifier, SessionStorage};
use crate::reducers::{navigate_to, notify_error, notify_success};
use crate::services;
use crate::state::ConsoleState;
use admin_console_core::effect::Effect;
use admin_console_core::reducer::Reducer;
use admin_console_core::{SmallVec, smallvec};

/// User-list reducer.
#[derive(Debug, Clone)]
pub struct UserListReducer<A, P, N, V> {
    _phantom: std::marker::PhantomData<(A, P, N, V)>,
}

impl<A, P, N, V> UserListReducer<A, P, N, V> {
    /// Create a new user-list reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, P, N, V> Default for UserListReducer<A, P, N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, P, N, V> UserListReducer<A, P, N, V>
where
    A: AdminApi + Clone + Send + Sync + 'static,
    P: SessionStorage + Clone + 'static,
    N: Notifier + Clone + 'static,
    V: Navigator + Clone + 'static,
{
    /// Issue exactly one fetch for the current effective query.
    ///
    /// Stamps the fetch with the next sequence number so a response
    /// superseded by a later fetch can be discarded on arrival.
    fn issue_fetch(
        state: &mut ConsoleState,
        env: &ConsoleEnvironment<A, P, N, V>,
    ) -> Effect<ConsoleAction> {
        let sequence = state.users.next_sequence();
        state.session.begin_loading();

        let api = env.api.clone();
        let query = state.users.query.clone();
        tracing::debug!(
            sequence,
            search = %query.search_text,
            page = query.page,
            page_size = query.page_size,
            "Issuing list fetch"
        );

        Effect::Future(Box::pin(async move {
            Some(match services::list_users(&api, query).await {
                RequestOutcome::Success { data } => ConsoleAction::ListFetchSucceeded {
                    sequence,
                    page: data,
                },
                RequestOutcome::Failure { error } => {
                    ConsoleAction::ListFetchFailed { sequence, error }
                },
            })
        }))
    }
}

impl<A, P, N, V> Reducer for UserListReducer<A, P, N, V>
where
    A: AdminApi + Clone + Send + Sync + 'static,
    P: SessionStorage + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
    V: Navigator + Clone + Send + Sync + 'static,
{
    type State = ConsoleState;
    type Action = ConsoleAction;
    type Environment = ConsoleEnvironment<A, P, N, V>;

    #[allow(clippy::too_many_lines)] // One arm per list flow
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // Search debounce
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::SearchInputChanged { text } => {
                if text == state.users.search_input {
                    return smallvec![Effect::None];
                }

                state.users.search_input = text;
                state.users.search_generation += 1;

                // Trailing edge only: each keystroke supersedes the
                // previous timer; the generation check on arrival is the
                // cancellation.
                smallvec![Effect::Delay {
                    duration: env.config.debounce,
                    action: Box::new(ConsoleAction::SearchDebounceElapsed {
                        generation: state.users.search_generation,
                    }),
                }]
            },

            ConsoleAction::SearchDebounceElapsed { generation } => {
                if generation != state.users.search_generation {
                    // A newer keystroke restarted the timer.
                    return smallvec![Effect::None];
                }

                if state.users.search_input == state.users.query.search_text {
                    // Input settled back to the effective query; nothing
                    // changed.
                    return smallvec![Effect::None];
                }

                state.users.query.search_text = state.users.search_input.clone();
                state.users.query.page = 1;

                smallvec![Self::issue_fetch(state, env)]
            },

            // ═══════════════════════════════════════════════════════════
            // Pagination
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::PageChanged { page } => {
                if page == state.users.query.page {
                    return smallvec![Effect::None];
                }

                state.users.query.page = page;
                smallvec![Self::issue_fetch(state, env)]
            },

            ConsoleAction::PageSizeChanged { page_size } => {
                if page_size == state.users.query.page_size {
                    return smallvec![Effect::None];
                }

                state.users.query.page_size = page_size;
                state.users.query.page = 1;
                smallvec![Self::issue_fetch(state, env)]
            },

            ConsoleAction::ListRefreshRequested => {
                smallvec![Self::issue_fetch(state, env)]
            },

            // ═══════════════════════════════════════════════════════════
            // Fetch completion
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::ListFetchSucceeded { sequence, page } => {
                state.session.end_loading();

                if !state.users.complete_fetch(sequence) {
                    tracing::debug!(sequence, "Discarding stale list response");
                    return smallvec![Effect::None];
                }

                // The server's echoed pagination overwrites the requested
                // values; the backend may clamp.
                state.users.query.page = page.page;
                state.users.query.page_size = page.page_size;
                state.users.page = Some(page);
                state.users.last_error = None;
                state.users.last_synced_at = Some(env.clock.now());

                smallvec![Effect::None]
            },

            ConsoleAction::ListFetchFailed { sequence, error } => {
                state.session.end_loading();

                if !state.users.complete_fetch(sequence) {
                    // A superseded request's failure is noise; only the
                    // loading counter still had to move.
                    tracing::debug!(sequence, %error, "Discarding stale list failure");
                    return smallvec![Effect::None];
                }

                tracing::warn!(sequence, %error, "List fetch failed");
                // Prior results stay in place; no blanking of the table.
                state.users.last_error = Some(error.clone());

                smallvec![notify_error(&env.notifier, error)]
            },

            // ═══════════════════════════════════════════════════════════
            // Mutations: fire-and-refetch
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::ToggleActiveRequested { user_id, active } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(
                        match services::set_user_active(&api, user_id, active).await {
                            RequestOutcome::Success { .. } => ConsoleAction::ToggleActiveSucceeded,
                            RequestOutcome::Failure { error } => {
                                ConsoleAction::ToggleActiveFailed { error }
                            },
                        },
                    )
                }))]
            },

            ConsoleAction::ToggleActiveSucceeded => {
                state.session.end_loading();

                // Refetch rather than patch the row: server-computed
                // fields and totals cannot be recomputed locally.
                smallvec![
                    notify_success(&env.notifier, "User status updated successfully"),
                    Self::issue_fetch(state, env),
                ]
            },

            ConsoleAction::ToggleActiveFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            ConsoleAction::RemoveUserRequested { user_id } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::remove_user(&api, user_id).await {
                        RequestOutcome::Success { .. } => ConsoleAction::RemoveUserSucceeded,
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::RemoveUserFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::RemoveUserSucceeded => {
                state.session.end_loading();

                smallvec![
                    notify_success(&env.notifier, "User deleted successfully"),
                    Self::issue_fetch(state, env),
                ]
            },

            ConsoleAction::RemoveUserFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            // ═══════════════════════════════════════════════════════════
            // Create / edit forms
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::CreateUserSubmitted { user } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::create_user(&api, user).await {
                        RequestOutcome::Success { .. } => ConsoleAction::CreateUserSucceeded,
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::CreateUserFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::CreateUserSucceeded => {
                state.session.end_loading();

                smallvec![
                    notify_success(&env.notifier, "User created successfully!"),
                    navigate_to(&env.navigator, Route::UserList),
                    Self::issue_fetch(state, env),
                ]
            },

            ConsoleAction::CreateUserFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            ConsoleAction::EditUserSubmitted { edit } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::edit_user(&api, edit).await {
                        RequestOutcome::Success { .. } => ConsoleAction::EditUserSucceeded,
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::EditUserFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::EditUserSucceeded => {
                state.session.end_loading();

                // Deliberately does not touch session.user even when the
                // edited record is the signed-in user's; the copies are
                // never reconciled automatically.
                smallvec![
                    notify_success(&env.notifier, "User updated successfully!"),
                    navigate_to(&env.navigator, Route::UserList),
                    Self::issue_fetch(state, env),
                ]
            },

            ConsoleAction::EditUserFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            // Actions owned by the session reducer.
            _ => smallvec![Effect::None],
        }
    }
}
