//! Session reducer.
//!
//! Handles the authentication lifecycle: login, registration, password
//! recovery, profile maintenance, logout, and the central unauthorized
//! reset. Token and user are set and cleared together; profile edit is the
//! one flow that replaces `user` alone.

use crate::actions::ConsoleAction;
use crate::environment::ConsoleEnvironment;
use crate::guard::Route;
use crate::outcome::RequestOutcome;
use crate::providers::{AdminApi, Navigator, Notifier, SessionStorage};
use crate::reducers::{notify_error, notify_success};
use crate::services;
use crate::state::{ConsoleState, PersistedSession};
use admin_console_core::effect::Effect;
use admin_console_core::reducer::Reducer;
use admin_console_core::{SmallVec, smallvec};

/// Session reducer.
///
/// Generic over the environment's provider implementations so tests can
/// run it against in-memory mocks.
#[derive(Debug, Clone)]
pub struct SessionReducer<A, P, N, V> {
    _phantom: std::marker::PhantomData<(A, P, N, V)>,
}

impl<A, P, N, V> SessionReducer<A, P, N, V> {
    /// Create a new session reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, P, N, V> Default for SessionReducer<A, P, N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, P, N, V> SessionReducer<A, P, N, V>
where
    A: AdminApi + Clone + 'static,
    P: SessionStorage + Clone + 'static,
    N: Notifier + Clone + 'static,
    V: Navigator + Clone + 'static,
{
    /// Reset the session everywhere: in-memory state, bearer cell,
    /// persisted storage; then force navigation to the login entry point.
    fn session_reset_effects(
        env: &ConsoleEnvironment<A, P, N, V>,
        replace_history: bool,
    ) -> SmallVec<[Effect<ConsoleAction>; 4]> {
        let bearer = env.bearer.clone();
        let storage = env.storage.clone();
        let navigator = env.navigator.clone();

        smallvec![Effect::Future(Box::pin(async move {
            bearer.clear();
            if let Err(error) = storage.clear().await {
                tracing::warn!(%error, "Failed to clear persisted session");
            }
            if replace_history {
                navigator.replace(Route::Login).await;
            } else {
                navigator.navigate(Route::Login).await;
            }
            None
        }))]
    }
}

impl<A, P, N, V> Reducer for SessionReducer<A, P, N, V>
where
    A: AdminApi + Clone + Send + Sync + 'static,
    P: SessionStorage + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
    V: Navigator + Clone + Send + Sync + 'static,
{
    type State = ConsoleState;
    type Action = ConsoleAction;
    type Environment = ConsoleEnvironment<A, P, N, V>;

    #[allow(clippy::too_many_lines)] // One arm per session flow
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // Login
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::LoginSubmitted { credentials } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::login(&api, credentials).await {
                        RequestOutcome::Success { data } => {
                            ConsoleAction::LoginSucceeded {
                                token: data.token,
                                user: data.user,
                            }
                        },
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::LoginFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::LoginSucceeded { token, user } => {
                state.session.end_loading();
                state.session.establish(token.clone(), user.clone());
                tracing::info!(user = %user.email, "Login succeeded");

                let bearer = env.bearer.clone();
                let storage = env.storage.clone();
                let notifier = env.notifier.clone();
                let navigator = env.navigator.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    bearer.set(token.clone());
                    let persisted = PersistedSession { token, user };
                    if let Err(error) = storage.persist(&persisted).await {
                        tracing::warn!(%error, "Failed to persist session");
                    }
                    notifier.success("Login successful!").await;
                    navigator.navigate(Route::Dashboard).await;
                    None
                }))]
            },

            ConsoleAction::LoginFailed { error } => {
                state.session.end_loading();
                tracing::warn!(%error, "Login failed");
                smallvec![notify_error(&env.notifier, error)]
            },

            // ═══════════════════════════════════════════════════════════
            // Registration
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::RegisterSubmitted { form } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::register(&api, form).await {
                        RequestOutcome::Success { .. } => {
                            ConsoleAction::RegisterSucceeded
                        },
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::RegisterFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::RegisterSucceeded => {
                state.session.end_loading();

                let notifier = env.notifier.clone();
                let navigator = env.navigator.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    notifier
                        .success("Registration successful! Please sign in.")
                        .await;
                    navigator.navigate(Route::Login).await;
                    None
                }))]
            },

            ConsoleAction::RegisterFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            // ═══════════════════════════════════════════════════════════
            // Password recovery
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::ForgotPasswordSubmitted { email } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::forgot_password(&api, email).await {
                        RequestOutcome::Success { .. } => {
                            ConsoleAction::ForgotPasswordSucceeded
                        },
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::ForgotPasswordFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::ForgotPasswordSucceeded => {
                state.session.end_loading();
                smallvec![notify_success(
                    &env.notifier,
                    "Password reset email sent."
                )]
            },

            ConsoleAction::ForgotPasswordFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            ConsoleAction::ResetPasswordSubmitted { reset } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::reset_password(&api, reset).await {
                        RequestOutcome::Success { .. } => {
                            ConsoleAction::ResetPasswordSucceeded
                        },
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::ResetPasswordFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::ResetPasswordSucceeded => {
                state.session.end_loading();

                let notifier = env.notifier.clone();
                let navigator = env.navigator.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    notifier
                        .success("Password reset. Please sign in with your new password.")
                        .await;
                    navigator.navigate(Route::Login).await;
                    None
                }))]
            },

            ConsoleAction::ResetPasswordFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            // ═══════════════════════════════════════════════════════════
            // Profile
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::ProfileEditSubmitted { update } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::update_profile(&api, update).await {
                        RequestOutcome::Success { data } => {
                            ConsoleAction::ProfileEditSucceeded { user: data }
                        },
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::ProfileEditFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::ProfileEditSucceeded { user } => {
                state.session.end_loading();
                // Replaces the cached user only; the token is untouched.
                state.session.user = Some(user.clone());

                let token = state.session.token.clone();
                let storage = env.storage.clone();
                let notifier = env.notifier.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    if let Some(token) = token {
                        let persisted = PersistedSession { token, user };
                        if let Err(error) = storage.persist(&persisted).await {
                            tracing::warn!(%error, "Failed to persist session");
                        }
                    }
                    notifier.success("Profile updated successfully!").await;
                    None
                }))]
            },

            ConsoleAction::ProfileEditFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            ConsoleAction::PasswordChangeSubmitted { change } => {
                state.session.begin_loading();

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match services::change_password(&api, change).await {
                        RequestOutcome::Success { .. } => {
                            ConsoleAction::PasswordChangeSucceeded
                        },
                        RequestOutcome::Failure { error } => {
                            ConsoleAction::PasswordChangeFailed { error }
                        },
                    })
                }))]
            },

            ConsoleAction::PasswordChangeSucceeded => {
                state.session.end_loading();
                smallvec![notify_success(
                    &env.notifier,
                    "Password changed successfully!"
                )]
            },

            ConsoleAction::PasswordChangeFailed { error } => {
                state.session.end_loading();
                smallvec![notify_error(&env.notifier, error)]
            },

            // ═══════════════════════════════════════════════════════════
            // Session teardown
            // ═══════════════════════════════════════════════════════════
            ConsoleAction::LogoutRequested => {
                state.session.reset();
                tracing::info!("Logout requested");
                Self::session_reset_effects(env, false)
            },

            ConsoleAction::UnauthorizedReceived => {
                state.session.reset();
                tracing::warn!("Unauthorized received, forcing session reset");
                Self::session_reset_effects(env, true)
            },

            // Actions owned by the user-list reducer.
            _ => smallvec![Effect::None],
        }
    }
}
