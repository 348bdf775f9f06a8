//! Mock backend API for testing.

use crate::error::ApiError;
use crate::providers::{
    AdminApi, LoginCredentials, LoginPayload, NewUser, PasswordChange, PasswordReset,
    ProfileUpdate, RegistrationForm, UserEdit,
};
use crate::state::{ListPage, ListQuery, UserId, UserProfile};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A call observed by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// `login` was called.
    Login(LoginCredentials),
    /// `register` was called.
    Register(RegistrationForm),
    /// `forgot_password` was called.
    ForgotPassword(String),
    /// `reset_password` was called.
    ResetPassword(PasswordReset),
    /// `update_profile` was called.
    UpdateProfile(ProfileUpdate),
    /// `change_password` was called.
    ChangePassword(PasswordChange),
    /// `list_users` was called.
    ListUsers(ListQuery),
    /// `create_user` was called.
    CreateUser(NewUser),
    /// `edit_user` was called.
    EditUser(UserId),
    /// `remove_user` was called.
    RemoveUser(UserId),
    /// `set_user_active` was called.
    SetUserActive(UserId, bool),
}

/// A scripted response, optionally served after a delay.
struct Scripted<T> {
    result: Result<T, ApiError>,
    delay: Option<Duration>,
}

#[derive(Default)]
struct Inner {
    login: VecDeque<Scripted<LoginPayload>>,
    register: VecDeque<Scripted<()>>,
    forgot_password: VecDeque<Scripted<()>>,
    reset_password: VecDeque<Scripted<()>>,
    update_profile: VecDeque<Scripted<UserProfile>>,
    change_password: VecDeque<Scripted<()>>,
    list_users: VecDeque<Scripted<ListPage>>,
    create_user: VecDeque<Scripted<UserProfile>>,
    edit_user: VecDeque<Scripted<UserProfile>>,
    remove_user: VecDeque<Scripted<()>>,
    set_user_active: VecDeque<Scripted<()>>,
    calls: Vec<RecordedCall>,
}

/// Mock backend API.
///
/// Responses are scripted per endpoint and played back in order. An
/// endpoint with an exhausted script answers with a transport error.
#[derive(Clone, Default)]
pub struct MockAdminApi {
    inner: Arc<Mutex<Inner>>,
}

impl MockAdminApi {
    /// Create a mock with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// All calls observed so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// The list queries observed so far, in order.
    #[must_use]
    pub fn list_queries(&self) -> Vec<ListQuery> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::ListUsers(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    /// Script the next `login` response.
    pub fn script_login(&self, result: Result<LoginPayload, ApiError>) {
        self.lock().login.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `login` response, served after `delay`.
    ///
    /// Used to observe the loading flag while the request is in flight.
    pub fn script_login_delayed(&self, result: Result<LoginPayload, ApiError>, delay: Duration) {
        self.lock().login.push_back(Scripted {
            result,
            delay: Some(delay),
        });
    }

    /// Script the next `register` response.
    pub fn script_register(&self, result: Result<(), ApiError>) {
        self.lock().register.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `forgot_password` response.
    pub fn script_forgot_password(&self, result: Result<(), ApiError>) {
        self.lock().forgot_password.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `reset_password` response.
    pub fn script_reset_password(&self, result: Result<(), ApiError>) {
        self.lock().reset_password.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `update_profile` response.
    pub fn script_update_profile(&self, result: Result<UserProfile, ApiError>) {
        self.lock().update_profile.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `change_password` response.
    pub fn script_change_password(&self, result: Result<(), ApiError>) {
        self.lock().change_password.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `list_users` response.
    pub fn script_list(&self, result: Result<ListPage, ApiError>) {
        self.lock().list_users.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `list_users` response, served after `delay`.
    ///
    /// Used to simulate a slow response that arrives after a newer one.
    pub fn script_list_delayed(&self, result: Result<ListPage, ApiError>, delay: Duration) {
        self.lock().list_users.push_back(Scripted {
            result,
            delay: Some(delay),
        });
    }

    /// Script the next `create_user` response.
    pub fn script_create_user(&self, result: Result<UserProfile, ApiError>) {
        self.lock().create_user.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `edit_user` response.
    pub fn script_edit_user(&self, result: Result<UserProfile, ApiError>) {
        self.lock().edit_user.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `remove_user` response.
    pub fn script_remove_user(&self, result: Result<(), ApiError>) {
        self.lock().remove_user.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Script the next `set_user_active` response.
    pub fn script_set_user_active(&self, result: Result<(), ApiError>) {
        self.lock().set_user_active.push_back(Scripted {
            result,
            delay: None,
        });
    }

    fn unscripted<T>(endpoint: &str) -> Result<T, ApiError> {
        Err(ApiError::Transport(format!(
            "no scripted response for {endpoint}"
        )))
    }

    async fn serve<T>(taken: Option<Scripted<T>>, endpoint: &str) -> Result<T, ApiError> {
        match taken {
            Some(Scripted { result, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                result
            },
            None => Self::unscripted(endpoint),
        }
    }
}

impl std::fmt::Debug for MockAdminApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockAdminApi")
            .field("calls", &self.lock().calls.len())
            .finish_non_exhaustive()
    }
}

impl AdminApi for MockAdminApi {
    fn login(
        &self,
        credentials: LoginCredentials,
    ) -> impl Future<Output = Result<LoginPayload, ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::Login(credentials));
            inner.login.pop_front()
        };
        Self::serve(taken, "login")
    }

    fn register(
        &self,
        form: RegistrationForm,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::Register(form));
            inner.register.pop_front()
        };
        Self::serve(taken, "register")
    }

    fn forgot_password(&self, email: String) -> impl Future<Output = Result<(), ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::ForgotPassword(email));
            inner.forgot_password.pop_front()
        };
        Self::serve(taken, "forgot_password")
    }

    fn reset_password(
        &self,
        reset: PasswordReset,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::ResetPassword(reset));
            inner.reset_password.pop_front()
        };
        Self::serve(taken, "reset_password")
    }

    fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::UpdateProfile(update));
            inner.update_profile.pop_front()
        };
        Self::serve(taken, "update_profile")
    }

    fn change_password(
        &self,
        change: PasswordChange,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::ChangePassword(change));
            inner.change_password.pop_front()
        };
        Self::serve(taken, "change_password")
    }

    fn list_users(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<ListPage, ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::ListUsers(query));
            inner.list_users.pop_front()
        };
        Self::serve(taken, "list_users")
    }

    fn create_user(
        &self,
        user: NewUser,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::CreateUser(user));
            inner.create_user.pop_front()
        };
        Self::serve(taken, "create_user")
    }

    fn edit_user(
        &self,
        edit: UserEdit,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::EditUser(edit.user_id.clone()));
            inner.edit_user.pop_front()
        };
        Self::serve(taken, "edit_user")
    }

    fn remove_user(&self, user_id: UserId) -> impl Future<Output = Result<(), ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::RemoveUser(user_id));
            inner.remove_user.pop_front()
        };
        Self::serve(taken, "remove_user")
    }

    fn set_user_active(
        &self,
        user_id: UserId,
        active: bool,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let taken = {
            let mut inner = self.lock();
            inner
                .calls
                .push(RecordedCall::SetUserActive(user_id, active));
            inner.set_user_active.pop_front()
        };
        Self::serve(taken, "set_user_active")
    }
}
