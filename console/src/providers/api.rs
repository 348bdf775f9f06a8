//! Backend API trait.

use crate::error::ApiError;
use crate::providers::{
    LoginCredentials, LoginPayload, NewUser, PasswordChange, PasswordReset, ProfileUpdate,
    RegistrationForm, UserEdit,
};
use crate::state::{ListPage, ListQuery, UserId, UserProfile};
use std::future::Future;

/// The backend API, one method per endpoint.
///
/// This trait abstracts over the REST backend so reducers can be tested at
/// memory speed against an in-memory mock. Methods return the decoded
/// payload or an [`ApiError`]; conversion into the uniform
/// `RequestOutcome` contract happens one layer up, in the service
/// functions.
///
/// # Implementation Notes
///
/// - No method validates input; the form layer does that before any call
/// - No method retries; every failure is terminal for that one user action
pub trait AdminApi: Send + Sync {
    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are rejected or the request fails.
    fn login(
        &self,
        credentials: LoginCredentials,
    ) -> impl Future<Output = Result<LoginPayload, ApiError>> + Send;

    /// Register a new operator account.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is rejected or the request fails.
    fn register(
        &self,
        form: RegistrationForm,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Request a password-reset email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn forgot_password(&self, email: String) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Redeem a password-reset token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the request fails.
    fn reset_password(
        &self,
        reset: PasswordReset,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Update the signed-in user's profile. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected or the request fails.
    fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send;

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the current password is rejected or the request
    /// fails.
    fn change_password(
        &self,
        change: PasswordChange,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Fetch one page of users matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_users(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<ListPage, ApiError>> + Send;

    /// Create a user. Returns the created record.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is rejected or the request fails.
    fn create_user(
        &self,
        user: NewUser,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send;

    /// Edit a user (multipart; may carry an image attachment). Returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit is rejected or the request fails.
    fn edit_user(
        &self,
        edit: UserEdit,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send;

    /// Remove a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn remove_user(&self, user_id: UserId) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Activate or deactivate a user (block/unblock).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn set_user_active(
        &self,
        user_id: UserId,
        active: bool,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
