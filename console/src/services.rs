//! Domain service functions.
//!
//! One function per backend operation, generic over the [`AdminApi`]
//! provider. Each calls the API and converts the result through the single
//! [`outcome`] wrapper, so every caller receives the uniform
//! [`RequestOutcome`] contract: callers branch once on success/failure and
//! never see a raw transport error.

use crate::outcome::{RequestOutcome, outcome};
use crate::providers::{
    AdminApi, LoginCredentials, LoginPayload, NewUser, PasswordChange, PasswordReset,
    ProfileUpdate, RegistrationForm, UserEdit,
};
use crate::state::{ListPage, ListQuery, UserId, UserProfile};

/// Authenticate with email and password.
pub async fn login<A: AdminApi>(
    api: &A,
    credentials: LoginCredentials,
) -> RequestOutcome<LoginPayload> {
    outcome(api.login(credentials).await)
}

/// Register a new operator account.
pub async fn register<A: AdminApi>(api: &A, form: RegistrationForm) -> RequestOutcome<()> {
    outcome(api.register(form).await)
}

/// Request a password-reset email.
pub async fn forgot_password<A: AdminApi>(api: &A, email: String) -> RequestOutcome<()> {
    outcome(api.forgot_password(email).await)
}

/// Redeem a password-reset token.
pub async fn reset_password<A: AdminApi>(api: &A, reset: PasswordReset) -> RequestOutcome<()> {
    outcome(api.reset_password(reset).await)
}

/// Update the signed-in user's profile.
pub async fn update_profile<A: AdminApi>(
    api: &A,
    update: ProfileUpdate,
) -> RequestOutcome<UserProfile> {
    outcome(api.update_profile(update).await)
}

/// Change the signed-in user's password.
pub async fn change_password<A: AdminApi>(
    api: &A,
    change: PasswordChange,
) -> RequestOutcome<()> {
    outcome(api.change_password(change).await)
}

/// Fetch one page of users matching the query.
pub async fn list_users<A: AdminApi>(api: &A, query: ListQuery) -> RequestOutcome<ListPage> {
    outcome(api.list_users(query).await)
}

/// Create a user.
pub async fn create_user<A: AdminApi>(api: &A, user: NewUser) -> RequestOutcome<UserProfile> {
    outcome(api.create_user(user).await)
}

/// Edit a user (multipart; may carry an image attachment).
pub async fn edit_user<A: AdminApi>(api: &A, edit: UserEdit) -> RequestOutcome<UserProfile> {
    outcome(api.edit_user(edit).await)
}

/// Remove a user.
pub async fn remove_user<A: AdminApi>(api: &A, user_id: UserId) -> RequestOutcome<()> {
    outcome(api.remove_user(user_id).await)
}

/// Activate or deactivate a user.
pub async fn set_user_active<A: AdminApi>(
    api: &A,
    user_id: UserId,
    active: bool,
) -> RequestOutcome<()> {
    outcome(api.set_user_active(user_id, active).await)
}
