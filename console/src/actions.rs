//! Console actions.
//!
//! This module defines all possible inputs to the console reducers.
//! Actions come in two flavors:
//!
//! - **Commands**: user intent sent by views (`LoginSubmitted`,
//!   `SearchInputChanged`, `RemoveUserRequested`, ...)
//! - **Events**: results of async effects fed back into the store
//!   (`LoginSucceeded`, `ListFetchFailed`, ...)
//!
//! Actions are the **only** way to communicate with the console engine.

use crate::providers::{
    LoginCredentials, NewUser, PasswordChange, PasswordReset, ProfileUpdate, RegistrationForm,
    UserEdit,
};
use crate::state::{ListPage, UserId, UserProfile};

/// Console action.
///
/// One flat enum covers the session flows and the user-list flows; the
/// session reducer and the user-list reducer each handle their own
/// variants over the shared state and ignore the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleAction {
    // ═══════════════════════════════════════════════════════════════════
    // Session: authentication
    // ═══════════════════════════════════════════════════════════════════
    /// Login form submitted.
    LoginSubmitted {
        /// Validated credentials from the form layer.
        credentials: LoginCredentials,
    },

    /// Login succeeded; the backend returned a token and the signed-in
    /// user's record.
    ///
    /// This is an **event** produced by the login effect.
    LoginSucceeded {
        /// Bearer token for subsequent requests.
        token: String,

        /// The signed-in user's record.
        user: UserProfile,
    },

    /// Login failed.
    LoginFailed {
        /// User-facing message (server-provided when available).
        error: String,
    },

    /// Registration form submitted.
    RegisterSubmitted {
        /// Validated registration form.
        form: RegistrationForm,
    },

    /// Registration succeeded.
    RegisterSucceeded,

    /// Registration failed.
    RegisterFailed {
        /// User-facing message.
        error: String,
    },

    /// Forgot-password form submitted.
    ForgotPasswordSubmitted {
        /// Email address to send the reset link to.
        email: String,
    },

    /// Forgot-password request succeeded.
    ForgotPasswordSucceeded,

    /// Forgot-password request failed.
    ForgotPasswordFailed {
        /// User-facing message.
        error: String,
    },

    /// Reset-password form submitted.
    ResetPasswordSubmitted {
        /// Token and new password.
        reset: PasswordReset,
    },

    /// Reset-password request succeeded.
    ResetPasswordSucceeded,

    /// Reset-password request failed.
    ResetPasswordFailed {
        /// User-facing message.
        error: String,
    },

    /// Logout requested by the user.
    LogoutRequested,

    /// The adapter observed an unauthorized response.
    ///
    /// Fed in by the HTTP adapter's central hook, bypassing the normal
    /// result contract. The session is reset and navigation is forced to
    /// the login entry point regardless of current view.
    UnauthorizedReceived,

    // ═══════════════════════════════════════════════════════════════════
    // Session: profile
    // ═══════════════════════════════════════════════════════════════════
    /// Edit-profile form submitted.
    ProfileEditSubmitted {
        /// Validated profile update.
        update: ProfileUpdate,
    },

    /// Profile update succeeded; the backend returned the updated record.
    ///
    /// Replaces the cached `user` only - the token is untouched.
    ProfileEditSucceeded {
        /// Updated record of the signed-in user.
        user: UserProfile,
    },

    /// Profile update failed.
    ProfileEditFailed {
        /// User-facing message.
        error: String,
    },

    /// Change-password form submitted.
    PasswordChangeSubmitted {
        /// Current and new password.
        change: PasswordChange,
    },

    /// Password change succeeded.
    PasswordChangeSucceeded,

    /// Password change failed.
    PasswordChangeFailed {
        /// User-facing message.
        error: String,
    },

    // ═══════════════════════════════════════════════════════════════════
    // User list: query
    // ═══════════════════════════════════════════════════════════════════
    /// A keystroke in the search box.
    ///
    /// Stores the raw text and restarts the debounce timer; the effective
    /// query changes only when the timer fires (trailing edge, no leading
    /// call).
    SearchInputChanged {
        /// Raw input text.
        text: String,
    },

    /// A debounce timer fired.
    ///
    /// Carries the generation it was scheduled with; stale generations
    /// (a newer keystroke arrived meanwhile) are discarded.
    SearchDebounceElapsed {
        /// Generation the timer was scheduled with.
        generation: u64,
    },

    /// Page selection changed.
    PageChanged {
        /// Requested page, 1-based.
        page: u64,
    },

    /// Page size selection changed.
    PageSizeChanged {
        /// Requested page size.
        page_size: u64,
    },

    /// Explicit refetch with the current query (list mount, pull-to-
    /// refresh).
    ListRefreshRequested,

    /// A list fetch completed successfully.
    ///
    /// This is an **event** produced by the fetch effect. `sequence`
    /// identifies the fetch; responses superseded by a newer fetch are
    /// discarded.
    ListFetchSucceeded {
        /// Sequence number of the fetch that produced this page.
        sequence: u64,

        /// The fetched page; the echoed pagination values are
        /// authoritative.
        page: ListPage,
    },

    /// A list fetch failed.
    ListFetchFailed {
        /// Sequence number of the failed fetch.
        sequence: u64,

        /// User-facing message.
        error: String,
    },

    // ═══════════════════════════════════════════════════════════════════
    // User list: mutations
    // ═══════════════════════════════════════════════════════════════════
    /// Activate or deactivate a listed user.
    ToggleActiveRequested {
        /// The user to toggle.
        user_id: UserId,

        /// Desired active state.
        active: bool,
    },

    /// Activate/deactivate succeeded. Triggers a full refetch.
    ToggleActiveSucceeded,

    /// Activate/deactivate failed.
    ToggleActiveFailed {
        /// User-facing message.
        error: String,
    },

    /// Remove a listed user.
    RemoveUserRequested {
        /// The user to remove.
        user_id: UserId,
    },

    /// Removal succeeded. Triggers a full refetch.
    RemoveUserSucceeded,

    /// Removal failed.
    RemoveUserFailed {
        /// User-facing message.
        error: String,
    },

    /// Create-user form submitted.
    CreateUserSubmitted {
        /// Validated create form.
        user: NewUser,
    },

    /// Create succeeded. Navigates back to the list and refetches.
    CreateUserSucceeded,

    /// Create failed.
    CreateUserFailed {
        /// User-facing message.
        error: String,
    },

    /// Edit-user form submitted (multipart; may carry an image).
    EditUserSubmitted {
        /// Validated edit form.
        edit: UserEdit,
    },

    /// Edit succeeded. Navigates back to the list and refetches.
    ///
    /// Note: even when the edited record belongs to the signed-in user,
    /// the session's cached copy is not updated - the two copies are never
    /// reconciled automatically.
    EditUserSucceeded,

    /// Edit failed.
    EditUserFailed {
        /// User-facing message.
        error: String,
    },
}
