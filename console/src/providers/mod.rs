//! Console providers.
//!
//! This module defines traits for all external dependencies used by the
//! console reducers, plus the request payload types those dependencies
//! exchange with the backend.
//!
//! # Architecture
//!
//! Providers are **interfaces**, not implementations. The reducers depend
//! on these traits, and the composition root provides concrete
//! implementations:
//!
//! - **Production**: REST API over HTTP, session file on disk, tracing
//!   notifier/navigator
//! - **Testing**: in-memory mocks (see the `mocks` module)
//!
//! The form layer validates input before constructing a payload type;
//! providers and services perform no validation of their own.

use crate::state::{UserId, UserProfile};
use serde::{Deserialize, Serialize};

pub mod api;
pub mod navigator;
pub mod notifier;
pub mod storage;

// Re-export provider traits and production implementations
pub use api::AdminApi;
pub use navigator::{Navigator, TracingNavigator};
pub use notifier::{Notifier, TracingNotifier};
pub use storage::{FileSessionStorage, SessionStorage};

/// Login form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Email address.
    pub email: String,

    /// Plain-text password, hashed server-side.
    pub password: String,
}

/// Successful login response: the token plus the signed-in user's record,
/// flattened into one object by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    /// Bearer token for subsequent requests.
    pub token: String,

    /// The signed-in user's record.
    #[serde(flatten)]
    pub user: UserProfile,
}

/// Registration form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address.
    pub email: String,

    /// Plain-text password, hashed server-side.
    pub password: String,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Reset-password payload (token arrives out of band via email).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    /// Reset token from the email link.
    pub token: String,

    /// New plain-text password.
    pub new_password: String,
}

/// Profile update payload for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Change-password payload for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    /// Current password, verified server-side.
    pub current_password: String,

    /// New plain-text password.
    pub new_password: String,
}

/// Create-user form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address.
    pub email: String,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// An image file attached to a user-edit submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    /// Original file name.
    pub file_name: String,

    /// MIME type (e.g. `image/png`).
    pub content_type: String,

    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Edit-user form payload.
///
/// Sent as multipart form data so the optional image attachment can ride
/// along with the scalar fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UserEdit {
    /// The user being edited.
    pub user_id: UserId,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address.
    pub email: String,

    /// Phone number.
    pub phone_number: Option<String>,

    /// Gender.
    pub gender: Option<String>,

    /// Street address.
    pub address: Option<String>,

    /// City.
    pub city: Option<String>,

    /// State or region.
    pub state: Option<String>,

    /// Country.
    pub country: Option<String>,

    /// Postal code.
    pub postal_code: Option<String>,

    /// Latitude of the geocoded address.
    pub latitude: Option<f64>,

    /// Longitude of the geocoded address.
    pub longitude: Option<f64>,

    /// New profile image, if the operator picked one.
    pub image: Option<ImageAttachment>,
}

impl UserEdit {
    /// Scalar fields as (name, value) pairs, in submission order.
    ///
    /// Unset optional fields are omitted entirely, matching how the form
    /// layer submits them.
    #[must_use]
    pub fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("user_id", self.user_id.0.clone()),
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
            ("email", self.email.clone()),
        ];

        let optional = [
            ("phone_number", self.phone_number.clone()),
            ("gender", self.gender.clone()),
            ("address", self.address.clone()),
            ("city", self.city.clone()),
            ("state", self.state.clone()),
            ("country", self.country.clone()),
            ("postal_code", self.postal_code.clone()),
            ("latitude", self.latitude.map(|v| v.to_string())),
            ("longitude", self.longitude.map(|v| v.to_string())),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                fields.push((name, value));
            }
        }

        fields
    }
}
