//! REST implementation of the backend API.

use crate::error::ApiError;
use crate::http::{ApiEnvelope, HttpClient};
use crate::providers::{
    AdminApi, ImageAttachment, LoginCredentials, LoginPayload, NewUser, PasswordChange,
    PasswordReset, ProfileUpdate, RegistrationForm, UserEdit,
};
use crate::state::{ListPage, ListQuery, UserId, UserProfile};
use serde::de::DeserializeOwned;
use std::future::Future;

/// Backend API over HTTP.
///
/// One thin method per endpoint: build the request, hand it to the
/// adapter, decode the envelope payload. No validation, no retries, no
/// error shaping - those concerns live in the form layer, nowhere, and
/// the service layer respectively.
#[derive(Debug, Clone)]
pub struct RestAdminApi {
    http: HttpClient,
}

impl RestAdminApi {
    /// Create the API over an HTTP adapter.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn decode<T: DeserializeOwned>(envelope: ApiEnvelope) -> Result<T, ApiError> {
        serde_json::from_value(envelope.data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn multipart_form(edit: &UserEdit) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();

        for (name, value) in edit.scalar_fields() {
            form = form.text(name, value);
        }

        if let Some(ImageAttachment {
            file_name,
            content_type,
            bytes,
        }) = &edit.image
        {
            let part = reqwest::multipart::Part::bytes(bytes.clone())
                .file_name(file_name.clone())
                .mime_str(content_type)
                .unwrap_or_else(|_| {
                    reqwest::multipart::Part::bytes(bytes.clone()).file_name(file_name.clone())
                });
            form = form.part("profile_image", part);
        }

        form
    }
}

impl AdminApi for RestAdminApi {
    fn login(
        &self,
        credentials: LoginCredentials,
    ) -> impl Future<Output = Result<LoginPayload, ApiError>> + Send {
        let http = self.http.clone();
        async move {
            let envelope = http.post("/auth/login", &credentials).await?;
            Self::decode(envelope)
        }
    }

    fn register(
        &self,
        form: RegistrationForm,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let http = self.http.clone();
        async move {
            http.post("/auth/register", &form).await?;
            Ok(())
        }
    }

    fn forgot_password(&self, email: String) -> impl Future<Output = Result<(), ApiError>> + Send {
        let http = self.http.clone();
        async move {
            http.post("/auth/forgot-password", &serde_json::json!({ "email": email }))
                .await?;
            Ok(())
        }
    }

    fn reset_password(
        &self,
        reset: PasswordReset,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let http = self.http.clone();
        async move {
            http.post("/auth/reset-password", &reset).await?;
            Ok(())
        }
    }

    fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send {
        let http = self.http.clone();
        async move {
            let envelope = http.patch("/profile/update", &update).await?;
            Self::decode(envelope)
        }
    }

    fn change_password(
        &self,
        change: PasswordChange,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let http = self.http.clone();
        async move {
            http.post("/profile/change-password", &change).await?;
            Ok(())
        }
    }

    fn list_users(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<ListPage, ApiError>> + Send {
        let http = self.http.clone();
        async move {
            let params = [
                ("search", query.search_text),
                ("page", query.page.to_string()),
                ("page_size", query.page_size.to_string()),
            ];
            let envelope = http.get("/user/list", &params).await?;
            Self::decode(envelope)
        }
    }

    fn create_user(
        &self,
        user: NewUser,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send {
        let http = self.http.clone();
        async move {
            let envelope = http.post("/user/create", &user).await?;
            Self::decode(envelope)
        }
    }

    fn edit_user(
        &self,
        edit: UserEdit,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send {
        let http = self.http.clone();
        async move {
            let form = Self::multipart_form(&edit);
            let envelope = http.patch_multipart("/user/edit-user", form).await?;
            Self::decode(envelope)
        }
    }

    fn remove_user(&self, user_id: UserId) -> impl Future<Output = Result<(), ApiError>> + Send {
        let http = self.http.clone();
        async move {
            http.delete("/user/remove", &serde_json::json!({ "user_id": user_id }))
                .await?;
            Ok(())
        }
    }

    fn set_user_active(
        &self,
        user_id: UserId,
        active: bool,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let http = self.http.clone();
        async move {
            http.post(
                "/user/block-unblock",
                &serde_json::json!({ "user_id": user_id, "active": active }),
            )
            .await?;
            Ok(())
        }
    }
}
