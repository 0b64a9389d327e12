//! API Client - Typed REST Endpoints
//!
//! Thin wrapper over reqwest for the MediVision backend. Authentication is
//! cookie-based; the client keeps a jar so the session cookie from login
//! rides along on every later request. All calls go through [`ApiClient::execute`],
//! which logs the round trip and turns non-2xx responses into [`Error::Api`]
//! carrying the backend's own message.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::medicine::{Medicine, MedicineDraft};
use crate::domain::query::{ListQuery, Paginated};
use crate::domain::session::{LoginRequest, LoginResponse};
use crate::domain::user::{User, UserUpdate};
use crate::error::{Error, Result};
use crate::utils::format::truncate;

/// Error body shape the backend sends on rejections
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Pull the backend's `message` out of an error body.
///
/// Validation rejections carry an array of messages; those are joined into
/// one line. Anything unparseable yields an empty string so the caller's
/// fallback wording applies.
fn error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return String::new();
    };
    match parsed.message {
        Some(serde_json::Value::String(message)) => message,
        Some(serde_json::Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

/// MIME type for an upload, from the file extension
fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("jpg" | "jpeg" | "jfif") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Read a local file into a multipart part
async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(image_mime(path))?;
    Ok(part)
}

/// Multipart body for medicine create/update: one camelCase text part per
/// filled field, then one `images` part per attached file.
async fn medicine_form(draft: &MedicineDraft) -> Result<Form> {
    let mut form = Form::new();
    for (key, value) in draft.text_parts() {
        form = form.text(key, value);
    }
    for path in &draft.image_paths {
        form = form.part("images", file_part(path).await?);
    }
    Ok(form)
}

/// HTTP client for the backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, logging the round trip and mapping error responses
    /// to [`Error::Api`].
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!("API request: {method} {path}");

        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!("API response: {} {method} {path}", status.as_u16());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            "API error: {} {method} {path}: {}",
            status.as_u16(),
            truncate(&body, 200)
        );
        Err(Error::Api {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    // ==================== Auth & Profile ====================

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<User> {
        let response = self
            .execute(self.client.post(self.url("/auth/login")).json(request))
            .await?;
        let body: LoginResponse = response.json().await?;
        Ok(body.user)
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<()> {
        self.execute(self.client.post(self.url("/auth/logout")))
            .await?;
        Ok(())
    }

    /// `GET /users/profile`
    pub async fn fetch_profile(&self) -> Result<User> {
        let response = self
            .execute(self.client.get(self.url("/users/profile")))
            .await?;
        Ok(response.json().await?)
    }

    /// `PUT /users/profile`
    pub async fn update_profile(&self, update: &UserUpdate) -> Result<()> {
        self.execute(self.client.put(self.url("/users/profile")).json(update))
            .await?;
        Ok(())
    }

    /// `PUT /users/profile/image`, multipart `image`
    pub async fn update_profile_image(&self, path: &Path) -> Result<()> {
        let form = Form::new().part("image", file_part(path).await?);
        self.execute(
            self.client
                .put(self.url("/users/profile/image"))
                .multipart(form),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /users/profile/image`
    pub async fn remove_profile_image(&self) -> Result<()> {
        self.execute(self.client.delete(self.url("/users/profile/image")))
            .await?;
        Ok(())
    }

    /// `PUT /users/profile/cover`, multipart `cover`
    pub async fn update_profile_cover(&self, path: &Path) -> Result<()> {
        let form = Form::new().part("cover", file_part(path).await?);
        self.execute(
            self.client
                .put(self.url("/users/profile/cover"))
                .multipart(form),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /users/profile/cover`
    pub async fn remove_profile_cover(&self) -> Result<()> {
        self.execute(self.client.delete(self.url("/users/profile/cover")))
            .await?;
        Ok(())
    }

    // ==================== Users ====================

    /// `GET /users`
    pub async fn fetch_users(&self, query: &ListQuery) -> Result<Paginated<User>> {
        let response = self
            .execute(
                self.client
                    .get(self.url("/users"))
                    .query(&query.query_pairs()),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// `GET /users/{id}`
    pub async fn fetch_user(&self, id: &str) -> Result<User> {
        let response = self
            .execute(self.client.get(self.url(&format!("/users/{id}"))))
            .await?;
        Ok(response.json().await?)
    }

    /// `PUT /users/{id}`
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<()> {
        self.execute(
            self.client
                .put(self.url(&format!("/users/{id}")))
                .json(update),
        )
        .await?;
        Ok(())
    }

    /// `PUT /users/{id}/role`
    pub async fn update_user_role(&self, id: &str, role: &str) -> Result<()> {
        let body = serde_json::json!({ "role": role });
        self.execute(
            self.client
                .put(self.url(&format!("/users/{id}/role")))
                .json(&body),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /users/{id}`
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.execute(self.client.delete(self.url(&format!("/users/{id}"))))
            .await?;
        Ok(())
    }

    // ==================== Medicines ====================

    /// `GET /medicines`
    pub async fn fetch_medicines(&self, query: &ListQuery) -> Result<Paginated<Medicine>> {
        let response = self
            .execute(
                self.client
                    .get(self.url("/medicines"))
                    .query(&query.query_pairs()),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// `GET /medicines/{id}`
    pub async fn fetch_medicine(&self, id: &str) -> Result<Medicine> {
        let response = self
            .execute(self.client.get(self.url(&format!("/medicines/{id}"))))
            .await?;
        Ok(response.json().await?)
    }

    /// `POST /medicines`, multipart text fields plus `images` files
    pub async fn create_medicine(&self, draft: &MedicineDraft) -> Result<()> {
        let form = medicine_form(draft).await?;
        self.execute(self.client.post(self.url("/medicines")).multipart(form))
            .await?;
        Ok(())
    }

    /// `PATCH /medicines/{id}`, same shape as create
    pub async fn update_medicine(&self, id: &str, draft: &MedicineDraft) -> Result<()> {
        let form = medicine_form(draft).await?;
        self.execute(
            self.client
                .patch(self.url(&format!("/medicines/{id}")))
                .multipart(form),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /medicines/{id}`
    pub async fn delete_medicine(&self, id: &str) -> Result<()> {
        self.execute(self.client.delete(self.url(&format!("/medicines/{id}"))))
            .await?;
        Ok(())
    }

    /// `DELETE /medicines/{id}/images/{imageName}`
    pub async fn delete_medicine_image(&self, id: &str, image_name: &str) -> Result<()> {
        self.execute(
            self.client
                .delete(self.url(&format!("/medicines/{id}/images/{image_name}"))),
        )
        .await?;
        Ok(())
    }

    /// `POST /medicines/search-by-image`, multipart `image`.
    ///
    /// Returns scored matches rather than a catalog page.
    pub async fn search_by_image(&self, path: &Path) -> Result<Vec<Medicine>> {
        let form = Form::new().part("image", file_part(path).await?);
        self.execute(
            self.client
                .post(self.url("/medicines/search-by-image"))
                .multipart(form),
        )
        .await?
        .json()
        .await
        .map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_plain_string() {
        let body = r#"{"message": "Medicine not found", "statusCode": 404}"#;
        assert_eq!(error_message(body), "Medicine not found");
    }

    #[test]
    fn test_error_message_joins_validation_array() {
        let body = r#"{"message": ["name should not be empty", "details should not be empty"], "error": "Bad Request"}"#;
        assert_eq!(
            error_message(body),
            "name should not be empty, details should not be empty"
        );
    }

    #[test]
    fn test_error_message_non_json_body() {
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), "");
        assert_eq!(error_message(""), "");
        assert_eq!(error_message(r#"{"error": "no message field"}"#), "");
    }

    #[test]
    fn test_image_mime_from_extension() {
        assert_eq!(image_mime(Path::new("/tmp/photo.jfif")), "image/jpeg");
        assert_eq!(image_mime(Path::new("/tmp/PHOTO.PNG")), "image/png");
        assert_eq!(image_mime(Path::new("/tmp/scan.webp")), "image/webp");
        assert_eq!(image_mime(Path::new("/tmp/notes.txt")), "application/octet-stream");
        assert_eq!(image_mime(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/medicines"), "http://localhost:3000/medicines");
    }
}
