//! # REST-backed store
//!
//! [`HttpStore`] talks to the Billed backend:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list` | `GET {base}/bills` |
//! | `create` | `POST {base}/bills`, multipart body with `file` and `email` |
//! | `update` | `PATCH {base}/bills/{id}`, JSON body |
//!
//! Requests carry `Authorization: Bearer <jwt>` when a token was stored at
//! sign-in. Any non-success status becomes [`StoreError::Status`].

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};

use crate::client::{BillsStore, StoreError};
use crate::models::{Bill, BillDraft, BillUpload, CreatedBill};

#[derive(Clone, Debug)]
pub struct HttpStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "bills request failed");
            return Err(StoreError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

impl BillsStore for HttpStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let response = self.send(self.client.get(self.bills_url())).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, upload: BillUpload) -> Result<CreatedBill, StoreError> {
        let mut part = Part::bytes(upload.file.bytes).file_name(upload.file.name);
        if let Some(mime) = upload.file.mime.as_deref().filter(|m| !m.is_empty()) {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().text("email", upload.email).part("file", part);

        let response = self
            .send(self.client.post(self.bills_url()).multipart(form))
            .await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, draft: BillDraft) -> Result<Bill, StoreError> {
        let url = format!("{}/{id}", self.bills_url());
        let response = self.send(self.client.patch(url).json(&draft)).await?;
        Ok(response.json().await?)
    }
}
