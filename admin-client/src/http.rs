//! HTTP client adapter
//!
//! One configured client for every call to the platform API. Session
//! credentials ride in the cookie store, so no header juggling happens at
//! call sites. A 401 on any response clears the local session mirror; where
//! to navigate afterwards is the caller's decision, never this layer's.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// HTTP client for making requests to the platform API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl HttpClient {
    /// Create a new HTTP client from configuration.
    pub fn new(config: &ClientConfig, session: SessionStore) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session,
        })
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request with a query string.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request without a body, ignoring any response body.
    pub async fn post_no_content(&self, path: &str) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).send().await?;
        self.handle_no_content(response).await
    }

    /// Make a PATCH request with a JSON body.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Make a PUT request with a JSON body, ignoring any response body.
    pub async fn put_no_content<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        self.handle_no_content(response).await
    }

    /// Make a DELETE request, ignoring any response body.
    pub async fn delete_no_content(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        self.handle_no_content(response).await
    }

    /// Make a DELETE request with a query string, ignoring any response body.
    pub async fn delete_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(path))
            .query(query)
            .send()
            .await?;
        self.handle_no_content(response).await
    }

    /// Make a POST request with a multipart form.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a PATCH request with a multipart form.
    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .patch(self.url(path))
            .multipart(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Handle a response expected to carry a JSON body.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(self.error_for_status(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a response whose body, if any, is irrelevant (204 and friends).
    async fn handle_no_content(&self, response: Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(self.error_for_status(status, text));
        }

        Ok(())
    }

    fn error_for_status(&self, status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED => {
                // Session is gone server-side; drop the stale local mirror.
                // Navigation is deferred to the caller.
                tracing::debug!("401 from API, clearing session mirror");
                self.session.clear();
                ClientError::Unauthorized
            }
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Server {
                status: status.as_u16(),
                message: text,
            },
        }
    }
}
