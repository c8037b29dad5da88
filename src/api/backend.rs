use super::types::{
    AskRequest, AskResponse, HealthResponse, ModeRequest, ModeResponse, UploadResponse,
};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The four backend operations the UI depends on.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait SynapseBackend: Send + Sync {
    async fn check_health(&self) -> ApiResult<HealthResponse>;

    async fn upload_document(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadResponse>;

    async fn ask(&self, text: &str) -> ApiResult<AskResponse>;

    async fn set_mode(&self, mode: &str) -> ApiResult<ModeResponse>;
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);
        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> ApiResult<T> {
        let response = self.client.post(self.url(path)).multipart(form).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn log_failure<T>(operation: &str, result: ApiResult<T>) -> ApiResult<T> {
    if let Err(err) = &result {
        tracing::warn!(operation, error = %err, "backend call failed");
    }
    result
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl SynapseBackend for HttpBackend {
    async fn check_health(&self) -> ApiResult<HealthResponse> {
        tracing::debug!(url = %self.url("/"), "health check");
        log_failure("check_health", self.get_json("/").await)
    }

    async fn upload_document(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadResponse> {
        tracing::debug!(filename, size = bytes.len(), "uploading document");
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        log_failure("upload_document", self.post_form("/upload", form).await)
    }

    async fn ask(&self, text: &str) -> ApiResult<AskResponse> {
        tracing::debug!(chars = text.chars().count(), "asking synapse");
        log_failure("ask", self.post_json("/ask", &AskRequest { text }).await)
    }

    async fn set_mode(&self, mode: &str) -> ApiResult<ModeResponse> {
        tracing::debug!(mode, "setting orchestrator mode");
        log_failure("set_mode", self.post_json("/set_mode", &ModeRequest { mode }).await)
    }
}
