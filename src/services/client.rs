//! HTTP Client
//!
//! One configured dispatcher for the whole app. Every failure is logged
//! here and handed back to the caller unchanged.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }
}

/// Transport seam under `HttpClient`
#[async_trait(?Send)]
pub trait HttpBackend: Send + Sync {
    /// `Ok(None)` for an empty 2xx body
    async fn execute(&self, base_url: &str, request: &ApiRequest) -> ApiResult<Option<Value>>;
}

/// Production backend: `reqwest` (browser `fetch` on wasm32)
#[derive(Clone, Default)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, base_url: &str, request: &ApiRequest) -> ApiResult<Option<Value>> {
        let url = format!("{}{}", base_url, request.path);
        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .header(reqwest::header::ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: Arc<str>,
    backend: Arc<dyn HttpBackend>,
}

impl HttpClient {
    pub fn new(config: &AppConfig) -> Self {
        log::info!("API base URL: {}", config.api_base_url);
        Self::with_backend(&config.api_base_url, Arc::new(ReqwestBackend::default()))
    }

    pub fn with_backend(base_url: &str, backend: Arc<dyn HttpBackend>) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            backend,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<Option<Value>> {
        log::debug!("{} {}", request.method, request.path);
        match self.backend.execute(&self.base_url, &request).await {
            Ok(value) => Ok(value),
            Err(err) => {
                log::error!("API Error: {} {}{}: {}", request.method, self.base_url, request.path, err);
                Err(err)
            }
        }
    }

    async fn send_decoded<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let method = request.method;
        let path = request.path.clone();
        let value = self.send(request).await?.unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|err| {
            log::error!("API Error: {} {}{}: undecodable response: {}", method, self.base_url, path, err);
            ApiError::from(err)
        })
    }

    fn with_body<B: Serialize>(mut request: ApiRequest, body: &B) -> ApiResult<ApiRequest> {
        request.body = Some(serde_json::to_value(body)?);
        Ok(request)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send_decoded(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = Self::with_body(ApiRequest::new(Method::Post, path), body)?;
        self.send_decoded(request).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = Self::with_body(ApiRequest::new(Method::Put, path), body)?;
        self.send_decoded(request).await
    }

    /// PATCH with both a JSON body and the same values as query parameters
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> ApiResult<T> {
        let mut request = Self::with_body(ApiRequest::new(Method::Patch, path), body)?;
        request.query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.send_decoded(request).await
    }

    /// Response body, if any, is ignored
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(ApiRequest::new(Method::Delete, path)).await.map(|_| ())
    }
}
