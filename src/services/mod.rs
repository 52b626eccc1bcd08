//! Entity Services
//!
//! Thin REST bindings, organized by domain. No validation, retry or
//! transformation happens here: each method resolves with the decoded
//! payload or the transport error.

mod client;
mod boxes;
mod tasks;
mod transports;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::Entity;

pub use client::{ApiRequest, HttpBackend, HttpClient, Method, ReqwestBackend};
pub use boxes::BoxService;
pub use tasks::TaskService;
pub use transports::TransportService;

/// CRUD contract shared by the three entity services
#[async_trait(?Send)]
pub trait CrudService<E: Entity>: Send + Sync {
    type Payload: Serialize + Send + Sync;

    async fn list(&self) -> ApiResult<Vec<E>>;

    async fn get(&self, id: E::Id) -> ApiResult<E>;

    /// Returns the entity with its server-assigned id
    async fn create(&self, payload: &Self::Payload) -> ApiResult<E>;

    /// Full replace
    async fn update(&self, id: E::Id, payload: &Self::Payload) -> ApiResult<E>;

    async fn delete(&self, id: E::Id) -> ApiResult<()>;

    async fn list_by_status(&self, status: E::Status) -> ApiResult<Vec<E>>;

    /// Narrow status endpoint, where the entity has one
    async fn transition(&self, id: E::Id, status: E::Status) -> ApiResult<E> {
        let _ = (id, status);
        Err(ApiError::Unsupported("status transition"))
    }
}

/// REST collection rooted at `base` (e.g. `/api/tasks`)
#[derive(Clone)]
pub(crate) struct Resource {
    http: HttpClient,
    base: &'static str,
}

impl Resource {
    pub(crate) fn new(http: HttpClient, base: &'static str) -> Self {
        Self { http, base }
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn path(&self, suffix: impl std::fmt::Display) -> String {
        format!("{}/{}", self.base, suffix)
    }

    pub(crate) async fn list<T: DeserializeOwned>(&self) -> ApiResult<Vec<T>> {
        self.http.get(self.base).await
    }

    pub(crate) async fn list_at<T: DeserializeOwned>(&self, suffix: impl std::fmt::Display) -> ApiResult<Vec<T>> {
        self.http.get(&self.path(suffix)).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, id: impl std::fmt::Display) -> ApiResult<T> {
        self.http.get(&self.path(id)).await
    }

    pub(crate) async fn create<T: DeserializeOwned, P: Serialize>(&self, payload: &P) -> ApiResult<T> {
        self.http.post(self.base, payload).await
    }

    pub(crate) async fn update<T: DeserializeOwned, P: Serialize>(
        &self,
        id: impl std::fmt::Display,
        payload: &P,
    ) -> ApiResult<T> {
        self.http.put(&self.path(id), payload).await
    }

    pub(crate) async fn delete(&self, id: impl std::fmt::Display) -> ApiResult<()> {
        self.http.delete(&self.path(id)).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory `HttpBackend` that records requests and replays canned replies.

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::Value;

    use super::{ApiRequest, HttpBackend, HttpClient};
    use crate::error::ApiResult;

    #[derive(Default)]
    pub struct RecordingBackend {
        calls: Mutex<Vec<ApiRequest>>,
        replies: Mutex<VecDeque<ApiResult<Option<Value>>>>,
    }

    impl RecordingBackend {
        pub fn replying(replies: Vec<ApiResult<Option<Value>>>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                replies: Mutex::new(replies.into()),
            })
        }

        pub fn calls(&self) -> Vec<ApiRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl HttpBackend for RecordingBackend {
        async fn execute(&self, _base_url: &str, request: &ApiRequest) -> ApiResult<Option<Value>> {
            self.calls.lock().unwrap().push(request.clone());
            self.replies.lock().unwrap().pop_front().unwrap_or(Ok(None))
        }
    }

    /// Client whose first call is answered with `reply`
    pub fn client_replying(reply: Value) -> (HttpClient, Arc<RecordingBackend>) {
        let backend = RecordingBackend::replying(vec![Ok(Some(reply))]);
        let client = HttpClient::with_backend("http://api.test", backend.clone());
        (client, backend)
    }
}
