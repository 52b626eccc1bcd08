//! Application Context
//!
//! Shared configuration and services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::services::{BoxService, HttpClient, TaskService, TransportService};

/// App-wide services, all sharing one HTTP client
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub boxes: Arc<BoxService>,
    pub tasks: Arc<TaskService>,
    pub transports: Arc<TransportService>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let http = HttpClient::new(&config);
        Self {
            boxes: Arc::new(BoxService::new(http.clone())),
            tasks: Arc::new(TaskService::new(http.clone())),
            transports: Arc::new(TransportService::new(http)),
            config: Arc::new(config),
        }
    }
}

/// Context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
