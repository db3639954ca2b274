use crate::utils::error::RemoteCallError;
use async_trait::async_trait;
use std::time::Duration;

/// One best-effort round trip to the generative-language service.
#[async_trait]
pub trait RemoteService: Send + Sync {
    async fn call(&self, prompt: &str) -> Result<String, RemoteCallError>;
}

/// Source of the raw page title; `None` while the page is still rendering.
pub trait TitleSource: Send + Sync {
    fn current_title(&self) -> Option<String>;
}

#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

