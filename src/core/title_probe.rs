use crate::domain::ports::{Delay, TitleSource};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// True when `url` points at a single video rather than a listing page.
pub fn is_video_page(url: &str) -> bool {
    url.contains("/watch?v=")
}

/// Production delay backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Reads the page title, retrying a bounded number of times while the page
/// is still rendering.
pub struct TitleProbe<D: Delay> {
    delay: D,
    max_retries: u32,
    retry_delay: Duration,
}

impl TitleProbe<TokioDelay> {
    pub fn with_defaults() -> Self {
        Self::new(TokioDelay, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY)
    }
}

impl<D: Delay> TitleProbe<D> {
    pub fn new(delay: D, max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            delay,
            max_retries,
            retry_delay,
        }
    }

    /// Returns the first non-blank title, or `None` once retries run out.
    pub async fn probe<S: TitleSource + ?Sized>(&self, source: &S) -> Option<String> {
        let mut title = read_title(source);
        let mut attempt = 0;

        while title.is_none() && attempt < self.max_retries {
            attempt += 1;
            tracing::debug!(
                "Retrying title extraction ({}/{})",
                attempt,
                self.max_retries
            );
            self.delay.wait(self.retry_delay).await;
            title = read_title(source);
        }

        if title.is_none() {
            tracing::info!("No video title found after {} retries", self.max_retries);
        }
        title
    }
}

fn read_title<S: TitleSource + ?Sized>(source: &S) -> Option<String> {
    source
        .current_title()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
