use crate::*;
use moka::future::Cache;

/// Memoises completions per prompt in a bounded in-memory cache.
///
/// Placeholder answers for text-less responses are not cached, so asking
/// again retries the model.
#[derive(Debug, Clone)]
pub struct CachedAssistant<A> {
    inner: A,
    cache: Cache<String, String>,
}

impl<A: Assistant> CachedAssistant<A> {
    pub fn new(inner: A, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(capacity),
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Assistant> Assistant for CachedAssistant<A> {
    async fn complete(&self, prompt: &str) -> Result<String> {
        if let Some(hit) = self.cache.get(prompt).await {
            trace!("Assistant cache hit");
            return Ok(hit);
        }
        let text = self.inner.complete(prompt).await?;
        if text != NO_TEXT_RESPONSE {
            self.cache.insert(prompt.to_string(), text.clone()).await;
        }
        Ok(text)
    }
}
