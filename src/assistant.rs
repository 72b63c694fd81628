//! Language-model boundary: explanations and instruction-driven rewrites.
crate::reexport!(gemini);
crate::reexport!(cache);
crate::reexport!(prompt);
crate::reexport!(response);

use std::future::Future;

/// Something that turns a prompt into text.
pub trait Assistant: Send + Sync {
    fn complete(&self, prompt: &str) -> impl Future<Output = crate::Result<String>> + Send;
}
