use crate::*;
use serde::{Deserialize, Serialize};

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Returned in place of an answer when the model replies without any text.
pub const NO_TEXT_RESPONSE: &str = "The assistant responded but no text content was found.";

/// Google Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct Gemini {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: ENDPOINT.to_string(),
        }
    }

    /// Point the client at another base URL (a proxy or a local stand-in).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint.trim_end_matches('/'), self.model)
    }
}

impl Assistant for Gemini {
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!("Calling Gemini model {}", self.model);
        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&Request::new(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.error.message)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            return Err(Error::Assistant(format!("{status} - {reason}")));
        }

        let body: Response = response.json().await?;
        Ok(body.text().map(str::to_string).unwrap_or_else(|| {
            warn!("Gemini response carried no text");
            NO_TEXT_RESPONSE.to_string()
        }))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Request<'a> {
    contents: [Content<'a>; 1],
    tool_config: ToolConfig,
    generation_config: GenerationConfig,
}

impl<'a> Request<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            tool_config: ToolConfig {
                function_calling_config: FunctionCallingConfig { mode: "NONE" },
            },
            generation_config: GenerationConfig {
                temperature: 0.3,
                max_output_tokens: 8192,
                top_p: 0.8,
                top_k: 40,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    function_calling_config: FunctionCallingConfig,
}

#[derive(Debug, Serialize)]
struct FunctionCallingConfig {
    mode: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
    top_p: f64,
    top_k: u32,
}

#[derive(Debug, Default, Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl Response {
    /// Text of the first part of the first candidate.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
