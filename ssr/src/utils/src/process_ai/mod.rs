#[cfg(feature = "hydrate")]
mod browser;
#[cfg(not(feature = "hydrate"))]
mod native;

#[cfg(feature = "hydrate")]
pub use browser::BrowserTransport;
#[cfg(not(feature = "hydrate"))]
pub use native::NativeTransport;

/// Transport used by the page for the current build target.
#[cfg(feature = "hydrate")]
pub type PlatformTransport = BrowserTransport;
#[cfg(not(feature = "hydrate"))]
pub type PlatformTransport = NativeTransport;

use consts::response::{IMAGE_URL, STATUS, VIDEO_URL};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::web::SelectedFile;

/// The three parts sent to the processing service.
#[derive(Clone, Debug)]
pub struct ProcessAiRequest {
    pub video: SelectedFile,
    pub image: SelectedFile,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessAiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("processing service responded with status {0}")]
    Status(u16),
    #[error("response body is not valid JSON: {0}")]
    Parse(String),
    #[error("response body is not a JSON object")]
    UnexpectedShape,
}

/// Reply of the processing service.
///
/// The whole object is kept for display. `video_url` and `image_url` are
/// lifted out when they hold a non-empty string; anything else about them is
/// treated like any other unknown field.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessAiResponse {
    video_url: Option<String>,
    image_url: Option<String>,
    fields: Map<String, Value>,
}

fn url_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
}

impl ProcessAiResponse {
    pub fn from_json_str(body: &str) -> Result<Self, ProcessAiError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ProcessAiError::Parse(e.to_string()))?;
        Self::try_from(value)
    }

    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.fields.get(STATUS).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Fields without a dedicated block in the view.
    pub fn extra(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), VIDEO_URL | IMAGE_URL))
    }

    /// The full object, indented by two spaces.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_default()
    }
}

impl TryFrom<Value> for ProcessAiResponse {
    type Error = ProcessAiError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = value else {
            return Err(ProcessAiError::UnexpectedShape);
        };
        Ok(Self {
            video_url: url_field(&fields, VIDEO_URL),
            image_url: url_field(&fields, IMAGE_URL),
            fields,
        })
    }
}

/// Sends one upload to the processing service and parses its reply.
#[allow(async_fn_in_trait)]
pub trait ProcessAiTransport {
    async fn process(&self, request: ProcessAiRequest)
        -> Result<ProcessAiResponse, ProcessAiError>;
}
