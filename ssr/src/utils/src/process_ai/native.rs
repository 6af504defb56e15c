use consts::{fields, PROCESS_AI_URL};
use reqwest::{
    multipart::{Form, Part},
    Client, Url,
};

use super::{ProcessAiError, ProcessAiRequest, ProcessAiResponse, ProcessAiTransport};
use crate::web::{FileSource, SelectedFile};

/// `reqwest` based transport for non-browser builds.
#[derive(Clone, Debug)]
pub struct NativeTransport {
    client: Client,
    endpoint: Url,
}

impl Default for NativeTransport {
    fn default() -> Self {
        Self::with_endpoint(PROCESS_AI_URL.clone())
    }
}

impl NativeTransport {
    pub fn with_endpoint(endpoint: Url) -> Self {
        // the service lives on localhost, never route it through a proxy
        let client = Client::builder().no_proxy().build().unwrap_or_default();
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn file_part(file: &SelectedFile) -> Result<Part, ProcessAiError> {
    let bytes = match &file.source {
        FileSource::Memory(bytes) => bytes.clone(),
    };
    let part = Part::bytes(bytes).file_name(file.name.clone());
    if file.mime.is_empty() {
        return Ok(part);
    }
    part.mime_str(&file.mime)
        .map_err(|e| ProcessAiError::Transport(format!("invalid mime type {}: {e}", file.mime)))
}

fn multipart_form(request: &ProcessAiRequest) -> Result<Form, ProcessAiError> {
    Ok(Form::new()
        .part(fields::VIDEO, file_part(&request.video)?)
        .part(fields::IMAGE, file_part(&request.image)?)
        .text(fields::TEXT, request.text.clone()))
}

impl ProcessAiTransport for NativeTransport {
    async fn process(
        &self,
        request: ProcessAiRequest,
    ) -> Result<ProcessAiResponse, ProcessAiError> {
        let form = multipart_form(&request)?;

        let res = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProcessAiError::Transport(e.to_string()))?;

        if !res.status().is_success() {
            return Err(ProcessAiError::Status(res.status().as_u16()));
        }

        let body = res
            .text()
            .await
            .map_err(|e| ProcessAiError::Transport(e.to_string()))?;

        ProcessAiResponse::from_json_str(&body)
    }
}
