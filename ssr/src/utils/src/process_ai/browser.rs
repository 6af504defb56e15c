use consts::{fields, PROCESS_AI_ENDPOINT};
use gloo::net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, FormData};

use super::{ProcessAiError, ProcessAiRequest, ProcessAiResponse, ProcessAiTransport};
use crate::web::{FileSource, SelectedFile};

/// `fetch` based transport used once the page is hydrated.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

fn js_err(context: &str, e: JsValue) -> ProcessAiError {
    ProcessAiError::Transport(format!("{context}: {e:?}"))
}

fn append_file(form: &FormData, name: &str, file: &SelectedFile) -> Result<(), ProcessAiError> {
    let appended = match &file.source {
        FileSource::Browser(inner) => form.append_with_blob_and_filename(name, inner, &file.name),
        FileSource::Memory(bytes) => {
            let mime = (!file.mime.is_empty()).then_some(file.mime.as_str());
            let blob: Blob = gloo::file::Blob::new_with_options(bytes.as_slice(), mime).into();
            form.append_with_blob_and_filename(name, &blob, &file.name)
        }
    };
    appended.map_err(|e| js_err("Failed to append file to FormData", e))
}

fn form_data(request: &ProcessAiRequest) -> Result<FormData, ProcessAiError> {
    let form = FormData::new().map_err(|e| js_err("Failed to create FormData", e))?;
    append_file(&form, fields::VIDEO, &request.video)?;
    append_file(&form, fields::IMAGE, &request.image)?;
    form.append_with_str(fields::TEXT, &request.text)
        .map_err(|e| js_err("Failed to append text to FormData", e))?;
    Ok(form)
}

impl ProcessAiTransport for BrowserTransport {
    async fn process(
        &self,
        request: ProcessAiRequest,
    ) -> Result<ProcessAiResponse, ProcessAiError> {
        let form = form_data(&request)?;

        let res = Request::post(PROCESS_AI_ENDPOINT)
            .body(form)
            .map_err(|e| ProcessAiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProcessAiError::Transport(e.to_string()))?;

        if !res.ok() {
            return Err(ProcessAiError::Status(res.status()));
        }

        let body = res
            .text()
            .await
            .map_err(|e| ProcessAiError::Transport(e.to_string()))?;

        ProcessAiResponse::from_json_str(&body)
    }
}
