use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use state::server::AppState;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;

/// Serves files from the site root, rendering the app for anything else so
/// the router can show its not-found page.
pub async fn file_and_error_handler(
    uri: Uri,
    State(state): State<AppState>,
    req: Request<Body>,
) -> Response {
    let root = state.leptos_options.site_root.clone();
    let res = get_static_file(uri, &root).await;

    if res.status() == StatusCode::OK {
        res
    } else {
        let handler =
            leptos_axum::render_app_to_stream(move || shell(state.leptos_options.clone()));
        handler(req).await.into_response()
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Response {
    let req = match Request::builder().uri(uri).body(Body::empty()) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!("bad static file request: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    // `ServeDir` never fails, missing files come back as 404
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(never) => match never {},
    }
}
