//! Glossary listing.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::Html;

use crate::server::app::AppState;
use crate::server::views;

pub async fn glossary_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Html<String>) {
    match state.client.get_glossary().await {
        Ok(entries) => (StatusCode::OK, Html(views::glossary_page(&entries))),
        Err(e) => {
            tracing::error!(error = %e, "Upstream glossary request failed");
            (
                StatusCode::BAD_GATEWAY,
                Html(views::error_page(&e.to_string())),
            )
        }
    }
}
