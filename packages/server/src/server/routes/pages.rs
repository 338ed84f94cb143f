//! Static pages.

use axum::response::Html;

use crate::server::views;

pub async fn home_handler() -> Html<String> {
    Html(views::home_page())
}

pub async fn stations_handler() -> Html<String> {
    Html(views::stations_page())
}
