// src/presentation/http/controllers/articles.rs
use crate::application::dto::ArticleDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Serialize;

/// Numeric path segments fall back to -1 when absent or malformed instead of
/// rejecting the request.
const DEFAULT_ARTICLE_ID: i64 = -1;

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleDto>,
}

/// Board code is accepted but not yet filtered against; the repository
/// returns every article regardless. Known limitation carried over from the
/// original board.
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Path(board_code): Path<String>,
) -> HttpResult<Json<ArticleListResponse>> {
    tracing::debug!(%board_code, "listing articles");

    let articles = state.services.articles.get_articles().await.into_http()?;

    Ok(Json(ArticleListResponse { articles }))
}

/// Stub: echoes the extracted parameters as plain text. Detail rendering is
/// not wired to the repository yet.
pub async fn show_detail(Path((board_code, id)): Path<(String, String)>) -> String {
    let id = id.parse::<i64>().unwrap_or(DEFAULT_ARTICLE_ID);

    format!("article detail page\n{board_code} board, article {id}")
}

/// Stub: same parameter contract as the detail page.
pub async fn show_modify(Path((board_code, id)): Path<(String, String)>) -> String {
    let id = id.parse::<i64>().unwrap_or(DEFAULT_ARTICLE_ID);

    format!("article modify page\n{board_code} board, article {id}")
}
