//! HTTP handlers for agricultural news

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{filter_news, NewsCategory, NewsItem};

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
}

pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> AppResult<Json<Vec<NewsItem>>> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<NewsCategory>)
        .transpose()
        .map_err(|message| {
            AppError::validation("category", message, "Aina ya habari haijulikani")
        })?;

    let items = state.feed.news()?;
    Ok(Json(filter_news(&items, category).into_iter().cloned().collect()))
}
