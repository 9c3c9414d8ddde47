//! Tag routes

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use texo_db::{Pool, Tag, TagCollection};

use super::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router<P: Pool + 'static>() -> Router<AppState<P>> {
    Router::new()
        .route("/v1/tags", get(tags::<P>))
        .route("/v1/tag/{id}", get(tag::<P>))
}

async fn tags<P: Pool + 'static>(
    State(state): State<AppState<P>>,
) -> ApiResult<Json<TagCollection>> {
    let tags = state
        .blog
        .tags()
        .await
        .map_err(ApiError::internal("There was an error getting tags"))?;
    Ok(Json(tags))
}

async fn tag<P: Pool + 'static>(
    State(state): State<AppState<P>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Tag>> {
    state
        .blog
        .tag(id)
        .await
        .map_err(ApiError::internal(format!(
            "There was an error getting the tag with ID {}",
            id
        )))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Could not find tag {}", id)))
}
