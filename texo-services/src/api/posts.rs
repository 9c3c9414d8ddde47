//! Post routes

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use texo_db::{permalink, Pool, Post, PostCollection};

use super::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router<P: Pool + 'static>() -> Router<AppState<P>> {
    Router::new()
        .route("/v1/posts/{page}", get(published_posts::<P>))
        .route("/v1/posts/{page}/tag/{tag}", get(published_posts_by_tag::<P>))
        .route(
            "/v1/posts/{page}/search/{term}",
            get(published_posts_by_term::<P>),
        )
        .route("/v1/post/{year}/{month}/{slug}", get(post::<P>))
}

async fn published_posts<P: Pool + 'static>(
    State(state): State<AppState<P>>,
    Path(page): Path<i64>,
) -> ApiResult<Json<PostCollection>> {
    const ERROR: &str = "There was an error getting published posts";

    let page = state.page(page).map_err(ApiError::internal(ERROR))?;
    let posts = state
        .blog
        .published_posts(page)
        .await
        .map_err(ApiError::internal(ERROR))?;
    Ok(Json(posts))
}

async fn published_posts_by_tag<P: Pool + 'static>(
    State(state): State<AppState<P>>,
    Path((page, tag)): Path<(i64, String)>,
) -> ApiResult<Json<PostCollection>> {
    const ERROR: &str = "There was an error getting published posts by tag";

    let page = state.page(page).map_err(ApiError::internal(ERROR))?;
    let posts = state
        .blog
        .published_posts_by_tag(page, &tag)
        .await
        .map_err(ApiError::internal(ERROR))?;
    Ok(Json(posts))
}

async fn published_posts_by_term<P: Pool + 'static>(
    State(state): State<AppState<P>>,
    Path((page, term)): Path<(i64, String)>,
) -> ApiResult<Json<PostCollection>> {
    const ERROR: &str = "There was an error getting published posts by search term";

    let page = state.page(page).map_err(ApiError::internal(ERROR))?;
    let posts = state
        .blog
        .published_posts_by_term(page, &term)
        .await
        .map_err(ApiError::internal(ERROR))?;
    Ok(Json(posts))
}

async fn post<P: Pool + 'static>(
    State(state): State<AppState<P>>,
    Path((year, month, slug)): Path<(i32, i32, String)>,
) -> ApiResult<Json<Post>> {
    state
        .blog
        .post(year, month, &slug)
        .await
        .map_err(ApiError::internal("There was a problem getting your post"))?
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Post for {} could not be found",
                permalink(year, month, &slug)
            ))
        })
}
