//! HTTP routes

use axum::Router;
use texo_db::Pool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod error;
pub mod health;
pub mod posts;
pub mod tags;

pub use error::{ApiError, ApiResult, BasicResponseMessage};

/// Build the application with all routes, middleware and state
pub fn app<P: Pool + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .merge(health::router::<AppState<P>>())
        .merge(posts::router::<P>())
        .merge(tags::router::<P>())
        // Browser clients on other origins read the API directly
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value as Json;
    use texo_db::testing::ScriptedPool;
    use texo_db::{Blog, Record, Value};
    use tower::ServiceExt;

    fn post_row(id: i64, slug: &str) -> Record {
        Record::new()
            .with("id", id)
            .with("title", format!("Post {}", id))
            .with("authorId", 1i64)
            .with("author", "Ada Lovelace")
            .with("slug", slug)
            .with("content", "body")
            .with("createdDateTime", Value::Null)
            .with("publishedDateTime", Value::Null)
            .with("publishedYear", 2023i64)
            .with("publishedMonth", 5i64)
            .with("postStatusId", 2i64)
            .with("status", "Published")
            .with("tagList", "golang")
            .with("tagIdList", "1")
    }

    fn tag_row(id: i64, tag: &str, used: i64) -> Record {
        Record::new()
            .with("id", id)
            .with("tag", tag)
            .with("howManyTimesUsed", used)
    }

    async fn get(pool: ScriptedPool, uri: &str) -> (StatusCode, Json) {
        let app = app(AppState::new(Blog::new(pool), 2));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Json::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Json::Null)
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_liveness() {
        let (status, body) = get(ScriptedPool::new(), "/v1/test").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_published_posts() {
        let pool = ScriptedPool::new()
            .with_scalar(3i64)
            .with_rows(vec![post_row(1, "a"), post_row(2, "b")]);
        let (status, body) = get(pool, "/v1/posts/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["numPosts"], 3);
        assert_eq!(body["numPages"], 2);
        assert_eq!(body["nextPage"], 2);
        assert_eq!(body["posts"][1]["permalink"], "/post/2023/5/b");
    }

    #[tokio::test]
    async fn test_posts_by_tag_and_term() {
        let pool = ScriptedPool::new().with_scalar(0i64).with_rows(vec![]);
        let (status, body) = get(pool, "/v1/posts/1/tag/golang").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posts"], serde_json::json!([]));

        let pool = ScriptedPool::new()
            .with_scalar(1i64)
            .with_rows(vec![post_row(4, "d")]);
        let (status, body) = get(pool, "/v1/posts/1/search/hello%20world").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posts"][0]["id"], 4);
    }

    #[tokio::test]
    async fn test_page_zero_is_bad_request() {
        let (status, body) = get(ScriptedPool::new(), "/v1/posts/0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_non_numeric_page_is_rejected() {
        let (status, _) = get(ScriptedPool::new(), "/v1/posts/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_largest_page_number_is_empty_page() {
        let pool = ScriptedPool::new().with_scalar(3i64).with_rows(vec![]);
        let (status, body) = get(pool, "/v1/posts/9223372036854775807").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentPage"], i64::MAX);
        assert_eq!(body["nextPage"], 2);
        assert_eq!(body["posts"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_post_found_and_missing() {
        let pool = ScriptedPool::new()
            .with_scalar(1i64)
            .with_rows(vec![post_row(7, "hello")]);
        let (status, body) = get(pool, "/v1/post/2023/5/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 7);

        let pool = ScriptedPool::new().with_scalar(0i64).with_rows(vec![]);
        let (status, body) = get(pool, "/v1/post/2023/5/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            "Post for /post/2023/5/nope could not be found"
        );
    }

    #[tokio::test]
    async fn test_tags() {
        let pool = ScriptedPool::new().with_rows(vec![tag_row(1, "rust", 5), tag_row(2, "go", 1)]);
        let (status, body) = get(pool, "/v1/tags").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tags"][0]["tag"], "rust");
        assert_eq!(body["tags"][1]["postsLink"], "/posts/1/tag/go");
    }

    #[tokio::test]
    async fn test_tag_found_and_missing() {
        let pool = ScriptedPool::new().with_rows(vec![tag_row(3, "golang", 2)]);
        let (status, body) = get(pool, "/v1/tag/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["howManyTimesUsed"], 2);

        let pool = ScriptedPool::new().with_rows(vec![]);
        let (status, body) = get(pool, "/v1/tag/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Could not find tag 42");
    }

    #[tokio::test]
    async fn test_database_failure_is_500_with_static_message() {
        let pool = ScriptedPool::new().with_error("Lost connection to MySQL server");
        let (status, body) = get(pool, "/v1/posts/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "message": "There was an error getting published posts"
            })
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = app(AppState::new(Blog::new(ScriptedPool::new()), 10));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/v1/tags")
                    .header("origin", "https://blog.example.com")
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}
