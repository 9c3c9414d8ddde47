//! Liveness probe

use axum::routing::get;
use axum::{Json, Router};

use super::error::BasicResponseMessage;

pub fn router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/v1/test", get(test))
}

async fn test() -> Json<BasicResponseMessage> {
    Json(BasicResponseMessage::success("texo-services is running"))
}
