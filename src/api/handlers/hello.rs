use axum::{extract::Path, response::Json};

use crate::api::models::HelloResponse;

pub async fn hello(Path(name): Path<String>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: format!("Hello {}", name),
    })
}
