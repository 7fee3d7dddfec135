use axum::Json;

use super::dto::Info;

#[utoipa::path(
    get,
    path = "/",
    description = "Welcome message",
    responses(
        (status = 200, description = "Success", body = Info),
    )
)]
pub async fn info() -> Json<Info> {
    Json(Info {
        message: "Welcome to the Crypto API! Visit /redoc for documentation.".to_string(),
    })
}
