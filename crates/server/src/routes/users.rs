use axum::{extract::State, http::StatusCode, Json};
use models::user;

use crate::errors::JsonApiError;
use crate::routes::resource::{self, Body, IdParam};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "All users ordered by id", body = [crate::openapi::UserDoc])
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    resource::list(&state.users).await
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserDoc,
    responses(
        (status = 201, description = "Created", body = String, example = json!("user added")),
        (status = 400, description = "Malformed request", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Body<user::UserInput>,
) -> Result<(StatusCode, Json<&'static str>), JsonApiError> {
    resource::create(&state.users, body, "user added").await
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::UserDoc),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, id: IdParam) -> Result<Json<user::Model>, JsonApiError> {
    resource::get(&state.users, id).await
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::UserDoc,
    responses(
        (status = 200, description = "Replaced; echoes the payload", body = crate::openapi::UserDoc),
        (status = 400, description = "Malformed request", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc),
        (status = 409, description = "New id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: IdParam,
    body: Body<user::UserInput>,
) -> Result<Json<user::UserInput>, JsonApiError> {
    resource::replace(&state.users, id, body).await
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted", body = String, example = json!("Deleted id:1")),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, id: IdParam) -> Result<Json<String>, JsonApiError> {
    resource::delete(&state.users, id).await
}
