use axum::{extract::State, http::StatusCode, Json};
use models::order;

use crate::errors::JsonApiError;
use crate::routes::resource::{self, Body, IdParam};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    responses(
        (status = 200, description = "All orders ordered by id", body = [crate::openapi::OrderDoc])
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<order::Model>>, JsonApiError> {
    resource::list(&state.orders).await
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::OrderInputDoc,
    responses(
        (status = 201, description = "Created", body = String, example = json!("order added")),
        (status = 400, description = "Malformed request or bad MM/DD/YYYY date", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Body<order::OrderInput>,
) -> Result<(StatusCode, Json<&'static str>), JsonApiError> {
    resource::create(&state.orders, body, "order added").await
}

#[utoipa::path(
    get, path = "/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::OrderDoc),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, id: IdParam) -> Result<Json<order::Model>, JsonApiError> {
    resource::get(&state.orders, id).await
}

#[utoipa::path(
    put, path = "/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    request_body = crate::openapi::OrderInputDoc,
    responses(
        (status = 200, description = "Replaced; echoes the payload", body = crate::openapi::OrderInputDoc),
        (status = 400, description = "Malformed request or bad MM/DD/YYYY date", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc),
        (status = 409, description = "New id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: IdParam,
    body: Body<order::OrderInput>,
) -> Result<Json<order::OrderInput>, JsonApiError> {
    resource::replace(&state.orders, id, body).await
}

#[utoipa::path(
    delete, path = "/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Deleted", body = String, example = json!("Deleted id:1")),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, id: IdParam) -> Result<Json<String>, JsonApiError> {
    resource::delete(&state.orders, id).await
}
