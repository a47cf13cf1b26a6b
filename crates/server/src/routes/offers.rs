use axum::{extract::State, http::StatusCode, Json};
use models::offer;

use crate::errors::JsonApiError;
use crate::routes::resource::{self, Body, IdParam};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/offers", tag = "offers",
    responses(
        (status = 200, description = "All offers ordered by id", body = [crate::openapi::OfferDoc])
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<offer::Model>>, JsonApiError> {
    resource::list(&state.offers).await
}

#[utoipa::path(
    post, path = "/offers", tag = "offers",
    request_body = crate::openapi::OfferDoc,
    responses(
        (status = 201, description = "Created", body = String, example = json!("offer added")),
        (status = 400, description = "Malformed request", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Body<offer::OfferInput>,
) -> Result<(StatusCode, Json<&'static str>), JsonApiError> {
    resource::create(&state.offers, body, "offer added").await
}

#[utoipa::path(
    get, path = "/offers/{id}", tag = "offers",
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::OfferDoc),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, id: IdParam) -> Result<Json<offer::Model>, JsonApiError> {
    resource::get(&state.offers, id).await
}

#[utoipa::path(
    put, path = "/offers/{id}", tag = "offers",
    params(("id" = i32, Path, description = "Offer id")),
    request_body = crate::openapi::OfferDoc,
    responses(
        (status = 200, description = "Replaced; echoes the payload", body = crate::openapi::OfferDoc),
        (status = 400, description = "Malformed request", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc),
        (status = 409, description = "New id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: IdParam,
    body: Body<offer::OfferInput>,
) -> Result<Json<offer::OfferInput>, JsonApiError> {
    resource::replace(&state.offers, id, body).await
}

#[utoipa::path(
    delete, path = "/offers/{id}", tag = "offers",
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Deleted", body = String, example = json!("Deleted id:1")),
        (status = 404, description = "No such id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, id: IdParam) -> Result<Json<String>, JsonApiError> {
    resource::delete(&state.offers, id).await
}
