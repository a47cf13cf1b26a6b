//! Handler bodies shared by every resource. The per-entity modules only add
//! routing metadata and pick the service out of [`AppState`](crate::state::AppState).

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    Json,
};
use service::{crud::CrudService, repository::CrudRepository};

use crate::errors::JsonApiError;

pub type IdParam = Result<Path<i32>, PathRejection>;
pub type Body<T> = Result<Json<T>, JsonRejection>;

pub async fn list<R: CrudRepository>(svc: &CrudService<R>) -> Result<Json<Vec<R::Record>>, JsonApiError> {
    Ok(Json(svc.list().await?))
}

/// Creation answers with a short acknowledgement, not the stored record.
pub async fn create<R: CrudRepository>(
    svc: &CrudService<R>,
    body: Body<R::Input>,
    ack: &'static str,
) -> Result<(StatusCode, Json<&'static str>), JsonApiError> {
    let Json(input) = body?;
    svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

pub async fn get<R: CrudRepository>(svc: &CrudService<R>, id: IdParam) -> Result<Json<R::Record>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(svc.get(id).await?))
}

/// Full replace; the payload is echoed back exactly as received.
pub async fn replace<R: CrudRepository>(
    svc: &CrudService<R>,
    id: IdParam,
    body: Body<R::Input>,
) -> Result<Json<R::Input>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    svc.replace(id, input.clone()).await?;
    Ok(Json(input))
}

pub async fn delete<R: CrudRepository>(svc: &CrudService<R>, id: IdParam) -> Result<Json<String>, JsonApiError> {
    let Path(id) = id?;
    svc.delete(id).await?;
    Ok(Json(format!("Deleted id:{id}")))
}
