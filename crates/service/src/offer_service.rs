use sea_orm::DatabaseConnection;

use models::offer::{self, OfferInput};
use crate::errors::ServiceError;

/// List every offer.
pub async fn list_offers(db: &DatabaseConnection) -> Result<Vec<offer::Model>, ServiceError> {
    Ok(offer::list(db).await?)
}

/// Get an offer by id.
pub async fn get_offer(db: &DatabaseConnection, id: i32) -> Result<Option<offer::Model>, ServiceError> {
    Ok(offer::find(db, id).await?)
}

/// Create an offer with a caller-chosen id.
pub async fn create_offer(db: &DatabaseConnection, input: OfferInput) -> Result<offer::Model, ServiceError> {
    Ok(offer::create(db, input).await?)
}

/// Overwrite every field of the offer at `id`.
pub async fn replace_offer(db: &DatabaseConnection, id: i32, input: OfferInput) -> Result<offer::Model, ServiceError> {
    Ok(offer::replace(db, id, input).await?)
}

/// Hard-delete an offer.
pub async fn delete_offer(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    offer::delete(db, id).await?;
    Ok(())
}
