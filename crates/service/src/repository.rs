use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};

use models::{offer, order, user};
use crate::errors::ServiceError;
use crate::{offer_service, order_service, user_service};

/// Uniform CRUD over one entity kind, keyed by a caller-supplied integer id.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// Singular entity name used in messages and logs.
    const NAME: &'static str;
    type Record: Serialize + Send + Sync;
    type Input: DeserializeOwned + Serialize + Clone + Send + Sync;

    /// Id carried inside an input payload.
    fn input_id(input: &Self::Input) -> i32;

    async fn list(&self) -> Result<Vec<Self::Record>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Self::Record>, ServiceError>;
    async fn create(&self, input: Self::Input) -> Result<Self::Record, ServiceError>;
    async fn replace(&self, id: i32, input: Self::Input) -> Result<Self::Record, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed user repository.
#[derive(Clone)]
pub struct UserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CrudRepository for UserRepository {
    const NAME: &'static str = "user";
    type Record = user::Model;
    type Input = user::UserInput;

    fn input_id(input: &Self::Input) -> i32 { input.id }

    async fn list(&self) -> Result<Vec<user::Model>, ServiceError> {
        user_service::list_users(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        user_service::get_user(&self.db, id).await
    }

    async fn create(&self, input: user::UserInput) -> Result<user::Model, ServiceError> {
        user_service::create_user(&self.db, input).await
    }

    async fn replace(&self, id: i32, input: user::UserInput) -> Result<user::Model, ServiceError> {
        user_service::replace_user(&self.db, id, input).await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        user_service::delete_user(&self.db, id).await
    }
}

/// SeaORM-backed order repository.
#[derive(Clone)]
pub struct OrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CrudRepository for OrderRepository {
    const NAME: &'static str = "order";
    type Record = order::Model;
    type Input = order::OrderInput;

    fn input_id(input: &Self::Input) -> i32 { input.id }

    async fn list(&self) -> Result<Vec<order::Model>, ServiceError> {
        order_service::list_orders(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<order::Model>, ServiceError> {
        order_service::get_order(&self.db, id).await
    }

    async fn create(&self, input: order::OrderInput) -> Result<order::Model, ServiceError> {
        order_service::create_order(&self.db, input).await
    }

    async fn replace(&self, id: i32, input: order::OrderInput) -> Result<order::Model, ServiceError> {
        order_service::replace_order(&self.db, id, input).await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        order_service::delete_order(&self.db, id).await
    }
}

/// SeaORM-backed offer repository.
#[derive(Clone)]
pub struct OfferRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CrudRepository for OfferRepository {
    const NAME: &'static str = "offer";
    type Record = offer::Model;
    type Input = offer::OfferInput;

    fn input_id(input: &Self::Input) -> i32 { input.id }

    async fn list(&self) -> Result<Vec<offer::Model>, ServiceError> {
        offer_service::list_offers(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<offer::Model>, ServiceError> {
        offer_service::get_offer(&self.db, id).await
    }

    async fn create(&self, input: offer::OfferInput) -> Result<offer::Model, ServiceError> {
        offer_service::create_offer(&self.db, input).await
    }

    async fn replace(&self, id: i32, input: offer::OfferInput) -> Result<offer::Model, ServiceError> {
        offer_service::replace_offer(&self.db, id, input).await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        offer_service::delete_offer(&self.db, id).await
    }
}
