use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{order, user};

const ENTITY: &str = "offer";

/// A bid by a user (the executor) to carry out an order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub order_id: i32,
    pub executor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Order,
    Executor,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Order => Entity::belongs_to(order::Entity).from(Column::OrderId).to(order::Column::Id).into(),
            Relation::Executor => Entity::belongs_to(user::Entity).from(Column::ExecutorId).to(user::Column::Id).into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Order.def() }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::Executor.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferInput {
    pub id: i32,
    pub order_id: i32,
    pub executor_id: i32,
}

impl OfferInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            order_id: Set(self.order_id),
            executor_id: Set(self.executor_id),
        }
    }
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: OfferInput) -> Result<Model, ModelError> {
    let id = input.id;
    if find(db, id).await?.is_some() {
        return Err(ModelError::duplicate(ENTITY, id));
    }
    input.into_active_model().insert(db).await.map_err(|e| ModelError::from_db(ENTITY, id, e))
}

/// Overwrite every column of the row at `id`, including the id itself.
/// A missing row is `NotFound` before the payload is looked at.
pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, input: OfferInput) -> Result<Model, ModelError> {
    if find(db, id).await?.is_none() {
        return Err(ModelError::not_found(ENTITY, id));
    }
    let new_id = input.id;
    if new_id != id && find(db, new_id).await?.is_some() {
        return Err(ModelError::duplicate(ENTITY, new_id));
    }
    let res = Entity::update_many()
        .set(input.into_active_model())
        .filter(Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ModelError::from_db(ENTITY, new_id, e))?;
    if res.rows_affected == 0 {
        return Err(ModelError::not_found(ENTITY, id));
    }
    find(db, new_id).await?.ok_or_else(|| ModelError::not_found(ENTITY, new_id))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::not_found(ENTITY, id));
    }
    Ok(())
}

pub async fn insert_all<C: ConnectionTrait>(db: &C, inputs: Vec<OfferInput>) -> Result<u64, ModelError> {
    let Some(first_id) = inputs.first().map(|o| o.id) else { return Ok(0) };
    let ids: Vec<i32> = inputs.iter().map(|o| o.id).collect();
    if let Some(existing) = Entity::find().filter(Column::Id.is_in(ids)).one(db).await? {
        return Err(ModelError::duplicate(ENTITY, existing.id));
    }
    let count = inputs.len() as u64;
    Entity::insert_many(inputs.into_iter().map(OfferInput::into_active_model))
        .exec(db)
        .await
        .map_err(|e| ModelError::from_db(ENTITY, first_id, e))?;
    Ok(count)
}
