use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{offer, order};

const ENTITY: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    /// Orders placed by this user as customer.
    Orders,
    /// Offers made by this user as executor.
    Offers,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Orders => Entity::has_many(order::Entity).into(),
            Relation::Offers => Entity::has_many(offer::Entity).into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Orders.def() }
}

impl Related<offer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Offers.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Full user payload; every field is required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl UserInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            age: Set(self.age),
            email: Set(self.email),
            role: Set(self.role),
            phone: Set(self.phone),
        }
    }
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: UserInput) -> Result<Model, ModelError> {
    let id = input.id;
    if find(db, id).await?.is_some() {
        return Err(ModelError::duplicate(ENTITY, id));
    }
    input.into_active_model().insert(db).await.map_err(|e| ModelError::from_db(ENTITY, id, e))
}

/// Overwrite every column of the row at `id`, including the id itself.
/// A missing row is `NotFound` before the payload is looked at.
pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, input: UserInput) -> Result<Model, ModelError> {
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

/// Insert many rows in one statement; used by the fixture loader.
pub async fn insert_all<C: ConnectionTrait>(db: &C, inputs: Vec<UserInput>) -> Result<u64, ModelError> {
    let Some(first_id) = inputs.first().map(|u| u.id) else { return Ok(0) };
    let ids: Vec<i32> = inputs.iter().map(|u| u.id).collect();
    if let Some(existing) = Entity::find().filter(Column::Id.is_in(ids)).one(db).await? {
        return Err(ModelError::duplicate(ENTITY, existing.id));
    }
    let count = inputs.len() as u64;
    Entity::insert_many(inputs.into_iter().map(UserInput::into_active_model))
        .exec(db)
        .await
        .map_err(|e| ModelError::from_db(ENTITY, first_id, e))?;
    Ok(count)
}
