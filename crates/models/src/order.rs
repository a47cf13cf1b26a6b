use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::dates::parse_date;
use crate::errors::ModelError;
use crate::{offer, user};

const ENTITY: &str = "order";

/// A job posted by a customer. `executor_id` names the user whose offer was
/// accepted, if any; it is not tied to a particular offer row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: Date,
    pub end_date: Date,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
    Executor,
    Offers,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(user::Entity).from(Column::CustomerId).to(user::Column::Id).into(),
            Relation::Executor => Entity::belongs_to(user::Entity).from(Column::ExecutorId).to(user::Column::Id).into(),
            Relation::Offers => Entity::has_many(offer::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl Related<offer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Offers.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Full order payload. Dates travel as `MM/DD/YYYY`; `executor_id` must be
/// present but may be `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInput {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    #[serde(deserialize_with = "Option::deserialize")]
    pub executor_id: Option<i32>,
}

impl OrderInput {
    pub fn into_active_model(self) -> Result<ActiveModel, ModelError> {
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;
        Ok(ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            description: Set(self.description),
            start_date: Set(start_date),
            end_date: Set(end_date),
            address: Set(self.address),
            price: Set(self.price),
            customer_id: Set(self.customer_id),
            executor_id: Set(self.executor_id),
        })
    }
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: OrderInput) -> Result<Model, ModelError> {
    let id = input.id;
    let am = input.into_active_model()?;
    if find(db, id).await?.is_some() {
        return Err(ModelError::duplicate(ENTITY, id));
    }
    am.insert(db).await.map_err(|e| ModelError::from_db(ENTITY, id, e))
}

/// Overwrite every column of the row at `id`, including the id itself.
/// A missing row is `NotFound` before the payload is looked at.
pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, input: OrderInput) -> Result<Model, ModelError> {
    if find(db, id).await?.is_none() {
        return Err(ModelError::not_found(ENTITY, id));
    }
    let new_id = input.id;
    let am = input.into_active_model()?;
    if new_id != id && find(db, new_id).await?.is_some() {
        return Err(ModelError::duplicate(ENTITY, new_id));
    }
    let res = Entity::update_many()
        .set(am)
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

/// Insert many rows in one statement; every date is parsed before anything is written.
pub async fn insert_all<C: ConnectionTrait>(db: &C, inputs: Vec<OrderInput>) -> Result<u64, ModelError> {
    let Some(first_id) = inputs.first().map(|o| o.id) else { return Ok(0) };
    let ids: Vec<i32> = inputs.iter().map(|o| o.id).collect();
    if let Some(existing) = Entity::find().filter(Column::Id.is_in(ids)).one(db).await? {
        return Err(ModelError::duplicate(ENTITY, existing.id));
    }
    let count = inputs.len() as u64;
    let models = inputs
        .into_iter()
        .map(OrderInput::into_active_model)
        .collect::<Result<Vec<_>, _>>()?;
    Entity::insert_many(models)
        .exec(db)
        .await
        .map_err(|e| ModelError::from_db(ENTITY, first_id, e))?;
    Ok(count)
}
