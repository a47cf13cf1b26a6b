use anyhow::Result;
use sea_orm::{EntityTrait, ModelTrait};

use super::setup_test_db;
use crate::errors::ModelError;
use crate::offer::{self, OfferInput};
use crate::order::{self, OrderInput};
use crate::user::{self, UserInput};

fn user(id: i32) -> UserInput {
    UserInput {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        age: 20 + id,
        email: format!("u{id}@mail.com"),
        role: "customer".into(),
        phone: "555-0100".into(),
    }
}

fn order(id: i32, customer_id: i32) -> OrderInput {
    OrderInput {
        id,
        name: format!("Order {id}"),
        description: "desc".into(),
        start_date: "02/01/2023".into(),
        end_date: "02/10/2023".into(),
        address: "2 Side St".into(),
        price: 100 * id,
        customer_id,
        executor_id: None,
    }
}

#[tokio::test]
async fn test_related_orders_and_offers() -> Result<()> {
    let db = setup_test_db().await?;
    user::insert_all(&db, vec![user(1), user(2)]).await?;
    order::insert_all(&db, vec![order(1, 1), order(2, 1), order(3, 2)]).await?;
    offer::insert_all(&db, vec![
        OfferInput { id: 1, order_id: 1, executor_id: 2 },
        OfferInput { id: 2, order_id: 3, executor_id: 1 },
        OfferInput { id: 3, order_id: 1, executor_id: 1 },
    ])
    .await?;

    let customer = user::Entity::find_by_id(1).one(&db).await?.unwrap();
    let orders = customer.find_related(order::Entity).all(&db).await?;
    assert_eq!(orders.len(), 2);

    let bids = customer.find_related(offer::Entity).all(&db).await?;
    assert_eq!(bids.len(), 2);

    let first = order::Entity::find_by_id(1).one(&db).await?.unwrap();
    let bids_on_first = first.find_related(offer::Entity).all(&db).await?;
    assert_eq!(bids_on_first.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_dangling_references_tolerated() -> Result<()> {
    let db = setup_test_db().await?;
    let o = order::create(&db, order(9, 999)).await?;
    assert_eq!(o.customer_id, 999);
    offer::create(&db, OfferInput { id: 9, order_id: 12345, executor_id: 999 }).await?;

    user::create(&db, user(5)).await?;
    offer::create(&db, OfferInput { id: 10, order_id: 9, executor_id: 5 }).await?;
    user::delete(&db, 5).await?;
    assert!(offer::find(&db, 10).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_bulk_insert_duplicate_is_reported() -> Result<()> {
    let db = setup_test_db().await?;
    user::insert_all(&db, vec![user(1)]).await?;
    let err = user::insert_all(&db, vec![user(1), user(2)]).await.unwrap_err();
    assert!(matches!(err, ModelError::DuplicateKey(_)));
    Ok(())
}

#[tokio::test]
async fn test_bulk_insert_empty_is_noop() -> Result<()> {
    let db = setup_test_db().await?;
    assert_eq!(order::insert_all(&db, vec![]).await?, 0);
    Ok(())
}
