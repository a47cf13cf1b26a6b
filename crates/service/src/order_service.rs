use sea_orm::DatabaseConnection;

use models::order::{self, OrderInput};
use crate::errors::ServiceError;

/// List every order.
pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>, ServiceError> {
    Ok(order::list(db).await?)
}

/// Get an order by id.
pub async fn get_order(db: &DatabaseConnection, id: i32) -> Result<Option<order::Model>, ServiceError> {
    Ok(order::find(db, id).await?)
}

/// Create an order; both dates must be `MM/DD/YYYY`.
pub async fn create_order(db: &DatabaseConnection, input: OrderInput) -> Result<order::Model, ServiceError> {
    Ok(order::create(db, input).await?)
}

/// Overwrite every field of the order at `id`.
pub async fn replace_order(db: &DatabaseConnection, id: i32, input: OrderInput) -> Result<order::Model, ServiceError> {
    Ok(order::replace(db, id, input).await?)
}

/// Hard-delete an order. Offers on it are left alone.
pub async fn delete_order(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    order::delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveDate;

    fn input(id: i32) -> OrderInput {
        OrderInput {
            id,
            name: "Paint fence".into(),
            description: "two coats, white".into(),
            start_date: "03/10/2023".into(),
            end_date: "03/12/2023".into(),
            address: "5 Elm Rd".into(),
            price: 1200,
            customer_id: 3,
            executor_id: None,
        }
    }

    #[tokio::test]
    async fn order_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let o = create_order(&db, input(1)).await?;
        assert_eq!(o.start_date, NaiveDate::from_ymd_opt(2023, 3, 10).unwrap());
        assert_eq!(o.executor_id, None);

        let mut changed = input(1);
        changed.executor_id = Some(4);
        changed.end_date = "03/15/2023".into();
        let updated = replace_order(&db, 1, changed).await?;
        assert_eq!(updated.executor_id, Some(4));
        assert_eq!(updated.customer_id, 3);
        assert_eq!(updated.end_date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());

        delete_order(&db, 1).await?;
        assert!(list_orders(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn replace_with_bad_date_leaves_row_untouched() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_order(&db, input(2)).await?;

        let mut bad = input(2);
        bad.name = "changed".into();
        bad.start_date = "31/12/2023".into();
        let err = replace_order(&db, 2, bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidDate(_)));
        assert_eq!(get_order(&db, 2).await?.unwrap().name, "Paint fence");
        Ok(())
    }
}
